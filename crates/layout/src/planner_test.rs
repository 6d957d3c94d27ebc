use crate::{LayoutError, LayoutOption, LayoutPlanner, PageConfig, PageGeometry};
use flyer_style::PageSize;

const TOLERANCE: f32 = 0.01;

#[test]
fn test_card_widths_fill_page_width() {
    let planner = LayoutPlanner::default();
    for option in LayoutOption::ALL {
        let g = planner.geometry(option);
        let cols = option.columns() as f32;
        let total = g.card.width * cols + (cols - 1.0) * g.gap + 2.0 * g.padding;
        assert!(
            (total - g.page.width).abs() < TOLERANCE,
            "{}: {} != {}",
            option,
            total,
            g.page.width
        );
    }
}

#[test]
fn test_card_heights_fill_content_band() {
    let planner = LayoutPlanner::default();
    for option in LayoutOption::ALL {
        let g = planner.geometry(option);
        let rows = option.rows() as f32;
        let total = g.card.height * rows + (rows - 1.0) * g.gap + 2.0 * g.padding;
        assert!((total - g.content_height).abs() < TOLERANCE, "{}", option);
    }
}

#[test]
fn test_a4_four_by_three_dimensions() {
    let g = LayoutPlanner::default().geometry(LayoutOption::Grid4x3);
    // (595.28 - 24 - 24) / 4
    assert!((g.card.width - 136.82).abs() < TOLERANCE);
    // (841.89 * 0.75 - 24 - 16) / 3
    assert!((g.card.height - 197.14).abs() < TOLERANCE);
    assert!((g.header_height - 126.28).abs() < TOLERANCE);
    assert!((g.footer_height - 84.19).abs() < TOLERANCE);
}

#[test]
fn test_page_count_and_slices_reconstruct_input() {
    let planner = LayoutPlanner::default();
    for option in LayoutOption::ALL {
        for n in 0..=30usize {
            let items: Vec<usize> = (0..n).collect();
            let plan = planner.plan(option, n);
            assert_eq!(plan.page_count(), n.div_ceil(option.capacity()));
            let rebuilt: Vec<usize> = plan.slices(&items).flatten().copied().collect();
            assert_eq!(rebuilt, items);
        }
    }
}

#[test]
fn test_fourteen_products_on_four_by_three() {
    let plan = LayoutPlanner::default().plan(LayoutOption::Grid4x3, 14);
    assert_eq!(plan.page_count(), 2);
    assert_eq!(plan.pages[0], 0..12);
    assert_eq!(plan.pages[1], 12..14);
    assert_eq!(LayoutOption::Grid4x3.capacity() - plan.pages[1].len(), 10);
}

#[test]
fn test_cells_stay_inside_content_band_and_do_not_overlap() {
    let planner = LayoutPlanner::default();
    for option in LayoutOption::ALL {
        let g = planner.geometry(option);
        let content = g.content_rect();
        let cells: Vec<_> = g.cell_rects().collect();
        assert_eq!(cells.len(), option.capacity());
        for (i, a) in cells.iter().enumerate() {
            assert!(content.contains(a), "{} cell {} escapes content band", option, i);
            for b in cells.iter().skip(i + 1) {
                let disjoint = a.right() <= b.x + TOLERANCE
                    || b.right() <= a.x + TOLERANCE
                    || a.bottom() <= b.y + TOLERANCE
                    || b.bottom() <= a.y + TOLERANCE;
                assert!(disjoint, "{} cells overlap", option);
            }
        }
    }
}

#[test]
fn test_row_major_slot_order() {
    let g = LayoutPlanner::default().geometry(LayoutOption::Grid3x3);
    assert_eq!(g.cell_position(0), (0, 0));
    assert_eq!(g.cell_position(2), (0, 2));
    assert_eq!(g.cell_position(3), (1, 0));
    assert!(g.cell_rect(1).x > g.cell_rect(0).x);
    assert!(g.cell_rect(3).y > g.cell_rect(0).y);
    assert_eq!(g.cell_rect(3).x, g.cell_rect(0).x);
}

#[test]
fn test_bands_tile_the_page() {
    let g = LayoutPlanner::default().geometry(LayoutOption::Grid4x2);
    assert_eq!(g.header_rect().y, 0.0);
    assert!((g.header_rect().bottom() - g.content_rect().y).abs() < TOLERANCE);
    assert!((g.content_rect().bottom() - g.footer_rect().y).abs() < TOLERANCE);
    assert!((g.footer_rect().bottom() - g.page.height).abs() < TOLERANCE);
}

#[test]
fn test_custom_page_size_changes_geometry() {
    let config = PageConfig {
        page_size: PageSize::Custom { width: 400.0, height: 400.0 },
        header_fraction: 0.0,
        footer_fraction: 0.0,
        content_padding: 10.0,
        gap: 10.0,
    };
    let planner = LayoutPlanner::new(config).unwrap();
    let g = planner.geometry(LayoutOption::Grid3x3);
    // (400 - 20 - 20) / 3
    assert!((g.card.width - 120.0).abs() < TOLERANCE);
    assert!((g.card.height - 120.0).abs() < TOLERANCE);
    assert_eq!(g, PageGeometry::compute(LayoutOption::Grid3x3, &config));
}

#[test]
fn test_planner_rejects_grids_without_room() {
    let config = PageConfig {
        page_size: PageSize::Custom { width: 40.0, height: 400.0 },
        content_padding: 12.0,
        gap: 8.0,
        ..Default::default()
    };
    let err = LayoutPlanner::new(config).unwrap_err();
    assert!(matches!(err, LayoutError::DegenerateGrid { .. }));
}

#[test]
fn test_planner_propagates_config_errors() {
    let config = PageConfig { header_fraction: 1.5, ..Default::default() };
    assert!(matches!(
        LayoutPlanner::new(config),
        Err(LayoutError::InvalidPageConfig(_))
    ));
}
