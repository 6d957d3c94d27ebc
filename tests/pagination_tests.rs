mod common;

use common::fixtures::*;
use common::{compose, init_logger, TestResult};
use flyer::{
    reconcile_products, LayoutError, LayoutOption, LayoutPlanner, PageConfig, PageSize, PipelineBuilder,
    PipelineError,
};

#[test]
fn test_fourteen_products_on_4x3() -> TestResult {
    init_logger();

    let tree = compose(&snapshot(14, LayoutOption::Grid4x3))?;
    assert_eq!(tree.page_count(), 2);
    assert_eq!(tree.pages[0].product_ids(), (0..12).collect::<Vec<_>>());
    assert_eq!(tree.pages[1].product_ids(), vec![12, 13]);
    assert_eq!(tree.pages[1].content.empty_cell_count(), 10);
    Ok(())
}

#[test]
fn test_page_count_is_ceiling_for_every_layout() -> TestResult {
    init_logger();

    for option in LayoutOption::ALL {
        let capacity = option.capacity();
        for count in [0, 1, capacity - 1, capacity, capacity + 1, 3 * capacity + 2] {
            let tree = compose(&snapshot(count, option))?;
            assert_eq!(tree.page_count(), count.div_ceil(capacity), "{} x {}", option, count);

            let ids: Vec<usize> = tree.cards().map(|card| card.product_id).collect();
            assert_eq!(ids, (0..count).collect::<Vec<_>>());
        }
    }
    Ok(())
}

#[test]
fn test_every_page_has_full_grid_of_cells() -> TestResult {
    let tree = compose(&snapshot(10, LayoutOption::Grid3x3))?;
    for page in &tree.pages {
        assert_eq!(page.content.cells.len(), 9);
        assert_eq!(page.content.columns, 3);
        assert_eq!(page.content.rows, 3);
    }
    assert_eq!(tree.pages[1].content.card_count(), 1);
    Ok(())
}

#[test]
fn test_letter_pages_keep_card_identities() -> TestResult {
    let config = PageConfig {
        page_size: PageSize::Letter,
        gap: 6.0,
        ..Default::default()
    };
    let planner = LayoutPlanner::new(config)?;
    for option in LayoutOption::ALL {
        let g = planner.geometry(option);
        let cols = option.columns() as f32;
        let rows = option.rows() as f32;
        let width = g.card.width * cols + (cols - 1.0) * 6.0 + 2.0 * g.padding;
        let height = g.card.height * rows + (rows - 1.0) * 6.0 + 2.0 * g.padding;
        assert!((width - 612.0).abs() < 0.01);
        assert!((height - g.content_height).abs() < 0.01);
    }
    Ok(())
}

#[test]
fn test_oversized_gap_is_rejected_at_build_time() {
    let config = PageConfig {
        gap: 400.0,
        ..Default::default()
    };
    let result = PipelineBuilder::new().with_page_config(config).build();
    assert!(matches!(
        result,
        Err(PipelineError::Layout(LayoutError::DegenerateGrid { .. }))
    ));
}

#[test]
fn test_reconciled_list_fills_exactly_one_page() -> TestResult {
    for option in LayoutOption::ALL {
        let reconciled = reconcile_products(&products(5), option);
        assert_eq!(reconciled.len(), option.capacity());
        assert_eq!(reconciled[0].title, "Produto 0");

        let tree = compose(&flyer::CatalogSnapshot::new(reconciled, settings_for(option)))?;
        assert_eq!(tree.page_count(), 1);
        assert_eq!(tree.pages[0].content.empty_cell_count(), 0);
    }
    Ok(())
}
