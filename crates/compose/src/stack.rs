//! Vertical placement of fragments inside a band.

use crate::rules::Fragment;
use flyer_doctree::{ImageNode, Node, TextNode};
use flyer_style::{ObjectFit, TextAlign};
use flyer_types::{Rect, Size};

/// Default corner radius of a square-masked logo.
const LOGO_CORNER_RADIUS: f32 = 0.0;

/// Share of the frame height images keep when text competes for room.
const MIN_IMAGE_SHARE: f32 = 0.25;

fn preferred_height(fragment: &Fragment) -> f32 {
    match fragment {
        Fragment::Text { style, .. } => style.block_height(),
        Fragment::Image { max_size, .. } => max_size.height,
    }
}

fn is_text(fragment: &Fragment) -> bool {
    matches!(fragment, Fragment::Text { .. })
}

/// Stacks `fragments` top to bottom, centred vertically in `frame`.
///
/// The stack always fits the frame. Images give up height (keeping their
/// proportions) first but never drop below `MIN_IMAGE_SHARE` of the frame;
/// if the text still does not fit, the spacing closes up and then the text
/// is scaled down.
pub(crate) fn stack(fragments: Vec<Fragment>, frame: Rect, spacing: f32, align: TextAlign) -> Vec<Node> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let gap_count = (fragments.len() - 1) as f32;
    let text_height: f32 = fragments.iter().filter(|f| is_text(f)).map(preferred_height).sum();
    let image_height: f32 = fragments.iter().filter(|f| !is_text(f)).map(preferred_height).sum();

    let image_floor = image_height.min(frame.height * MIN_IMAGE_SHARE);
    let text_room = (frame.height - image_floor).max(0.0);
    let (spacing, text_scale) = if text_height + spacing * gap_count <= text_room {
        (spacing, 1.0)
    } else if text_height <= text_room {
        ((text_room - text_height) / gap_count, 1.0)
    } else {
        (0.0, text_room / text_height)
    };

    let gaps = spacing * gap_count;
    let room_for_images = (frame.height - text_height * text_scale - gaps).max(0.0);
    let image_scale = if image_height > room_for_images && image_height > 0.0 {
        room_for_images / image_height
    } else {
        1.0
    };

    let fragments: Vec<Fragment> = fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Text { role, content, style } if text_scale < 1.0 => Fragment::Text {
                role,
                content,
                style: style.scaled(text_scale),
            },
            other => other,
        })
        .collect();
    let heights: Vec<f32> = fragments
        .iter()
        .map(|f| match f {
            Fragment::Text { .. } => preferred_height(f),
            Fragment::Image { .. } => preferred_height(f) * image_scale,
        })
        .collect();
    let total: f32 = heights.iter().sum::<f32>() + gaps;
    let mut cursor_y = frame.y + ((frame.height - total) / 2.0).max(0.0);

    let mut nodes = Vec::with_capacity(fragments.len());
    for (fragment, height) in fragments.into_iter().zip(heights) {
        let slot = Rect::new(frame.x, cursor_y, frame.width, height);
        nodes.push(place(fragment, slot, align));
        cursor_y += height + spacing;
    }
    nodes
}

/// Positions a single fragment in `slot`.
pub(crate) fn place(fragment: Fragment, slot: Rect, align: TextAlign) -> Node {
    match fragment {
        Fragment::Text { role, content, style } => Node::Text(TextNode {
            role,
            rect: slot,
            content,
            style,
        }),
        Fragment::Image {
            role,
            src,
            shape,
            fit,
            max_size,
        } => {
            let size = match fit {
                ObjectFit::Contain => max_size.fit_within(slot.size()),
                ObjectFit::Cover => Size::new(
                    max_size.width.min(slot.width),
                    max_size.height.min(slot.height),
                ),
            };
            let x = match align {
                TextAlign::Left => slot.x,
                TextAlign::Center => slot.x + (slot.width - size.width) / 2.0,
                TextAlign::Right => slot.right() - size.width,
            };
            let frame = Rect::new(x, slot.y + (slot.height - size.height) / 2.0, size.width, size.height);
            let mask = shape.mask_rect(frame);
            Node::Image(ImageNode {
                role,
                rect: mask,
                src,
                shape,
                fit,
                corner_radius: shape.corner_radius(mask, LOGO_CORNER_RADIUS),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyer_doctree::{ImageRole, TextRole};
    use flyer_style::{ImageShape, TextStyle};
    use flyer_types::ImageRef;

    fn logo(max: Size) -> Fragment {
        Fragment::Image {
            role: ImageRole::HeaderLogo,
            src: ImageRef::new("logo.png"),
            shape: ImageShape::Square,
            fit: ObjectFit::Contain,
            max_size: max,
        }
    }

    #[test]
    fn test_stack_is_vertically_centred() {
        let frame = Rect::new(0.0, 100.0, 200.0, 100.0);
        let nodes = stack(
            vec![Fragment::text(TextRole::HeaderTitle, "Sale", TextStyle::sized(10.0))],
            frame,
            4.0,
            TextAlign::Center,
        );
        assert_eq!(nodes.len(), 1);
        let rect = nodes[0].rect();
        // 12pt line centred in 100pt
        assert!((rect.y - 144.0).abs() < 0.01);
        assert_eq!(rect.width, 200.0);
    }

    #[test]
    fn test_images_shrink_to_fit_text() {
        let frame = Rect::new(0.0, 0.0, 300.0, 100.0);
        let nodes = stack(
            vec![
                logo(Size::new(200.0, 80.0)),
                Fragment::text(TextRole::HeaderTitle, "Sale", TextStyle::sized(20.0)),
            ],
            frame,
            6.0,
            TextAlign::Center,
        );
        let image = nodes[0].as_image().unwrap();
        let title = nodes[1].as_text().unwrap();
        // 100 - 24 text - 6 gap = 70pt left for the logo
        assert!((image.rect.height - 70.0).abs() < 0.01);
        assert!((image.rect.width - 175.0).abs() < 0.01);
        assert!((image.rect.x - 62.5).abs() < 0.01);
        assert!(title.rect.y >= image.rect.bottom());
        assert!(frame.contains(&title.rect));
    }

    #[test]
    fn test_crowded_stack_closes_gaps_before_shrinking_text() {
        let line = |role| Fragment::text(role, "x", TextStyle::sized(12.0));
        let frame = Rect::new(0.0, 0.0, 300.0, 60.0);
        // four 14.4pt lines need 57.6pt, plus 3 x 2pt spacing
        let nodes = stack(
            vec![line(TextRole::Website), line(TextRole::SocialHandles), line(TextRole::Address), line(TextRole::FooterText)],
            frame,
            2.0,
            TextAlign::Left,
        );
        for node in &nodes {
            assert!(frame.contains(&node.rect()));
            assert_eq!(node.as_text().unwrap().style.font_size, 12.0);
        }
        assert!(nodes[3].rect().bottom() <= frame.bottom() + 0.01);
    }

    #[test]
    fn test_text_scales_down_but_image_stays_visible() {
        let frame = Rect::new(0.0, 0.0, 300.0, 40.0);
        let nodes = stack(
            vec![
                logo(Size::new(100.0, 40.0)),
                Fragment::text(TextRole::HeaderTitle, "Sale", TextStyle::sized(40.0)),
            ],
            frame,
            6.0,
            TextAlign::Center,
        );
        let image = nodes[0].as_image().unwrap();
        let title = nodes[1].as_text().unwrap();
        assert!((image.rect.height - 10.0).abs() < 0.01);
        assert!(title.style.font_size < 40.0);
        assert!(frame.contains(&image.rect) && frame.contains(&title.rect));
    }

    #[test]
    fn test_left_aligned_image_starts_at_frame_edge() {
        let node = place(logo(Size::new(120.0, 48.0)), Rect::new(10.0, 0.0, 300.0, 48.0), TextAlign::Left);
        assert_eq!(node.rect(), Rect::new(10.0, 0.0, 120.0, 48.0));
    }
}
