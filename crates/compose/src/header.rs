use crate::model::{present, HeaderSettings};
use crate::rules::{evaluate, Fragment, InclusionRule};
use crate::stack::stack;
use flyer_doctree::{ImageNode, ImageRole, Node, Region, RegionKind, TextRole};
use flyer_style::{HeaderStyle, ImageShape, ObjectFit, TextAlign};
use flyer_types::Rect;

pub struct HeaderContext<'a> {
    pub header: &'a HeaderSettings,
    pub style: &'a HeaderStyle,
    pub shape: ImageShape,
    /// The logo is a banner covering the whole band and nothing else is
    /// shown (named-layout flyers).
    pub banner: bool,
}

fn has_logo(ctx: &HeaderContext<'_>) -> bool {
    ctx.header.logo.is_some()
}

fn logo(ctx: &HeaderContext<'_>) -> Fragment {
    Fragment::Image {
        role: ImageRole::HeaderLogo,
        src: ctx.header.logo.clone().unwrap_or_else(|| "".into()),
        shape: ctx.shape,
        fit: if ctx.banner { ObjectFit::Cover } else { ObjectFit::Contain },
        max_size: ctx.style.logo_max,
    }
}

fn has_title(ctx: &HeaderContext<'_>) -> bool {
    !ctx.banner && present(&ctx.header.title).is_some()
}

fn title(ctx: &HeaderContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::HeaderTitle,
        present(&ctx.header.title).unwrap_or_default(),
        ctx.style.title.clone(),
    )
}

fn has_subtitle(ctx: &HeaderContext<'_>) -> bool {
    !ctx.banner && present(&ctx.header.subtitle).is_some()
}

fn subtitle(ctx: &HeaderContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::HeaderSubtitle,
        present(&ctx.header.subtitle).unwrap_or_default(),
        ctx.style.subtitle.clone(),
    )
}

/// Header elements in display order.
pub fn header_rules<'a>() -> [InclusionRule<HeaderContext<'a>>; 3] {
    [
        InclusionRule::new("logo", has_logo, logo),
        InclusionRule::new("title", has_title, title),
        InclusionRule::new("subtitle", has_subtitle, subtitle),
    ]
}

/// Builds the header band. The band keeps its height even when empty.
pub(crate) fn compose_header(ctx: &HeaderContext<'_>, rect: Rect) -> Region {
    let fragments = evaluate(&header_rules(), ctx);
    let frame = rect.inset(ctx.style.padding);

    let nodes: Vec<Node> = if ctx.banner {
        fragments
            .into_iter()
            .filter_map(|fragment| banner(fragment, rect, ctx.shape))
            .collect()
    } else {
        stack(fragments, frame, ctx.style.item_spacing, TextAlign::Center)
    };

    if nodes.is_empty() {
        Region::placeholder(RegionKind::Header, rect)
    } else {
        Region::new(RegionKind::Header, rect, nodes)
    }
}

fn banner(fragment: Fragment, rect: Rect, shape: ImageShape) -> Option<Node> {
    match fragment {
        Fragment::Image { role, src, fit, .. } => {
            let mask = shape.mask_rect(rect);
            Some(Node::Image(ImageNode {
                role,
                rect: mask,
                src,
                shape,
                fit,
                corner_radius: shape.corner_radius(mask, 0.0),
            }))
        }
        Fragment::Text { .. } => None,
    }
}
