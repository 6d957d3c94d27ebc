use crate::model::{present, FooterSettings};
use crate::qr::QrCodeService;
use crate::rules::{evaluate, Fragment, InclusionRule};
use crate::stack::{place, stack};
use flyer_doctree::{FillNode, FillRole, ImageRole, Node, Region, RegionKind, TextRole};
use flyer_style::{FooterStyle, ImageShape, ObjectFit, TextAlign};
use flyer_types::{ImageRef, Rect, Size};
use itertools::Itertools;

pub struct FooterContext<'a> {
    pub footer: &'a FooterSettings,
    pub style: &'a FooterStyle,
    pub shape: ImageShape,
    pub qr_service: &'a QrCodeService,
}

fn has_website(ctx: &FooterContext<'_>) -> bool {
    present(&ctx.footer.website).is_some()
}

fn website(ctx: &FooterContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::Website,
        present(&ctx.footer.website).unwrap_or_default(),
        ctx.style.contact.clone(),
    )
}

fn has_social(ctx: &FooterContext<'_>) -> bool {
    ctx.footer.social_handles().iter().any(|(_, handle)| handle.is_some())
}

/// Only the filled-in handles, e.g. `Instagram: @shop | TikTok: @shop`.
fn social(ctx: &FooterContext<'_>) -> Fragment {
    let line = ctx
        .footer
        .social_handles()
        .into_iter()
        .filter_map(|(label, handle)| handle.map(|h| format!("{}: {}", label, h)))
        .join(" | ");
    Fragment::text(TextRole::SocialHandles, line, ctx.style.contact.clone())
}

fn has_address(ctx: &FooterContext<'_>) -> bool {
    present(&ctx.footer.address).is_some()
}

fn address(ctx: &FooterContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::Address,
        present(&ctx.footer.address).unwrap_or_default(),
        ctx.style.contact.clone(),
    )
}

fn has_text(ctx: &FooterContext<'_>) -> bool {
    present(&ctx.footer.text).is_some()
}

fn text(ctx: &FooterContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::FooterText,
        present(&ctx.footer.text).unwrap_or_default(),
        ctx.style.text.clone(),
    )
}

fn has_logo(ctx: &FooterContext<'_>) -> bool {
    ctx.footer.logo.is_some()
}

fn logo(ctx: &FooterContext<'_>) -> Fragment {
    Fragment::Image {
        role: ImageRole::FooterLogo,
        src: ctx.footer.logo.clone().unwrap_or_else(|| "".into()),
        shape: ctx.shape,
        fit: ObjectFit::Contain,
        max_size: ctx.style.logo_max,
    }
}

fn has_qr_code(ctx: &FooterContext<'_>) -> bool {
    present(&ctx.footer.qr_code_link).is_some()
}

fn qr_code(ctx: &FooterContext<'_>) -> Fragment {
    let link = present(&ctx.footer.qr_code_link).unwrap_or_default();
    Fragment::Image {
        role: ImageRole::QrCode,
        src: ImageRef::from(ctx.qr_service.request_url(link)),
        // Codes must stay scannable, so they ignore the catalog's image shape.
        shape: ImageShape::Square,
        fit: ObjectFit::Contain,
        max_size: Size::new(ctx.qr_service.width as f32, ctx.qr_service.height as f32),
    }
}

/// Footer elements in display order. The logo takes a slot at the left edge
/// and the code image one at the right edge; the text lines are stacked in
/// between.
pub fn footer_rules<'a>() -> [InclusionRule<FooterContext<'a>>; 6] {
    [
        InclusionRule::new("website", has_website, website),
        InclusionRule::new("social", has_social, social),
        InclusionRule::new("address", has_address, address),
        InclusionRule::new("text", has_text, text),
        InclusionRule::new("logo", has_logo, logo),
        InclusionRule::new("qr-code", has_qr_code, qr_code),
    ]
}

/// Builds the footer band. The background is always present.
pub(crate) fn compose_footer(ctx: &FooterContext<'_>, rect: Rect) -> Region {
    let mut nodes = vec![Node::Fill(FillNode {
        role: FillRole::FooterBackground,
        rect,
        color: ctx.footer.background_color,
        corner_radius: 0.0,
    })];

    let padding = ctx.style.padding;
    let mut frame = rect.inset(padding);
    let mut lines = Vec::new();
    let mut leading = Vec::new();
    let mut trailing = Vec::new();

    for fragment in evaluate(&footer_rules(), ctx) {
        match fragment.image_role() {
            Some(ImageRole::FooterLogo) => leading.push(fragment),
            Some(_) => trailing.push(fragment),
            None => lines.push(fragment),
        }
    }

    let mut side_nodes = Vec::new();
    for logo in leading {
        let width = ctx.style.logo_max.width.min(frame.width);
        let node = place(logo, Rect::new(frame.x, frame.y, width, frame.height), TextAlign::Left);
        let used = node.rect().right() - frame.x + padding;
        frame.x += used;
        frame.width = (frame.width - used).max(0.0);
        side_nodes.push(node);
    }
    for code in trailing {
        let side = frame.height.min(frame.width);
        let slot = Rect::new(frame.right() - side, frame.y, side, side);
        side_nodes.push(place(code, slot, TextAlign::Right));
        frame.width = (frame.width - side - padding).max(0.0);
    }

    nodes.extend(stack(lines, frame, ctx.style.line_spacing, TextAlign::Left));
    nodes.extend(side_nodes);
    Region::new(RegionKind::Footer, rect, nodes)
}
