use crate::model::{CatalogSettings, Product};
use crate::rules::{always, evaluate, Fragment, InclusionRule};
use flyer_doctree::{Card, FillNode, FillRole, ImageNode, ImageRole, Node, TextNode, TextRole};
use flyer_style::{CardStyle, ObjectFit, TextStyle};
use flyer_types::{Rect, Size};

pub struct CardContext<'a> {
    pub product: &'a Product,
    pub settings: &'a CatalogSettings,
    pub style: &'a CardStyle,
}

fn has_image(ctx: &CardContext<'_>) -> bool {
    ctx.product.image.is_some()
}

fn image(ctx: &CardContext<'_>) -> Fragment {
    Fragment::Image {
        role: ImageRole::ProductImage,
        src: ctx.product.image.clone().unwrap_or_else(|| "".into()),
        shape: ctx.settings.image_shape,
        fit: ObjectFit::Cover,
        max_size: Size::new(f32::INFINITY, f32::INFINITY),
    }
}

fn title(ctx: &CardContext<'_>) -> Fragment {
    Fragment::text(TextRole::ProductTitle, ctx.product.title.clone(), ctx.style.title.clone())
}

fn has_original_price(ctx: &CardContext<'_>) -> bool {
    !ctx.product.original_price.trim().is_empty()
}

fn original_price(ctx: &CardContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::OriginalPrice,
        ctx.settings.format_price(&ctx.product.original_price),
        ctx.style.original_price.clone(),
    )
}

fn discount_price(ctx: &CardContext<'_>) -> Fragment {
    Fragment::text(
        TextRole::DiscountPrice,
        ctx.settings.format_price(&ctx.product.discount_price),
        ctx.style.discount_price.clone().with_color(ctx.settings.primary_color),
    )
}

/// Card elements in display order. Title and discount price are always shown.
pub fn card_rules<'a>() -> [InclusionRule<CardContext<'a>>; 4] {
    [
        InclusionRule::new("image", has_image, image),
        InclusionRule::new("title", always, title),
        InclusionRule::new("original-price", has_original_price, original_price),
        InclusionRule::new("discount-price", always, discount_price),
    ]
}

/// Fixed slots inside a card. Text keeps its size; the image area takes
/// `image_fraction` of the inner height or whatever the text leaves over.
struct CardSlots {
    image: Rect,
    title: Rect,
    price_row: Rect,
}

impl CardSlots {
    fn new(rect: Rect, style: &CardStyle) -> Self {
        let inner = rect.inset(style.padding);
        let price_height = style
            .original_price
            .block_height()
            .max(style.discount_price.block_height());
        let text_height =
            style.image_spacing + style.title.block_height() + style.title_spacing + price_height;
        let image_height = (inner.height * style.image_fraction)
            .min(inner.height - text_height)
            .max(0.0);

        let image = Rect::new(inner.x, inner.y, inner.width, image_height);
        let title = Rect::new(
            inner.x,
            image.bottom() + style.image_spacing,
            inner.width,
            style.title.block_height(),
        );
        let price_row = Rect::new(
            inner.x,
            title.bottom() + style.title_spacing,
            inner.width,
            price_height,
        );
        Self { image, title, price_row }
    }
}

fn text_node(role: TextRole, content: String, style: TextStyle, rect: Rect) -> Node {
    Node::Text(TextNode { role, rect, content, style })
}

/// Builds the card for one product inside the grid cell `rect`.
pub(crate) fn compose_card(ctx: &CardContext<'_>, rect: Rect) -> Card {
    let style = ctx.style;
    let slots = CardSlots::new(rect, style);
    let fragments = evaluate(&card_rules(), ctx);

    let original_width = fragments.iter().find_map(|f| match f {
        Fragment::Text { role: TextRole::OriginalPrice, content, style: text_style } => Some(
            text_style
                .estimated_width(content)
                .min((slots.price_row.width - style.price_gap) / 2.0)
                .max(0.0),
        ),
        _ => None,
    });

    let row = slots.price_row;
    let centred = |text_style: &TextStyle| row.y + (row.height - text_style.block_height()) / 2.0;

    let mut nodes = Vec::with_capacity(fragments.len() + 1);
    nodes.push(Node::Fill(FillNode {
        role: FillRole::CardBackground,
        rect,
        color: style.background,
        corner_radius: 0.0,
    }));

    for fragment in fragments {
        let node = match fragment {
            Fragment::Image { role, src, shape, fit, .. } => {
                let mask = shape.mask_rect(slots.image);
                Node::Image(ImageNode {
                    role,
                    rect: mask,
                    src,
                    shape,
                    fit,
                    corner_radius: shape.corner_radius(mask, style.image_corner_radius),
                })
            }
            Fragment::Text { role: TextRole::OriginalPrice, content, style: text_style } => {
                let width = original_width.unwrap_or_default();
                let rect = Rect::new(row.x, centred(&text_style), width, text_style.block_height());
                text_node(TextRole::OriginalPrice, content, text_style, rect)
            }
            Fragment::Text { role: TextRole::DiscountPrice, content, style: text_style } => {
                let offset = original_width.map_or(0.0, |w| w + style.price_gap);
                let rect = Rect::new(
                    row.x + offset,
                    centred(&text_style),
                    (row.width - offset).max(0.0),
                    text_style.block_height(),
                );
                text_node(TextRole::DiscountPrice, content, text_style, rect)
            }
            Fragment::Text { role, content, style: text_style } => {
                text_node(role, content, text_style, slots.title)
            }
        };
        nodes.push(node);
    }

    Card {
        product_id: ctx.product.id,
        rect,
        nodes,
    }
}
