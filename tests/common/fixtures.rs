use flyer::{CatalogSettings, CatalogSnapshot, LayoutMode, LayoutOption, Product};
use serde_json::{json, Value};

/// `count` products with distinct titles and both prices set.
pub fn products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            Product::new(i, format!("Produto {}", i), format!("{},90", 10 + i), format!("{},49", 8 + i))
                .with_image(format!("https://cdn.example/p{}.png", i))
        })
        .collect()
}

pub fn settings_for(layout: LayoutOption) -> CatalogSettings {
    CatalogSettings {
        mode: LayoutMode::NamedLayout { layout },
        ..Default::default()
    }
}

pub fn snapshot(count: usize, layout: LayoutOption) -> CatalogSnapshot {
    CatalogSnapshot::new(products(count), settings_for(layout))
}

/// Editor state of a named-layout flyer, as saved by the web editor.
pub fn named_layout_state() -> Value {
    json!({
        "products": [
            {"id": 0, "image": "https://cdn.example/arroz.png", "title": "Arroz 5kg", "originalPrice": "29,90", "discountPrice": "24,90"},
            {"id": 1, "image": "", "title": "", "originalPrice": "", "discountPrice": ""},
            {"id": 2, "image": "https://cdn.example/cafe.png", "title": "Cafe 500g", "originalPrice": "", "discountPrice": "14,90"}
        ],
        "settings": {
            "header": {"logo": "https://cdn.example/banner.png"},
            "layout": "3x3",
            "footer": {
                "backgroundColor": "#0044CC",
                "whatsapp": "(11) 99999-0000",
                "instagram": "",
                "facebook": "",
                "website": "mercado.example",
                "address": "Rua das Flores, 10",
                "qrCodeLink": "https://x.com"
            },
            "primaryColor": "#FF3B30",
            "imageShape": "circle"
        }
    })
}

/// Editor state of a simple grid-columns flyer.
pub fn grid_columns_state() -> Value {
    json!({
        "products": [
            {"id": 0, "image": "", "title": "Leite 1L", "originalPrice": "5,49", "discountPrice": "4,99"},
            {"id": 1, "image": "", "title": "Pao de forma", "originalPrice": "", "discountPrice": "7,90"}
        ],
        "settings": {
            "header": {"logo": "", "title": "OFERTAS DA SEMANA", "subtitle": "Validas ate domingo"},
            "footer": {"text": "Imagens meramente ilustrativas.", "logo": ""},
            "imageShape": "square",
            "gridColumns": 3
        }
    })
}
