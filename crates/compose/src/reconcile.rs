//! Keeps the product list in step with the grid the user picked.

use crate::model::Product;
use flyer_layout::LayoutOption;

/// `count` empty products with ids `0..count`.
pub fn blank_products(count: usize) -> Vec<Product> {
    (0..count).map(Product::blank).collect()
}

/// Resizes `products` to exactly one page of `layout`.
///
/// Existing entries keep their content up to the new capacity, missing slots
/// are filled with blank products, and ids are reassigned by position.
pub fn reconcile_products(products: &[Product], layout: LayoutOption) -> Vec<Product> {
    let capacity = layout.capacity();
    let mut reconciled: Vec<Product> = products.iter().take(capacity).cloned().collect();
    let kept = reconciled.len();
    reconciled.extend((kept..capacity).map(Product::blank));
    for (index, product) in reconciled.iter_mut().enumerate() {
        product.id = index;
    }
    reconciled
}
