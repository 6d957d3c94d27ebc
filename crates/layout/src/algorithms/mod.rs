pub mod pagination;

pub use pagination::{page_count, page_ranges};
