pub mod dimension;
pub mod font;
pub mod shape;
pub mod stylesheet;
pub mod text;

pub use dimension::PageSize;
pub use font::FontWeight;
pub use shape::{ImageShape, ObjectFit};
pub use stylesheet::{CardStyle, FooterStyle, HeaderStyle, Theme};
pub use text::{TextAlign, TextDecoration, TextStyle};
