pub mod dimension;
pub mod font;
pub mod palette;
pub mod spacing;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, PageLayout, PageSize};
pub use palette::StatusTone;
pub use spacing::Spacing;
pub use stylesheet::{RunStyle, ShadedStyle};
pub use text::TextAlign;
