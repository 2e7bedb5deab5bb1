pub mod builder;
pub mod emphasis;

pub use builder::build_runs;
pub use emphasis::{Emphasis, Span, tokenize};
