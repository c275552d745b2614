//! Terminal line formatting: level colors, tag padding, scope padding.

mod color;
mod scope;
mod tag;

pub use color::Color;
pub use scope::ScopeConfig;
pub use tag::{Alignment, TagConfig};
