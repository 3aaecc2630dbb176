//! Output styling
//!
//! - `ColorScheme`: terminal (ANSI) and browser (CSS) token tables
//! - `RenderStyle`: decorated-pair vs inline-wrapped rendering
//! - `StyleMode`: configured override of environment detection

mod scheme;
mod render;
mod mode;

pub use scheme::ColorScheme;
pub use render::RenderStyle;
pub use mode::StyleMode;
