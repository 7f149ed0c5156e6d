//! # Display Formatters
//!
//! Pure functions shared by the list and detail views. None of them touch the network
//! or the resource lifecycle.

pub mod price;
pub mod stars;
pub mod text;

pub use price::format_price;
pub use stars::{render_stars, star_glyphs, StarGlyph, STAR_COUNT};
pub use text::capitalize_first;
