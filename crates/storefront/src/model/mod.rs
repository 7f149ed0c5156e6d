//! Data structures for the catalog records the screens render.

pub mod product;

pub use product::*;
