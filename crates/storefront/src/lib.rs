//! # Storefront Library
//!
//! A product list screen and a product detail screen over a remote REST catalog, each
//! driven by a [`resource_framework`] actor. This library exposes the core modules of
//! the application for the binary and for integration testing.

pub mod clients;
pub mod format;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod product_detail;
pub mod product_list;
