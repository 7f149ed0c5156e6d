//! What the detail screen renders for each phase of its resource.

use crate::format::{
    capitalize_first, format_price, render_stars, star_glyphs, StarGlyph, STAR_COUNT,
};
use crate::model::{Product, ProductId};
use resource_framework::ResourceState;
use std::fmt;

pub const DETAIL_TITLE: &str = "Product Details";

/// A fetched product, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub stars: [StarGlyph; STAR_COUNT],
    /// e.g. `3.9 (120 reviews)`
    pub rating: String,
    pub price: String,
    pub description: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: capitalize_first(&product.category),
            image: product.image.clone(),
            stars: star_glyphs(product.rating.rate),
            rating: format!("{} ({} reviews)", product.rating.rate, product.rating.count),
            price: format_price(product.price),
            description: product.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Error(String),
    Ready(ProductDetailView),
}

impl DetailView {
    pub fn from_state(state: &ResourceState<Product>) -> Self {
        match state {
            ResourceState::Loading => DetailView::Loading,
            ResourceState::Error(failure) => DetailView::Error(failure.message.clone()),
            ResourceState::Ready(product) => DetailView::Ready(ProductDetailView::from(product)),
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailView::Loading => writeln!(f, "Loading..."),
            DetailView::Error(message) => writeln!(f, "{message}"),
            DetailView::Ready(detail) => {
                writeln!(f, "< {DETAIL_TITLE}")?;
                writeln!(f)?;
                writeln!(f, "{}", detail.title)?;
                writeln!(f, "{}", detail.category)?;
                writeln!(f, "{} {}", render_stars(&detail.stars), detail.rating)?;
                writeln!(f, "{}", detail.price)?;
                writeln!(f)?;
                writeln!(f, "Description")?;
                writeln!(f, "{}", detail.description)
            }
        }
    }
}
