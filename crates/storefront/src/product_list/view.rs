//! What the listing screen renders for each phase of its resource.

use crate::format::{
    capitalize_first, format_price, render_stars, star_glyphs, StarGlyph, STAR_COUNT,
};
use crate::model::{Product, ProductId};
use resource_framework::ResourceState;
use std::fmt;

pub const LIST_TITLE: &str = "App Store";
pub const LIST_SUBTITLE: &str = "Your One-Stop Shop for Everything";

/// One product as shown in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    /// Category label with its first letter capitalised.
    pub category: String,
    pub image: String,
    pub stars: [StarGlyph; STAR_COUNT],
    /// Review count in parentheses, e.g. `(120)`.
    pub review_count: String,
    pub price: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: capitalize_first(&product.category),
            image: product.image.clone(),
            stars: star_glyphs(product.rating.rate),
            review_count: format!("({})", product.rating.count),
            price: format_price(product.price),
        }
    }
}

/// The listing screen, derived from the resource state. Every phase renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Error(String),
    Cards(Vec<ProductCard>),
}

impl ListView {
    pub fn from_state(state: &ResourceState<Vec<Product>>) -> Self {
        match state {
            ResourceState::Loading => ListView::Loading,
            ResourceState::Error(failure) => ListView::Error(failure.message.clone()),
            ResourceState::Ready(products) => {
                ListView::Cards(products.iter().map(ProductCard::from).collect())
            }
        }
    }

    pub fn card(&self, id: ProductId) -> Option<&ProductCard> {
        match self {
            ListView::Cards(cards) => cards.iter().find(|c| c.id == id),
            _ => None,
        }
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{LIST_TITLE}")?;
        writeln!(f, "{LIST_SUBTITLE}")?;
        writeln!(f)?;
        match self {
            ListView::Loading => writeln!(f, "Loading..."),
            ListView::Error(message) => writeln!(f, "{message}"),
            ListView::Cards(cards) => {
                for card in cards {
                    writeln!(f, "[{}] {}", card.id, card.title)?;
                    writeln!(f, "    {}", card.category)?;
                    writeln!(f, "    {} {}", render_stars(&card.stars), card.review_count)?;
                    writeln!(f, "    {}", card.price)?;
                }
                Ok(())
            }
        }
    }
}
