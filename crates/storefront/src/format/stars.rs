use std::fmt;

/// Number of glyphs in every rating indicator.
pub const STAR_COUNT: usize = 5;

/// One unit of a star-rating indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    pub fn symbol(self) -> char {
        match self {
            StarGlyph::Full => '★',
            StarGlyph::Half => '⯪',
            StarGlyph::Empty => '☆',
        }
    }
}

impl fmt::Display for StarGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Converts a rating into exactly [`STAR_COUNT`] glyphs.
///
/// `floor(rate)` full stars, one half star if `rate` has a fractional part, empty stars
/// for the rest. Ratings outside `[0, 5]` are clamped and non-finite ratings count as 0.
pub fn star_glyphs(rate: f64) -> [StarGlyph; STAR_COUNT] {
    let rate = if rate.is_finite() {
        rate.clamp(0.0, STAR_COUNT as f64)
    } else {
        0.0
    };

    let full = rate.floor() as usize;
    let mut glyphs = [StarGlyph::Empty; STAR_COUNT];
    for glyph in glyphs.iter_mut().take(full) {
        *glyph = StarGlyph::Full;
    }
    if rate.fract() != 0.0 {
        if let Some(glyph) = glyphs.get_mut(full) {
            *glyph = StarGlyph::Half;
        }
    }
    glyphs
}

/// The glyphs as a single line of text, e.g. `★★★⯪☆`.
pub fn render_stars(glyphs: &[StarGlyph]) -> String {
    glyphs.iter().map(|g| g.symbol()).collect()
}
