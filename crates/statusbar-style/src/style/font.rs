//! Font descriptions passed through to the text renderer.
//!
//! A [`Font`] only names a typeface; resolving it to glyphs and metrics is
//! the renderer's job. The default is the platform's footnote text style.

use serde::{Deserialize, Serialize};

/// Point size of the platform footnote text style.
pub const FOOTNOTE_POINT_SIZE: f64 = 13.0;

/// Typeface family of a [`Font`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// The platform system font.
    #[default]
    System,
    /// The platform monospaced system font.
    Monospaced,
    /// A font installed under this PostScript or family name.
    #[serde(untagged)]
    Named(String),
}

/// Stroke weight of a [`Font`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// A font reference: family, point size and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: FontFamily,
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    /// The system font at the given size and weight.
    pub fn system(size: f64, weight: FontWeight) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight,
        }
    }

    /// The platform footnote font, used by default for notification text.
    pub fn footnote() -> Self {
        Self::system(FOOTNOTE_POINT_SIZE, FontWeight::Regular)
    }

    /// A font installed under `name`, e.g. `"Courier-Bold"`.
    pub fn named(name: impl Into<String>, size: f64) -> Self {
        Self {
            family: FontFamily::Named(name.into()),
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::footnote()
    }
}
