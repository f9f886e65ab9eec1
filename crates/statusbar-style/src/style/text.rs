//! Appearance of the notification label.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::font::Font;
use super::geometry::Offset;

/// Styling of the notification text.
///
/// The shadow offset only has an effect when [`text_shadow_color`] is set.
///
/// [`text_shadow_color`]: TextStyle::text_shadow_color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// The text color of the notification label.
    pub text_color: Option<Color>,
    /// The font of the notification label. Defaults to the footnote font.
    pub font: Font,
    /// The text shadow color. `None` means no shadow.
    pub text_shadow_color: Option<Color>,
    /// The text shadow offset.
    pub text_shadow_offset: Offset,
    /// Offsets the text label on the y-axis.
    pub text_offset_y: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text_color: None,
            font: Font::default(),
            text_shadow_color: None,
            text_shadow_offset: Offset::new(1.0, 2.0),
            text_offset_y: 0.0,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets a text shadow color and offset together.
    pub fn with_shadow(mut self, color: Color, offset: impl Into<Offset>) -> Self {
        self.text_shadow_color = Some(color);
        self.text_shadow_offset = offset.into();
        self
    }

    pub fn with_text_offset_y(mut self, offset_y: f64) -> Self {
        self.text_offset_y = offset_y;
        self
    }

    /// Returns the shadow color and offset, if a shadow is configured.
    pub fn shadow(&self) -> Option<(Color, Offset)> {
        self.text_shadow_color
            .map(|color| (color, self.text_shadow_offset))
    }
}
