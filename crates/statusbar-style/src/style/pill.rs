//! Appearance of the floating pill background.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::geometry::Offset;

/// Styling of the pill, used when the background type is
/// [`Pill`](super::BackgroundType::Pill).
///
/// Border and shadow are only drawn when their color is set. Negative sizes
/// are stored as given and floored to zero when a presentation plan is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillStyle {
    /// The height of the pill.
    pub height: f64,
    /// The spacing between the pill and the status bar or top of the screen.
    pub top_spacing: f64,
    /// The minimum width of the pill.
    pub minimum_width: f64,
    /// The border color. `None` means no border.
    pub border_color: Option<Color>,
    /// The width of the border.
    pub border_width: f64,
    /// The shadow color. `None` means no shadow.
    pub shadow_color: Option<Color>,
    /// The blur radius of the shadow.
    pub shadow_radius: f64,
    /// The shadow offset.
    pub shadow_offset: Offset,
}

impl Default for PillStyle {
    fn default() -> Self {
        Self {
            height: 36.0,
            top_spacing: 6.0,
            minimum_width: 160.0,
            border_color: None,
            border_width: 2.0,
            shadow_color: None,
            shadow_radius: 4.0,
            shadow_offset: Offset::new(0.0, 2.0),
        }
    }
}

impl PillStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_top_spacing(mut self, top_spacing: f64) -> Self {
        self.top_spacing = top_spacing;
        self
    }

    pub fn with_minimum_width(mut self, minimum_width: f64) -> Self {
        self.minimum_width = minimum_width;
        self
    }

    /// Sets a border color and width together.
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Sets a shadow color, radius and offset together.
    pub fn with_shadow(mut self, color: Color, radius: f64, offset: impl Into<Offset>) -> Self {
        self.shadow_color = Some(color);
        self.shadow_radius = radius;
        self.shadow_offset = offset.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pill = PillStyle::default();
        assert_eq!(pill.height, 36.0);
        assert_eq!(pill.top_spacing, 6.0);
        assert_eq!(pill.minimum_width, 160.0);
        assert_eq!(pill.border_color, None);
        assert_eq!(pill.border_width, 2.0);
        assert_eq!(pill.shadow_color, None);
        assert_eq!(pill.shadow_radius, 4.0);
        assert_eq!(pill.shadow_offset, Offset::new(0.0, 2.0));
    }

    #[test]
    fn test_write_time_values_are_not_validated() {
        let pill = PillStyle::default().with_height(-4.0).with_minimum_width(-1.0);
        assert_eq!(pill.height, -4.0);
        assert_eq!(pill.minimum_width, -1.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let pill: PillStyle = serde_yaml::from_str("height: 50\nborder_color: red").unwrap();
        assert_eq!(pill.height, 50.0);
        assert_eq!(pill.border_color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(pill.top_spacing, 6.0);
        assert_eq!(pill.shadow_offset, Offset::new(0.0, 2.0));
    }
}
