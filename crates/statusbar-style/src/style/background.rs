//! Background color and shape.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::modes::BackgroundType;
use super::pill::PillStyle;

/// Styling of the notification background.
///
/// The pill style is always present, even for classic backgrounds, so that
/// switching the background type never loses pill customizations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundStyle {
    /// The background color of the notification bar.
    pub background_color: Option<Color>,
    /// The background shape.
    pub background_type: BackgroundType,
    /// Pill appearance, used only for [`BackgroundType::Pill`].
    pub pill_style: PillStyle,
}

impl BackgroundStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_background_type(mut self, background_type: BackgroundType) -> Self {
        self.background_type = background_type;
        self
    }

    pub fn with_pill_style(mut self, pill_style: PillStyle) -> Self {
        self.pill_style = pill_style;
        self
    }

    /// Returns the pill style if it is in effect for this background.
    pub fn active_pill_style(&self) -> Option<&PillStyle> {
        match self.background_type {
            BackgroundType::Pill => Some(&self.pill_style),
            BackgroundType::Classic => None,
        }
    }
}
