//! Appearance and placement of the optional progress bar.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::modes::ProgressBarPosition;

/// Smallest bar height a renderer will draw.
pub const MIN_BAR_HEIGHT: f64 = 0.5;

/// Styling of the progress bar drawn on top of the notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarStyle {
    /// The color of the progress bar.
    pub bar_color: Option<Color>,
    /// The requested bar height. See [`applied_bar_height`].
    ///
    /// [`applied_bar_height`]: ProgressBarStyle::applied_bar_height
    pub bar_height: f64,
    /// Vertical placement inside the notification.
    pub position: ProgressBarPosition,
    /// Horizontal inset applied on both sides.
    pub horizontal_insets: f64,
    /// Offsets the progress bar on the y-axis.
    pub offset_y: f64,
    /// The corner radius of the progress bar.
    pub corner_radius: f64,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            bar_color: None,
            bar_height: 1.0,
            position: ProgressBarPosition::Bottom,
            horizontal_insets: 0.0,
            offset_y: 0.0,
            corner_radius: 0.0,
        }
    }
}

impl ProgressBarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = Some(color);
        self
    }

    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.bar_height = bar_height;
        self
    }

    pub fn with_position(mut self, position: ProgressBarPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_horizontal_insets(mut self, horizontal_insets: f64) -> Self {
        self.horizontal_insets = horizontal_insets;
        self
    }

    pub fn with_offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Returns the bar height a renderer should draw inside a bar that is
    /// `full_height` tall.
    ///
    /// The stored height is clamped to `[MIN_BAR_HEIGHT, full_height]`; the
    /// style itself is left untouched. A container shorter than the minimum
    /// yields the minimum. A NaN height is treated as the minimum.
    pub fn applied_bar_height(&self, full_height: f64) -> f64 {
        let upper = full_height.max(MIN_BAR_HEIGHT);
        if self.bar_height.is_nan() {
            return MIN_BAR_HEIGHT;
        }
        self.bar_height.clamp(MIN_BAR_HEIGHT, upper)
    }
}
