//! The root style of a notification.

use serde::{Deserialize, Serialize};

use super::background::BackgroundStyle;
use super::modes::{AnimationType, BackgroundType, SystemStatusBarStyle};
use super::progress::ProgressBarStyle;
use super::text::TextStyle;

/// The complete appearance and behavior of one notification presentation.
///
/// A `StatusBarStyle` owns all of its children, so [`Clone`] produces a
/// fully independent copy: customizing a clone of a shared preset can never
/// leak into the preset or into another caller's copy.
///
/// # Example
///
/// ```rust
/// use statusbar_style::{BackgroundType, IncludedStyle, ProgressBarPosition};
///
/// let base = IncludedStyle::Default.style();
/// let custom = base.clone().customized(|mut style| {
///     style.background_style.background_type = BackgroundType::Classic;
///     style.progress_bar_style.position = ProgressBarPosition::Top;
///     style
/// });
///
/// assert_eq!(base.progress_bar_style.position, ProgressBarPosition::Bottom);
/// assert_eq!(custom.progress_bar_style.position, ProgressBarPosition::Top);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarStyle {
    /// The styling of the text.
    pub text_style: TextStyle,
    /// The styling of the background.
    pub background_style: BackgroundStyle,
    /// The styling of the progress bar.
    pub progress_bar_style: ProgressBarStyle,
    /// The animation for presentation and dismissal.
    pub animation_type: AnimationType,
    /// The system status bar tint during presentation.
    ///
    /// Stored for every background type but only honored for
    /// [`BackgroundType::Classic`]; see
    /// [`effective_system_status_bar_style`](Self::effective_system_status_bar_style).
    pub system_status_bar_style: SystemStatusBarStyle,
    /// Whether the user can dismiss the bar by swiping up.
    pub can_swipe_to_dismiss: bool,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            text_style: TextStyle::default(),
            background_style: BackgroundStyle::default(),
            progress_bar_style: ProgressBarStyle::default(),
            animation_type: AnimationType::default(),
            system_status_bar_style: SystemStatusBarStyle::default(),
            can_swipe_to_dismiss: true,
        }
    }
}

impl StatusBarStyle {
    /// Creates a style with every field at its documented default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn with_background_style(mut self, background_style: BackgroundStyle) -> Self {
        self.background_style = background_style;
        self
    }

    pub fn with_progress_bar_style(mut self, progress_bar_style: ProgressBarStyle) -> Self {
        self.progress_bar_style = progress_bar_style;
        self
    }

    pub fn with_animation_type(mut self, animation_type: AnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    pub fn with_system_status_bar_style(mut self, style: SystemStatusBarStyle) -> Self {
        self.system_status_bar_style = style;
        self
    }

    pub fn with_can_swipe_to_dismiss(mut self, can_swipe_to_dismiss: bool) -> Self {
        self.can_swipe_to_dismiss = can_swipe_to_dismiss;
        self
    }

    /// Passes this style through a customization hook and returns the result.
    ///
    /// The hook receives the style by value, so it can only modify this copy.
    pub fn customized<F>(self, prepare: F) -> Self
    where
        F: FnOnce(StatusBarStyle) -> StatusBarStyle,
    {
        prepare(self)
    }

    /// Applies an in-place customization hook.
    pub fn customize<F>(&mut self, prepare: F)
    where
        F: FnOnce(&mut StatusBarStyle),
    {
        prepare(self);
    }

    /// Returns the background shape.
    pub fn background_type(&self) -> BackgroundType {
        self.background_style.background_type
    }

    /// Returns the system status bar tint a presenter should apply, if any.
    ///
    /// Pill backgrounds float below the status bar and never change its tint,
    /// so this is `None` for [`BackgroundType::Pill`] regardless of the stored
    /// [`system_status_bar_style`](Self::system_status_bar_style).
    pub fn effective_system_status_bar_style(&self) -> Option<SystemStatusBarStyle> {
        match self.background_style.background_type {
            BackgroundType::Classic => Some(self.system_status_bar_style),
            BackgroundType::Pill => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Font, ProgressBarPosition};

    #[test]
    fn test_defaults() {
        let style = StatusBarStyle::default();
        assert_eq!(style.text_style, TextStyle::default());
        assert_eq!(style.background_style, BackgroundStyle::default());
        assert_eq!(style.progress_bar_style, ProgressBarStyle::default());
        assert_eq!(style.animation_type, AnimationType::Move);
        assert_eq!(style.system_status_bar_style, SystemStatusBarStyle::Default);
        assert!(style.can_swipe_to_dismiss);
    }

    #[test]
    fn test_clone_then_mutate_position_leaves_original() {
        let original = StatusBarStyle::new();
        let mut copy = original.clone();
        copy.progress_bar_style.position = ProgressBarPosition::Top;

        assert_eq!(
            original.progress_bar_style.position,
            ProgressBarPosition::Bottom
        );
        assert_eq!(copy.progress_bar_style.position, ProgressBarPosition::Top);
    }

    #[test]
    fn test_clone_then_mutate_nested_children_leaves_original() {
        let original = StatusBarStyle::new();
        let mut copy = original.clone();
        copy.background_style.pill_style.minimum_width = 0.0;
        copy.text_style.font = Font::named("Courier-Bold", 14.0);
        copy.background_style.background_color = Some(Color::BLACK);

        assert_eq!(original, StatusBarStyle::default());
        assert_ne!(original, copy);
    }

    #[test]
    fn test_mutating_original_leaves_clone() {
        let mut original = StatusBarStyle::new();
        let copy = original.clone();
        original.animation_type = AnimationType::Fade;
        original.text_style.text_offset_y = 3.0;

        assert_eq!(copy, StatusBarStyle::default());
    }

    #[test]
    fn test_customized_hook() {
        let style = StatusBarStyle::new().customized(|style| {
            style
                .with_animation_type(AnimationType::Bounce)
                .with_can_swipe_to_dismiss(false)
        });
        assert_eq!(style.animation_type, AnimationType::Bounce);
        assert!(!style.can_swipe_to_dismiss);
    }

    #[test]
    fn test_customize_in_place() {
        let mut style = StatusBarStyle::new();
        style.customize(|s| s.background_style.pill_style.height = 50.0);
        assert_eq!(style.background_style.pill_style.height, 50.0);
    }

    #[test]
    fn test_effective_system_status_bar_style_classic() {
        let style = StatusBarStyle::new()
            .with_system_status_bar_style(SystemStatusBarStyle::LightContent)
            .customized(|mut s| {
                s.background_style.background_type = BackgroundType::Classic;
                s
            });
        assert_eq!(
            style.effective_system_status_bar_style(),
            Some(SystemStatusBarStyle::LightContent)
        );
    }

    #[test]
    fn test_effective_system_status_bar_style_ignored_for_pill() {
        for tint in SystemStatusBarStyle::ALL {
            let style = StatusBarStyle::new().with_system_status_bar_style(*tint);
            assert_eq!(style.background_type(), BackgroundType::Pill);
            assert_eq!(style.effective_system_status_bar_style(), None);
            // Still stored so serialization stays lossless.
            assert_eq!(style.system_status_bar_style, *tint);
        }
    }

    #[test]
    fn test_yaml_round_trip_is_lossless() {
        let style = StatusBarStyle::new()
            .with_system_status_bar_style(SystemStatusBarStyle::DarkContent)
            .with_animation_type(AnimationType::Fade);
        let yaml = serde_yaml::to_string(&style).unwrap();
        let parsed: StatusBarStyle = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, style);
    }
}
