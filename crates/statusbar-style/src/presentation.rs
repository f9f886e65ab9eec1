//! Consumer-side decisions derived from a style for one presentation.
//!
//! A [`StatusBarStyle`] stores whatever values a caller wrote into it. A
//! [`PresentationPlan`] is what a presenter actually acts on: heights clamped
//! to the container, the system status bar tint after the Pill precedence
//! rule, and border or shadow decorations only when they have a color.
//!
//! Resolving a plan never modifies the style.

use crate::style::{
    AnimationType, BackgroundType, Color, Font, Offset, ProgressBarPosition, Rect,
    StatusBarStyle, SystemStatusBarStyle,
};

/// Dimensions provided by the host for one presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetrics {
    /// Height of a classic full-width bar, usually the status bar height
    /// plus the navigation bar height.
    pub classic_height: f64,
    /// Width of the window the bar is presented in.
    pub container_width: f64,
}

impl BarMetrics {
    pub const fn new(classic_height: f64, container_width: f64) -> Self {
        Self {
            classic_height,
            container_width,
        }
    }
}

/// Shape of the notification background.
#[derive(Debug, Clone, PartialEq)]
pub enum BarLayout {
    /// A full-width bar reaching from the top edge.
    Classic { height: f64 },
    /// A floating capsule.
    Pill(PillLayout),
}

impl BarLayout {
    /// Height of the bar the progress bar and text are laid out in.
    pub fn height(&self) -> f64 {
        match self {
            BarLayout::Classic { height } => *height,
            BarLayout::Pill(pill) => pill.height,
        }
    }
}

/// Pill geometry with every length clamped to be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PillLayout {
    pub height: f64,
    pub top_spacing: f64,
    pub minimum_width: f64,
    pub border: Option<PillBorder>,
    pub shadow: Option<PillShadow>,
}

impl PillLayout {
    /// Width of a pill wrapping content `content_width` wide.
    ///
    /// At least the minimum width, at most the container width.
    pub fn width_for(&self, content_width: f64, container_width: f64) -> f64 {
        let container = container_width.max(0.0);
        content_width
            .max(self.minimum_width)
            .min(container)
    }

    /// Corner radius that makes the ends fully round.
    pub fn corner_radius(&self) -> f64 {
        self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillBorder {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillShadow {
    pub color: Color,
    pub radius: f64,
    pub offset: Offset,
}

/// Text rendering decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlan {
    pub color: Option<Color>,
    pub font: Font,
    pub offset_y: f64,
    /// Shadow color and offset; `None` when the style has no shadow color.
    pub shadow: Option<(Color, Offset)>,
}

/// Progress bar decisions inside a bar of known height.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarPlan {
    pub color: Option<Color>,
    /// Bar thickness, clamped to `[MIN_BAR_HEIGHT, container_height]`.
    pub height: f64,
    /// Height of the notification bar the progress bar is drawn in.
    pub container_height: f64,
    pub position: ProgressBarPosition,
    pub horizontal_insets: f64,
    pub offset_y: f64,
    pub corner_radius: f64,
}

impl ProgressBarPlan {
    /// Frame of the filled portion of the progress bar.
    ///
    /// `percentage` is clamped to `[0, 1]`, with NaN treated as zero. The
    /// bar is inset by `horizontal_insets` on both sides and then shifted
    /// vertically by `offset_y`.
    pub fn frame(&self, bar_width: f64, percentage: f64) -> Rect {
        let percentage = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 1.0)
        };
        let track = (bar_width - 2.0 * self.horizontal_insets).max(0.0);
        let y = match self.position {
            ProgressBarPosition::Top => 0.0,
            ProgressBarPosition::Center => (self.container_height - self.height) / 2.0,
            ProgressBarPosition::Bottom => self.container_height - self.height,
        };
        Rect::new(
            self.horizontal_insets,
            y + self.offset_y,
            track * percentage,
            self.height,
        )
    }
}

/// Everything a presenter needs from a style for one presentation.
///
/// # Example
///
/// ```rust
/// use statusbar_style::{BarLayout, BarMetrics, IncludedStyle, PresentationPlan};
///
/// let style = IncludedStyle::Error.style();
/// let plan = PresentationPlan::resolve(&style, BarMetrics::new(88.0, 390.0));
///
/// // The error preset asks for a light tint, but it is a pill.
/// assert!(matches!(plan.layout, BarLayout::Pill(_)));
/// assert_eq!(plan.status_bar_tint, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationPlan {
    pub layout: BarLayout,
    /// Tint to apply to the system status bar, if any.
    pub status_bar_tint: Option<SystemStatusBarStyle>,
    pub background_color: Option<Color>,
    pub animation: AnimationType,
    pub swipe_to_dismiss: bool,
    pub text: TextPlan,
    pub progress_bar: ProgressBarPlan,
}

impl PresentationPlan {
    /// Derives the plan for `style` presented with `metrics`.
    pub fn resolve(style: &StatusBarStyle, metrics: BarMetrics) -> Self {
        let background = &style.background_style;
        let layout = match background.background_type {
            BackgroundType::Classic => BarLayout::Classic {
                height: metrics.classic_height.max(0.0),
            },
            BackgroundType::Pill => {
                let pill = &background.pill_style;
                BarLayout::Pill(PillLayout {
                    height: pill.height.max(0.0),
                    top_spacing: pill.top_spacing.max(0.0),
                    minimum_width: pill.minimum_width.max(0.0),
                    border: pill.border_color.map(|color| PillBorder {
                        color,
                        width: pill.border_width.max(0.0),
                    }),
                    shadow: pill.shadow_color.map(|color| PillShadow {
                        color,
                        radius: pill.shadow_radius.max(0.0),
                        offset: pill.shadow_offset,
                    }),
                })
            }
        };

        let bar = &style.progress_bar_style;
        let container_height = layout.height();
        let progress_bar = ProgressBarPlan {
            color: bar.bar_color,
            height: bar.applied_bar_height(container_height),
            container_height,
            position: bar.position,
            horizontal_insets: bar.horizontal_insets,
            offset_y: bar.offset_y,
            corner_radius: bar.corner_radius,
        };

        let text = &style.text_style;
        let plan = Self {
            layout,
            status_bar_tint: style.effective_system_status_bar_style(),
            background_color: background.background_color,
            animation: style.animation_type,
            swipe_to_dismiss: style.can_swipe_to_dismiss,
            text: TextPlan {
                color: text.text_color,
                font: text.font.clone(),
                offset_y: text.text_offset_y,
                shadow: text.shadow(),
            },
            progress_bar,
        };
        log::trace!(
            "resolved {:?} presentation, bar height {}",
            background.background_type,
            plan.progress_bar.height
        );
        plan
    }
}
