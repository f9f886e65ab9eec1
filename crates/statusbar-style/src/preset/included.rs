//! Identifiers and definitions of the included styles.

use crate::style::modes::closed_enum;
use crate::style::{
    AnimationType, BackgroundStyle, Color, Font, FontWeight, ProgressBarStyle, StatusBarStyle,
    SystemStatusBarStyle, TextStyle,
};

use super::catalog::PresetCatalog;

closed_enum! {
    /// A named, ready-to-use style shipped with the crate.
    pub enum IncludedStyle ("included style") {
        /// Red background with a white label.
        Error => "error",
        /// Yellow background with a dark gray label.
        Warning => "warning",
        /// Green background with a white label.
        Success => "success",
        /// Black background with a green bold Courier label.
        Matrix => "matrix",
        /// White background with a gray label.
        #[default]
        Default => "default",
        /// Nearly black background with a nearly white label.
        Dark => "dark",
    }
}

impl IncludedStyle {
    /// Returns a fresh copy of this preset from the shared catalog.
    pub fn style(&self) -> StatusBarStyle {
        PresetCatalog::shared().lookup(*self)
    }

    /// Builds this preset from scratch.
    pub(crate) fn build(&self) -> StatusBarStyle {
        match self {
            IncludedStyle::Error => colored(
                Color::rgb(150, 30, 0),
                Color::WHITE,
                Color::rgb(116, 22, 0),
                SystemStatusBarStyle::LightContent,
            ),
            IncludedStyle::Warning => colored(
                Color::rgb(230, 187, 9),
                Color::gray(85),
                Color::rgb(93, 63, 56),
                SystemStatusBarStyle::DarkContent,
            ),
            IncludedStyle::Success => colored(
                Color::rgb(150, 203, 0),
                Color::WHITE,
                Color::rgb(27, 151, 81),
                SystemStatusBarStyle::LightContent,
            ),
            IncludedStyle::Matrix => {
                let green = Color::rgb(0, 255, 0);
                let mut style = colored(
                    Color::BLACK,
                    green,
                    green,
                    SystemStatusBarStyle::LightContent,
                );
                style.text_style.font = Font::named("Courier-Bold", 14.0);
                style
            }
            IncludedStyle::Default => colored(
                Color::WHITE,
                Color::gray(128),
                Color::rgb(52, 199, 89),
                SystemStatusBarStyle::Default,
            ),
            IncludedStyle::Dark => colored(
                Color::rgb(13, 20, 31),
                Color::gray(242),
                Color::gray(242),
                SystemStatusBarStyle::LightContent,
            ),
        }
    }
}

fn colored(
    background: Color,
    text: Color,
    bar: Color,
    system_status_bar_style: SystemStatusBarStyle,
) -> StatusBarStyle {
    StatusBarStyle::new()
        .with_text_style(
            TextStyle::new()
                .with_text_color(text)
                .with_font(Font::footnote().with_weight(FontWeight::Semibold)),
        )
        .with_background_style(BackgroundStyle::new().with_background_color(background))
        .with_progress_bar_style(ProgressBarStyle::new().with_bar_color(bar))
        .with_animation_type(AnimationType::Move)
        .with_system_status_bar_style(system_status_bar_style)
}
