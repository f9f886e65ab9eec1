//! Style selection at presentation time.

use crate::error::StyleError;
use crate::preset::IncludedStyle;
use crate::style::StatusBarStyle;

use super::registry::StyleRegistry;

/// The style a caller asks a presenter to use.
///
/// Whatever the source, [`resolve`](Self::resolve) hands back an independent
/// copy, so the presenter can snapshot it for the duration of one
/// presentation without aliasing the registry, the catalog or the caller's
/// own value.
#[derive(Debug, Clone, Copy, Default)]
pub enum StyleChoice<'a> {
    /// The registry's default style.
    #[default]
    Default,
    /// One of the included presets.
    Included(IncludedStyle),
    /// A style registered under this name.
    Named(&'a str),
    /// A style built by the caller.
    Custom(&'a StatusBarStyle),
}

impl<'a> StyleChoice<'a> {
    /// Resolves to a concrete style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] for a name the registry doesn't
    /// know.
    pub fn resolve(&self, registry: &StyleRegistry) -> Result<StatusBarStyle, StyleError> {
        match self {
            StyleChoice::Default => Ok(registry.default_style()),
            StyleChoice::Included(preset) => Ok(preset.style()),
            StyleChoice::Named(name) => registry
                .style(name)
                .ok_or_else(|| StyleError::UnknownStyle((*name).to_string())),
            StyleChoice::Custom(style) => Ok((*style).clone()),
        }
    }

    /// Resolves to a concrete style and runs a customization hook over it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statusbar_style::{Color, IncludedStyle, StyleChoice, StyleRegistry};
    ///
    /// let registry = StyleRegistry::new();
    /// let style = StyleChoice::Included(IncludedStyle::Default)
    ///     .resolve_with(&registry, |mut style| {
    ///         style.background_style.background_color = Some(Color::rgb(255, 0, 0));
    ///         style
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(style.background_style.background_color, Some(Color::rgb(255, 0, 0)));
    /// ```
    pub fn resolve_with<F>(
        &self,
        registry: &StyleRegistry,
        prepare: F,
    ) -> Result<StatusBarStyle, StyleError>
    where
        F: FnOnce(StatusBarStyle) -> StatusBarStyle,
    {
        self.resolve(registry).map(prepare)
    }
}

impl From<IncludedStyle> for StyleChoice<'_> {
    fn from(preset: IncludedStyle) -> Self {
        StyleChoice::Included(preset)
    }
}

impl<'a> From<&'a str> for StyleChoice<'a> {
    fn from(name: &'a str) -> Self {
        StyleChoice::Named(name)
    }
}

impl<'a> From<&'a StatusBarStyle> for StyleChoice<'a> {
    fn from(style: &'a StatusBarStyle) -> Self {
        StyleChoice::Custom(style)
    }
}
