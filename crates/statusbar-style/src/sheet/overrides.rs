//! Partial style descriptions applied on top of a base style.
//!
//! Every field of a [`StyleSheet`] is optional. Absent fields leave the base
//! untouched; present fields replace the base value. Optional colors can be
//! cleared explicitly with `null` or `none`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StyleError;
use crate::preset::IncludedStyle;
use crate::style::color::ColorRepr;
use crate::style::{
    AnimationType, BackgroundType, Color, FontFamily, FontWeight, Offset, ProgressBarPosition,
    StatusBarStyle, SystemStatusBarStyle,
};

/// Deserializes an optional color that may also be cleared.
///
/// Missing field: `None` (keep). `null` or `none`: `Some(None)` (clear).
fn clearable_color<'de, D>(deserializer: D) -> Result<Option<Option<Color>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<ColorRepr>::deserialize(deserializer)? {
        None => Ok(Some(None)),
        Some(repr) if repr.is_none_keyword() => Ok(Some(None)),
        Some(repr) => repr
            .into_color()
            .map(|color| Some(Some(color)))
            .map_err(serde::de::Error::custom),
    }
}

fn set<T>(target: &mut T, value: &Option<T>)
where
    T: Clone,
{
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// A partial [`StatusBarStyle`].
///
/// A sheet starts either from an included preset (`base`), from another
/// named style (`extends`) or, with neither, from a caller-supplied default.
///
/// ```yaml
/// base: error
/// animation: bounce
/// text:
///   font: { family: Courier-Bold, size: 14 }
/// background:
///   type: classic
/// progress_bar:
///   height: 4
///   position: top
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    /// Included preset to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<IncludedStyle>,
    /// Named style to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_status_bar: Option<SystemStatusBarStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_swipe_to_dismiss: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<ProgressBarOverrides>,
}

/// Overrides for [`TextStyle`](crate::TextStyle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextOverrides {
    #[serde(deserialize_with = "clearable_color", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOverrides>,
    #[serde(deserialize_with = "clearable_color", skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

/// Overrides for [`Font`](crate::Font). Unset parts keep the base font's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
}

/// Overrides for [`BackgroundStyle`](crate::BackgroundStyle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundOverrides {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub background_type: Option<BackgroundType>,
    #[serde(deserialize_with = "clearable_color", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pill: Option<PillOverrides>,
}

/// Overrides for [`PillStyle`](crate::PillStyle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PillOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_width: Option<f64>,
    #[serde(deserialize_with = "clearable_color", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(deserialize_with = "clearable_color", skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset: Option<Offset>,
}

/// Overrides for [`ProgressBarStyle`](crate::ProgressBarStyle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressBarOverrides {
    #[serde(deserialize_with = "clearable_color", skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ProgressBarPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_insets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

impl StyleSheet {
    /// Applies every present field to `style`.
    pub fn apply_to(&self, style: &mut StatusBarStyle) {
        set(&mut style.animation_type, &self.animation);
        set(&mut style.system_status_bar_style, &self.system_status_bar);
        set(&mut style.can_swipe_to_dismiss, &self.can_swipe_to_dismiss);

        if let Some(text) = &self.text {
            let target = &mut style.text_style;
            set(&mut target.text_color, &text.color);
            set(&mut target.text_shadow_color, &text.shadow_color);
            set(&mut target.text_shadow_offset, &text.shadow_offset);
            set(&mut target.text_offset_y, &text.offset_y);
            if let Some(font) = &text.font {
                set(&mut target.font.family, &font.family);
                set(&mut target.font.size, &font.size);
                set(&mut target.font.weight, &font.weight);
            }
        }

        if let Some(background) = &self.background {
            let target = &mut style.background_style;
            set(&mut target.background_type, &background.background_type);
            set(&mut target.background_color, &background.color);
            if let Some(pill) = &background.pill {
                let target = &mut target.pill_style;
                set(&mut target.height, &pill.height);
                set(&mut target.top_spacing, &pill.top_spacing);
                set(&mut target.minimum_width, &pill.minimum_width);
                set(&mut target.border_color, &pill.border_color);
                set(&mut target.border_width, &pill.border_width);
                set(&mut target.shadow_color, &pill.shadow_color);
                set(&mut target.shadow_radius, &pill.shadow_radius);
                set(&mut target.shadow_offset, &pill.shadow_offset);
            }
        }

        if let Some(bar) = &self.progress_bar {
            let target = &mut style.progress_bar_style;
            set(&mut target.bar_color, &bar.color);
            set(&mut target.bar_height, &bar.height);
            set(&mut target.position, &bar.position);
            set(&mut target.horizontal_insets, &bar.horizontal_insets);
            set(&mut target.offset_y, &bar.offset_y);
            set(&mut target.corner_radius, &bar.corner_radius);
        }
    }

    /// Builds a complete style from this sheet.
    ///
    /// The starting point is the `base` preset, the style `lookup` returns
    /// for `extends`, or `default()` when the sheet names neither.
    ///
    /// # Errors
    ///
    /// - [`StyleError::Parse`] if both `base` and `extends` are set
    /// - [`StyleError::UnknownStyle`] if `lookup` doesn't know `extends`
    pub fn build_with<L, D>(&self, lookup: L, default: D) -> Result<StatusBarStyle, StyleError>
    where
        L: Fn(&str) -> Option<StatusBarStyle>,
        D: FnOnce() -> StatusBarStyle,
    {
        let mut style = match (&self.base, &self.extends) {
            (Some(_), Some(_)) => {
                return Err(StyleError::Parse {
                    path: None,
                    message: "a style sheet can set 'base' or 'extends', not both".to_string(),
                });
            }
            (Some(preset), None) => preset.style(),
            (None, Some(name)) => {
                lookup(name).ok_or_else(|| StyleError::UnknownStyle(name.clone()))?
            }
            (None, None) => default(),
        };
        self.apply_to(&mut style);
        Ok(style)
    }

    /// Builds a standalone style: `base` preset or [`StatusBarStyle::default`].
    ///
    /// Fails with [`StyleError::UnknownStyle`] if the sheet uses `extends`,
    /// since there is nothing to look the name up in.
    pub fn build(&self) -> Result<StatusBarStyle, StyleError> {
        self.build_with(|_| None, StatusBarStyle::default)
    }
}

impl From<&StatusBarStyle> for StyleSheet {
    /// Describes every field of `style`, so building the sheet reproduces it
    /// exactly whatever the starting point.
    fn from(style: &StatusBarStyle) -> Self {
        let text = &style.text_style;
        let background = &style.background_style;
        let pill = &background.pill_style;
        let bar = &style.progress_bar_style;

        Self {
            base: None,
            extends: None,
            animation: Some(style.animation_type),
            system_status_bar: Some(style.system_status_bar_style),
            can_swipe_to_dismiss: Some(style.can_swipe_to_dismiss),
            text: Some(TextOverrides {
                color: Some(text.text_color),
                font: Some(FontOverrides {
                    family: Some(text.font.family.clone()),
                    size: Some(text.font.size),
                    weight: Some(text.font.weight),
                }),
                shadow_color: Some(text.text_shadow_color),
                shadow_offset: Some(text.text_shadow_offset),
                offset_y: Some(text.text_offset_y),
            }),
            background: Some(BackgroundOverrides {
                background_type: Some(background.background_type),
                color: Some(background.background_color),
                pill: Some(PillOverrides {
                    height: Some(pill.height),
                    top_spacing: Some(pill.top_spacing),
                    minimum_width: Some(pill.minimum_width),
                    border_color: Some(pill.border_color),
                    border_width: Some(pill.border_width),
                    shadow_color: Some(pill.shadow_color),
                    shadow_radius: Some(pill.shadow_radius),
                    shadow_offset: Some(pill.shadow_offset),
                }),
            }),
            progress_bar: Some(ProgressBarOverrides {
                color: Some(bar.bar_color),
                height: Some(bar.bar_height),
                position: Some(bar.position),
                horizontal_insets: Some(bar.horizontal_insets),
                offset_y: Some(bar.offset_y),
                corner_radius: Some(bar.corner_radius),
            }),
        }
    }
}
