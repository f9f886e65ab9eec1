//! Closed enumerations that select presentation behavior.
//!
//! Every mode is a plain Rust enum, so consumers match exhaustively and the
//! compiler flags any site that misses a variant when a new one is added.
//! Text and raw-index conversions reject unknown values with
//! [`StyleError::UnknownVariant`](crate::StyleError::UnknownVariant) instead
//! of falling back to a default.

/// Declares a closed mode enumeration together with its canonical names.
///
/// Generates `ALL`, `NAMES`, `as_str`, `Display`, `FromStr` (case-insensitive,
/// `-` accepted for `_`), `TryFrom<u8>` by declaration order, and serde
/// support using the canonical names plus any listed aliases.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal $(| $alias:literal)*,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical name of every variant, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            /// Returns the canonical name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::StyleError;

            fn from_str(s: &str) -> Result<Self, $crate::error::StyleError> {
                let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($text $(| $alias)* => Ok($name::$variant),)+
                    _ => Err($crate::error::StyleError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::NAMES,
                    }),
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::error::StyleError;

            fn try_from(index: u8) -> Result<Self, $crate::error::StyleError> {
                Self::ALL
                    .get(usize::from(index))
                    .copied()
                    .ok_or_else(|| $crate::error::StyleError::UnknownVariant {
                        kind: $kind,
                        value: index.to_string(),
                        expected: Self::NAMES,
                    })
            }
        }
    };
}

pub(crate) use closed_enum;

closed_enum! {
    /// Shape of the notification background.
    pub enum BackgroundType ("background type") {
        /// The background covers the full status bar and navigation bar area.
        Classic => "classic" | "full_width",
        /// The background is a floating pill around the text.
        #[default]
        Pill => "pill",
    }
}

closed_enum! {
    /// Transition used for presentation and dismissal.
    pub enum AnimationType ("animation type") {
        /// Moves in from the top and back out to the top.
        #[default]
        Move => "move",
        /// Falls down from the top and bounces a little.
        Bounce => "bounce",
        /// Fades in and out.
        Fade => "fade",
    }
}

closed_enum! {
    /// Vertical placement of the progress bar inside the notification.
    pub enum ProgressBarPosition ("progress bar position") {
        /// Along the bottom edge.
        #[default]
        Bottom => "bottom",
        /// Vertically centered, behind the text.
        Center => "center",
        /// Along the top edge.
        Top => "top",
    }
}

closed_enum! {
    /// Tint of the system status bar content while a classic bar is shown.
    ///
    /// Ignored for [`BackgroundType::Pill`].
    pub enum SystemStatusBarStyle ("system status bar style") {
        /// Match the presenting window.
        #[default]
        Default => "default",
        /// Force light status bar contents.
        LightContent => "light_content" | "light",
        /// Force dark status bar contents.
        DarkContent => "dark_content" | "dark",
    }
}

impl BackgroundType {
    /// Returns true if the system status bar tint applies to this background.
    pub fn honors_system_status_bar_style(&self) -> bool {
        match self {
            BackgroundType::Classic => true,
            BackgroundType::Pill => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    #[test]
    fn test_defaults() {
        assert_eq!(BackgroundType::default(), BackgroundType::Pill);
        assert_eq!(AnimationType::default(), AnimationType::Move);
        assert_eq!(ProgressBarPosition::default(), ProgressBarPosition::Bottom);
        assert_eq!(
            SystemStatusBarStyle::default(),
            SystemStatusBarStyle::Default
        );
    }

    #[test]
    fn test_every_variant_round_trips_through_its_name() {
        for mode in AnimationType::ALL {
            assert_eq!(mode.as_str().parse::<AnimationType>().unwrap(), *mode);
        }
        for mode in BackgroundType::ALL {
            assert_eq!(mode.as_str().parse::<BackgroundType>().unwrap(), *mode);
        }
        for mode in ProgressBarPosition::ALL {
            assert_eq!(
                mode.as_str().parse::<ProgressBarPosition>().unwrap(),
                *mode
            );
        }
        for mode in SystemStatusBarStyle::ALL {
            assert_eq!(
                mode.as_str().parse::<SystemStatusBarStyle>().unwrap(),
                *mode
            );
        }
    }

    #[test]
    fn test_variant_counts() {
        assert_eq!(BackgroundType::ALL.len(), 2);
        assert_eq!(AnimationType::ALL.len(), 3);
        assert_eq!(ProgressBarPosition::ALL.len(), 3);
        assert_eq!(SystemStatusBarStyle::ALL.len(), 3);
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_dashes() {
        assert_eq!(
            "Light-Content".parse::<SystemStatusBarStyle>().unwrap(),
            SystemStatusBarStyle::LightContent
        );
        assert_eq!(
            " BOUNCE ".parse::<AnimationType>().unwrap(),
            AnimationType::Bounce
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "full_width".parse::<BackgroundType>().unwrap(),
            BackgroundType::Classic
        );
        assert_eq!(
            "dark".parse::<SystemStatusBarStyle>().unwrap(),
            SystemStatusBarStyle::DarkContent
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "spin".parse::<AnimationType>().unwrap_err();
        match err {
            StyleError::UnknownVariant {
                kind,
                value,
                expected,
            } => {
                assert_eq!(kind, "animation type");
                assert_eq!(value, "spin");
                assert_eq!(expected, &["move", "bounce", "fade"]);
            }
            other => panic!("Expected UnknownVariant, got {:?}", other),
        }
    }

    #[test]
    fn test_try_from_index_follows_declaration_order() {
        assert_eq!(
            ProgressBarPosition::try_from(2).unwrap(),
            ProgressBarPosition::Top
        );
        assert_eq!(BackgroundType::try_from(0).unwrap(), BackgroundType::Classic);
    }

    #[test]
    fn test_try_from_index_rejects_out_of_range() {
        assert!(BackgroundType::try_from(2).is_err());
        assert!(AnimationType::try_from(u8::MAX).is_err());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let yaml = serde_yaml::to_string(&SystemStatusBarStyle::LightContent).unwrap();
        assert_eq!(yaml.trim(), "light_content");

        let parsed: BackgroundType = serde_yaml::from_str("full_width").unwrap();
        assert_eq!(parsed, BackgroundType::Classic);

        assert!(serde_yaml::from_str::<AnimationType>("spin").is_err());
    }

    #[test]
    fn test_system_status_bar_style_honored_only_for_classic() {
        assert!(BackgroundType::Classic.honors_system_status_bar_style());
        assert!(!BackgroundType::Pill.honors_system_status_bar_style());
    }
}
