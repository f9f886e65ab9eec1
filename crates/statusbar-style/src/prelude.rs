//! Prelude for convenient imports.
//!
//! Re-exports the types most presenters and app setup code need:
//!
//! ```rust
//! use statusbar_style::prelude::*;
//!
//! let mut registry = StyleRegistry::new();
//! registry.add_style("quiet", |style| style.with_animation_type(AnimationType::Fade));
//!
//! let style = StyleChoice::from("quiet").resolve(&registry).unwrap();
//! let plan = PresentationPlan::resolve(&style, BarMetrics::new(88.0, 390.0));
//! assert_eq!(plan.animation, AnimationType::Fade);
//! ```

// Model
pub use crate::style::{
    AnimationType, BackgroundType, Color, Font, ProgressBarPosition, StatusBarStyle,
    SystemStatusBarStyle,
};

// Presets and selection
pub use crate::preset::IncludedStyle;
pub use crate::registry::{StyleChoice, StyleRegistry};

// Consumption
pub use crate::presentation::{BarLayout, BarMetrics, PresentationPlan};

pub use crate::error::StyleError;
