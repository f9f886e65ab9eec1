//! The style model: value types describing how a notification looks.
//!
//! This module provides:
//!
//! - [`StatusBarStyle`]: The root style, composed of the child styles below
//! - [`TextStyle`], [`BackgroundStyle`], [`PillStyle`], [`ProgressBarStyle`]
//! - Closed mode enums: [`BackgroundType`], [`AnimationType`],
//!   [`ProgressBarPosition`], [`SystemStatusBarStyle`]
//! - Primitives: [`Color`], [`Font`], [`Offset`], [`Rect`]
//!
//! ## Value Semantics
//!
//! Every type here owns its data. There are no shared children and no
//! interior mutability, so `clone()` is always a deep copy and a clone can
//! be mutated freely without affecting the value it came from.
//!
//! ## Validate at the Boundary
//!
//! Fields are plain public data and accept any value while a style is being
//! composed. Clamping happens when a consumer reads a field to make a
//! rendering decision (see [`ProgressBarStyle::applied_bar_height`] and
//! [`crate::PresentationPlan`]), never at write time.

mod background;
pub(crate) mod color;
mod font;
mod geometry;
pub(crate) mod modes;
mod pill;
mod progress;
mod status_bar;
mod text;

pub use background::BackgroundStyle;
pub use color::Color;
pub use font::{Font, FontFamily, FontWeight, FOOTNOTE_POINT_SIZE};
pub use geometry::{Offset, Rect};
pub use modes::{AnimationType, BackgroundType, ProgressBarPosition, SystemStatusBarStyle};
pub use pill::PillStyle;
pub use progress::{ProgressBarStyle, MIN_BAR_HEIGHT};
pub use status_bar::StatusBarStyle;
pub use text::TextStyle;
