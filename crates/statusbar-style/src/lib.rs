//! # Statusbar Style - Appearance Model for Status Bar Notifications
//!
//! `statusbar-style` describes how an in-app notification overlay looks and
//! behaves: text, background shape, progress bar, animation, system status
//! bar tint and swipe-to-dismiss. It is a pure value model. Drawing,
//! animation and gesture handling belong to the presenter that consumes it.
//!
//! ## Core Concepts
//!
//! - [`StatusBarStyle`]: The root style, owning [`TextStyle`],
//!   [`BackgroundStyle`] (with its [`PillStyle`]) and [`ProgressBarStyle`]
//! - [`IncludedStyle`]: Six ready-made presets (`error`, `warning`,
//!   `success`, `matrix`, `default`, `dark`) served by the [`PresetCatalog`]
//! - [`StyleRegistry`]: Custom styles registered by name through
//!   customization hooks or YAML style sheets
//! - [`StyleChoice`]: What a caller asks a presenter to use
//! - [`PresentationPlan`]: The clamped, precedence-resolved decisions a
//!   presenter acts on
//!
//! ## Quick Start
//!
//! ```rust
//! use statusbar_style::{
//!     AnimationType, BarMetrics, IncludedStyle, PresentationPlan, ProgressBarPosition,
//!     StyleChoice, StyleRegistry,
//! };
//!
//! let mut registry = StyleRegistry::new();
//! let upload = registry.add_style_based_on("upload", IncludedStyle::Success, |mut style| {
//!     style.animation_type = AnimationType::Bounce;
//!     style.progress_bar_style.position = ProgressBarPosition::Top;
//!     style.progress_bar_style.bar_height = 3.0;
//!     style
//! });
//!
//! let style = StyleChoice::Named(&upload).resolve(&registry).unwrap();
//! let plan = PresentationPlan::resolve(&style, BarMetrics::new(88.0, 390.0));
//!
//! assert_eq!(plan.progress_bar.height, 3.0);
//! assert_eq!(plan.progress_bar.frame(200.0, 0.5).width, 100.0);
//! ```
//!
//! ## Value Semantics
//!
//! Styles are deep-copied on every hand-off. Presets are read-only templates
//! and the registry returns copies, so customizing what you got back never
//! changes what anyone else gets:
//!
//! ```rust
//! use statusbar_style::{IncludedStyle, SystemStatusBarStyle};
//!
//! let mut mine = IncludedStyle::Dark.style();
//! mine.system_status_bar_style = SystemStatusBarStyle::DarkContent;
//!
//! assert_eq!(
//!     IncludedStyle::Dark.style().system_status_bar_style,
//!     SystemStatusBarStyle::LightContent
//! );
//! ```
//!
//! ## YAML Style Sheets
//!
//! Styles can be written as partial overrides of a preset:
//!
//! ```rust
//! use statusbar_style::{BackgroundType, StatusBarStyle};
//!
//! let style = StatusBarStyle::from_yaml(r##"
//! base: warning
//! background:
//!   type: classic
//! progress_bar:
//!   color: "#ff0000"
//!   height: 2
//! "##).unwrap();
//!
//! assert_eq!(style.background_type(), BackgroundType::Classic);
//! ```
//!
//! See the [`sheet`] module for the full format.
//!
//! ## Logging
//!
//! The crate emits `log` records (debug for registry changes and file loads,
//! trace for catalog lookups and plan resolution) and never installs a
//! logger itself.

// Internal modules
mod error;
pub mod prelude;
pub mod preset;
pub mod presentation;
pub mod registry;
pub mod sheet;
pub mod style;

// Error type
pub use error::StyleError;

// Style model exports
pub use style::{
    AnimationType, BackgroundStyle, BackgroundType, Color, Font, FontFamily, FontWeight, Offset,
    PillStyle, ProgressBarPosition, ProgressBarStyle, Rect, StatusBarStyle, SystemStatusBarStyle,
    TextStyle, FOOTNOTE_POINT_SIZE, MIN_BAR_HEIGHT,
};

// Preset exports
pub use preset::{IncludedStyle, PresetCatalog};

// Registry exports
pub use registry::{StyleChoice, StyleRegistry};

// Style sheet exports
pub use sheet::{
    load_style_collection, parse_style_collection, parse_style_sheet, StyleSheet,
    STYLE_SHEET_EXTENSIONS,
};

// Presentation exports
pub use presentation::{
    BarLayout, BarMetrics, PillBorder, PillLayout, PillShadow, PresentationPlan,
    ProgressBarPlan, TextPlan,
};
