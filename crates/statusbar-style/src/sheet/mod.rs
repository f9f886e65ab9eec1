//! Style sheets: partial styles written in YAML or JSON.
//!
//! A style sheet names a starting point and overrides only the fields it
//! mentions:
//!
//! ```yaml
//! base: warning          # or `extends: <registered name>`
//! animation: fade
//! text:
//!   color: "#222"
//!   font: { weight: bold }
//! progress_bar:
//!   color: none          # clear the bar color
//! ```
//!
//! - [`parse_style_sheet`] / [`StatusBarStyle::from_file`](crate::StatusBarStyle::from_file):
//!   one sheet, one style
//! - [`parse_style_collection`] / [`load_style_collection`]: a map of
//!   named sheets, registered through [`StyleRegistry`](crate::StyleRegistry)
//!
//! Unknown keys are rejected rather than ignored so typos surface at load
//! time.

mod loader;
mod overrides;

pub use loader::{
    load_style_collection, parse_style_collection, parse_style_sheet, SheetFormat,
    STYLE_SHEET_EXTENSIONS,
};
pub use overrides::{
    BackgroundOverrides, FontOverrides, PillOverrides, ProgressBarOverrides, StyleSheet,
    TextOverrides,
};
