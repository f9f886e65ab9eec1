//! Included styles and the catalog that hands them out.
//!
//! Six presets ship with the crate ([`IncludedStyle`]). They are built once
//! into a [`PresetCatalog`] and treated as read-only templates: every lookup
//! returns an independent clone, so "take the default preset and make the
//! background red" is always safe:
//!
//! ```rust
//! use statusbar_style::{Color, IncludedStyle};
//!
//! let mut style = IncludedStyle::Default.style();
//! style.background_style.background_color = Some(Color::rgb(255, 0, 0));
//!
//! // The catalog is unaffected.
//! assert_eq!(
//!     IncludedStyle::Default.style().background_style.background_color,
//!     Some(Color::WHITE)
//! );
//! ```

mod catalog;
mod included;

pub use catalog::PresetCatalog;
pub use included::IncludedStyle;
