//! The preset catalog: included style templates, handed out as copies.

use once_cell::sync::Lazy;

use crate::style::StatusBarStyle;

use super::included::IncludedStyle;

static SHARED_CATALOG: Lazy<PresetCatalog> = Lazy::new(PresetCatalog::new);

/// Maps every [`IncludedStyle`] to a fully populated [`StatusBarStyle`].
///
/// Templates are built once and never handed out by reference:
/// [`lookup`](Self::lookup) always returns a fresh clone, so callers can
/// customize what they get back without affecting the catalog or each other.
///
/// # Example
///
/// ```rust
/// use statusbar_style::{Color, IncludedStyle, PresetCatalog};
///
/// let catalog = PresetCatalog::shared();
/// let mut first = catalog.lookup(IncludedStyle::Default);
/// let second = catalog.lookup(IncludedStyle::Default);
///
/// first.background_style.background_color = Some(Color::rgb(255, 0, 0));
/// assert_ne!(first, second);
/// assert_eq!(second, catalog.lookup(IncludedStyle::Default));
/// ```
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    /// One template per preset, indexed by declaration order.
    templates: Vec<StatusBarStyle>,
}

impl PresetCatalog {
    /// Builds a catalog containing every included style.
    pub fn new() -> Self {
        let templates = IncludedStyle::ALL
            .iter()
            .map(IncludedStyle::build)
            .collect();
        Self { templates }
    }

    /// Returns the process-wide catalog, built on first use.
    pub fn shared() -> &'static PresetCatalog {
        &SHARED_CATALOG
    }

    /// Returns a fresh copy of the given preset.
    pub fn lookup(&self, preset: IncludedStyle) -> StatusBarStyle {
        log::trace!("looking up included style '{}'", preset);
        self.templates[preset as usize].clone()
    }

    /// Returns every preset identifier in declaration order.
    pub fn presets(&self) -> impl Iterator<Item = IncludedStyle> {
        IncludedStyle::ALL.iter().copied()
    }

    /// Returns the number of presets.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog holds no presets.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
