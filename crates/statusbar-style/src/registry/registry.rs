//! Named custom styles.
//!
//! A [`StyleRegistry`] lets an application define its own styles once, by
//! name, and refer to them at presentation time. Every style is derived by
//! running a customization hook over a fresh copy of a base style: the
//! registry's default style, an included preset, or another registered style.
//!
//! # Example
//!
//! ```rust
//! use statusbar_style::{BackgroundType, IncludedStyle, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//! registry.add_style_based_on("banner", IncludedStyle::Success, |mut style| {
//!     style.background_style.background_type = BackgroundType::Classic;
//!     style
//! });
//!
//! let banner = registry.style("banner").unwrap();
//! assert_eq!(banner.background_style.background_type, BackgroundType::Classic);
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::StyleError;
use crate::preset::IncludedStyle;
use crate::sheet::{self, StyleSheet};
use crate::style::StatusBarStyle;

/// A name → style map plus a replaceable default style.
///
/// Lookups always return clones; the registered styles can only be changed
/// through the registry itself.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    default_style: StatusBarStyle,
    styles: HashMap<String, StatusBarStyle>,
}

impl StyleRegistry {
    /// Creates an empty registry whose default is [`IncludedStyle::Default`].
    pub fn new() -> Self {
        Self {
            default_style: IncludedStyle::Default.style(),
            styles: HashMap::new(),
        }
    }

    /// Returns a copy of the default style.
    pub fn default_style(&self) -> StatusBarStyle {
        self.default_style.clone()
    }

    /// Replaces the default style.
    pub fn set_default_style(&mut self, style: StatusBarStyle) {
        log::debug!("replacing default style");
        self.default_style = style;
    }

    /// Runs a customization hook over the current default style and stores
    /// the result as the new default.
    pub fn update_default_style<F>(&mut self, prepare: F)
    where
        F: FnOnce(StatusBarStyle) -> StatusBarStyle,
    {
        let updated = prepare(self.default_style());
        self.set_default_style(updated);
    }

    /// Registers a style derived from the default style and returns its
    /// name.
    pub fn add_style<F>(&mut self, name: impl Into<String>, prepare: F) -> String
    where
        F: FnOnce(StatusBarStyle) -> StatusBarStyle,
    {
        let name = name.into();
        let style = prepare(self.default_style());
        self.insert(name.clone(), style);
        name
    }

    /// Registers a style derived from an included preset and returns its
    /// name.
    pub fn add_style_based_on<F>(
        &mut self,
        name: impl Into<String>,
        base: IncludedStyle,
        prepare: F,
    ) -> String
    where
        F: FnOnce(StatusBarStyle) -> StatusBarStyle,
    {
        let name = name.into();
        let style = prepare(base.style());
        self.insert(name.clone(), style);
        name
    }

    /// Registers a style derived from another registered style and returns
    /// its name.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyle`] if `base_name` is not registered.
    pub fn add_style_based_on_named<F>(
        &mut self,
        name: impl Into<String>,
        base_name: &str,
        prepare: F,
    ) -> Result<String, StyleError>
    where
        F: FnOnce(StatusBarStyle) -> StatusBarStyle,
    {
        let base = self
            .style(base_name)
            .ok_or_else(|| StyleError::UnknownStyle(base_name.to_string()))?;
        let name = name.into();
        self.insert(name.clone(), prepare(base));
        Ok(name)
    }

    /// Registers a caller-built style. An existing style with the same name
    /// is replaced.
    pub fn insert(&mut self, name: impl Into<String>, style: StatusBarStyle) {
        let name = name.into();
        if self.styles.insert(name.clone(), style).is_some() {
            log::debug!("replaced style '{}'", name);
        } else {
            log::debug!("registered style '{}'", name);
        }
    }

    /// Adds a style by name, returning the registry for chaining.
    pub fn with_style(mut self, name: impl Into<String>, style: StatusBarStyle) -> Self {
        self.insert(name, style);
        self
    }

    /// Returns a copy of the named style.
    pub fn style(&self, name: &str) -> Option<StatusBarStyle> {
        self.styles.get(name).cloned()
    }

    /// Removes a named style, returning it.
    pub fn remove(&mut self, name: &str) -> Option<StatusBarStyle> {
        self.styles.remove(name)
    }

    /// Returns true if a style with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns true if no named styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Returns the number of named styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Registers every style of a YAML style collection.
    ///
    /// The document maps style names to style sheets. Sheets may start from
    /// an included preset (`base:`) or from another named style
    /// (`extends:`), either registered earlier or defined in the same
    /// document. Nothing is registered if any sheet fails.
    ///
    /// Returns the number of styles added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statusbar_style::{AnimationType, StyleRegistry};
    ///
    /// let mut registry = StyleRegistry::new();
    /// let added = registry.add_yaml(r#"
    /// alert:
    ///   base: error
    ///   animation: bounce
    /// quiet_alert:
    ///   extends: alert
    ///   animation: fade
    /// "#).unwrap();
    ///
    /// assert_eq!(added, 2);
    /// assert_eq!(registry.style("quiet_alert").unwrap().animation_type, AnimationType::Fade);
    /// ```
    pub fn add_yaml(&mut self, yaml: &str) -> Result<usize, StyleError> {
        let sheets = sheet::parse_style_collection(yaml)?;
        self.add_sheets(sheets)
    }

    /// Loads a style collection file (`.yaml`, `.yml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, fails to parse, or extends an unknown style.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, StyleError> {
        let path = path.as_ref();
        let sheets = sheet::load_style_collection(path)?;
        let added = self.add_sheets(sheets)?;
        log::debug!("loaded {} styles from {}", added, path.display());
        Ok(added)
    }

    /// Resolves and registers a set of named sheets.
    ///
    /// Sheets that extend another sheet of the same set are resolved after
    /// their base, whatever order they arrive in. A sheet of the set takes
    /// precedence over an already registered style of the same name.
    pub fn add_sheets<I>(&mut self, sheets: I) -> Result<usize, StyleError>
    where
        I: IntoIterator<Item = (String, StyleSheet)>,
    {
        let mut pending: Vec<(String, StyleSheet)> = sheets.into_iter().collect();
        let batch: HashSet<String> = pending.iter().map(|(name, _)| name.clone()).collect();
        let mut staged: HashMap<String, StatusBarStyle> = HashMap::new();

        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();

            for (name, sheet) in pending {
                let waiting = sheet.extends.as_deref().is_some_and(|base| {
                    if batch.contains(base) {
                        !staged.contains_key(base)
                    } else {
                        !self.contains(base)
                    }
                });
                if waiting {
                    deferred.push((name, sheet));
                    continue;
                }
                let style = sheet.build_with(
                    |base| staged.get(base).cloned().or_else(|| self.style(base)),
                    || self.default_style(),
                )?;
                staged.insert(name, style);
            }

            if deferred.len() == before {
                // Every remaining sheet extends a name nobody defines, or
                // they extend each other in a cycle.
                let (_, sheet) = &deferred[0];
                let missing = sheet.extends.clone().unwrap_or_default();
                return Err(StyleError::UnknownStyle(missing));
            }
            pending = deferred;
        }

        let added = staged.len();
        for (name, style) in staged {
            self.insert(name, style);
        }
        Ok(added)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AnimationType, BackgroundType, Color};

    #[test]
    fn test_new_registry_is_empty_with_default_preset() {
        let registry = StyleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.default_style(), IncludedStyle::Default.style());
    }

    #[test]
    fn test_add_style_starts_from_default() {
        let mut registry = StyleRegistry::new();
        registry.update_default_style(|style| style.with_animation_type(AnimationType::Fade));
        registry.add_style("tmp", |style| style);

        assert_eq!(
            registry.style("tmp").unwrap().animation_type,
            AnimationType::Fade
        );
    }

    #[test]
    fn test_add_style_based_on_included() {
        let mut registry = StyleRegistry::new();
        let name = registry.add_style_based_on("tmp", IncludedStyle::Matrix, |mut style| {
            style.background_style.background_type = BackgroundType::Classic;
            style
        });
        assert_eq!(name, "tmp");

        let style = registry.style(&name).unwrap();
        assert_eq!(style.background_style.background_color, Some(Color::BLACK));
        assert_eq!(style.background_style.background_type, BackgroundType::Classic);
        // The preset itself is untouched.
        assert_eq!(
            IncludedStyle::Matrix.style().background_style.background_type,
            BackgroundType::Pill
        );
    }

    #[test]
    fn test_add_style_based_on_named() {
        let mut registry = StyleRegistry::new();
        registry.add_style_based_on("base", IncludedStyle::Error, |s| s);
        let name = registry
            .add_style_based_on_named("derived", "base", |mut s| {
                s.can_swipe_to_dismiss = false;
                s
            })
            .unwrap();
        assert_eq!(name, "derived");

        let derived = registry.style("derived").unwrap();
        assert!(!derived.can_swipe_to_dismiss);
        assert!(registry.style("base").unwrap().can_swipe_to_dismiss);
    }

    #[test]
    fn test_add_style_based_on_unknown_name() {
        let mut registry = StyleRegistry::new();
        let err = registry
            .add_style_based_on_named("derived", "missing", |s| s)
            .unwrap_err();
        assert!(matches!(err, StyleError::UnknownStyle(name) if name == "missing"));
        assert!(!registry.contains("derived"));
    }

    #[test]
    fn test_fetched_style_is_independent() {
        let mut registry = StyleRegistry::new();
        registry.add_style("tmp", |s| s);

        let mut fetched = registry.style("tmp").unwrap();
        fetched.background_style.pill_style.minimum_width = 0.0;

        assert_eq!(
            registry.style("tmp").unwrap().background_style.pill_style.minimum_width,
            160.0
        );
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut registry = StyleRegistry::new()
            .with_style("tmp", IncludedStyle::Error.style())
            .with_style("tmp", IncludedStyle::Dark.style());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.style("tmp").unwrap(), IncludedStyle::Dark.style());

        assert!(registry.remove("tmp").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let registry = StyleRegistry::new()
            .with_style("zeta", StatusBarStyle::new())
            .with_style("alpha", StatusBarStyle::new());
        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_add_yaml_resolves_extends_regardless_of_order() {
        let mut registry = StyleRegistry::new();
        let added = registry
            .add_yaml(
                r#"
                a_child:
                    extends: z_parent
                    can_swipe_to_dismiss: false
                z_parent:
                    base: warning
                    animation: bounce
                "#,
            )
            .unwrap();

        assert_eq!(added, 2);
        let child = registry.style("a_child").unwrap();
        assert_eq!(child.animation_type, AnimationType::Bounce);
        assert!(!child.can_swipe_to_dismiss);
        assert_eq!(
            child.background_style.background_color,
            IncludedStyle::Warning.style().background_style.background_color
        );
    }

    #[test]
    fn test_add_yaml_extends_previously_registered() {
        let mut registry = StyleRegistry::new();
        registry.add_style_based_on("brand", IncludedStyle::Dark, |s| s);
        registry
            .add_yaml("promo:\n  extends: brand\n  animation: fade\n")
            .unwrap();

        let promo = registry.style("promo").unwrap();
        assert_eq!(promo.animation_type, AnimationType::Fade);
        assert_eq!(
            promo.text_style.text_color,
            IncludedStyle::Dark.style().text_style.text_color
        );
    }

    #[test]
    fn test_add_yaml_prefers_redefined_parent_whatever_the_names() {
        for (child, parent) in [("a_child", "z_parent"), ("z_child", "a_parent")] {
            let mut registry = StyleRegistry::new();
            registry.add_style_based_on(parent, IncludedStyle::Dark, |s| s);

            let yaml = format!(
                "{child}:\n  extends: {parent}\n{parent}:\n  animation: fade\n"
            );
            registry.add_yaml(&yaml).unwrap();

            assert_eq!(
                registry.style(parent).unwrap().animation_type,
                AnimationType::Fade
            );
            assert_eq!(
                registry.style(child).unwrap().animation_type,
                AnimationType::Fade,
                "{child} should extend the redefined {parent}"
            );
        }
    }

    #[test]
    fn test_add_yaml_self_extension_is_rejected() {
        let mut registry = StyleRegistry::new();
        registry.add_style("loop", |s| s);
        let result = registry.add_yaml("loop:\n  extends: loop\n");
        assert!(matches!(result, Err(StyleError::UnknownStyle(name)) if name == "loop"));
    }

    #[test]
    fn test_add_yaml_unknown_extends_registers_nothing() {
        let mut registry = StyleRegistry::new();
        let err = registry
            .add_yaml("ok:\n  animation: fade\nbroken:\n  extends: nowhere\n")
            .unwrap_err();
        assert!(matches!(err, StyleError::UnknownStyle(name) if name == "nowhere"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_yaml_cycle_is_rejected() {
        let mut registry = StyleRegistry::new();
        let result = registry.add_yaml("a:\n  extends: b\nb:\n  extends: a\n");
        assert!(matches!(result, Err(StyleError::UnknownStyle(_))));
    }

    #[test]
    fn test_sheet_without_base_uses_registry_default() {
        let mut registry = StyleRegistry::new();
        registry.set_default_style(IncludedStyle::Matrix.style());
        registry.add_yaml("tmp:\n  animation: fade\n").unwrap();

        let style = registry.style("tmp").unwrap();
        assert_eq!(style.text_style.font, IncludedStyle::Matrix.style().text_style.font);
    }
}
