//! Reading style sheets from text and files.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StyleError;
use crate::style::StatusBarStyle;

use super::overrides::StyleSheet;

/// Recognized style sheet file extensions, in lookup priority order.
pub const STYLE_SHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Serialization format of a style sheet file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Yaml,
    Json,
}

impl SheetFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, StyleError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(SheetFormat::Yaml),
            Some("json") => Ok(SheetFormat::Json),
            _ => Err(StyleError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(self, content: &str) -> Result<T, StyleError> {
        match self {
            SheetFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            SheetFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

fn read(path: &Path) -> Result<(SheetFormat, String), StyleError> {
    let format = SheetFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((format, content))
}

/// Parses a single YAML style sheet into a complete style.
///
/// The sheet starts from its `base` preset, or from
/// [`StatusBarStyle::default`] without one.
///
/// # Example
///
/// ```rust
/// use statusbar_style::{parse_style_sheet, BackgroundType, IncludedStyle};
///
/// let style = parse_style_sheet("base: error\nbackground:\n  type: classic\n").unwrap();
///
/// assert_eq!(style.background_style.background_type, BackgroundType::Classic);
/// assert_eq!(
///     style.text_style,
///     IncludedStyle::Error.style().text_style,
/// );
/// ```
pub fn parse_style_sheet(yaml: &str) -> Result<StatusBarStyle, StyleError> {
    let sheet: StyleSheet = serde_yaml::from_str(yaml)?;
    sheet.build()
}

/// Parses a YAML document mapping style names to style sheets.
///
/// Sheets come back sorted by name; resolving `extends` between them is
/// left to [`StyleRegistry::add_sheets`](crate::StyleRegistry::add_sheets).
pub fn parse_style_collection(yaml: &str) -> Result<Vec<(String, StyleSheet)>, StyleError> {
    let sheets: BTreeMap<String, StyleSheet> = serde_yaml::from_str(yaml)?;
    Ok(sheets.into_iter().collect())
}

/// Loads a named collection of style sheets from a YAML or JSON file.
///
/// # Errors
///
/// - [`StyleError::UnsupportedFormat`] for an unknown extension
/// - [`StyleError::Io`] if the file cannot be read
/// - [`StyleError::Parse`] carrying the path if the content is invalid
pub fn load_style_collection<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(String, StyleSheet)>, StyleError> {
    let path = path.as_ref();
    let (format, content) = read(path)?;
    let sheets: BTreeMap<String, StyleSheet> =
        format.parse(&content).map_err(|e| e.with_path(path))?;
    log::debug!("read {} style sheets from {}", sheets.len(), path.display());
    Ok(sheets.into_iter().collect())
}

impl StatusBarStyle {
    /// Creates a style from a YAML style sheet.
    ///
    /// Same as [`parse_style_sheet`].
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        parse_style_sheet(yaml)
    }

    /// Creates a style from a JSON style sheet.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let sheet: StyleSheet = serde_json::from_str(json)?;
        sheet.build()
    }

    /// Loads a style from a single-sheet YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] if the file cannot be read, has an unknown
    /// extension, or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let (format, content) = read(path)?;
        let sheet: StyleSheet = format.parse(&content).map_err(|e| e.with_path(path))?;
        log::debug!("loaded style sheet {}", path.display());
        sheet.build()
    }

    /// Writes the style as a YAML style sheet that sets every field.
    ///
    /// [`from_yaml`](Self::from_yaml) reads the output back unchanged.
    pub fn to_yaml(&self) -> Result<String, StyleError> {
        Ok(serde_yaml::to_string(&StyleSheet::from(self))?)
    }

    /// Writes the style as a pretty-printed JSON style sheet that sets every
    /// field.
    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(&StyleSheet::from(self))?)
    }
}
