//! Error types for style parsing, loading and lookup.
//!
//! The style model itself is total: constructing, cloning, customizing and
//! resolving styles never fails. [`StyleError`] only surfaces at the edges,
//! when text is parsed into the model (mode names, colors, style sheets) or
//! when a style is looked up by a name that was never registered.

use std::io;
use std::path::PathBuf;

/// Error type for all fallible operations in this crate.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A mode name did not match any variant of a closed enumeration.
    #[error("unknown {kind} '{value}' (expected one of: {})", .expected.join(", "))]
    UnknownVariant {
        /// The enumeration being parsed, e.g. `"animation type"`.
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Every accepted name.
        expected: &'static [&'static str],
    },

    /// A color value could not be parsed.
    #[error("invalid color '{value}': {message}")]
    InvalidColor { value: String, message: String },

    /// A named style was requested but never registered.
    #[error("style not found: {0}")]
    UnknownStyle(String),

    /// A style sheet could not be parsed.
    #[error("failed to parse style sheet{}: {message}", location(.path))]
    Parse {
        /// Source file, when the sheet was loaded from disk.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// A style sheet file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A style sheet file has an extension no parser handles.
    #[error("unsupported style sheet format: {} (expected one of: {})", .0.display(), crate::sheet::STYLE_SHEET_EXTENSIONS.join(", "))]
    UnsupportedFormat(PathBuf),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl StyleError {
    /// Creates a color error.
    pub fn invalid_color(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Attaches a source path to a parse error that does not have one yet.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            StyleError::Parse { path: None, message } => StyleError::Parse {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_yaml::Error> for StyleError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}
