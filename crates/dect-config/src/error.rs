use core::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document is not well-formed XML.
    Xml(roxmltree::Error),
    /// Root element is not `<AlphaBlendingTool>`.
    MissingRoot { found: String },
    /// `<AlphaBlendingTool>` has no child elements.
    EmptyRoot,
    /// Every child of `<AlphaBlendingTool>` was skipped as invalid.
    NoValidEntries { skipped: usize },
    /// Preferences file is not valid JSON for the expected shape.
    Prefs {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// True for documents that parse but do not have the expected layout.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingRoot { .. } | Self::EmptyRoot | Self::NoValidEntries { .. }
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Xml(e) => write!(f, "malformed XML: {e}"),
            Self::MissingRoot { found } => {
                write!(f, "expected <AlphaBlendingTool> root element, found <{found}>")
            }
            Self::EmptyRoot => write!(f, "<AlphaBlendingTool> contains no entries"),
            Self::NoValidEntries { skipped } => {
                write!(f, "all {skipped} <AlphaBlendingTool> entries are invalid")
            }
            Self::Prefs { path, source } => {
                write!(f, "failed to parse preferences {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Xml(e) => Some(e),
            Self::Prefs { source, .. } => Some(source),
            Self::MissingRoot { .. } | Self::EmptyRoot | Self::NoValidEntries { .. } => None,
        }
    }
}
