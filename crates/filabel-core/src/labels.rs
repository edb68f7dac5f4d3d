//! Per-kind label vocabularies, resolved from bundled defaults or override files.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

const DEFAULT_IMAGE_LABELS: &str = include_str!("../resources/labels/image.json");
const DEFAULT_TEXT_LABELS: &str = include_str!("../resources/labels/text.json");

/// The category of file content a classifier handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Image,
    Text,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
        }
    }

    fn bundled_default(&self) -> &'static str {
        match self {
            Self::Image => DEFAULT_IMAGE_LABELS,
            Self::Text => DEFAULT_TEXT_LABELS,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("labels file not found for kind '{kind}' at {path}")]
    NotFound { kind: FileKind, path: PathBuf },

    #[error("unable to read labels file for kind '{kind}'")]
    Read {
        kind: FileKind,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid labels file format for kind '{kind}': {reason}")]
    Format { kind: FileKind, reason: String },
}

/// Label vocabulary source for both file kinds.
///
/// Each kind resolves to an override file when one was supplied, or to the
/// bundled default otherwise. The resolved list keeps the stored order and
/// any duplicates; vocabulary hygiene is the source's responsibility.
#[derive(Debug, Default)]
pub struct LabelCatalog {
    overrides: HashMap<FileKind, PathBuf>,
}

impl LabelCatalog {
    /// Catalog resolving every kind from its bundled default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source for `kind` with a JSON file on disk.
    #[must_use]
    pub fn with_override(mut self, kind: FileKind, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(kind, path.into());
        self
    }

    /// Resolve the ordered label list for `kind`.
    pub fn labels_for(&self, kind: FileKind) -> Result<Vec<String>, LabelError> {
        let contents = match self.overrides.get(&kind) {
            Some(path) => {
                if !path.exists() {
                    return Err(LabelError::NotFound {
                        kind,
                        path: path.clone(),
                    });
                }
                std::fs::read_to_string(path).map_err(|source| LabelError::Read { kind, source })?
            }
            None => kind.bundled_default().to_string(),
        };

        let labels = parse_label_list(kind, &contents)?;
        debug!(kind = %kind, count = labels.len(), "resolved label catalog");
        Ok(labels)
    }
}

/// Parse a JSON array of labels, coercing scalar elements to their string form.
fn parse_label_list(kind: FileKind, contents: &str) -> Result<Vec<String>, LabelError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(contents).map_err(|e| LabelError::Format {
            kind,
            reason: e.to_string(),
        })?;

    let labels: Vec<String> = values
        .iter()
        .map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    if labels.is_empty() {
        return Err(LabelError::Format {
            kind,
            reason: "label list is empty".to_string(),
        });
    }

    Ok(labels)
}
