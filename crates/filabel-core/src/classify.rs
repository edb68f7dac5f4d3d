//! Kind classifiers: per-kind support checks, prompt construction, and the
//! single backend call per classification.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use mime_guess::mime::{self, Mime};
use tracing::debug;

use crate::backend::ChatBackend;
use crate::error::ClassifyError;
use crate::labels::{FileKind, LabelCatalog};
use crate::result::ClassificationResult;

/// Structured-text types classified as text despite a non-`text/*` primary
/// category.
const TEXT_TYPES: &[&str] = &[
    "application/json",
    "application/xml",
    "application/x-httpd-php",
];

/// Extensions always treated as text-classifiable regardless of the guessed
/// content type.
const SCRIPT_EXTENSIONS: &[&str] = &["php", "sh", "py", "rb", "pl"];

/// A classifier for one [`FileKind`].
///
/// `supports` is a fast, side-effect-free predicate; a file that does not
/// exist supports nothing. `classify` performs exactly one backend call.
#[async_trait]
pub trait KindClassifier: Send + Sync {
    /// The kind this classifier handles.
    fn kind(&self) -> FileKind;

    /// Whether this classifier can handle the file at `path`.
    fn supports(&self, path: &Path) -> bool;

    /// Classify the file into zero or more catalog labels.
    async fn classify(&self, path: &Path) -> Result<ClassificationResult, ClassifyError>;
}

fn guessed_mime(path: &Path) -> Option<Mime> {
    mime_guess::from_path(path).first()
}

/// Classifier for image files, using the backend's vision capability.
///
/// The file's raw bytes travel with the prompt; the backend layer is
/// responsible for transport-safe encoding.
pub struct ImageClassifier {
    backend: Arc<dyn ChatBackend>,
    catalog: Arc<LabelCatalog>,
}

impl ImageClassifier {
    pub fn new(backend: Arc<dyn ChatBackend>, catalog: Arc<LabelCatalog>) -> Self {
        Self { backend, catalog }
    }

    fn prompt(labels: &[String]) -> String {
        format!(
            "Task: Document Classification.\n\
             Examine the provided image and categorize it into one or more of these labels: [{}].\n\
             If the document does not clearly match any label, respond with 'Unknown'.\n\
             Return one label per line in the output, using only the label names.",
            labels.join(", ")
        )
    }
}

#[async_trait]
impl KindClassifier for ImageClassifier {
    fn kind(&self) -> FileKind {
        FileKind::Image
    }

    fn supports(&self, path: &Path) -> bool {
        path.is_file() && guessed_mime(path).is_some_and(|m| m.type_() == mime::IMAGE)
    }

    async fn classify(&self, path: &Path) -> Result<ClassificationResult, ClassifyError> {
        if !self.supports(path) {
            return Err(ClassifyError::UnsupportedFile {
                kind: self.kind(),
                path: path.to_path_buf(),
            });
        }

        let labels = self.catalog.labels_for(FileKind::Image)?;
        let prompt = Self::prompt(&labels);
        let image = tokio::fs::read(path).await?;

        debug!(path = %path.display(), bytes = image.len(), "classifying image");
        let response = self.backend.generate_with_image(&image, &prompt).await?;

        Ok(ClassificationResult::from_response(&response, &labels))
    }
}

/// Classifier for text files, sending the file content inline after the
/// instruction.
pub struct TextClassifier {
    backend: Arc<dyn ChatBackend>,
    catalog: Arc<LabelCatalog>,
}

impl TextClassifier {
    pub fn new(backend: Arc<dyn ChatBackend>, catalog: Arc<LabelCatalog>) -> Self {
        Self { backend, catalog }
    }

    fn prompt(labels: &[String]) -> String {
        format!(
            "Task: Document Classification.\n\
             You will be given the contents of a file.\n\
             Classify it into one or more of these labels: [{}].\n\
             If the document does not clearly match any label, respond with 'Unknown'.\n\
             Return one label per line in the output, using only the label names.\n\
             \n\
             Here is the file content:\n\
             \n",
            labels.join(", ")
        )
    }

    fn has_script_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    }
}

#[async_trait]
impl KindClassifier for TextClassifier {
    fn kind(&self) -> FileKind {
        FileKind::Text
    }

    fn supports(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        if Self::has_script_extension(path) {
            return true;
        }
        guessed_mime(path)
            .is_some_and(|m| m.type_() == mime::TEXT || TEXT_TYPES.contains(&m.essence_str()))
    }

    async fn classify(&self, path: &Path) -> Result<ClassificationResult, ClassifyError> {
        if !self.supports(path) {
            return Err(ClassifyError::UnsupportedFile {
                kind: self.kind(),
                path: path.to_path_buf(),
            });
        }

        let labels = self.catalog.labels_for(FileKind::Text)?;
        let contents = tokio::fs::read_to_string(path).await?;
        let prompt = format!("{}{}", Self::prompt(&labels), contents);

        debug!(path = %path.display(), chars = contents.len(), "classifying text");
        let response = self.backend.generate_text(&prompt).await?;

        Ok(ClassificationResult::from_response(&response, &labels))
    }
}
