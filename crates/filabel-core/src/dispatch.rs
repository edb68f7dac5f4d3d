//! First-match dispatch across kind classifiers.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::classify::KindClassifier;
use crate::error::ClassifyError;
use crate::result::ClassificationResult;

/// Ordered first-match dispatcher over kind classifiers.
///
/// Order is priority. The default assembly puts Image before Text: a file
/// with corrupted metadata can satisfy both the loose text heuristics and an
/// image type, and image must win.
pub struct Dispatcher {
    classifiers: Vec<Arc<dyn KindClassifier>>,
}

impl Dispatcher {
    /// Build a dispatcher trying `classifiers` in the given order.
    pub fn new(classifiers: Vec<Arc<dyn KindClassifier>>) -> Self {
        Self { classifiers }
    }

    /// Classify `path` with the first classifier whose support check passes.
    ///
    /// Fails with [`ClassifyError::FileNotFound`] before any support check
    /// when the path does not exist, and with
    /// [`ClassifyError::UnsupportedFileType`] when no classifier claims it.
    pub async fn classify_file(&self, path: &Path) -> Result<ClassificationResult, ClassifyError> {
        if !path.exists() {
            return Err(ClassifyError::FileNotFound(path.to_path_buf()));
        }

        for classifier in &self.classifiers {
            if classifier.supports(path) {
                debug!(kind = %classifier.kind(), path = %path.display(), "dispatching");
                return classifier.classify(path).await;
            }
        }

        Err(ClassifyError::UnsupportedFileType(path.to_path_buf()))
    }
}
