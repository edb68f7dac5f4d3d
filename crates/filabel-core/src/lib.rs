//! Core classification pipeline: label catalogs, kind classifiers, response
//! parsing, and first-match dispatch. Network transport lives in backend
//! crates implementing [`ChatBackend`].

pub mod backend;
pub mod classify;
pub mod dispatch;
pub mod error;
pub mod labels;
pub mod result;

pub use backend::{BackendError, ChatBackend};
pub use classify::{ImageClassifier, KindClassifier, TextClassifier};
pub use dispatch::Dispatcher;
pub use error::ClassifyError;
pub use labels::{FileKind, LabelCatalog, LabelError};
pub use result::ClassificationResult;
