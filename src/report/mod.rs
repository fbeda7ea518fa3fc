//! Evaluation report: record types, loading and the dataset registry.

pub mod builtin;
pub mod error;
pub mod records;
mod registry;
mod validate;

pub use error::{DatasetError, ReportError};
pub use registry::DatasetRegistry;

use log::info;
use records::ReportDocument;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Where a report document comes from.
#[cfg_attr(test, automock)]
pub trait ReportSource {
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Produce the raw document. Validation happens in [`load_registry`].
    fn fetch(&self) -> Result<ReportDocument, ReportError>;
}

/// The literal figures compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReport;

impl ReportSource for BuiltinReport {
    fn describe(&self) -> String {
        "built-in report".to_string()
    }

    fn fetch(&self) -> Result<ReportDocument, ReportError> {
        Ok(builtin::document())
    }
}

/// A JSON document written by the reporting pipeline.
#[derive(Debug, Clone)]
pub struct FileReport {
    path: PathBuf,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSource for FileReport {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<ReportDocument, ReportError> {
        let buf = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&buf)?)
    }
}

/// Picks the file source when a path is given, the built-in one otherwise.
pub fn source_for(path: Option<&Path>) -> Box<dyn ReportSource> {
    match path {
        Some(p) => Box::new(FileReport::new(p)),
        None => Box::new(BuiltinReport),
    }
}

/// Fetches and validates a report. Rejects malformed data before anything renders.
pub fn load_registry(source: &dyn ReportSource) -> Result<DatasetRegistry, ReportError> {
    let doc = source.fetch()?;
    let registry = DatasetRegistry::from_document(doc)?;
    info!(
        "Loaded {}: {} models, {} thresholds, {} features, {} checkpoints",
        source.describe(),
        registry.model_comparison().len(),
        registry.threshold_sweep().len(),
        registry.feature_importance().len(),
        registry.training_curve().len()
    );
    Ok(registry)
}

/// Writes a document as pretty JSON, creating parent directories.
pub fn export_document(doc: &ReportDocument, path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(doc)?)?;
    Ok(())
}
