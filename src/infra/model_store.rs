// ============================================================
// Layer 5 — Model Store
// ============================================================
// Reads the serialized model artifact from disk and hands back
// a ready-to-use GbdtModel. This is the only blocking
// initialization the process performs, and it happens before
// the server starts accepting requests — a service that cannot
// load its model refuses to start instead of failing every
// request.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::ml::model::GbdtModel;

/// Loads the model artifact from a configured path.
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and deserialize the artifact.
    ///
    /// Fails with context naming the path when the file is
    /// missing or unreadable, and with the model's own error
    /// when the JSON is malformed or the recorded feature
    /// columns don't match this service's layout.
    pub fn load(&self) -> Result<GbdtModel> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| {
                format!(
                    "Cannot read model artifact from '{}'. \
                     Pass --model-path if it lives elsewhere.",
                    self.path.display()
                )
            })?;

        let model = GbdtModel::from_json(&json)
            .with_context(|| {
                format!("Invalid model artifact '{}'", self.path.display())
            })?;

        tracing::info!(
            "Model loaded from '{}' ({} trees)",
            self.path.display(),
            model.tree_count(),
        );
        Ok(model)
    }
}
