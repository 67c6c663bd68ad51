use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use watchcore::prelude::{default_safe_labels, default_unsafe_labels};

/// Label sets shipped alongside a trained model, as a JSON manifest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelManifest {
    pub unsafe_labels: Vec<String>,
    pub safe_labels: Vec<String>,
}

impl Default for ModelManifest {
    fn default() -> Self {
        Self {
            unsafe_labels: default_unsafe_labels(),
            safe_labels: default_safe_labels(),
        }
    }
}

impl ModelManifest {
    /// Loads the manifest, falling back to the built-in label sets when no
    /// path is configured or the file does not exist. The fallback is the
    /// only automatic one: a manifest that exists but fails to parse is an
    /// error.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            warn!(
                "model manifest {} not found, using built-in label sets",
                path.display()
            );
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading model manifest {}", path.display()))?;
        let manifest: ModelManifest = serde_json::from_str(&contents)
            .with_context(|| format!("parsing model manifest {}", path.display()))?;
        Ok(manifest)
    }
}
