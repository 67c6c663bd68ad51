use crate::workflow::manifest::ModelManifest;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use watchcore::prelude::MonitorConfig;

/// Workflow settings loaded from YAML. Missing keys fall back to the
/// built-in defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    pub conf_threshold: f32,
    pub persistence_threshold: u32,
    pub beep_cooldown_secs: f64,
    /// JSON manifest naming the model's label sets; a missing file falls
    /// back to the built-in sets with a warning.
    pub model_manifest: Option<PathBuf>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        let defaults = MonitorConfig::default();
        Self {
            conf_threshold: defaults.conf_threshold,
            persistence_threshold: defaults.persistence_threshold,
            beep_cooldown_secs: defaults.beep_cooldown_secs,
            model_manifest: None,
        }
    }
}

impl MonitorSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading monitor settings {}", path_ref.display()))?;
        let settings: MonitorSettings = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing monitor settings {}", path_ref.display()))?;
        Ok(settings)
    }

    pub fn from_args(
        conf_threshold: f32,
        persistence_threshold: u32,
        beep_cooldown_secs: f64,
    ) -> Self {
        Self {
            conf_threshold,
            persistence_threshold,
            beep_cooldown_secs,
            model_manifest: None,
        }
    }

    pub fn to_monitor_config(&self, manifest: &ModelManifest) -> MonitorConfig {
        MonitorConfig {
            conf_threshold: self.conf_threshold,
            persistence_threshold: self.persistence_threshold,
            beep_cooldown_secs: self.beep_cooldown_secs,
            unsafe_labels: manifest.unsafe_labels.clone(),
            safe_labels: manifest.safe_labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn settings_from_args_produce_monitor_config() {
        let settings = MonitorSettings::from_args(0.5, 3, 2.0);
        let config = settings.to_monitor_config(&ModelManifest::default());
        assert_eq!(config.persistence_threshold, 3);
        assert_eq!(config.beep_cooldown_secs, 2.0);
        assert!(config.unsafe_labels.contains(&"No-Helmet".to_string()));
    }

    #[test]
    fn settings_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"conf_threshold: 0.55\npersistence_threshold: 8\n")
            .unwrap();
        let path = temp.into_temp_path();
        let settings = MonitorSettings::load(&path).unwrap();
        assert_eq!(settings.conf_threshold, 0.55);
        assert_eq!(settings.persistence_threshold, 8);
        // unspecified keys keep the built-in defaults
        assert_eq!(settings.beep_cooldown_secs, 3.0);
    }
}
