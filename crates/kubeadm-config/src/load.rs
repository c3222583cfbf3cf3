//! Reading a MasterConfiguration document.
//!
//! Deserialization only: missing fields take their zero values and nothing
//! is merged, defaulted, or validated beyond the `apiVersion`/`kind` header.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::model::{API_VERSION, KIND, MasterConfiguration};

/// Type header of a document. Every other key is skipped.
#[derive(Deserialize)]
struct Header {
    #[serde(rename = "apiVersion", default)]
    api_version: Option<String>,
    #[serde(default)]
    kind: Option<String>,
}

/// Parse a configuration from YAML text.
///
/// An empty document yields the all-default configuration.
///
/// # Errors
///
/// Returns `Yaml` if the text is not a valid document, `UnsupportedVersion`
/// or `UnexpectedKind` if the header names a different schema.
pub fn from_yaml_str(text: &str) -> Result<MasterConfiguration> {
    if text.trim().is_empty() {
        return Ok(MasterConfiguration::default());
    }
    let header: Header = serde_yaml::from_str(text)?;

    if let Some(found) = header.api_version.filter(|v| v != API_VERSION) {
        return Err(ConfigError::UnsupportedVersion {
            found,
            expected: API_VERSION,
        });
    }
    if let Some(found) = header.kind.filter(|k| k != KIND) {
        return Err(ConfigError::UnexpectedKind {
            found,
            expected: KIND,
        });
    }
    // The header keys are not fields of the record and are ignored here.
    Ok(serde_yaml::from_str(text)?)
}

/// Load a configuration from a YAML file.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, `Io` if it cannot be
/// read, or any error from [`from_yaml_str`].
pub fn load_file(path: &Path) -> Result<MasterConfiguration> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::Io(e)
        }
    })?;
    let cfg = from_yaml_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        kubernetes_version = %cfg.kubernetes_version,
        "Loaded configuration"
    );
    Ok(cfg)
}
