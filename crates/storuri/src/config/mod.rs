//! # Storuri Declarative Config
//!
//! Loader boundary for declarative store-config resources. A resource
//! enumerates named `databases` and `storages`; the zconfig resolver
//! looks entries up by name and delegates opening to the matched entry's
//! own capability. The format is sniffed from the file extension.

pub mod error;
pub mod schema;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

pub use error::ConfigError;
pub use schema::{ConfigEntry, DatabaseSection, NamedStorage, StorageSection, StoreConfig};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Load and deserialize a store-config resource from `path`.
pub fn load_store_config(path: &Path) -> Result<StoreConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::io(source, "read", path.to_path_buf()))?;

    match format {
        ConfigFormat::Json => {
            serde_json::from_str(&raw).map_err(|source| ConfigError::deserialization("JSON", source))
        }
        #[cfg(feature = "yaml-config")]
        ConfigFormat::Yaml => {
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::deserialization("YAML", source))
        }
        #[cfg(feature = "toml-config")]
        ConfigFormat::Toml => {
            toml::from_str(&raw).map_err(|source| ConfigError::deserialization("TOML", source))
        }
    }
}
