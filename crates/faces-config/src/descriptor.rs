//! Deployment descriptor loading
//!
//! A descriptor carries the context parameters of one web application:
//!
//! ```toml
//! display-name = "storefront"
//!
//! [context-params]
//! initializer-class-name = "app.StorefrontInitializer"
//! support-jsp = false
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::params::{ContextParams, InitParams};
use crate::{Error, Result};

/// Parsed deployment descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Descriptor {
    /// Human-readable application name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Context initialization parameters
    #[serde(default)]
    pub context_params: ContextParams,
}

impl Descriptor {
    /// Parse a descriptor from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse {
            path: "<memory>".into(),
            format: "TOML".into(),
            message: e.to_string(),
        })
    }
}

impl InitParams for Descriptor {
    fn init_parameter(&self, key: &str) -> Option<&str> {
        self.context_params.init_parameter(key)
    }
}

/// Format-agnostic descriptor loader.
///
/// Format is detected from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default)]
pub struct DescriptorStore;

impl DescriptorStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a descriptor from a file.
    pub fn load(&self, path: &Path) -> Result<Descriptor> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        // Reject before touching the filesystem
        if !matches!(extension.as_str(), "toml" | "json" | "yaml" | "yml") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(?path, format = %extension, "Loading deployment descriptor");

        let parse_error = |format: &str, message: String| Error::Parse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))
            }
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string())),
        }
    }
}
