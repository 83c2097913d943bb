//! Declarative shape manifests for fnshape.
//!
//! Load shape contract declarations from TOML or YAML files and compile
//! them into validated descriptors without code changes. A manifest that
//! declares a malformed contract fails at load, before any closure can be
//! bound to it.
//!
//! # Examples
//!
//! Load a manifest from a TOML string:
//!
//! ```
//! use fnshape_config::ShapeManifest;
//!
//! let manifest = ShapeManifest::from_toml_str(r#"
//!     [[shapes]]
//!     name = "LineFilter"
//!     category = "predicate"
//!
//!     [[shapes.operations]]
//!     name = "test"
//!     params = ["text"]
//!     returns = { value = "bool" }
//! "#).unwrap();
//!
//! let descriptors = manifest.compile().unwrap();
//! assert_eq!(descriptors.len(), 1);
//! ```
//!
//! Use an empty manifest when the file is missing:
//!
//! ```
//! use fnshape_config::ShapeManifest;
//!
//! let manifest = ShapeManifest::load("shapes.toml").unwrap_or_default();
//! assert!(manifest.shapes.is_empty());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fnshape_core::{ShapeDescriptor, ShapeError, ShapeRegistry};

/// Manifest error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid shape contract: {0}")]
    Shape(#[from] ShapeError),

    #[error("Invalid manifest: {0}")]
    Invalid(String),
}

/// A declarative collection of shape contracts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShapeManifest {
    /// Declared shape contracts.
    #[serde(default)]
    pub shapes: Vec<ShapeDescriptor>,
}

impl ShapeManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a manifest from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a manifest from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a manifest from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a manifest from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a shape declaration.
    pub fn with_shape(mut self, descriptor: ShapeDescriptor) -> Self {
        self.shapes.push(descriptor);
        self
    }

    /// Compiles the manifest into validated descriptors.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation found, or
    /// [`ConfigError::Invalid`] for manifest-level problems such as an
    /// empty shape name.
    pub fn compile(&self) -> Result<Vec<ShapeDescriptor>, ConfigError> {
        for shape in &self.shapes {
            if shape.name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "shape name must not be empty".to_string(),
                ));
            }
            shape.validate()?;
        }
        Ok(self.shapes.clone())
    }

    /// Compiles the manifest and registers every contract.
    ///
    /// Returns the number of contracts registered. Nothing is registered
    /// if compilation fails; registration stops at the first duplicate.
    pub fn register_into(&self, registry: &mut ShapeRegistry) -> Result<usize, ConfigError> {
        let descriptors = self.compile()?;
        let count = descriptors.len();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(count)
    }
}
