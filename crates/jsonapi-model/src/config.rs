//! # Factory Configuration
//!
//! Serializable description of a [`ModelFactory`](crate::ModelFactory): the
//! default namespace used by the registry convention and an explicit type
//! mapping expressed as registry names. Type factories are code, so they are
//! registered on the built factory rather than configured here.
//!
//! ```rust
//! use jsonapi_model::FactoryConfig;
//!
//! let config: FactoryConfig = r#"{
//!     "default_namespace": "blog::",
//!     "mapped_types": { "people": "app::people" }
//! }"#.parse().unwrap();
//!
//! assert_eq!(config.default_namespace, "blog::");
//! assert_eq!(config.mapped_types["people"], "app::people");
//! ```

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Namespace prefix used when a factory is not configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "app::";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// JSON:API type name -> qualified registry name.
    #[serde(default)]
    pub mapped_types: HashMap<String, String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            mapped_types: HashMap::new(),
        }
    }
}

impl FromStr for FactoryConfig {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| ModelError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: FactoryConfig = "{}".parse().unwrap();
        assert_eq!(config, FactoryConfig::default());
        assert_eq!(config.default_namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn invalid_config_is_a_config_error() {
        let result: Result<FactoryConfig, _> = r#"{ "mapped_types": [] }"#.parse();
        assert!(matches!(result, Err(ModelError::Config(_))));
    }
}
