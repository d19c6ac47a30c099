//! Configuration types for doctask

use crate::params::ConflictPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// External engine binary configuration
///
/// Groups settings for locating the document engine. Used as a nested
/// sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the docsplit executable (auto-detected if None)
    #[serde(default)]
    pub engine_path: Option<PathBuf>,

    /// Whether to search PATH for the engine binary if no explicit path is
    /// set (default: true)
    #[serde(default = "default_true")]
    pub search_path: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine_path: None,
            search_path: true,
        }
    }
}

/// Task execution defaults
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Conflict policy applied when callers build parameters from
    /// configuration (default: fail on existing output)
    #[serde(default)]
    pub default_conflict_policy: ConflictPolicy,
}

/// Main configuration for doctask
///
/// Sub-config fields are flattened so the serialized form stays flat
/// (no nesting in JSON/TOML).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Engine binary location settings
    #[serde(flatten)]
    pub engine: EngineConfig,

    /// Task execution defaults
    #[serde(flatten)]
    pub execution: ExecutionConfig,
}

// Convenience accessors for the flattened sub-configs
impl Config {
    /// Explicitly configured engine binary path, if any
    pub fn engine_path(&self) -> Option<&PathBuf> {
        self.engine.engine_path.as_ref()
    }

    /// Default conflict policy for parameters built from configuration
    pub fn default_conflict_policy(&self) -> ConflictPolicy {
        self.execution.default_conflict_policy
    }
}

fn default_true() -> bool {
    true
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_searches_path_and_fails_on_conflict() {
        let config = Config::default();
        assert!(config.engine_path().is_none());
        assert!(config.engine.search_path);
        assert_eq!(config.default_conflict_policy(), ConflictPolicy::Fail);
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.engine.search_path, "search_path must default to true");
        assert!(config.engine.engine_path.is_none());
        assert_eq!(
            config.execution.default_conflict_policy,
            ConflictPolicy::Fail
        );
    }

    #[test]
    fn flattened_fields_deserialize_without_nesting() {
        let json = r#"{
            "engine_path": "/opt/docsplit/bin/docsplit",
            "search_path": false,
            "default_conflict_policy": "skip"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.engine_path(),
            Some(&PathBuf::from("/opt/docsplit/bin/docsplit"))
        );
        assert!(!config.engine.search_path);
        assert_eq!(config.default_conflict_policy(), ConflictPolicy::Skip);
    }

    #[test]
    fn config_round_trips_through_json_flat() {
        let config = Config {
            engine: EngineConfig {
                engine_path: Some(PathBuf::from("/usr/bin/docsplit")),
                search_path: false,
            },
            execution: ExecutionConfig {
                default_conflict_policy: ConflictPolicy::Overwrite,
            },
        };

        let json = serde_json::to_value(&config).unwrap();
        // Flattened: no "engine"/"execution" nesting in the wire format
        assert!(json.get("engine").is_none());
        assert_eq!(json["engine_path"], "/usr/bin/docsplit");
        assert_eq!(json["default_conflict_policy"], "overwrite");

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back.engine_path(), config.engine_path());
        assert_eq!(
            back.default_conflict_policy(),
            config.default_conflict_policy()
        );
    }
}
