//! Configuration for the smartmatch operator.
//!
//! Configuration never alters the dispatch table. It bounds recursion and
//! selects between the two historical readings of interval endpoints.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Matcher configuration.
///
/// # Examples
///
/// ```rust
/// use smartmatch::MatcherConfig;
///
/// // Default configuration
/// let config = MatcherConfig::default();
/// assert_eq!(config.max_depth, 256);
///
/// // Shallow recursion for untrusted inputs
/// let strict = MatcherConfig::strict();
/// assert!(strict.max_depth < config.max_depth);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Maximum recursion depth through containment and deep equality.
    ///
    /// Cycles in deep equality are broken without consuming depth beyond the
    /// cycle itself. Containment has no cycle guard, so a list that contains
    /// itself relies on this limit to terminate.
    ///
    /// Must not exceed [`MatcherConfig::MAX_DEPTH_LIMIT`].
    ///
    /// **Default**: 256
    pub max_depth: usize,

    /// Treat an empty string as an unbounded interval endpoint, like null and
    /// undefined.
    ///
    /// **Default**: true
    pub empty_string_unbounded: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_depth: 256,
            empty_string_unbounded: true,
        }
    }
}

impl MatcherConfig {
    /// Largest accepted `max_depth`.
    ///
    /// Matching recurses on the native stack. Each level of nesting costs up
    /// to about 2 KiB in unoptimized builds, so this keeps a full-depth match
    /// within the 2 MiB stack of a spawned thread.
    pub const MAX_DEPTH_LIMIT: usize = 512;

    /// Shallow recursion and only null/undefined as unbounded endpoints.
    pub fn strict() -> Self {
        Self {
            max_depth: 64,
            empty_string_unbounded: false,
        }
    }

    /// Deepest supported recursion, for large nested documents.
    pub fn permissive() -> Self {
        Self {
            max_depth: Self::MAX_DEPTH_LIMIT,
            empty_string_unbounded: true,
        }
    }

    /// Check the configuration for values the matcher cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(MatchError::Config(
                "max_depth must be greater than zero".to_string(),
            ));
        }
        if self.max_depth > Self::MAX_DEPTH_LIMIT {
            return Err(MatchError::Config(format!(
                "max_depth {} exceeds the supported limit of {}",
                self.max_depth,
                Self::MAX_DEPTH_LIMIT
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
