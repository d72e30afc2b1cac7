// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Precompiler configuration.
//!
//! Every field has a default, so an empty document is a valid
//! configuration:
//!
//! ```rust
//! use mapper_core::{DialectKind, PrecompilerConfig};
//!
//! let config = PrecompilerConfig::from_json_str(r#"{ "dialect": "mysql" }"#).unwrap();
//! assert_eq!(config.dialect, DialectKind::MySql);
//! assert_eq!(config.default_sequence_name, "seq_mapper_derive");
//! ```
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `dialect` | `"postgres"` | Built-in dialect, see [`DialectKind`] |
//! | `default_sequence_name` | `"seq_mapper_derive"` | Sequence used when no generator table matches |

use serde::Deserialize;

use crate::{
    dialect::{Dialect, DialectKind},
    error::{Error, Result}
};

/// Sequence name used when a sequence-generated id has no matching
/// generator entry.
pub const DEFAULT_SEQUENCE_NAME: &str = "seq_mapper_derive";

fn default_sequence_name() -> String {
    DEFAULT_SEQUENCE_NAME.to_string()
}

/// Settings shared by every precompiler run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrecompilerConfig {
    /// Target dialect.
    pub dialect: DialectKind,

    /// Fallback sequence name.
    pub default_sequence_name: String
}

impl Default for PrecompilerConfig {
    fn default() -> Self {
        Self {
            dialect:               DialectKind::default(),
            default_sequence_name: default_sequence_name()
        }
    }
}

impl PrecompilerConfig {
    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for malformed JSON, unknown keys or
    /// unknown dialect names.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig {
            message: e.to_string()
        })
    }

    /// Dialect implementation for [`Self::dialect`].
    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect.dialect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PrecompilerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PrecompilerConfig::default());
        assert_eq!(config.dialect().name(), "postgres");
    }

    #[test]
    fn overrides() {
        let config = PrecompilerConfig::from_json_str(
            r#"{ "dialect": "Oracle", "default_sequence_name": "app_sequence" }"#
        )
        .unwrap();
        assert_eq!(config.dialect, DialectKind::Oracle);
        assert_eq!(config.default_sequence_name, "app_sequence");
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let err = PrecompilerConfig::from_json_str(r#"{ "dialect": "sqlite" }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { message } if message.contains("sqlite")));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(PrecompilerConfig::from_json_str(r#"{ "dialekt": "pg" }"#).is_err());
    }
}
