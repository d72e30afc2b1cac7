// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for statement precompilation and query execution.
//!
//! Every precompilation failure is a configuration-time failure: the fix is
//! a metadata correction, never a retry. Errors carry enough context to name
//! the offending repository, entity, property or annotation.
//!
//! # Error Kinds
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::MissingExampleMarker`] | Repository supports example queries, entity has no `example` marker |
//! | [`Error::MissingExampleCompanion`] | Entity has the marker but no companion type was generated |
//! | [`Error::UnsupportedGenerationStrategy`] | `#[generated(strategy = ...)]` cannot be resolved |
//! | [`Error::DialectUnsupported`] | Dialect lacks identity or sequence support |
//! | [`Error::ConditionArity`] | `#[condition]` operand count mismatches the part type |
//! | [`Error::UnknownEntity`] | A referenced type was never registered |
//!
//! Two situations are deliberately **not** errors: an entity without an id
//! skips key-based statements, and an already-registered statement is left
//! untouched.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the precompiler and the execution bridge.
#[derive(Debug, Error)]
pub enum Error {
    /// Repository declares example-query support but the entity is not
    /// marked with `#[entity(example)]`.
    #[error(
        "the repository {repository} supports example queries, but could not find the example \
         marker on the entity: {entity}"
    )]
    MissingExampleMarker {
        /// Repository namespace.
        repository: String,
        /// Entity type name.
        entity:     String
    },

    /// Entity carries the example marker but its companion type is unknown.
    #[error("did you forget to generate {companion} for {entity}?")]
    MissingExampleCompanion {
        /// Entity type name.
        entity:    String,
        /// Expected companion type name.
        companion: String
    },

    /// Id generation strategy that cannot be turned into key SQL.
    #[error("unsupported generated value id strategy {strategy} on {entity}.{property}")]
    UnsupportedGenerationStrategy {
        /// Entity type name.
        entity:   String,
        /// Id property name.
        property: String,
        /// Strategy as written in the metadata.
        strategy: String
    },

    /// Dialect cannot render the requested feature.
    #[error("dialect {dialect} does not support {feature}")]
    DialectUnsupported {
        /// Dialect name.
        dialect: &'static str,
        /// Missing feature.
        feature: &'static str
    },

    /// `#[condition]` supplies the wrong number of operand properties.
    #[error(
        "condition with type {part} on {entity}.{property} needs {expected} arguments, but only \
         found {actual} properties in this condition"
    )]
    ConditionArity {
        /// Entity type name.
        entity:   String,
        /// Annotated property.
        property: String,
        /// Part type name.
        part:     &'static str,
        /// Required operand count.
        expected: usize,
        /// Supplied operand count.
        actual:   usize
    },

    /// Type name that has no registered entity metadata.
    #[error("no persistent entity registered for type {type_name}")]
    UnknownEntity {
        /// Requested type name.
        type_name: String
    },

    /// A key-based statement was built for an entity without an id.
    #[error("entity {entity} has no id property")]
    MissingIdProperty {
        /// Entity type name.
        entity: String
    },

    /// Dialect name that does not match any built-in dialect.
    #[error("unknown dialect: {name}")]
    UnknownDialect {
        /// Name as supplied.
        name: String
    },

    /// Configuration document could not be parsed.
    #[error("invalid precompiler configuration: {message}")]
    InvalidConfig {
        /// Parser message.
        message: String
    },

    /// Runtime parameters could not be converted to a parameter object.
    #[error("could not serialize statement parameters: {message}")]
    Parameters {
        /// Serializer message.
        message: String
    },

    /// Operation that a read-only view refuses.
    #[error("{message}")]
    Unsupported {
        /// Explanation.
        message: &'static str
    },

    /// Failure reported by the SQL session.
    #[error("session error: {message}")]
    Session {
        /// Session message.
        message: String
    }
}

impl Error {
    /// Create a session error from any displayable value.
    pub fn session(message: impl std::fmt::Display) -> Self {
        Self::Session {
            message: message.to_string()
        }
    }

    /// Check whether this error is a configuration failure raised during
    /// precompilation.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            Self::Unsupported { .. } | Self::Session { .. } | Self::Parameters { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_names_expected_and_actual() {
        let err = Error::ConditionArity {
            entity:   "app::User".to_string(),
            property: "age".to_string(),
            part:     "BETWEEN",
            expected: 2,
            actual:   1
        };
        let message = err.to_string();
        assert!(message.contains("BETWEEN"));
        assert!(message.contains("needs 2 arguments"));
        assert!(message.contains("found 1 properties"));
        assert!(message.contains("app::User.age"));
    }

    #[test]
    fn companion_message() {
        let err = Error::MissingExampleCompanion {
            entity:    "app::User".to_string(),
            companion: "app::UserExample".to_string()
        };
        assert_eq!(
            err.to_string(),
            "did you forget to generate app::UserExample for app::User?"
        );
    }

    #[test]
    fn configuration_classification() {
        assert!(
            Error::UnknownEntity {
                type_name: "X".into()
            }
            .is_configuration()
        );
        assert!(
            !Error::Unsupported {
                message: "read only"
            }
            .is_configuration()
        );
        assert!(!Error::session("broken pipe").is_configuration());
    }
}
