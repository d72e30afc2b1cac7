// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated-key resolution for insert statements.
//!
//! # Strategy Resolution
//!
//! | Declared | Resolved | `<selectKey>` SQL | Order |
//! |----------|----------|-------------------|-------|
//! | `identity` | identity | dialect identity read-back | `AFTER` |
//! | `sequence` | sequence | dialect next sequence value | `BEFORE` |
//! | `auto` | dialect native strategy | as above | as above |
//! | `table` | — | unsupported | — |
//!
//! # Sequence Names
//!
//! Only consulted when the annotation names a generator. Entity-level
//! entries are read first and property-level entries override them; entries
//! with an empty sequence name are ignored. Without a match the configured
//! default sequence is used.

use std::collections::HashMap;

use crate::{
    dialect::Dialect,
    error::{Error, Result},
    metadata::{GeneratedValue, GenerationType, PersistentEntity, PersistentProperty},
    statement::{KeyOrder, escape_attr}
};

/// Sequence backing a sequence-generated id.
#[must_use]
pub fn sequence_name<'a>(
    entity: &'a PersistentEntity,
    property: &'a PersistentProperty,
    generated: &'a GeneratedValue,
    default_sequence: &'a str
) -> &'a str {
    let Some(generator) = generated.generator_name() else {
        return default_sequence;
    };
    let generators: HashMap<&str, &str> = entity
        .sequence_generators()
        .iter()
        .chain(property.sequence_generators())
        .filter(|g| !g.sequence_name().is_empty())
        .map(|g| (g.name(), g.sequence_name()))
        .collect();
    generators
        .get(generator)
        .copied()
        .unwrap_or(default_sequence)
}

/// `<selectKey>` fragment and its execution order.
///
/// # Errors
///
/// - [`Error::UnsupportedGenerationStrategy`] for strategies other than
///   identity and sequence
/// - [`Error::DialectUnsupported`] when the dialect lacks the resolved
///   feature
pub fn key_generator(
    entity: &PersistentEntity,
    property: &PersistentProperty,
    generated: &GeneratedValue,
    dialect: &dyn Dialect,
    default_sequence: &str
) -> Result<(String, KeyOrder)> {
    let strategy = match generated.strategy() {
        GenerationType::Auto => dialect.native_identifier_generator_strategy(),
        declared => declared
    };
    let column = property.column().name();
    let (sql, order) = match strategy {
        GenerationType::Identity => (
            dialect.identity_select_string(
                &entity.table_name(dialect),
                &column.canonical_name(),
                property.column().jdbc_type().type_code()
            )?,
            KeyOrder::After
        ),
        GenerationType::Sequence => (
            dialect.sequence_next_val_string(sequence_name(
                entity,
                property,
                generated,
                default_sequence
            ))?,
            KeyOrder::Before
        ),
        GenerationType::Auto | GenerationType::Table => {
            return Err(Error::UnsupportedGenerationStrategy {
                entity:   entity.type_name().to_string(),
                property: property.name().to_string(),
                strategy: generated.strategy().to_string()
            });
        }
    };
    let fragment = format!(
        "<selectKey keyProperty=\"{}\" keyColumn=\"{}\" order=\"{}\" resultType=\"{}\">{sql}</selectKey>",
        property.name(),
        column.text(),
        order.as_str(),
        escape_attr(property.type_name())
    );
    Ok((fragment, order))
}
