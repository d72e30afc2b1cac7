// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent property metadata.

use std::{fmt, str::FromStr};

use super::{column::Column, condition::ConditionSpec};
use crate::error::{Error, Result};

/// Role a property plays in its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyKind {
    /// Plain column.
    #[default]
    Basic,
    /// Scalar primary key column (`#[id]`).
    Id,
    /// Primary key held in an embeddable value (`#[embedded_id]`).
    EmbeddedId,
    /// Embeddable value whose columns live in the owner's table.
    Embedded
}

/// Id generation strategy from `#[generated(strategy = ...)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationType {
    /// Use the dialect's native strategy.
    #[default]
    Auto,
    /// Database identity column, read back after insert.
    Identity,
    /// Database sequence, selected before insert.
    Sequence,
    /// Table-backed generator.
    Table
}

impl GenerationType {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Identity => "identity",
            Self::Sequence => "sequence",
            Self::Table => "table"
        }
    }
}

impl FromStr for GenerationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "identity" => Ok(Self::Identity),
            "sequence" => Ok(Self::Sequence),
            "table" => Ok(Self::Table),
            _ => Err(Error::InvalidConfig {
                message: format!("unknown generation strategy: {s}")
            })
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `#[generated(...)]` annotation on an id property.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedValue {
    strategy:  GenerationType,
    generator: Option<String>
}

impl GeneratedValue {
    /// Generated value with the given strategy.
    #[must_use]
    pub fn new(strategy: GenerationType) -> Self {
        Self {
            strategy,
            generator: None
        }
    }

    /// Identity strategy.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(GenerationType::Identity)
    }

    /// Sequence strategy.
    #[must_use]
    pub fn sequence() -> Self {
        Self::new(GenerationType::Sequence)
    }

    /// Name a generator to resolve through sequence generator tables.
    #[must_use]
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Strategy.
    #[must_use]
    pub fn strategy(&self) -> GenerationType {
        self.strategy
    }

    /// Generator name, if any non-empty name was given.
    #[must_use]
    pub fn generator_name(&self) -> Option<&str> {
        self.generator.as_deref().filter(|g| !g.is_empty())
    }
}

/// `#[sequence_generator(name = ..., sequence = ...)]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    name:          String,
    sequence_name: String
}

impl SequenceGenerator {
    /// Map generator `name` to database sequence `sequence_name`.
    pub fn new(name: impl Into<String>, sequence_name: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            sequence_name: sequence_name.into()
        }
    }

    /// Generator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database sequence name.
    #[must_use]
    pub fn sequence_name(&self) -> &str {
        &self.sequence_name
    }
}

/// One persistent property of an entity.
///
/// Built with the chained constructors:
///
/// ```rust
/// use mapper_core::{Column, ConditionSpec, GeneratedValue, JdbcType, PartType, PersistentProperty};
///
/// let id = PersistentProperty::id("id", "i64", Column::new("id", JdbcType::Bigint))
///     .generated(GeneratedValue::identity());
/// let name = PersistentProperty::basic("name", "String", Column::new("name", JdbcType::Varchar))
///     .condition(ConditionSpec::new(PartType::Containing));
/// assert!(id.is_id_property());
/// assert_eq!(name.conditions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentProperty {
    name:                String,
    type_name:           String,
    column:              Column,
    kind:                PropertyKind,
    generated:           Option<GeneratedValue>,
    sequence_generators: Vec<SequenceGenerator>,
    conditions:          Vec<ConditionSpec>
}

impl PersistentProperty {
    fn with_kind(
        kind: PropertyKind,
        name: impl Into<String>,
        type_name: impl Into<String>,
        column: Column
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            column,
            kind,
            generated: None,
            sequence_generators: Vec::new(),
            conditions: Vec::new()
        }
    }

    /// Plain column property.
    pub fn basic(name: impl Into<String>, type_name: impl Into<String>, column: Column) -> Self {
        Self::with_kind(PropertyKind::Basic, name, type_name, column)
    }

    /// Scalar id property.
    pub fn id(name: impl Into<String>, type_name: impl Into<String>, column: Column) -> Self {
        Self::with_kind(PropertyKind::Id, name, type_name, column)
    }

    /// Embedded id; `type_name` must name a registered embeddable entity.
    pub fn embedded_id(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        let column = Column::new(name.clone(), Default::default());
        Self::with_kind(PropertyKind::EmbeddedId, name, type_name, column)
    }

    /// Embedded value; `type_name` must name a registered embeddable entity.
    pub fn embedded(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        let column = Column::new(name.clone(), Default::default());
        Self::with_kind(PropertyKind::Embedded, name, type_name, column)
    }

    /// Attach a `#[generated]` annotation.
    #[must_use]
    pub fn generated(mut self, generated: GeneratedValue) -> Self {
        self.generated = Some(generated);
        self
    }

    /// Attach a property-level sequence generator.
    #[must_use]
    pub fn sequence_generator(mut self, generator: SequenceGenerator) -> Self {
        self.sequence_generators.push(generator);
        self
    }

    /// Attach a condition; order of calls is preserved.
    #[must_use]
    pub fn condition(mut self, condition: ConditionSpec) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Mapped column.
    #[must_use]
    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Property kind.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// `#[id]` or `#[embedded_id]`.
    #[must_use]
    pub fn is_id_property(&self) -> bool {
        matches!(self.kind, PropertyKind::Id | PropertyKind::EmbeddedId)
    }

    /// `#[embedded_id]` or `#[embedded]`.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, PropertyKind::EmbeddedId | PropertyKind::Embedded)
    }

    /// Generation annotation.
    #[must_use]
    pub fn generated_value(&self) -> Option<&GeneratedValue> {
        self.generated.as_ref()
    }

    /// Property-level sequence generators.
    #[must_use]
    pub fn sequence_generators(&self) -> &[SequenceGenerator] {
        &self.sequence_generators
    }

    /// Conditions in declaration order.
    #[must_use]
    pub fn conditions(&self) -> &[ConditionSpec] {
        &self.conditions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::JdbcType;

    #[test]
    fn kinds() {
        let id = PersistentProperty::id("id", "i64", Column::new("id", JdbcType::Bigint));
        let key = PersistentProperty::embedded_id("key", "app::Key");
        let address = PersistentProperty::embedded("address", "app::Address");
        assert!(id.is_id_property() && !id.is_embedded());
        assert!(key.is_id_property() && key.is_embedded());
        assert!(!address.is_id_property() && address.is_embedded());
    }

    #[test]
    fn generator_name_ignores_empty() {
        assert_eq!(GeneratedValue::sequence().generator("").generator_name(), None);
        assert_eq!(
            GeneratedValue::sequence()
                .generator("user_gen")
                .generator_name(),
            Some("user_gen")
        );
    }

    #[test]
    fn generation_type_parsing() {
        assert_eq!(
            "IDENTITY".parse::<GenerationType>().unwrap(),
            GenerationType::Identity
        );
        assert!("uuid".parse::<GenerationType>().is_err());
    }
}
