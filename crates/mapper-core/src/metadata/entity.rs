// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent entity metadata.
//!
//! A [`PersistentEntity`] is constructed once (by `#[derive(Persistent)]` or
//! by [`EntityBuilder`]) and shared read-only by every statement build.
//!
//! # Id Shapes
//!
//! | Shape | Declared as | Id class |
//! |-------|-------------|----------|
//! | [`IdShape::Simple`] | one `#[id]` field | field type |
//! | [`IdShape::Embedded`] | one `#[embedded_id]` field | embeddable type |
//! | [`IdShape::Composite`] | several `#[id]` fields + `id_class` | `id_class` |
//! | [`IdShape::None`] | no id field | none |

use super::{
    column::Identifier,
    property::{PersistentProperty, PropertyKind, SequenceGenerator}
};
use crate::dialect::Dialect;

/// How an entity identifies its rows.
#[derive(Debug, Clone, Copy)]
pub enum IdShape<'a> {
    /// No usable key.
    None,
    /// Single scalar key column.
    Simple(&'a PersistentProperty),
    /// Key held in an embeddable value.
    Embedded(&'a PersistentProperty),
    /// Several scalar key columns backed by an id class.
    Composite(&'a [PersistentProperty], &'a str)
}

/// Immutable metadata of one mapped type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentEntity {
    type_name:           String,
    table:               Identifier,
    schema:              Option<Identifier>,
    properties:          Vec<PersistentProperty>,
    id_class:            Option<String>,
    example:             bool,
    example_companion:   Option<String>,
    sequence_generators: Vec<SequenceGenerator>,
    embeddable:          bool
}

impl PersistentEntity {
    /// Start building metadata for `type_name` stored in `table`.
    pub fn builder(type_name: impl Into<String>, table: impl Into<String>) -> EntityBuilder {
        EntityBuilder {
            entity: Self {
                type_name:           type_name.into(),
                table:               Identifier::new(table),
                schema:              None,
                properties:          Vec::new(),
                id_class:            None,
                example:             false,
                example_companion:   None,
                sequence_generators: Vec::new(),
                embeddable:          false
            }
        }
    }

    /// Fully qualified type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Table identifier without schema.
    #[must_use]
    pub fn table(&self) -> &Identifier {
        &self.table
    }

    /// Render `schema.table` for the given dialect.
    #[must_use]
    pub fn table_name(&self, dialect: &dyn Dialect) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema.render(dialect), self.table.render(dialect)),
            None => self.table.render(dialect)
        }
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PersistentProperty] {
        &self.properties
    }

    /// Find a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PersistentProperty> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Resolve the id shape from the declared properties.
    #[must_use]
    pub fn id_shape(&self) -> IdShape<'_> {
        if let Some(embedded) = self
            .properties
            .iter()
            .find(|p| p.kind() == PropertyKind::EmbeddedId)
        {
            return IdShape::Embedded(embedded);
        }

        let ids = self.properties.iter().filter(|p| p.kind() == PropertyKind::Id);
        match ids.count() {
            0 => IdShape::None,
            1 => self
                .properties
                .iter()
                .find(|p| p.kind() == PropertyKind::Id)
                .map_or(IdShape::None, IdShape::Simple),
            _ => match &self.id_class {
                Some(id_class) => IdShape::Composite(&self.properties, id_class),
                None => IdShape::None
            }
        }
    }

    /// First id property, scalar or embedded.
    #[must_use]
    pub fn id_property(&self) -> Option<&PersistentProperty> {
        match self.id_shape() {
            IdShape::Simple(p) | IdShape::Embedded(p) => Some(p),
            IdShape::Composite(properties, _) => properties.iter().find(|p| p.is_id_property()),
            IdShape::None => None
        }
    }

    /// Type name of the key, `None` when the entity has no usable key.
    #[must_use]
    pub fn id_class(&self) -> Option<&str> {
        match self.id_shape() {
            IdShape::Simple(p) | IdShape::Embedded(p) => Some(p.type_name()),
            IdShape::Composite(_, id_class) => Some(id_class),
            IdShape::None => None
        }
    }

    /// Whether the key spans several columns.
    #[must_use]
    pub fn has_composite_id(&self) -> bool {
        matches!(
            self.id_shape(),
            IdShape::Embedded(_) | IdShape::Composite(..)
        )
    }

    /// Whether the entity carries the example marker.
    #[must_use]
    pub fn supports_example(&self) -> bool {
        self.example
    }

    /// Name of the generated example companion type.
    #[must_use]
    pub fn example_companion(&self) -> Option<&str> {
        self.example_companion.as_deref()
    }

    /// Entity-level sequence generators.
    #[must_use]
    pub fn sequence_generators(&self) -> &[SequenceGenerator] {
        &self.sequence_generators
    }

    /// Whether this type is only used embedded in other entities.
    #[must_use]
    pub fn is_embeddable(&self) -> bool {
        self.embeddable
    }
}

/// Builder for [`PersistentEntity`].
///
/// ```rust
/// use mapper_core::{Column, JdbcType, PersistentEntity, PersistentProperty};
///
/// let user = PersistentEntity::builder("app::User", "users")
///     .schema("core")
///     .property(PersistentProperty::id("id", "i64", Column::new("id", JdbcType::Bigint)))
///     .property(PersistentProperty::basic("name", "String", Column::new("name", JdbcType::Varchar)))
///     .build();
/// assert_eq!(user.id_class(), Some("i64"));
/// ```
#[derive(Debug)]
#[must_use]
pub struct EntityBuilder {
    entity: PersistentEntity
}

impl EntityBuilder {
    /// Table schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.entity.schema = Some(Identifier::new(schema));
        self
    }

    /// Quote the table name on render.
    pub fn quoted_table(mut self) -> Self {
        self.entity.table = Identifier::quoted(self.entity.table.text());
        self
    }

    /// Append a property; declaration order is kept.
    pub fn property(mut self, property: PersistentProperty) -> Self {
        self.entity.properties.push(property);
        self
    }

    /// Id class for entities with several `#[id]` properties.
    pub fn id_class(mut self, id_class: impl Into<String>) -> Self {
        self.entity.id_class = Some(id_class.into());
        self
    }

    /// Mark the entity as supporting example queries.
    pub fn example(mut self) -> Self {
        self.entity.example = true;
        self
    }

    /// Name of the generated example companion type.
    pub fn example_companion(mut self, companion: impl Into<String>) -> Self {
        self.entity.example_companion = Some(companion.into());
        self
    }

    /// Entity-level sequence generator.
    pub fn sequence_generator(mut self, generator: SequenceGenerator) -> Self {
        self.entity.sequence_generators.push(generator);
        self
    }

    /// Mark the type as embeddable.
    pub fn embeddable(mut self) -> Self {
        self.entity.embeddable = true;
        self
    }

    /// Finish building.
    pub fn build(self) -> PersistentEntity {
        self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dialect::PostgresDialect,
        metadata::{Column, JdbcType}
    };

    fn basic(name: &str) -> PersistentProperty {
        PersistentProperty::basic(name, "String", Column::new(name, JdbcType::Varchar))
    }

    fn id(name: &str) -> PersistentProperty {
        PersistentProperty::id(name, "i64", Column::new(name, JdbcType::Bigint))
    }

    #[test]
    fn simple_id() {
        let entity = PersistentEntity::builder("app::User", "users")
            .property(id("id"))
            .property(basic("name"))
            .build();
        assert!(matches!(entity.id_shape(), IdShape::Simple(p) if p.name() == "id"));
        assert_eq!(entity.id_class(), Some("i64"));
        assert!(!entity.has_composite_id());
    }

    #[test]
    fn embedded_id() {
        let entity = PersistentEntity::builder("app::Line", "lines")
            .property(PersistentProperty::embedded_id("key", "app::LineKey"))
            .property(basic("sku"))
            .build();
        assert!(matches!(entity.id_shape(), IdShape::Embedded(_)));
        assert_eq!(entity.id_class(), Some("app::LineKey"));
        assert!(entity.has_composite_id());
    }

    #[test]
    fn composite_requires_id_class() {
        let without = PersistentEntity::builder("app::Pair", "pairs")
            .property(id("left"))
            .property(id("right"))
            .build();
        assert!(matches!(without.id_shape(), IdShape::None));
        assert_eq!(without.id_class(), None);

        let with = PersistentEntity::builder("app::Pair", "pairs")
            .property(id("left"))
            .property(id("right"))
            .id_class("app::PairKey")
            .build();
        assert_eq!(with.id_class(), Some("app::PairKey"));
        assert_eq!(with.id_property().map(|p| p.name()), Some("left"));
    }

    #[test]
    fn no_id() {
        let entity = PersistentEntity::builder("app::Log", "logs")
            .property(basic("line"))
            .build();
        assert!(matches!(entity.id_shape(), IdShape::None));
        assert!(entity.id_property().is_none());
    }

    #[test]
    fn table_name_with_schema() {
        let entity = PersistentEntity::builder("app::User", "user")
            .schema("core")
            .quoted_table()
            .build();
        assert_eq!(entity.table_name(&PostgresDialect), "core.\"user\"");
    }
}
