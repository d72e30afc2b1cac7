// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity metadata model.
//!
//! # Module Structure
//!
//! ```text
//! metadata/
//! ├── mod.rs       — MappingContext, Persistent trait, column flattening
//! ├── entity.rs    — PersistentEntity, IdShape, EntityBuilder
//! ├── property.rs  — PersistentProperty, GeneratedValue, SequenceGenerator
//! ├── column.rs    — Column, Identifier, JdbcType
//! └── condition.rs — ConditionSpec, PartType, IgnoreCaseType
//! ```
//!
//! # Data Structures
//!
//! ```text
//! MappingContext
//! └── PersistentEntity (by type name)
//!     ├── table / schema: Identifier
//!     ├── example marker + companion
//!     ├── sequence_generators
//!     └── properties: Vec<PersistentProperty>   (declaration order)
//!         ├── column: Column (Identifier + JdbcType)
//!         ├── kind: Basic | Id | EmbeddedId | Embedded
//!         ├── generated: Option<GeneratedValue>
//!         └── conditions: Vec<ConditionSpec>
//! ```

mod column;
mod condition;
mod entity;
mod property;

use std::{collections::BTreeMap, sync::Arc};

pub use column::{Column, Identifier, JdbcType};
pub use condition::{ConditionSpec, IgnoreCaseType, PartType};
pub use entity::{EntityBuilder, IdShape, PersistentEntity};
pub use property::{
    GeneratedValue, GenerationType, PersistentProperty, PropertyKind, SequenceGenerator
};

use crate::error::{Error, Result};

/// Type with persistent metadata.
///
/// Implemented by `#[derive(Persistent)]`; can be implemented by hand with
/// [`PersistentEntity::builder`].
pub trait Persistent {
    /// Build the entity metadata.
    fn persistent_entity() -> PersistentEntity;

    /// Register embeddable types this entity refers to.
    fn register_embedded(_context: &mut MappingContext) {}
}

/// One flattened property path and its column.
///
/// Embedded values contribute one mapping per member, with the path
/// `owner.member`.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMapping<'a> {
    path:        &'a str,
    owner:       Option<&'a str>,
    column:      &'a Column,
    primary_key: bool
}

impl ColumnMapping<'_> {
    /// Property path relative to the entity (`name` or `key.code`).
    #[must_use]
    pub fn path(&self) -> String {
        match self.owner {
            Some(owner) => format!("{owner}.{}", self.path),
            None => self.path.to_string()
        }
    }

    /// Property name inside its owner (`code` for `key.code`).
    #[must_use]
    pub fn member(&self) -> &str {
        self.path
    }

    /// Embedded property owning this column.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner
    }

    /// Mapped column.
    #[must_use]
    pub fn column(&self) -> &Column {
        self.column
    }

    /// Whether the column belongs to the primary key.
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }
}

/// Registry of entity metadata keyed by type name.
///
/// Populated once at startup and read concurrently afterwards.
#[derive(Debug, Default, Clone)]
pub struct MappingContext {
    entities: BTreeMap<String, Arc<PersistentEntity>>
}

impl MappingContext {
    /// Empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the metadata of `T` and everything it embeds.
    pub fn register<T: Persistent>(&mut self) -> Arc<PersistentEntity> {
        T::register_embedded(self);
        self.add_entity(T::persistent_entity())
    }

    /// Register prebuilt metadata, replacing an earlier registration of the
    /// same type.
    pub fn add_entity(&mut self, entity: PersistentEntity) -> Arc<PersistentEntity> {
        let entity = Arc::new(entity);
        self.entities
            .insert(entity.type_name().to_string(), Arc::clone(&entity));
        entity
    }

    /// Look up metadata by type name.
    #[must_use]
    pub fn entity(&self, type_name: &str) -> Option<&Arc<PersistentEntity>> {
        self.entities.get(type_name)
    }

    /// Look up metadata, failing for unknown types.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] when nothing is registered.
    pub fn required_entity(&self, type_name: &str) -> Result<&Arc<PersistentEntity>> {
        self.entity(type_name).ok_or_else(|| Error::UnknownEntity {
            type_name: type_name.to_string()
        })
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    /// Flatten the entity's properties into column mappings.
    ///
    /// Order follows property declaration order; embedded values expand in
    /// place in the embedded type's declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] when an embedded type is missing.
    pub fn column_mappings<'a>(
        &'a self,
        entity: &'a PersistentEntity
    ) -> Result<Vec<ColumnMapping<'a>>> {
        let mut mappings = Vec::with_capacity(entity.properties().len());
        for property in entity.properties() {
            if property.is_embedded() {
                let embedded = self.required_entity(property.type_name())?;
                let primary_key = property.kind() == PropertyKind::EmbeddedId;
                mappings.extend(embedded.properties().iter().map(|member| ColumnMapping {
                    path: member.name(),
                    owner: Some(property.name()),
                    column: member.column(),
                    primary_key
                }));
            } else {
                mappings.push(ColumnMapping {
                    path:        property.name(),
                    owner:       None,
                    column:      property.column(),
                    primary_key: property.is_id_property()
                });
            }
        }
        Ok(mappings)
    }
}
