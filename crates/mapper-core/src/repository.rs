// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository descriptors.
//!
//! The precompiler never sees repository types, only a
//! [`RepositoryInformation`]: the statement namespace, the domain type name
//! and whether example queries are offered.
//!
//! ```rust
//! use mapper_core::{
//!     Column, JdbcType, Persistent, PersistentEntity, PersistentProperty, Repository,
//!     RepositoryInformation
//! };
//!
//! struct User;
//!
//! impl Persistent for User {
//!     fn persistent_entity() -> PersistentEntity {
//!         PersistentEntity::builder(std::any::type_name::<Self>(), "users")
//!             .property(PersistentProperty::id("id", "i64", Column::new("id", JdbcType::Bigint)))
//!             .build()
//!     }
//! }
//!
//! struct UserRepository;
//!
//! impl Repository for UserRepository {
//!     type Entity = User;
//!     const EXAMPLE_QUERY: bool = true;
//! }
//!
//! let info = RepositoryInformation::of::<UserRepository>();
//! assert!(info.namespace().ends_with("UserRepository"));
//! assert!(info.domain_type().ends_with("User"));
//! assert!(info.example_query());
//! ```

use std::any::type_name;

use crate::metadata::Persistent;

/// Repository whose statements are generated from its entity.
pub trait Repository {
    /// Domain type.
    type Entity: Persistent;

    /// Whether the repository offers example queries.
    const EXAMPLE_QUERY: bool = false;
}

/// What the precompiler needs to know about a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInformation {
    namespace:     String,
    domain_type:   String,
    example_query: bool
}

impl RepositoryInformation {
    /// Repository with statements in `namespace` for `domain_type`.
    pub fn new(namespace: impl Into<String>, domain_type: impl Into<String>) -> Self {
        Self {
            namespace:     namespace.into(),
            domain_type:   domain_type.into(),
            example_query: false
        }
    }

    /// Descriptor of `R`, namespaced by its type name.
    #[must_use]
    pub fn of<R: Repository>() -> Self {
        Self::new(type_name::<R>(), type_name::<R::Entity>())
            .with_example_query(R::EXAMPLE_QUERY)
    }

    /// Set example-query support.
    #[must_use]
    pub fn with_example_query(mut self, example_query: bool) -> Self {
        self.example_query = example_query;
        self
    }

    /// Statement namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Domain type name.
    #[must_use]
    pub fn domain_type(&self) -> &str {
        &self.domain_type
    }

    /// Whether example statements are generated.
    #[must_use]
    pub fn example_query(&self) -> bool {
        self.example_query
    }
}
