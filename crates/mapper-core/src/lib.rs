// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for mapper-derive.
//!
//! This crate holds everything behind `#[derive(Persistent)]`: entity
//! metadata, database dialects, the statement precompiler that turns
//! metadata into dynamic mapper statements, and the bridge that executes
//! those statements through a SQL session.
//!
//! # Overview
//!
//! - [`MappingContext`] — registry of [`PersistentEntity`] metadata
//! - [`Precompiler`] — renders and registers a repository's statements
//! - [`StatementRegistry`] — thread-safe store of [`MappedStatement`]s
//! - [`Dialect`] — database-specific quoting, key SQL and paging
//! - [`StatementParams`] / [`Example`] — runtime parameter objects
//! - [`MapperQuery`] — runs a statement through a [`SqlSession`]
//! - [`prelude`] — convenient re-exports
//!
//! # Generated Statements
//!
//! | Id | Kind | Requires id |
//! |----|------|-------------|
//! | `__result_map` | resultMap | no |
//! | `__base_column_list` | sql | no |
//! | `__insert`, `__insert_selective` | insert | no |
//! | `__update`, `__update_selective`, `__update_by_id`, `__update_selective_by_id` | update | yes |
//! | `__delete_by_id`, `__delete_by_ids` | delete | yes |
//! | `__delete_all` | delete | no |
//! | `__get_by_id` | select | yes |
//! | `__find`, `__find_by_pager`, `__count`, `__count_all` | select | no |
//! | `__example_where_clause`, `__find_by_example` | sql, select | no, example repositories only |
//!
//! # Usage
//!
//! Most users should use `mapper-derive` directly, which re-exports this
//! crate. Without the derive:
//!
//! ```rust
//! use mapper_core::{
//!     Column, ConditionSpec, JdbcType, MappingContext, PartType, PersistentEntity,
//!     PersistentProperty, PrecompilerConfig, Precompiler, RepositoryInformation,
//!     StatementRegistry
//! };
//!
//! let mut context = MappingContext::new();
//! context.add_entity(
//!     PersistentEntity::builder("app::User", "users")
//!         .property(PersistentProperty::id("id", "i64", Column::new("id", JdbcType::Bigint)))
//!         .property(
//!             PersistentProperty::basic("name", "String", Column::new("name", JdbcType::Varchar))
//!                 .condition(ConditionSpec::new(PartType::Containing))
//!         )
//!         .build()
//! );
//!
//! let registry = StatementRegistry::new();
//! let repository = RepositoryInformation::new("app::UserRepository", "app::User");
//! let config = PrecompilerConfig::default();
//! Precompiler::with_config(&context, &config, &registry, &repository)
//!     .unwrap()
//!     .precompile()
//!     .unwrap();
//!
//! let find = registry.get("app::UserRepository", "__find").unwrap();
//! assert!(find.body().contains("<if test=\"__condition.name != null\">"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dialect;
pub mod error;
pub mod metadata;
pub mod params;
pub mod precompiler;
pub mod prelude;
pub mod query;
pub mod registry;
pub mod repository;
pub mod statement;

/// Re-export async_trait for session implementations.
pub use async_trait::async_trait;
pub use config::{DEFAULT_SEQUENCE_NAME, PrecompilerConfig};
pub use dialect::{
    Dialect, DialectKind, H2Dialect, LimitHandler, MySqlDialect, OracleDialect, PostgresDialect
};
pub use error::{Error, Result};
pub use metadata::{
    Column, ColumnMapping, ConditionSpec, EntityBuilder, GeneratedValue, GenerationType, IdShape,
    Identifier, IgnoreCaseType, JdbcType, MappingContext, PartType, Persistent, PersistentEntity,
    PersistentProperty, PropertyKind, SequenceGenerator
};
pub use params::{
    Criteria, Criterion, CriterionValue, Direction, Example, Order, Pageable, Sort,
    StatementParams
};
pub use precompiler::{PrecompileOutcome, Precompiler};
pub use query::{
    MapperQuery, QueryExecution, QueryMethod, ResultValue, ReturnedType, SqlSession, Tuple,
    TupleBackedMap, TupleConverter
};
pub use registry::StatementRegistry;
pub use repository::{Repository, RepositoryInformation};
pub use statement::{GeneratedKey, KeyOrder, MappedStatement, StatementKind};
