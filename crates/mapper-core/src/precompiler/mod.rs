// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement precompiler.
//!
//! Given an entity's metadata and a repository descriptor, the precompiler
//! renders every generated statement of the repository's namespace and
//! registers the ones the namespace does not define yet.
//!
//! # Module Structure
//!
//! ```text
//! precompiler/
//! ├── mod.rs        — Precompiler, PrecompileOutcome, precompile driver
//! ├── helpers.rs    — shared mapper text fragments
//! ├── condition.rs  — operator mapping and the dynamic condition block
//! ├── keygen.rs     — generated-key strategy and sequence resolution
//! ├── ids.rs        — id equality and id-set conditions
//! ├── result_map.rs — result map and base column list
//! ├── insert.rs     — insert / insert selective
//! ├── update.rs     — update variants
//! ├── delete.rs     — delete by id / by ids / all
//! ├── select.rs     — get by id, find, count, order by
//! └── example.rs    — example where clause and find by example
//! ```
//!
//! # Usage
//!
//! ```rust
//! use mapper_core::{
//!     Column, JdbcType, MappingContext, PersistentEntity, PersistentProperty, PostgresDialect,
//!     Precompiler, RepositoryInformation, StatementRegistry
//! };
//!
//! let mut context = MappingContext::new();
//! context.add_entity(
//!     PersistentEntity::builder("app::User", "users")
//!         .property(PersistentProperty::id("id", "i64", Column::new("id", JdbcType::Bigint)))
//!         .property(PersistentProperty::basic("name", "String", Column::new("name", JdbcType::Varchar)))
//!         .build()
//! );
//! let registry = StatementRegistry::new();
//! let repository = RepositoryInformation::new("app::UserRepository", "app::User");
//!
//! let precompiler = Precompiler::new(&context, &PostgresDialect, &registry, &repository).unwrap();
//! let outcome = precompiler.precompile().unwrap();
//! assert_eq!(outcome.statements().len(), 16);
//! assert!(registry.contains("app::UserRepository", "__get_by_id"));
//!
//! // Running again generates nothing.
//! assert!(precompiler.precompile().unwrap().statements().is_empty());
//! ```
//!
//! # Skip Policy
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Statement id already registered | operation returns `None` |
//! | Entity without id | update, delete by id(s) and get by id return `None` |
//! | Repository without example queries | example statements return `None` |

pub mod condition;
mod delete;
mod example;
mod helpers;
mod ids;
mod insert;
pub mod keygen;
mod result_map;
mod select;
mod update;

#[cfg(test)]
mod tests;

use tracing::{debug, info, info_span, trace};

use crate::{
    config::{DEFAULT_SEQUENCE_NAME, PrecompilerConfig},
    dialect::Dialect,
    error::Result,
    metadata::{ColumnMapping, MappingContext, PersistentEntity},
    registry::StatementRegistry,
    repository::RepositoryInformation,
    statement::{
        BASE_COLUMN_LIST, COUNT, COUNT_ALL, DELETE_ALL, DELETE_BY_ID, DELETE_BY_IDS,
        EXAMPLE_WHERE_CLAUSE, FIND, FIND_BY_EXAMPLE, FIND_BY_PAGER, GET_BY_ID, INSERT,
        INSERT_SELECTIVE, MappedStatement, RESULT_MAP, StatementKind, UPDATE, UPDATE_BY_ID,
        UPDATE_SELECTIVE, UPDATE_SELECTIVE_BY_ID, escape_attr
    }
};

type Step<'a> = (&'static str, fn(&Precompiler<'a>) -> Result<Option<MappedStatement>>);

/// Statements registered by one [`Precompiler::precompile`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecompileOutcome {
    namespace:  String,
    statements: Vec<MappedStatement>
}

impl PrecompileOutcome {
    /// Namespace the statements belong to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Newly registered statements in generation order.
    #[must_use]
    pub fn statements(&self) -> &[MappedStatement] {
        &self.statements
    }

    /// Render the statements as one `<mapper>` document.
    #[must_use]
    pub fn document(&self) -> String {
        let body: String = self.statements.iter().map(MappedStatement::render).collect();
        format!(
            "<mapper namespace=\"{}\">{body}</mapper>",
            escape_attr(&self.namespace)
        )
    }
}

/// Statement generator for one repository.
///
/// Every `add_*` operation can be called on its own: it returns the rendered
/// statement, or `None` when the id is already registered or the entity
/// cannot support it. Operations never register; [`Self::precompile`] does.
#[derive(Debug)]
pub struct Precompiler<'a> {
    context:          &'a MappingContext,
    dialect:          &'a dyn Dialect,
    registry:         &'a StatementRegistry,
    repository:       &'a RepositoryInformation,
    entity:           &'a PersistentEntity,
    table:            String,
    default_sequence: String
}

impl<'a> Precompiler<'a> {
    /// Precompiler for `repository` with the default sequence name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] when the repository's domain
    /// type is not registered in `context`.
    pub fn new(
        context: &'a MappingContext,
        dialect: &'a dyn Dialect,
        registry: &'a StatementRegistry,
        repository: &'a RepositoryInformation
    ) -> Result<Self> {
        let entity: &PersistentEntity = context.required_entity(repository.domain_type())?;
        Ok(Self {
            context,
            dialect,
            registry,
            repository,
            entity,
            table: entity.table_name(dialect),
            default_sequence: DEFAULT_SEQUENCE_NAME.to_string()
        })
    }

    /// Precompiler using the dialect and sequence name from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_config(
        context: &'a MappingContext,
        config: &PrecompilerConfig,
        registry: &'a StatementRegistry,
        repository: &'a RepositoryInformation
    ) -> Result<Self> {
        let mut precompiler = Self::new(context, config.dialect(), registry, repository)?;
        precompiler.default_sequence = config.default_sequence_name.clone();
        Ok(precompiler)
    }

    /// Entity the statements are generated for.
    #[must_use]
    pub fn entity(&self) -> &PersistentEntity {
        self.entity
    }

    /// Namespace of the generated statements.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.repository.namespace()
    }

    /// Generate and register every missing statement.
    ///
    /// Statements are generated in a fixed order and registered only after
    /// all of them rendered, so an error leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Any error of the individual operations.
    pub fn precompile(&self) -> Result<PrecompileOutcome> {
        let span = info_span!(
            "precompile",
            namespace = self.namespace(),
            entity = self.entity.type_name()
        );
        let _guard = span.enter();

        let steps: [Step<'a>; 18] = [
            (RESULT_MAP, |p| p.add_result_map()),
            (BASE_COLUMN_LIST, |p| p.add_base_column_list()),
            (INSERT_SELECTIVE, |p| p.add_insert_statement(true)),
            (INSERT, |p| p.add_insert_statement(false)),
            (UPDATE_SELECTIVE_BY_ID, |p| p.add_update_statement(true, true)),
            (UPDATE_SELECTIVE, |p| p.add_update_statement(true, false)),
            (UPDATE_BY_ID, |p| p.add_update_statement(false, true)),
            (UPDATE, |p| p.add_update_statement(false, false)),
            (DELETE_BY_ID, |p| p.add_delete_by_id_statement()),
            (DELETE_BY_IDS, |p| p.add_delete_by_ids_statement()),
            (DELETE_ALL, |p| p.add_delete_all_statement()),
            (GET_BY_ID, |p| p.add_get_by_id_statement()),
            (FIND_BY_PAGER, |p| p.add_find_statement(true)),
            (FIND, |p| p.add_find_statement(false)),
            (COUNT_ALL, |p| p.add_count_all_statement()),
            (COUNT, |p| p.add_count_statement()),
            (EXAMPLE_WHERE_CLAUSE, |p| p.add_example_where_clause()),
            (FIND_BY_EXAMPLE, |p| p.add_find_by_example_statement())
        ];

        let mut generated = Vec::with_capacity(steps.len());
        for (id, step) in steps {
            match step(self)? {
                Some(statement) => generated.push(statement),
                None => trace!(statement = id, "skipped")
            }
        }

        let mut statements = Vec::with_capacity(generated.len());
        for statement in generated {
            if self.registry.register(statement.clone()) {
                debug!(statement = statement.id(), kind = statement.kind().element(), "registered");
                statements.push(statement);
            } else {
                trace!(statement = statement.id(), "registered concurrently, skipped");
            }
        }

        info!(registered = statements.len(), "precompiled");
        Ok(PrecompileOutcome {
            namespace: self.namespace().to_string(),
            statements
        })
    }

    fn exists(&self, id: &str) -> bool {
        self.registry.contains(self.namespace(), id)
    }

    fn statement(&self, kind: StatementKind, id: &str, body: String) -> MappedStatement {
        MappedStatement::new(kind, self.namespace(), id, body)
    }

    fn mappings(&self) -> Result<Vec<ColumnMapping<'a>>> {
        self.context.column_mappings(self.entity)
    }
}
