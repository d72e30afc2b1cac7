// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query execution against a SQL session.
//!
//! A [`MapperQuery`] binds a [`QueryMethod`] to its namespace. The first
//! execution fixes the [`QueryExecution`] strategy from the method's
//! modifying flag; later executions reuse it.
//!
//! ```text
//! MapperQuery::execute(session, params)
//!     │
//!     ├── execution()        SingleEntity | Modifying   (cached)
//!     ├── session call       select_one | update        ("namespace.id")
//!     └── TupleConverter     unwrap single values, map other tuples
//! ```

use std::sync::OnceLock;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::tuple::{ResultValue, ReturnedType, TupleConverter};
use crate::error::Result;

/// Statement executor supplied by the SQL-mapping engine.
#[async_trait]
pub trait SqlSession: Send + Sync {
    /// Run a select expected to produce at most one result.
    async fn select_one(&self, statement: &str, parameter: &Value) -> Result<Option<ResultValue>>;

    /// Run an insert, update or delete and return the affected row count.
    async fn update(&self, statement: &str, parameter: &Value) -> Result<u64>;
}

/// Repository method backed by a mapped statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMethod {
    statement_id:  String,
    modifying:     bool,
    returned_type: ReturnedType
}

impl QueryMethod {
    /// Method running `statement_id` and returning any value.
    pub fn new(statement_id: impl Into<String>) -> Self {
        Self {
            statement_id:  statement_id.into(),
            modifying:     false,
            returned_type: ReturnedType::Any
        }
    }

    /// Mark the method as modifying rows.
    #[must_use]
    pub fn modifying(mut self) -> Self {
        self.modifying = true;
        self
    }

    /// Declared return type.
    #[must_use]
    pub fn returning(mut self, returned_type: ReturnedType) -> Self {
        self.returned_type = returned_type;
        self
    }

    /// Statement id within the namespace.
    #[must_use]
    pub fn statement_id(&self) -> &str {
        &self.statement_id
    }

    /// Whether the method modifies rows.
    #[must_use]
    pub fn is_modifying(&self) -> bool {
        self.modifying
    }

    /// Declared return type.
    #[must_use]
    pub fn returned_type(&self) -> ReturnedType {
        self.returned_type
    }
}

/// How a query runs against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryExecution {
    /// `select_one`; no row yields `Null`.
    SingleEntity,
    /// `update`; yields the affected row count.
    Modifying
}

impl QueryExecution {
    /// Strategy for `method`.
    #[must_use]
    pub fn for_method(method: &QueryMethod) -> Self {
        if method.is_modifying() {
            Self::Modifying
        } else {
            Self::SingleEntity
        }
    }

    /// Run `statement` with `parameter`.
    ///
    /// # Errors
    ///
    /// Propagates session failures.
    pub async fn execute(
        self,
        session: &dyn SqlSession,
        statement: &str,
        parameter: &Value
    ) -> Result<ResultValue> {
        match self {
            Self::SingleEntity => Ok(session
                .select_one(statement, parameter)
                .await?
                .unwrap_or(ResultValue::Value(Value::Null))),
            Self::Modifying => {
                let rows = session.update(statement, parameter).await?;
                Ok(ResultValue::Value(Value::from(rows)))
            }
        }
    }
}

/// Executable query for one repository method.
#[derive(Debug)]
pub struct MapperQuery {
    namespace: String,
    method:    QueryMethod,
    execution: OnceLock<QueryExecution>
}

impl MapperQuery {
    /// Query for `method` in `namespace`.
    pub fn new(namespace: impl Into<String>, method: QueryMethod) -> Self {
        Self {
            namespace: namespace.into(),
            method,
            execution: OnceLock::new()
        }
    }

    /// Underlying method.
    #[must_use]
    pub fn query_method(&self) -> &QueryMethod {
        &self.method
    }

    /// `namespace.statement_id`.
    #[must_use]
    pub fn statement(&self) -> String {
        format!("{}.{}", self.namespace, self.method.statement_id())
    }

    /// Execution strategy, computed on first access.
    #[must_use]
    pub fn execution(&self) -> QueryExecution {
        *self
            .execution
            .get_or_init(|| QueryExecution::for_method(&self.method))
    }

    /// Run the query and adapt the result to the declared return type.
    ///
    /// # Errors
    ///
    /// Propagates session failures.
    pub async fn execute(&self, session: &dyn SqlSession, parameter: &Value) -> Result<ResultValue> {
        let execution = self.execution();
        let statement = self.statement();
        debug!(statement = %statement, ?execution, "executing query");
        let result = execution.execute(session, &statement, parameter).await?;
        Ok(TupleConverter::new(self.method.returned_type()).convert(result))
    }
}
