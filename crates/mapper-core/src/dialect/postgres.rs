// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL dialect.

use super::{Dialect, LimitHandler, LimitOffsetHandler};
use crate::{error::Result, metadata::GenerationType};

/// PostgreSQL.
///
/// Identity columns are `serial`/`bigserial` backed by an implicit
/// `{table}_{column}_seq` sequence, so the read-back uses `currval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn native_identifier_generator_strategy(&self) -> GenerationType {
        GenerationType::Sequence
    }

    fn identity_select_string(&self, table: &str, column: &str, _type_code: i32) -> Result<String> {
        let table = table.rsplit('.').next().unwrap_or(table).replace('"', "");
        Ok(format!("select currval('{table}_{column}_seq')"))
    }

    fn sequence_next_val_string(&self, sequence: &str) -> Result<String> {
        Ok(format!("select nextval ('{sequence}')"))
    }

    fn limit_handler(&self) -> &dyn LimitHandler {
        &LimitOffsetHandler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_uses_implicit_sequence() {
        assert_eq!(
            PostgresDialect.identity_select_string("users", "id", -5).unwrap(),
            "select currval('users_id_seq')"
        );
        assert_eq!(
            PostgresDialect
                .identity_select_string("core.\"users\"", "id", -5)
                .unwrap(),
            "select currval('users_id_seq')"
        );
    }

    #[test]
    fn next_sequence_value() {
        assert_eq!(
            PostgresDialect.sequence_next_val_string("user_seq").unwrap(),
            "select nextval ('user_seq')"
        );
    }

    #[test]
    fn quoting() {
        assert_eq!(PostgresDialect.quote("order"), "\"order\"");
        assert_eq!(PostgresDialect.lowercase_function(), "lower");
    }
}
