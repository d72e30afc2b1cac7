// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database dialects.
//!
//! A [`Dialect`] supplies everything the precompiler cannot decide on its
//! own: identifier quoting, identity and sequence SQL, the lowercase function
//! and the paging rewrite.
//!
//! # Supported Databases
//!
//! | Dialect | Quote | Native ids | Identity read-back | Next sequence value | Paging |
//! |---------|-------|------------|--------------------|---------------------|--------|
//! | PostgreSQL | `"` | sequence | `select currval('t_c_seq')` | `select nextval ('s')` | `limit/offset` |
//! | MySQL | `` ` `` | identity | `select last_insert_id()` | — | `limit o, n` |
//! | H2 | `"` | sequence | `call identity()` | `call next value for s` | `limit/offset` |
//! | Oracle | `"` | sequence | — | `select s.nextval from dual` | `rownum` |

mod h2;
mod limit;
mod mysql;
mod oracle;
mod postgres;

use std::{fmt, str::FromStr};

pub use h2::H2Dialect;
pub use limit::{LimitHandler, LimitOffsetHandler, MySqlLimitHandler, OFFSET, PAGE_SIZE, RowNumLimitHandler};
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    metadata::GenerationType
};

/// Database-specific rendering used by the precompiler.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Dialect name for diagnostics.
    fn name(&self) -> &'static str;

    /// Wrap an identifier in quote characters.
    fn quote(&self, identifier: &str) -> String {
        format!("\"{identifier}\"")
    }

    /// Strategy `GenerationType::Auto` resolves to.
    fn native_identifier_generator_strategy(&self) -> GenerationType;

    /// SQL reading back the identity value assigned by the last insert.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialectUnsupported`] when the database has no
    /// identity columns.
    fn identity_select_string(&self, _table: &str, _column: &str, _type_code: i32) -> Result<String> {
        Err(Error::DialectUnsupported {
            dialect: self.name(),
            feature: "identity columns"
        })
    }

    /// SQL selecting the next value of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialectUnsupported`] when the database has no
    /// sequences.
    fn sequence_next_val_string(&self, _sequence: &str) -> Result<String> {
        Err(Error::DialectUnsupported {
            dialect: self.name(),
            feature: "sequences"
        })
    }

    /// Function folding text to lower case.
    fn lowercase_function(&self) -> &'static str {
        "lower"
    }

    /// Paging rewrite for `find` statements.
    fn limit_handler(&self) -> &dyn LimitHandler;
}

/// Built-in dialect selector used in configuration.
///
/// Parsed case-insensitively with common aliases:
///
/// ```rust
/// use mapper_core::DialectKind;
///
/// assert_eq!("pg".parse::<DialectKind>().unwrap(), DialectKind::Postgres);
/// assert_eq!("MariaDB".parse::<DialectKind>().unwrap(), DialectKind::MySql);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DialectKind {
    /// PostgreSQL.
    #[default]
    Postgres,
    /// MySQL / MariaDB.
    MySql,
    /// H2.
    H2,
    /// Oracle.
    Oracle
}

impl DialectKind {
    /// Dialect implementation.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Postgres => &PostgresDialect,
            Self::MySql => &MySqlDialect,
            Self::H2 => &H2Dialect,
            Self::Oracle => &OracleDialect
        }
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "h2" => Ok(Self::H2),
            "oracle" | "ora" => Ok(Self::Oracle),
            _ => Err(Error::UnknownDialect {
                name: value.to_string()
            })
        }
    }
}

impl TryFrom<String> for DialectKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("postgres", DialectKind::Postgres)]
    #[case("POSTGRESQL", DialectKind::Postgres)]
    #[case("pg", DialectKind::Postgres)]
    #[case("mysql", DialectKind::MySql)]
    #[case("mariadb", DialectKind::MySql)]
    #[case("H2", DialectKind::H2)]
    #[case("oracle", DialectKind::Oracle)]
    fn from_str(#[case] input: &str, #[case] expected: DialectKind) {
        assert_eq!(input.parse::<DialectKind>().unwrap(), expected);
    }

    #[test]
    fn from_str_invalid() {
        assert!(matches!(
            "sqlite".parse::<DialectKind>(),
            Err(Error::UnknownDialect { name }) if name == "sqlite"
        ));
    }

    #[test]
    fn default_is_postgres() {
        assert_eq!(DialectKind::default(), DialectKind::Postgres);
        assert_eq!(DialectKind::default().dialect().name(), "postgres");
    }

    #[rstest]
    #[case(DialectKind::Postgres, GenerationType::Sequence)]
    #[case(DialectKind::MySql, GenerationType::Identity)]
    #[case(DialectKind::H2, GenerationType::Sequence)]
    #[case(DialectKind::Oracle, GenerationType::Sequence)]
    fn native_strategy(#[case] kind: DialectKind, #[case] expected: GenerationType) {
        assert_eq!(kind.dialect().native_identifier_generator_strategy(), expected);
    }

    #[test]
    fn unsupported_features() {
        assert!(matches!(
            MySqlDialect.sequence_next_val_string("s"),
            Err(Error::DialectUnsupported { dialect: "mysql", feature: "sequences" })
        ));
        assert!(matches!(
            OracleDialect.identity_select_string("t", "id", -5),
            Err(Error::DialectUnsupported { dialect: "oracle", .. })
        ));
    }
}
