// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column identifiers and JDBC type codes.
//!
//! A [`Column`] pairs an [`Identifier`] with a [`JdbcType`]. Identifiers are
//! stored as written and rendered through a [`Dialect`] so quoting follows
//! the target database.
//!
//! # Rendering
//!
//! | Identifier | PostgreSQL | MySQL |
//! |------------|------------|-------|
//! | `name` | `name` | `name` |
//! | `name` (quoted) | `"name"` | `` `name` `` |

use std::{fmt, str::FromStr};

use crate::{
    dialect::Dialect,
    error::{Error, Result}
};

/// Database identifier, optionally quoted on render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    text:   String,
    quoted: bool
}

impl Identifier {
    /// Plain identifier rendered as written.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text:   text.into(),
            quoted: false
        }
    }

    /// Identifier always wrapped in the dialect's quote characters.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text:   text.into(),
            quoted: true
        }
    }

    /// Raw text without quotes.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the identifier is quoted on render.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Lowercased text used where the database folds unquoted names.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        if self.quoted {
            self.text.clone()
        } else {
            self.text.to_lowercase()
        }
    }

    /// Render for use in SQL text.
    #[must_use]
    pub fn render(&self, dialect: &dyn Dialect) -> String {
        if self.quoted {
            dialect.quote(&self.text)
        } else {
            self.text.clone()
        }
    }
}

/// JDBC type of a column.
///
/// The name is what the mapper language expects in `jdbcType=...`; the code
/// is the standard JDBC type constant dialects use when choosing identity SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JdbcType {
    /// `ARRAY`
    Array,
    /// `BIGINT`
    Bigint,
    /// `BINARY`
    Binary,
    /// `BIT`
    Bit,
    /// `BLOB`
    Blob,
    /// `BOOLEAN`
    Boolean,
    /// `CHAR`
    Char,
    /// `CLOB`
    Clob,
    /// `DATE`
    Date,
    /// `DECIMAL`
    Decimal,
    /// `DOUBLE`
    Double,
    /// `FLOAT`
    Float,
    /// `INTEGER`
    Integer,
    /// `LONGVARCHAR`
    LongVarchar,
    /// `NCHAR`
    Nchar,
    /// `NUMERIC`
    Numeric,
    /// `NVARCHAR`
    Nvarchar,
    /// `OTHER`
    Other,
    /// `REAL`
    Real,
    /// `SMALLINT`
    Smallint,
    /// `TIME`
    Time,
    /// `TIMESTAMP`
    Timestamp,
    /// `TIMESTAMP_WITH_TIMEZONE`
    TimestampWithTimezone,
    /// `TINYINT`
    Tinyint,
    /// `VARBINARY`
    Varbinary,
    /// `VARCHAR`
    #[default]
    Varchar
}

impl JdbcType {
    const ALL: [Self; 26] = [
        Self::Array,
        Self::Bigint,
        Self::Binary,
        Self::Bit,
        Self::Blob,
        Self::Boolean,
        Self::Char,
        Self::Clob,
        Self::Date,
        Self::Decimal,
        Self::Double,
        Self::Float,
        Self::Integer,
        Self::LongVarchar,
        Self::Nchar,
        Self::Numeric,
        Self::Nvarchar,
        Self::Other,
        Self::Real,
        Self::Smallint,
        Self::Time,
        Self::Timestamp,
        Self::TimestampWithTimezone,
        Self::Tinyint,
        Self::Varbinary,
        Self::Varchar
    ];

    /// Name used in `jdbcType=...` attributes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "ARRAY",
            Self::Bigint => "BIGINT",
            Self::Binary => "BINARY",
            Self::Bit => "BIT",
            Self::Blob => "BLOB",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Clob => "CLOB",
            Self::Date => "DATE",
            Self::Decimal => "DECIMAL",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::LongVarchar => "LONGVARCHAR",
            Self::Nchar => "NCHAR",
            Self::Numeric => "NUMERIC",
            Self::Nvarchar => "NVARCHAR",
            Self::Other => "OTHER",
            Self::Real => "REAL",
            Self::Smallint => "SMALLINT",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
            Self::Tinyint => "TINYINT",
            Self::Varbinary => "VARBINARY",
            Self::Varchar => "VARCHAR"
        }
    }

    /// Standard JDBC type code.
    #[must_use]
    pub const fn type_code(self) -> i32 {
        match self {
            Self::Array => 2003,
            Self::Bigint => -5,
            Self::Binary => -2,
            Self::Bit => -7,
            Self::Blob => 2004,
            Self::Boolean => 16,
            Self::Char => 1,
            Self::Clob => 2005,
            Self::Date => 91,
            Self::Decimal => 3,
            Self::Double => 8,
            Self::Float => 6,
            Self::Integer => 4,
            Self::LongVarchar => -1,
            Self::Nchar => -15,
            Self::Numeric => 2,
            Self::Nvarchar => -9,
            Self::Other => 1111,
            Self::Real => 7,
            Self::Smallint => 5,
            Self::Time => 92,
            Self::Timestamp => 93,
            Self::TimestampWithTimezone => 2014,
            Self::Tinyint => -6,
            Self::Varbinary => -3,
            Self::Varchar => 12
        }
    }
}

impl FromStr for JdbcType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_uppercase().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| Error::InvalidConfig {
                message: format!("unknown jdbc type: {s}")
            })
    }
}

impl fmt::Display for JdbcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapped column: identifier plus JDBC type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name:      Identifier,
    jdbc_type: JdbcType
}

impl Column {
    /// Unquoted column.
    pub fn new(name: impl Into<String>, jdbc_type: JdbcType) -> Self {
        Self {
            name: Identifier::new(name),
            jdbc_type
        }
    }

    /// Column with an explicit identifier.
    pub fn with_identifier(name: Identifier, jdbc_type: JdbcType) -> Self {
        Self {
            name,
            jdbc_type
        }
    }

    /// Column identifier.
    #[must_use]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// JDBC type.
    #[must_use]
    pub fn jdbc_type(&self) -> JdbcType {
        self.jdbc_type
    }
}
