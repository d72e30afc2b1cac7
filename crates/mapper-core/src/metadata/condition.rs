// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Condition annotations for dynamic `find`/`count` statements.
//!
//! A property annotated with `#[condition(...)]` contributes a guarded
//! predicate to the generated WHERE clause. The predicate only applies when
//! its operand properties are present on the runtime `__condition` object.
//!
//! ```rust,ignore
//! #[condition(kind = "starting_with", ignore_case = "always")]
//! pub name: String,
//!
//! #[condition(kind = "between", properties("min_age", "max_age"))]
//! pub age: i32,
//! ```

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Comparison kind of a condition.
///
/// | Kind | Operands |
/// |------|----------|
/// | `Between` | 2 |
/// | `IsNull`, `IsNotNull`, `True`, `False` | 0 (presence flags) |
/// | everything else | 1 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartType {
    /// `column = value`
    #[default]
    SimpleProperty,
    /// `column <> value`
    NegatingSimpleProperty,
    /// `column < value`
    LessThan,
    /// `column <= value`
    LessThanEqual,
    /// `column > value`
    GreaterThan,
    /// `column >= value`
    GreaterThanEqual,
    /// `column < value` for temporal values
    Before,
    /// `column > value` for temporal values
    After,
    /// `column between a and b`
    Between,
    /// `column like value`
    Like,
    /// `column not like value`
    NotLike,
    /// `column like value%`
    StartingWith,
    /// `column like %value`
    EndingWith,
    /// `column like %value%`
    Containing,
    /// `column not like %value%`
    NotContaining,
    /// `column in (...)`
    In,
    /// `column not in (...)`
    NotIn,
    /// `column is null`
    IsNull,
    /// `column is not null`
    IsNotNull,
    /// `column = true`
    True,
    /// `column = false`
    False
}

impl PartType {
    /// All part types in declaration order.
    pub const ALL: [Self; 21] = [
        Self::SimpleProperty,
        Self::NegatingSimpleProperty,
        Self::LessThan,
        Self::LessThanEqual,
        Self::GreaterThan,
        Self::GreaterThanEqual,
        Self::Before,
        Self::After,
        Self::Between,
        Self::Like,
        Self::NotLike,
        Self::StartingWith,
        Self::EndingWith,
        Self::Containing,
        Self::NotContaining,
        Self::In,
        Self::NotIn,
        Self::IsNull,
        Self::IsNotNull,
        Self::True,
        Self::False
    ];

    /// Number of operand properties the kind binds.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Between => 2,
            Self::IsNull | Self::IsNotNull | Self::True | Self::False => 0,
            _ => 1
        }
    }

    /// Upper snake case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SimpleProperty => "SIMPLE_PROPERTY",
            Self::NegatingSimpleProperty => "NEGATING_SIMPLE_PROPERTY",
            Self::LessThan => "LESS_THAN",
            Self::LessThanEqual => "LESS_THAN_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterThanEqual => "GREATER_THAN_EQUAL",
            Self::Before => "BEFORE",
            Self::After => "AFTER",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT_LIKE",
            Self::StartingWith => "STARTING_WITH",
            Self::EndingWith => "ENDING_WITH",
            Self::Containing => "CONTAINING",
            Self::NotContaining => "NOT_CONTAINING",
            Self::In => "IN",
            Self::NotIn => "NOT_IN",
            Self::IsNull => "IS_NULL",
            Self::IsNotNull => "IS_NOT_NULL",
            Self::True => "TRUE",
            Self::False => "FALSE"
        }
    }

    /// Whether the kind matches a pattern through `like`.
    #[must_use]
    pub const fn is_pattern(self) -> bool {
        matches!(
            self,
            Self::Like
                | Self::NotLike
                | Self::StartingWith
                | Self::EndingWith
                | Self::Containing
                | Self::NotContaining
        )
    }
}

impl FromStr for PartType {
    type Err = Error;

    /// Accepts the upper snake case name in any case, plus the short
    /// aliases `eq`, `ne`, `lt`, `lte`, `gt`, `gte`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        let alias = match normalized.as_str() {
            "EQ" => Some(Self::SimpleProperty),
            "NE" => Some(Self::NegatingSimpleProperty),
            "LT" => Some(Self::LessThan),
            "LTE" => Some(Self::LessThanEqual),
            "GT" => Some(Self::GreaterThan),
            "GTE" => Some(Self::GreaterThanEqual),
            _ => None
        };
        alias
            .or_else(|| Self::ALL.into_iter().find(|p| p.name() == normalized))
            .ok_or_else(|| Error::InvalidConfig {
                message: format!("unknown condition type: {s}")
            })
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-sensitivity mode of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IgnoreCaseType {
    /// Compare as stored.
    #[default]
    Never,
    /// Always fold both sides.
    Always,
    /// Fold where the operand type allows it.
    WhenPossible
}

impl IgnoreCaseType {
    /// Whether operands are case-folded.
    #[must_use]
    pub const fn folds(self) -> bool {
        matches!(self, Self::Always | Self::WhenPossible)
    }
}

impl FromStr for IgnoreCaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            "when_possible" => Ok(Self::WhenPossible),
            _ => Err(Error::InvalidConfig {
                message: format!("unknown ignore case type: {s}")
            })
        }
    }
}

/// One `#[condition(...)]` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionSpec {
    part:        PartType,
    ignore_case: IgnoreCaseType,
    column:      Option<String>,
    properties:  Vec<String>
}

impl ConditionSpec {
    /// Condition of the given kind with default options.
    #[must_use]
    pub fn new(part: PartType) -> Self {
        Self {
            part,
            ..Self::default()
        }
    }

    /// Set the case-sensitivity mode.
    #[must_use]
    pub fn ignore_case(mut self, ignore_case: IgnoreCaseType) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Override the left-hand column with raw SQL text.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Set the operand properties read from `__condition`.
    #[must_use]
    pub fn properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Comparison kind.
    #[must_use]
    pub fn part(&self) -> PartType {
        self.part
    }

    /// Case-sensitivity mode.
    #[must_use]
    pub fn ignore_case_type(&self) -> IgnoreCaseType {
        self.ignore_case
    }

    /// Explicit column override.
    #[must_use]
    pub fn column_override(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Declared operand properties (may be empty).
    #[must_use]
    pub fn declared_properties(&self) -> &[String] {
        &self.properties
    }
}
