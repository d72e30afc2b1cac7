// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Example-based queries.
//!
//! Generated only for repositories declaring example-query support:
//!
//! | Repository | Entity marker | Companion | Result |
//! |------------|---------------|-----------|--------|
//! | no support | any | any | nothing |
//! | support | missing | any | [`Error::MissingExampleMarker`] |
//! | support | present | missing | [`Error::MissingExampleCompanion`] |
//! | support | present | present | both statements |
//!
//! The where clause ORs the criteria groups of `oredCriteria` and ANDs the
//! criteria inside each valid group:
//!
//! ```text
//! where (a = ? and b in (?, ?)) or (c between ? and ?)
//! ```

use super::Precompiler;
use crate::{
    error::{Error, Result},
    statement::{
        BASE_COLUMN_LIST, EXAMPLE_WHERE_CLAUSE, FIND_BY_EXAMPLE, MappedStatement, RESULT_MAP,
        StatementKind
    }
};

const EXAMPLE_WHERE_CLAUSE_BODY: &str = concat!(
    "<where>",
    "<foreach collection=\"oredCriteria\" item=\"criteria\" separator=\"or\">",
    "<if test=\"criteria.valid\">",
    "<trim prefix=\"(\" prefixOverrides=\"and\" suffix=\")\">",
    "<foreach collection=\"criteria.criteria\" item=\"criterion\">",
    "<choose>",
    "<when test=\"criterion.noValue\"> and ${criterion.condition}</when>",
    "<when test=\"criterion.singleValue\"> and ${criterion.condition} #{criterion.value}</when>",
    "<when test=\"criterion.betweenValue\"> and ${criterion.condition} #{criterion.value} and \
     #{criterion.secondValue}</when>",
    "<when test=\"criterion.listValue\"> and ${criterion.condition}",
    "<foreach close=\")\" collection=\"criterion.value\" item=\"listItem\" open=\"(\" \
     separator=\",\">#{listItem}</foreach>",
    "</when>",
    "</choose>",
    "</foreach>",
    "</trim>",
    "</if>",
    "</foreach>",
    "</where>"
);

impl Precompiler<'_> {
    /// Companion type when example statements apply, `None` when the
    /// repository does not ask for them.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingExampleMarker`] when the entity lacks the marker
    /// - [`Error::MissingExampleCompanion`] when no companion was generated
    pub fn example_companion(&self) -> Result<Option<&str>> {
        if !self.repository.example_query() {
            return Ok(None);
        }
        if !self.entity.supports_example() {
            return Err(Error::MissingExampleMarker {
                repository: self.namespace().to_string(),
                entity:     self.entity.type_name().to_string()
            });
        }
        self.entity
            .example_companion()
            .map(Some)
            .ok_or_else(|| Error::MissingExampleCompanion {
                entity:    self.entity.type_name().to_string(),
                companion: format!("{}Example", self.entity.type_name())
            })
    }

    /// `__example_where_clause` fragment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::example_companion`].
    pub fn add_example_where_clause(&self) -> Result<Option<MappedStatement>> {
        if self.example_companion()?.is_none() || self.exists(EXAMPLE_WHERE_CLAUSE) {
            return Ok(None);
        }
        Ok(Some(self.statement(
            StatementKind::Sql,
            EXAMPLE_WHERE_CLAUSE,
            EXAMPLE_WHERE_CLAUSE_BODY.to_string()
        )))
    }

    /// `__find_by_example` taking the companion type.
    ///
    /// # Errors
    ///
    /// Same as [`Self::example_companion`].
    pub fn add_find_by_example_statement(&self) -> Result<Option<MappedStatement>> {
        let Some(companion) = self.example_companion()? else {
            return Ok(None);
        };
        if self.exists(FIND_BY_EXAMPLE) {
            return Ok(None);
        }
        let body = format!(
            "select <if test=\"distinct\">distinct</if> <include refid=\"{BASE_COLUMN_LIST}\"/> \
             from {} <if test=\"_parameter != null\"><include \
             refid=\"{EXAMPLE_WHERE_CLAUSE}\"/></if><if test=\"orderByClause != null\"> order by \
             ${{orderByClause}} </if>",
            self.table
        );
        Ok(Some(
            self.statement(StatementKind::Select, FIND_BY_EXAMPLE, body)
                .with_parameter_type(companion)
                .with_result_map(RESULT_MAP)
        ))
    }
}
