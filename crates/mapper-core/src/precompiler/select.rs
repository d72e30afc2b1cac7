// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Select and count statements.
//!
//! ```text
//! __get_by_id    select * from t where <id equality>
//! __find         select * from t <where>{__ids filter}{condition block}</where> {order by}
//! __find_by_pager  __find through the dialect limit handler
//! __count        select count(*) from t <where>{condition block}</where>
//! __count_all    select count(*) from t
//! ```
//!
//! # Order By
//!
//! `__sort` holds `{property, direction, ignoreCase}` entries. Property names
//! are translated to columns through a map bound inside the statement, so
//! unknown properties never reach the SQL text as raw input.

use super::{Precompiler, condition::condition_block, ids::IdBinding};
use crate::{
    error::Result,
    params::SORT,
    statement::{
        COUNT, COUNT_ALL, FIND, FIND_BY_PAGER, GET_BY_ID, MappedStatement, RESULT_MAP,
        StatementKind
    }
};

const COUNT_RESULT_TYPE: &str = "long";

impl Precompiler<'_> {
    /// `__get_by_id` bound to the result map; `None` without an id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] for unregistered embedded
    /// types.
    pub fn add_get_by_id_statement(&self) -> Result<Option<MappedStatement>> {
        if self.exists(GET_BY_ID) {
            return Ok(None);
        }
        let Some(id_class) = self.entity.id_class() else {
            return Ok(None);
        };
        let condition = self.id_condition(IdBinding::Parameter)?;
        let body = format!("select * from {} where {condition}", self.table);
        Ok(Some(
            self.statement(StatementKind::Select, GET_BY_ID, body)
                .with_parameter_type(id_class)
                .with_result_map(RESULT_MAP)
        ))
    }

    /// `__find_by_pager` when `pageable`, `__find` otherwise.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::ConditionArity`] for malformed conditions
    /// - [`crate::Error::UnknownEntity`] for unregistered embedded types
    pub fn add_find_statement(&self, pageable: bool) -> Result<Option<MappedStatement>> {
        let id = if pageable { FIND_BY_PAGER } else { FIND };
        if self.exists(id) {
            return Ok(None);
        }
        let sql = format!(
            "select * from {} <where>{}{}</where> {}",
            self.table,
            self.guarded_ids_condition()?,
            condition_block(self.entity, self.dialect)?,
            self.order_by_segment()?
        );
        let body = if pageable {
            self.dialect.limit_handler().process_sql(&sql)
        } else {
            sql
        };
        Ok(Some(
            self.statement(StatementKind::Select, id, body)
                .with_result_map(RESULT_MAP)
        ))
    }

    /// `__count` over the condition block.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConditionArity`] for malformed conditions.
    pub fn add_count_statement(&self) -> Result<Option<MappedStatement>> {
        if self.exists(COUNT) {
            return Ok(None);
        }
        let body = format!(
            "select count(*) from {} <where>{}</where>",
            self.table,
            condition_block(self.entity, self.dialect)?
        );
        Ok(Some(
            self.statement(StatementKind::Select, COUNT, body)
                .with_result_type(COUNT_RESULT_TYPE)
        ))
    }

    /// `__count_all`.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like the other operations.
    pub fn add_count_all_statement(&self) -> Result<Option<MappedStatement>> {
        if self.exists(COUNT_ALL) {
            return Ok(None);
        }
        let body = format!("select count(*) from {}", self.table);
        Ok(Some(
            self.statement(StatementKind::Select, COUNT_ALL, body)
                .with_result_type(COUNT_RESULT_TYPE)
        ))
    }

    pub(super) fn order_by_segment(&self) -> Result<String> {
        let columns = self
            .mappings()?
            .iter()
            .map(|m| {
                format!(
                    "&apos;{}&apos;:&apos;{}&apos;",
                    m.path(),
                    m.column().name().render(self.dialect)
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        let lowercase = self.dialect.lowercase_function();
        Ok(format!(
            "<if test=\"{SORT} != null\"><bind name=\"__columnsMap\" value='#{{{columns}}}'/> \
             order by <foreach collection=\"{SORT}\" item=\"item\" index=\"idx\" open=\"\" \
             close=\"\" separator=\",\"><if test=\"item.ignoreCase\">{lowercase}(</if>\
             ${{__columnsMap[item.property]}}<if test=\"item.ignoreCase\">)</if> \
             ${{item.direction}}</foreach></if>"
        ))
    }
}
