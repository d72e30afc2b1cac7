// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Delete statements.

use super::{Precompiler, ids::IdBinding};
use crate::{
    error::Result,
    statement::{DELETE_ALL, DELETE_BY_ID, DELETE_BY_IDS, MappedStatement, StatementKind}
};

impl Precompiler<'_> {
    /// `__delete_by_id` with the id class as parameter; `None` without an id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] for unregistered embedded
    /// types.
    pub fn add_delete_by_id_statement(&self) -> Result<Option<MappedStatement>> {
        if self.exists(DELETE_BY_ID) {
            return Ok(None);
        }
        let Some(id_class) = self.entity.id_class() else {
            return Ok(None);
        };
        let condition = self.id_condition(IdBinding::Parameter)?;
        let body = format!("delete from {} where {condition}", self.table);
        Ok(Some(
            self.statement(StatementKind::Delete, DELETE_BY_ID, body)
                .with_parameter_type(id_class)
        ))
    }

    /// `__delete_by_ids` over the `__ids` collection; `None` without an id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] for unregistered embedded
    /// types.
    pub fn add_delete_by_ids_statement(&self) -> Result<Option<MappedStatement>> {
        if self.exists(DELETE_BY_IDS) {
            return Ok(None);
        }
        if self.entity.id_class().is_none() {
            return Ok(None);
        }
        let condition = self.ids_condition()?;
        let body = format!("delete from {} where {condition}", self.table);
        Ok(Some(self.statement(StatementKind::Delete, DELETE_BY_IDS, body)))
    }

    /// `__delete_all`.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like the other operations.
    pub fn add_delete_all_statement(&self) -> Result<Option<MappedStatement>> {
        if self.exists(DELETE_ALL) {
            return Ok(None);
        }
        let body = format!("delete from {}", self.table);
        Ok(Some(self.statement(StatementKind::Delete, DELETE_ALL, body)))
    }
}
