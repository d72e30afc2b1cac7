// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Update statements.
//!
//! | Statement | SET | Key from |
//! |-----------|-----|----------|
//! | `__update` | every non-key column | `__entity` |
//! | `__update_by_id` | every non-key column | `__id` |
//! | `__update_selective` | non-null non-key columns | `__entity` |
//! | `__update_selective_by_id` | non-null non-key columns | `__id` |
//!
//! Values always come from `__entity`. Selective assignments carry their
//! trailing comma inside the guard so `<set>` can trim it.

use super::{
    Precompiler,
    helpers::{test_not_null, variable},
    ids::IdBinding
};
use crate::{
    error::Result,
    params::ENTITY,
    statement::{
        MappedStatement, StatementKind, UPDATE, UPDATE_BY_ID, UPDATE_SELECTIVE,
        UPDATE_SELECTIVE_BY_ID
    }
};

impl Precompiler<'_> {
    /// One of the four update statements; `None` without an id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] for unregistered embedded
    /// types.
    pub fn add_update_statement(
        &self,
        selective: bool,
        by_id: bool
    ) -> Result<Option<MappedStatement>> {
        let id = match (selective, by_id) {
            (true, true) => UPDATE_SELECTIVE_BY_ID,
            (true, false) => UPDATE_SELECTIVE,
            (false, true) => UPDATE_BY_ID,
            (false, false) => UPDATE
        };
        if self.exists(id) {
            return Ok(None);
        }
        let binding = if by_id { IdBinding::Id } else { IdBinding::Entity };
        if self.entity.id_class().is_none() {
            return Ok(None);
        }
        let condition = self.id_condition(binding)?;

        let assignments = self
            .mappings()?
            .iter()
            .filter(|m| !m.is_primary_key())
            .map(|m| {
                let path = format!("{ENTITY}.{}", m.path());
                let assignment = format!(
                    "{}={}",
                    m.column().name().render(self.dialect),
                    variable(&path, m.column())
                );
                if selective {
                    test_not_null(&path, &format!("{assignment},"))
                } else {
                    assignment
                }
            })
            .collect::<Vec<_>>()
            .join(if selective { "" } else { "," });

        let body = format!(
            "update {} <set>{assignments}</set> where {condition}",
            self.table
        );
        Ok(Some(self.statement(StatementKind::Update, id, body)))
    }
}
