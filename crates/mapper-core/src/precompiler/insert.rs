// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Insert statements.
//!
//! | Statement | Columns | Values |
//! |-----------|---------|--------|
//! | `__insert` | every column | `#{p,jdbcType=T}` |
//! | `__insert_selective` | `<if test="p != null">col,</if>` | `<if test="p != null">#{p,jdbcType=T},</if>` |
//!
//! A non-composite id records `keyProperty`/`keyColumn`; a generated id also
//! prepends its `<selectKey>`.

use super::{
    Precompiler,
    helpers::{test_not_null, variable},
    keygen::key_generator
};
use crate::{
    error::Result,
    metadata::ColumnMapping,
    statement::{GeneratedKey, INSERT, INSERT_SELECTIVE, MappedStatement, StatementKind}
};

impl Precompiler<'_> {
    /// `__insert_selective` when `selective`, `__insert` otherwise.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::UnsupportedGenerationStrategy`] or
    ///   [`crate::Error::DialectUnsupported`] from key generation
    /// - [`crate::Error::UnknownEntity`] for unregistered embedded types
    pub fn add_insert_statement(&self, selective: bool) -> Result<Option<MappedStatement>> {
        let id = if selective { INSERT_SELECTIVE } else { INSERT };
        if self.exists(id) {
            return Ok(None);
        }

        let mut body = String::new();
        let mut key = None;
        if !self.entity.has_composite_id()
            && let Some(property) = self.entity.id_property()
        {
            let mut generated_key = GeneratedKey {
                key_property: property.name().to_string(),
                key_column: property.column().name().text().to_string(),
                ..GeneratedKey::default()
            };
            if let Some(generated) = property.generated_value() {
                let (select_key, order) = key_generator(
                    self.entity,
                    property,
                    generated,
                    self.dialect,
                    &self.default_sequence
                )?;
                body.push_str(&select_key);
                generated_key.use_generated_keys = true;
                generated_key.order = Some(order);
            }
            key = Some(generated_key);
        }

        let mappings = self.mappings()?;
        body.push_str(&if selective {
            self.insert_selective_sql(&mappings)
        } else {
            self.insert_sql(&mappings)
        });

        let mut statement = self
            .statement(StatementKind::Insert, id, body)
            .with_parameter_type(self.entity.type_name());
        if let Some(key) = key {
            statement = statement.with_key(key);
        }
        Ok(Some(statement))
    }

    fn insert_sql(&self, mappings: &[ColumnMapping<'_>]) -> String {
        let columns = mappings
            .iter()
            .map(|m| m.column().name().render(self.dialect))
            .collect::<Vec<_>>()
            .join(",");
        let values = mappings
            .iter()
            .map(|m| variable(&m.path(), m.column()))
            .collect::<Vec<_>>()
            .join(",");
        format!("insert into {} ({columns}) values ({values})", self.table)
    }

    fn insert_selective_sql(&self, mappings: &[ColumnMapping<'_>]) -> String {
        let columns: String = mappings
            .iter()
            .map(|m| {
                test_not_null(
                    &m.path(),
                    &format!("{},", m.column().name().render(self.dialect))
                )
            })
            .collect();
        let values: String = mappings
            .iter()
            .map(|m| {
                let path = m.path();
                test_not_null(&path, &format!("{},", variable(&path, m.column())))
            })
            .collect();
        format!(
            "insert into {} <trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\">{columns}</trim> \
             <trim prefix=\"values(\" suffix=\")\" suffixOverrides=\",\">{values}</trim>",
            self.table
        )
    }
}
