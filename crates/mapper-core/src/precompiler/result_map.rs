// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Result map and base column list.
//!
//! ```text
//! <resultMap id="__result_map" type="app::Line">
//!   <result property="sku" column="sku" jdbcType="VARCHAR"/>
//!   <association property="key">
//!     <id property="order" column="order_id" jdbcType="BIGINT"/>
//!     <id property="line" column="line_no" jdbcType="INTEGER"/>
//!   </association>
//! </resultMap>
//! ```
//!
//! Embedded values become associations appended after the plain bindings.

use super::{Precompiler, helpers::result_segment};
use crate::{
    error::Result,
    metadata::PropertyKind,
    statement::{BASE_COLUMN_LIST, MappedStatement, RESULT_MAP, StatementKind}
};

impl Precompiler<'_> {
    /// `__result_map` binding every property to its column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] when an embedded type is not
    /// registered.
    pub fn add_result_map(&self) -> Result<Option<MappedStatement>> {
        if self.exists(RESULT_MAP) {
            return Ok(None);
        }

        let mut results = String::new();
        let mut associations = String::new();
        for property in self.entity.properties() {
            if property.is_embedded() {
                let embedded = self.context.required_entity(property.type_name())?;
                let embedded_id = property.kind() == PropertyKind::EmbeddedId;
                associations.push_str(&format!("<association property=\"{}\">", property.name()));
                for member in embedded.properties() {
                    associations.push_str(&result_segment(
                        embedded_id || member.is_id_property(),
                        member.name(),
                        member.column()
                    ));
                }
                associations.push_str("</association>");
            } else {
                results.push_str(&result_segment(
                    property.is_id_property(),
                    property.name(),
                    property.column()
                ));
            }
        }
        results.push_str(&associations);

        Ok(Some(
            self.statement(StatementKind::ResultMap, RESULT_MAP, results)
                .with_result_type(self.entity.type_name())
        ))
    }

    /// `__base_column_list` with every mapped column in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntity`] when an embedded type is not
    /// registered.
    pub fn add_base_column_list(&self) -> Result<Option<MappedStatement>> {
        if self.exists(BASE_COLUMN_LIST) {
            return Ok(None);
        }
        let columns = self
            .mappings()?
            .iter()
            .map(|m| m.column().name().render(self.dialect))
            .collect::<Vec<_>>()
            .join(",");
        Ok(Some(self.statement(StatementKind::Sql, BASE_COLUMN_LIST, columns)))
    }
}
