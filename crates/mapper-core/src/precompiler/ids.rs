// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Id equality and id-set conditions.
//!
//! # Id Equality
//!
//! | Binding | Simple id | Embedded id `key` | Composite id |
//! |---------|-----------|-------------------|--------------|
//! | [`IdBinding::Parameter`] | `#{id}` | `#{order}` | `#{order}` |
//! | [`IdBinding::Id`] | `#{__id}` | `#{__id.order}` | `#{__id.order}` |
//! | [`IdBinding::Entity`] | `#{__entity.id}` | `#{__entity.key.order}` | `#{__entity.order}` |
//!
//! # Id Sets
//!
//! ```text
//! simple:    id in <foreach collection="__ids" ...>#{item}</foreach>
//! composite: <foreach collection="__ids" ... separator=") or (">a = #{item.a} and b = #{item.b}</foreach>
//! ```

use super::{Precompiler, helpers::variable};
use crate::{
    error::{Error, Result},
    metadata::IdShape,
    params::{ENTITY, ID, IDS}
};

/// Where the key values of an id condition come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdBinding {
    /// The statement parameter is the id itself.
    Parameter,
    /// The `__id` parameter.
    Id,
    /// Id properties of the `__entity` parameter.
    Entity
}

impl Precompiler<'_> {
    fn missing_id(&self) -> Error {
        Error::MissingIdProperty {
            entity: self.entity.type_name().to_string()
        }
    }

    /// `col = #{..} and ...` over the key columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIdProperty`] when the entity has no id.
    pub(super) fn id_condition(&self, binding: IdBinding) -> Result<String> {
        let shape = self.entity.id_shape();
        if matches!(shape, IdShape::None) {
            return Err(self.missing_id());
        }
        let simple = matches!(shape, IdShape::Simple(_));

        let condition = self
            .mappings()?
            .iter()
            .filter(|m| m.is_primary_key())
            .map(|m| {
                let path = match binding {
                    IdBinding::Parameter => m.member().to_string(),
                    IdBinding::Id if simple => ID.to_string(),
                    IdBinding::Id => format!("{ID}.{}", m.member()),
                    IdBinding::Entity => format!("{ENTITY}.{}", m.path())
                };
                format!(
                    "{} = {}",
                    m.column().name().render(self.dialect),
                    variable(&path, m.column())
                )
            })
            .collect::<Vec<_>>()
            .join(" and ");
        Ok(condition)
    }

    /// Containment of the key in `__ids`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIdProperty`] when the entity has no id.
    pub(super) fn ids_condition(&self) -> Result<String> {
        let shape = self.entity.id_shape();
        if let IdShape::Simple(property) = shape {
            return Ok(format!(
                "{} in <foreach collection=\"{IDS}\" item=\"item\" index=\"index\" open=\"(\" \
                 separator=\",\" close=\")\">#{{item}}</foreach>",
                property.column().name().render(self.dialect)
            ));
        }
        if matches!(shape, IdShape::None) {
            return Err(self.missing_id());
        }

        let conditions = self
            .mappings()?
            .iter()
            .filter(|m| m.is_primary_key())
            .map(|m| {
                format!(
                    "{} = #{{item.{}}}",
                    m.column().name().render(self.dialect),
                    m.member()
                )
            })
            .collect::<Vec<_>>()
            .join(" and ");
        Ok(format!(
            "<foreach collection=\"{IDS}\" item=\"item\" index=\"index\" open=\"(\" separator=\") \
             or (\" close=\")\">{conditions}</foreach>"
        ))
    }

    /// [`Self::ids_condition`] guarded by `__ids != null`, empty without an
    /// id.
    ///
    /// The fragment keeps its leading ` and ` for the enclosing `<where>`.
    pub(super) fn guarded_ids_condition(&self) -> Result<String> {
        if self.entity.id_class().is_none() {
            return Ok(String::new());
        }
        let condition = self.ids_condition()?;
        Ok(format!("<if test=\"{IDS} != null\"> and {condition}</if>"))
    }
}
