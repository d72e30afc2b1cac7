// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Each named field becomes one persistent property unless it carries
//! `#[transient]`. The kind markers pick the property kind:
//!
//! | Marker | Kind | Column |
//! |--------|------|--------|
//! | none | [`FieldKind::Basic`] | yes |
//! | `#[id]` | [`FieldKind::Id`] | yes |
//! | `#[embedded_id]` | [`FieldKind::EmbeddedId`] | from the embedded type |
//! | `#[embedded]` | [`FieldKind::Embedded`] | from the embedded type |
//!
//! # Example
//!
//! ```rust,ignore
//! #[id]
//! #[generated(strategy = "sequence", generator = "user_gen")]
//! pub id: i64,
//!
//! #[column(name = "user_name", jdbc_type = "VARCHAR")]
//! #[condition(kind = "containing", ignore_case = "always")]
//! pub name: String,
//!
//! #[embedded]
//! pub address: Address,
//! ```

mod column;
pub(super) mod condition;
mod generated;

pub use column::ColumnConfig;
pub use condition::ConditionConfig;
pub use generated::GeneratedConfig;
use syn::{Field, Ident, Type};

use super::SequenceDef;
use crate::persistent::jdbc;

/// Property kind selected by the field markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain column.
    Basic,
    /// Simple or composite id column.
    Id,
    /// Id held by an embedded value.
    EmbeddedId,
    /// Embedded value spreading its columns into the owner's table.
    Embedded
}

impl FieldKind {
    fn marker(self) -> &'static str {
        match self {
            Self::Basic => "",
            Self::Id => "#[id]",
            Self::EmbeddedId => "#[embedded_id]",
            Self::Embedded => "#[embedded]"
        }
    }

    /// Whether the property owns a column.
    #[must_use]
    pub fn has_column(self) -> bool {
        matches!(self, Self::Basic | Self::Id)
    }
}

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier, also the property name.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Property kind.
    pub kind: FieldKind,

    /// Column overrides.
    pub column: ColumnConfig,

    /// Key generation, id fields only.
    pub generated: Option<GeneratedConfig>,

    /// Dynamic conditions in declaration order.
    pub conditions: Vec<ConditionConfig>,

    /// Field-level sequence generators.
    pub sequence_generators: Vec<SequenceDef>,

    /// `#[transient]`: not persisted.
    pub transient: bool
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - Unnamed field
    /// - More than one kind marker
    /// - `#[column]`, `#[generated]` or `#[condition]` on an embedded field
    /// - `#[generated]` without `#[id]`
    /// - Malformed attribute arguments
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Persistent fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let mut kind = FieldKind::Basic;
        let mut column = ColumnConfig::default();
        let mut generated = None;
        let mut conditions = Vec::new();
        let mut transient = false;
        let mut column_attr = None;

        for attr in &field.attrs {
            let path = attr.path();
            let marked = if path.is_ident("id") {
                Some(FieldKind::Id)
            } else if path.is_ident("embedded_id") {
                Some(FieldKind::EmbeddedId)
            } else if path.is_ident("embedded") {
                Some(FieldKind::Embedded)
            } else {
                None
            };

            if let Some(marked) = marked {
                if kind != FieldKind::Basic {
                    errors.push(
                        darling::Error::custom(format!(
                            "{} conflicts with {}",
                            marked.marker(),
                            kind.marker()
                        ))
                        .with_span(attr)
                    );
                }
                kind = marked;
            } else if path.is_ident("transient") {
                transient = true;
            } else if path.is_ident("column") {
                column_attr = Some(attr);
                if let Some(parsed) =
                    errors.handle(ColumnConfig::from_attr(attr).map_err(Into::into))
                {
                    column = parsed;
                }
            } else if path.is_ident("generated") {
                generated = errors.handle(GeneratedConfig::from_attr(attr).map_err(Into::into));
            } else if path.is_ident("condition") {
                if let Some(parsed) =
                    errors.handle(ConditionConfig::from_attr(attr).map_err(Into::into))
                {
                    conditions.push(parsed);
                }
            }
        }

        let sequence_generators = errors
            .handle(SequenceDef::from_attrs(&field.attrs).map_err(Into::into))
            .unwrap_or_default();

        if !kind.has_column() {
            if let Some(attr) = column_attr {
                errors.push(
                    darling::Error::custom("#[column] is not allowed on embedded fields")
                        .with_span(attr)
                );
            }
            if !conditions.is_empty() {
                errors.push(
                    darling::Error::custom("#[condition] is not allowed on embedded fields")
                        .with_span(&ident)
                );
            }
        }
        if generated.is_some() && kind != FieldKind::Id {
            errors.push(darling::Error::custom("#[generated] requires #[id]").with_span(&ident));
        }

        errors.finish()?;

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            kind,
            column,
            generated,
            conditions,
            sequence_generators,
            transient
        })
    }

    /// Property name.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Column name: the override or the property name.
    #[must_use]
    pub fn column_name(&self) -> String {
        self.column.name.clone().unwrap_or_else(|| self.name_str())
    }

    /// `mapper_core::JdbcType` variant: explicit or inferred.
    #[must_use]
    pub fn jdbc_type(&self) -> &'static str {
        self.column.jdbc_type.unwrap_or_else(|| jdbc::infer(&self.ty))
    }

    /// Whether the field's type must be registered as an embedded entity.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, FieldKind::EmbeddedId | FieldKind::Embedded)
    }
}
