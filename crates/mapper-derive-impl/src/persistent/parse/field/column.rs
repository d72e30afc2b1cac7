// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column mapping overrides.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `name` | `#[column(name = "user_name")]` | Custom column name |
//! | `jdbc_type` | `#[column(jdbc_type = "CLOB")]` | Explicit JDBC type |
//! | `quoted` | `#[column(quoted)]` | Quote the name with the dialect's quote |

use syn::{Attribute, LitStr, Meta};

use crate::persistent::jdbc;

/// Parsed `#[column(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Column name; the field name when absent.
    pub name: Option<String>,

    /// `mapper_core::JdbcType` variant; inferred when absent.
    pub jdbc_type: Option<&'static str>,

    /// Render the name quoted.
    pub quoted: bool
}

impl ColumnConfig {
    /// Parse one `#[column(...)]`.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys and unknown JDBC type names.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut config = Self::default();

        if let Meta::List(meta_list) = &attr.meta {
            meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    config.name = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("jdbc_type") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.jdbc_type = Some(jdbc::variant(&value.value()).ok_or_else(|| {
                        syn::Error::new_spanned(&value, "unknown JDBC type")
                    })?);
                } else if meta.path.is_ident("quoted") {
                    config.quoted = true;
                } else {
                    return Err(meta.error("expected `name`, `jdbc_type` or `quoted`"));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}
