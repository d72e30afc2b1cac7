// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[generated(strategy = "...", generator = "...")]` on id fields.
//!
//! | Strategy | Key SQL |
//! |----------|---------|
//! | `auto` (default) | the dialect's native strategy |
//! | `identity` | identity read-back after the insert |
//! | `sequence` | next sequence value before the insert |
//! | `table` | accepted here, rejected by the precompiler |

use syn::{Attribute, LitStr, Meta};

/// Parsed `#[generated(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig {
    /// `mapper_core::GenerationType` variant.
    pub strategy:  &'static str,
    /// Sequence generator name.
    pub generator: Option<String>
}

impl Default for GeneratedConfig {
    fn default() -> Self {
        Self {
            strategy:  "Auto",
            generator: None
        }
    }
}

fn strategy(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "auto" => Some("Auto"),
        "identity" => Some("Identity"),
        "sequence" => Some("Sequence"),
        "table" => Some("Table"),
        _ => None
    }
}

impl GeneratedConfig {
    /// Parse `#[generated]` or `#[generated(...)]`.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys and strategies.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut config = Self::default();

        if let Meta::List(meta_list) = &attr.meta {
            meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("strategy") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.strategy = strategy(&value.value()).ok_or_else(|| {
                        syn::Error::new_spanned(
                            &value,
                            "expected one of `auto`, `identity`, `sequence`, `table`"
                        )
                    })?;
                } else if meta.path.is_ident("generator") {
                    config.generator = Some(meta.value()?.parse::<LitStr>()?.value());
                } else {
                    return Err(meta.error("expected `strategy` or `generator`"));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}
