// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[sequence_generator(name = "...", sequence = "...")]`.
//!
//! Declared on the struct or on an id field. A `#[generated(generator =
//! "...")]` name resolves through the field's entries first, then the
//! struct's; an empty `sequence` falls back to the configured default.

use syn::{Attribute, LitStr, Meta};

/// One generator-name to sequence-name entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDef {
    /// Generator name referenced by `#[generated(generator = "...")]`.
    pub name:     String,
    /// Database sequence name.
    pub sequence: String
}

impl SequenceDef {
    /// Parse one attribute.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys or a missing `name`.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut name = None;
        let mut sequence = String::new();

        if let Meta::List(meta_list) = &attr.meta {
            meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("sequence") {
                    sequence = meta.value()?.parse::<LitStr>()?.value();
                } else {
                    return Err(meta.error("expected `name` or `sequence`"));
                }
                Ok(())
            })?;
        }

        let name = name.ok_or_else(|| {
            syn::Error::new_spanned(attr, "#[sequence_generator] requires `name = \"...\"`")
        })?;
        Ok(Self {
            name,
            sequence
        })
    }

    /// Every `#[sequence_generator]` in `attrs`, in declaration order.
    ///
    /// # Errors
    ///
    /// First malformed attribute.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Vec<Self>> {
        attrs
            .iter()
            .filter(|attr| attr.path().is_ident("sequence_generator"))
            .map(Self::from_attr)
            .collect()
    }
}
