// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Persistent)]
//! #[entity(table = "users", schema = "core", example)]
//! #[sequence_generator(name = "user_gen", sequence = "users_seq")]
//! pub struct User {
//!     #[id]
//!     #[generated(strategy = "sequence", generator = "user_gen")]
//!     pub id: i64,
//!
//!     #[column(name = "user_name")]
//!     #[condition(kind = "containing", ignore_case = "always")]
//!     pub name: String,
//!
//!     #[embedded]
//!     pub address: Address,
//!
//!     #[transient]
//!     pub cached: Option<String>,
//! }
//! ```

mod persistent;

use proc_macro::TokenStream;

/// Derive `mapper_core::Persistent` from struct attributes.
///
/// # Entity Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[entity(table = "..")]` | Table name, snake_case of the struct name by default |
/// | `#[entity(schema = "..")]` | Schema prefix |
/// | `#[entity(quoted)]` | Quote the table name |
/// | `#[entity(example)]` | Query-by-example support, emits `{Name}Example` |
/// | `#[entity(embeddable)]` | Value type embedded in other entities |
/// | `#[entity(id_class = "..")]` | Composite key type for several `#[id]` fields |
/// | `#[sequence_generator(name = "..", sequence = "..")]` | Generator name to sequence name (repeatable) |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Id column; several make a composite key |
/// | `#[embedded_id]` | Id held by an embeddable value |
/// | `#[embedded]` | Embeddable value whose columns live in this table |
/// | `#[column(name = "..", jdbc_type = "..", quoted)]` | Column overrides |
/// | `#[generated(strategy = "..", generator = "..")]` | Key generation on an id |
/// | `#[sequence_generator(...)]` | Generator scoped to this id |
/// | `#[condition(kind = "..", ignore_case = "..", column = "..", properties(..))]` | Dynamic query condition (repeatable) |
/// | `#[transient]` | Not persisted |
///
/// JDBC types are inferred from the field type when `jdbc_type` is absent:
/// `String` maps to `VARCHAR`, `i64` to `BIGINT`, `Option<T>` to the type of
/// `T`, unknown types to `OTHER`.
#[proc_macro_derive(
    Persistent,
    attributes(
        entity,
        id,
        embedded_id,
        embedded,
        column,
        generated,
        sequence_generator,
        condition,
        transient
    )
)]
pub fn derive_persistent(input: TokenStream) -> TokenStream {
    persistent::derive(input)
}
