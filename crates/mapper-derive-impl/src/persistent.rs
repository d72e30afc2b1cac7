// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! persistent.rs (orchestrator)
//! │
//! ├── parse/      → Attribute parsing (EntityDef, FieldDef, SequenceDef)
//! ├── jdbc.rs     → JDBC type names and inference from Rust types
//! └── codegen.rs  → impl Persistent and the example alias
//! ```
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[derive(Persistent)]
//! #[entity(table = "users", example)]
//! pub struct User {
//!     #[id]
//!     pub id: i64,
//!     pub name: String,
//! }
//! ```
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Persistent for User` | builds the `PersistentEntity` metadata |
//! | `UserExample` | example companion, only with `example` |

mod codegen;
mod jdbc;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Persistent derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => codegen::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
