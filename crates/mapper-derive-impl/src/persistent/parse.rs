// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Persistent derive macro.
//!
//! Entity-level `#[entity(...)]` attributes go through [`darling`]; field
//! attributes are parsed by hand because most of them are markers
//! (`#[id]`, `#[transient]`) or repeatable (`#[condition]`).
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── entity.rs         - EntityDef, #[entity(...)] via darling
//! ├── sequence.rs       - #[sequence_generator(...)] on structs and fields
//! └── field.rs          - FieldDef, property kind markers
//!     ├── column.rs     - #[column(name, jdbc_type, quoted)]
//!     ├── generated.rs  - #[generated(strategy, generator)]
//!     └── condition.rs  - #[condition(kind, ignore_case, column, properties)]
//! ```
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident / vis / generics
//! ├── table, schema, quoted
//! ├── example, embeddable, id_class
//! ├── sequence_generators: Vec<SequenceDef>
//! └── fields: Vec<FieldDef>      (transient fields dropped)
//!     └── FieldDef
//!         ├── ident, ty, kind
//!         ├── column: ColumnConfig
//!         ├── generated: Option<GeneratedConfig>
//!         ├── conditions: Vec<ConditionConfig>
//!         └── sequence_generators: Vec<SequenceDef>
//! ```

mod entity;
mod field;
mod sequence;


pub use entity::EntityDef;
pub use field::{ConditionConfig, FieldDef, FieldKind, GeneratedConfig};
pub use sequence::SequenceDef;
