// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Execution bridge for repository query methods.
//!
//! # Module Structure
//!
//! ```text
//! query/
//! ├── mod.rs       — re-exports
//! ├── execution.rs — SqlSession, QueryMethod, QueryExecution, MapperQuery
//! └── tuple.rs     — Tuple, TupleBackedMap, TupleConverter, ResultValue
//! ```

mod execution;
mod tuple;

pub use execution::{MapperQuery, QueryExecution, QueryMethod, SqlSession};
pub use tuple::{ResultValue, ReturnedType, Tuple, TupleBackedMap, TupleConverter};
