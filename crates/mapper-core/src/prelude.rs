// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mapper_core::prelude::*;
//! ```

pub use crate::{
    Dialect, Example, MapperQuery, MappingContext, Order, Pageable, Persistent, Precompiler,
    PrecompilerConfig, QueryMethod, Repository, RepositoryInformation, Sort, SqlSession,
    StatementParams, StatementRegistry, async_trait
};
