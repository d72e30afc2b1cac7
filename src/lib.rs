// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # mapper-derive
//!
//! One crate, all features. Re-exports:
//! - [`Persistent`](macro@Persistent) derive macro from `mapper-derive-impl`
//! - All types from `mapper-core` ([`Precompiler`], [`StatementRegistry`],
//!   [`MapperQuery`], [`Dialect`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mapper_derive::{
//!     MappingContext, Persistent, PrecompilerConfig, Precompiler, Repository,
//!     RepositoryInformation, StatementRegistry
//! };
//!
//! #[derive(Persistent)]
//! #[entity(table = "users")]
//! pub struct User {
//!     #[id]
//!     pub id: i64,
//!     #[condition(kind = "containing")]
//!     pub name: String,
//! }
//!
//! pub struct UserRepository;
//!
//! impl Repository for UserRepository {
//!     type Entity = User;
//! }
//!
//! let mut context = MappingContext::new();
//! context.register::<User>();
//! let registry = StatementRegistry::new();
//! let config = PrecompilerConfig::from_json_str(r#"{ "dialect": "mysql" }"#)?;
//! let repository = RepositoryInformation::of::<UserRepository>();
//! Precompiler::with_config(&context, &config, &registry, &repository)?.precompile()?;
//! ```

pub use mapper_core::*;
pub use mapper_derive_impl::Persistent;
