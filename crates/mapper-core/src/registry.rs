// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement registry keyed by namespace and statement id.
//!
//! The registry is the only mutable state the precompiler touches. Hand
//! written statements are registered first; generated ones only fill the
//! gaps because [`StatementRegistry::register`] never replaces an existing
//! entry.
//!
//! ```rust
//! use mapper_core::{MappedStatement, StatementKind, StatementRegistry};
//!
//! let registry = StatementRegistry::new();
//! let custom = MappedStatement::new(StatementKind::Delete, "app::Users", "__delete_all", "truncate users");
//! assert!(registry.register(custom));
//!
//! let generated = MappedStatement::new(StatementKind::Delete, "app::Users", "__delete_all", "delete from users");
//! assert!(!registry.register(generated));
//! assert_eq!(registry.get("app::Users", "__delete_all").unwrap().body(), "truncate users");
//! ```

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock}
};

use crate::statement::MappedStatement;

type Key = (String, String);

/// Thread-safe store of mapped statements.
#[derive(Debug, Default)]
pub struct StatementRegistry {
    statements: RwLock<BTreeMap<Key, Arc<MappedStatement>>>
}

impl StatementRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `namespace.id` is registered.
    #[must_use]
    pub fn contains(&self, namespace: &str, id: &str) -> bool {
        self.statements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&(namespace.to_string(), id.to_string()))
    }

    /// Register `statement` unless its id is already taken.
    ///
    /// Returns `true` when the statement was inserted. The check and the
    /// insert happen under one write lock.
    pub fn register(&self, statement: MappedStatement) -> bool {
        let key = (statement.namespace().to_string(), statement.id().to_string());
        let mut statements = self
            .statements
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if statements.contains_key(&key) {
            return false;
        }
        statements.insert(key, Arc::new(statement));
        true
    }

    /// Registered statement.
    #[must_use]
    pub fn get(&self, namespace: &str, id: &str) -> Option<Arc<MappedStatement>> {
        self.statements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(namespace.to_string(), id.to_string()))
            .cloned()
    }

    /// Statements of one namespace, ordered by id.
    #[must_use]
    pub fn namespace(&self, namespace: &str) -> Vec<Arc<MappedStatement>> {
        self.statements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|((ns, _), _)| ns == namespace)
            .map(|(_, statement)| Arc::clone(statement))
            .collect()
    }

    /// Number of registered statements across all namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
