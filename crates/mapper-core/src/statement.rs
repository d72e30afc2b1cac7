// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated statement descriptors.
//!
//! A [`MappedStatement`] is one element of a mapper document: a result map,
//! a reusable SQL fragment or an executable statement. The body is already
//! rendered mapper text; the descriptor fields carry the element attributes.
//!
//! # Statement Ids
//!
//! | Id | Kind | Needs an id |
//! |----|------|-------------|
//! | [`RESULT_MAP`] | result map | no |
//! | [`BASE_COLUMN_LIST`] | sql | no |
//! | [`INSERT`], [`INSERT_SELECTIVE`] | insert | no |
//! | [`UPDATE`], [`UPDATE_BY_ID`], [`UPDATE_SELECTIVE`], [`UPDATE_SELECTIVE_BY_ID`] | update | yes |
//! | [`DELETE_BY_ID`], [`DELETE_BY_IDS`] | delete | yes |
//! | [`DELETE_ALL`] | delete | no |
//! | [`GET_BY_ID`] | select | yes |
//! | [`FIND`], [`FIND_BY_PAGER`], [`COUNT`], [`COUNT_ALL`] | select | no |
//! | [`EXAMPLE_WHERE_CLAUSE`] | sql | no |
//! | [`FIND_BY_EXAMPLE`] | select | no |

use std::fmt::{self, Write};

/// Shared result map.
pub const RESULT_MAP: &str = "__result_map";
/// Comma-separated list of every mapped column.
pub const BASE_COLUMN_LIST: &str = "__base_column_list";
/// Insert every column.
pub const INSERT: &str = "__insert";
/// Insert non-null properties only.
pub const INSERT_SELECTIVE: &str = "__insert_selective";
/// Update every column, key taken from `__entity`.
pub const UPDATE: &str = "__update";
/// Update every column, key taken from `__id`.
pub const UPDATE_BY_ID: &str = "__update_by_id";
/// Update non-null properties, key taken from `__entity`.
pub const UPDATE_SELECTIVE: &str = "__update_selective";
/// Update non-null properties, key taken from `__id`.
pub const UPDATE_SELECTIVE_BY_ID: &str = "__update_selective_by_id";
/// Delete one row by key.
pub const DELETE_BY_ID: &str = "__delete_by_id";
/// Delete rows whose key is in `__ids`.
pub const DELETE_BY_IDS: &str = "__delete_by_ids";
/// Delete every row.
pub const DELETE_ALL: &str = "__delete_all";
/// Select one row by key.
pub const GET_BY_ID: &str = "__get_by_id";
/// Select rows matching `__ids`, `__condition` and `__sort`.
pub const FIND: &str = "__find";
/// Paged variant of [`FIND`].
pub const FIND_BY_PAGER: &str = "__find_by_pager";
/// Count rows matching `__condition`.
pub const COUNT: &str = "__count";
/// Count every row.
pub const COUNT_ALL: &str = "__count_all";
/// Reusable WHERE clause over `oredCriteria`.
pub const EXAMPLE_WHERE_CLAUSE: &str = "__example_where_clause";
/// Select rows matching an example.
pub const FIND_BY_EXAMPLE: &str = "__find_by_example";

/// Mapper element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `<resultMap>`
    ResultMap,
    /// `<sql>`
    Sql,
    /// `<select>`
    Select,
    /// `<insert>`
    Insert,
    /// `<update>`
    Update,
    /// `<delete>`
    Delete
}

impl StatementKind {
    /// Element name.
    #[must_use]
    pub const fn element(self) -> &'static str {
        match self {
            Self::ResultMap => "resultMap",
            Self::Sql => "sql",
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete"
        }
    }

    /// Whether the element can be executed by id.
    #[must_use]
    pub const fn is_executable(self) -> bool {
        !matches!(self, Self::ResultMap | Self::Sql)
    }

    /// Whether executing the element modifies rows.
    #[must_use]
    pub const fn is_modifying(self) -> bool {
        matches!(self, Self::Insert | Self::Update | Self::Delete)
    }
}

/// When a `<selectKey>` runs relative to the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Sequence value fetched before the insert.
    Before,
    /// Identity value read back after the insert.
    After
}

impl KeyOrder {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Before => "BEFORE",
            Self::After => "AFTER"
        }
    }
}

/// Generated-key metadata of an insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedKey {
    /// Id property receiving the key.
    pub key_property:       String,
    /// Id column.
    pub key_column:         String,
    /// Whether a key generator is attached.
    pub use_generated_keys: bool,
    /// When the key generator runs, if any.
    pub order:              Option<KeyOrder>
}

/// One generated mapper element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedStatement {
    namespace:      String,
    id:             String,
    kind:           StatementKind,
    parameter_type: Option<String>,
    result_type:    Option<String>,
    result_map:     Option<String>,
    key:            Option<GeneratedKey>,
    body:           String
}

impl MappedStatement {
    /// Element `id` of `kind` in `namespace` with rendered `body`.
    pub fn new(
        kind: StatementKind,
        namespace: impl Into<String>,
        id: impl Into<String>,
        body: impl Into<String>
    ) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
            kind,
            parameter_type: None,
            result_type: None,
            result_map: None,
            key: None,
            body: body.into()
        }
    }

    /// `parameterType` attribute.
    #[must_use]
    pub fn with_parameter_type(mut self, parameter_type: impl Into<String>) -> Self {
        self.parameter_type = Some(parameter_type.into());
        self
    }

    /// `resultType` attribute (`type` on result maps).
    #[must_use]
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = Some(result_type.into());
        self
    }

    /// `resultMap` attribute.
    #[must_use]
    pub fn with_result_map(mut self, result_map: impl Into<String>) -> Self {
        self.result_map = Some(result_map.into());
        self
    }

    /// Generated-key attributes.
    #[must_use]
    pub fn with_key(mut self, key: GeneratedKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `namespace.id`.
    #[must_use]
    pub fn qualified_id(&self) -> String {
        format!("{}.{}", self.namespace, self.id)
    }

    /// Element kind.
    #[must_use]
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// `parameterType`.
    #[must_use]
    pub fn parameter_type(&self) -> Option<&str> {
        self.parameter_type.as_deref()
    }

    /// `resultType`, or the mapped type of a result map.
    #[must_use]
    pub fn result_type(&self) -> Option<&str> {
        self.result_type.as_deref()
    }

    /// `resultMap`.
    #[must_use]
    pub fn result_map(&self) -> Option<&str> {
        self.result_map.as_deref()
    }

    /// Generated-key metadata.
    #[must_use]
    pub fn key(&self) -> Option<&GeneratedKey> {
        self.key.as_ref()
    }

    /// Rendered element body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the complete element.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MappedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element = self.kind.element();
        let mut attrs = String::new();
        write_attr(&mut attrs, "id", &self.id)?;
        if let Some(result_type) = &self.result_type
            && self.kind == StatementKind::ResultMap
        {
            write_attr(&mut attrs, "type", result_type)?;
        }
        if let Some(parameter_type) = &self.parameter_type {
            write_attr(&mut attrs, "parameterType", parameter_type)?;
        }
        if let Some(key) = &self.key {
            write_attr(&mut attrs, "keyProperty", &key.key_property)?;
            write_attr(&mut attrs, "keyColumn", &key.key_column)?;
            write_attr(
                &mut attrs,
                "useGeneratedKeys",
                if key.use_generated_keys { "true" } else { "false" }
            )?;
        }
        if let Some(result_type) = &self.result_type
            && self.kind != StatementKind::ResultMap
        {
            write_attr(&mut attrs, "resultType", result_type)?;
        }
        if let Some(result_map) = &self.result_map {
            write_attr(&mut attrs, "resultMap", result_map)?;
        }
        write!(f, "<{element}{attrs}>{}</{element}>", self.body)
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) -> fmt::Result {
    write!(out, " {name}=\"{}\"", escape_attr(value))
}

/// Escape a value for use inside a double-quoted XML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c)
        }
    }
    escaped
}
