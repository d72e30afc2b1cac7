// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapper text fragments shared by the statement builders.
//!
//! - [`variable`] — bound parameter with its JDBC type
//! - [`test_not_null`] — `<if>` guard on a runtime property
//! - [`cdata`] — protect operators containing `<`
//! - [`result_segment`] — one `<id>`/`<result>` binding

use crate::metadata::Column;

/// `#{path,jdbcType=TYPE}`.
///
/// # Example
///
/// ```text
/// ("__entity.name", VARCHAR) -> "#{__entity.name,jdbcType=VARCHAR}"
/// ```
pub fn variable(path: &str, column: &Column) -> String {
    format!("#{{{path},jdbcType={}}}", column.jdbc_type().name())
}

/// `<if test="path != null">content</if>`.
pub fn test_not_null(path: &str, content: &str) -> String {
    format!("<if test=\"{path} != null\">{content}</if>")
}

/// Wrap `text` in a CDATA section when it contains `<`.
pub fn cdata(text: &str) -> String {
    if text.contains('<') {
        format!("<![CDATA[{text}]]>")
    } else {
        text.to_string()
    }
}

/// `<id .../>` or `<result .../>` binding a property to a column.
pub fn result_segment(id: bool, property: &str, column: &Column) -> String {
    format!(
        "<{} property=\"{property}\" column=\"{}\" jdbcType=\"{}\"/>",
        if id { "id" } else { "result" },
        column.name().text(),
        column.jdbc_type().name()
    )
}
