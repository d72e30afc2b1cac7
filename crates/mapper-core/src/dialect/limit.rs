// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Paging rewrites for `__find_by_pager`.
//!
//! Handlers append or wrap the statement with bound `__offset` and
//! `__pageSize` parameters; the values are supplied at invocation time.

/// Runtime parameter holding the number of rows to skip.
pub const OFFSET: &str = "__offset";

/// Runtime parameter holding the page size.
pub const PAGE_SIZE: &str = "__pageSize";

/// Rewrites a select statement into its paged form.
pub trait LimitHandler: Send + Sync {
    /// Return the paged statement.
    fn process_sql(&self, sql: &str) -> String;
}

/// `limit #{__pageSize} offset #{__offset}` (PostgreSQL, H2).
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitOffsetHandler;

impl LimitHandler for LimitOffsetHandler {
    fn process_sql(&self, sql: &str) -> String {
        format!("{sql} limit #{{{PAGE_SIZE}}} offset #{{{OFFSET}}}")
    }
}

/// `limit #{__offset}, #{__pageSize}` (MySQL).
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlLimitHandler;

impl LimitHandler for MySqlLimitHandler {
    fn process_sql(&self, sql: &str) -> String {
        format!("{sql} limit #{{{OFFSET}}}, #{{{PAGE_SIZE}}}")
    }
}

/// `rownum` wrapping (Oracle before 12c).
#[derive(Debug, Clone, Copy, Default)]
pub struct RowNumLimitHandler;

impl LimitHandler for RowNumLimitHandler {
    fn process_sql(&self, sql: &str) -> String {
        format!(
            "select * from ( select row_.*, rownum rownum_ from ( {sql} ) row_ where rownum \
             <![CDATA[<=]]> #{{{OFFSET}}} + #{{{PAGE_SIZE}}} ) where rownum_ <![CDATA[>]]> \
             #{{{OFFSET}}}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_offset() {
        assert_eq!(
            LimitOffsetHandler.process_sql("select * from t"),
            "select * from t limit #{__pageSize} offset #{__offset}"
        );
    }

    #[test]
    fn mysql_limit() {
        assert_eq!(
            MySqlLimitHandler.process_sql("select * from t"),
            "select * from t limit #{__offset}, #{__pageSize}"
        );
    }

    #[test]
    fn rownum_wraps_statement() {
        let sql = RowNumLimitHandler.process_sql("select * from t");
        assert!(sql.starts_with("select * from ( select row_.*, rownum rownum_ from ( select * from t ) row_"));
        assert!(sql.ends_with("where rownum_ <![CDATA[>]]> #{__offset}"));
    }
}
