// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Oracle dialect.

use super::{Dialect, LimitHandler, RowNumLimitHandler};
use crate::{error::Result, metadata::GenerationType};

/// Oracle (pre-12c): sequences only, `rownum` paging.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn native_identifier_generator_strategy(&self) -> GenerationType {
        GenerationType::Sequence
    }

    fn sequence_next_val_string(&self, sequence: &str) -> Result<String> {
        Ok(format!("select {sequence}.nextval from dual"))
    }

    fn limit_handler(&self) -> &dyn LimitHandler {
        &RowNumLimitHandler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_sequence_value() {
        assert_eq!(
            OracleDialect.sequence_next_val_string("user_seq").unwrap(),
            "select user_seq.nextval from dual"
        );
    }
}
