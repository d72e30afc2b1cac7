// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! H2 dialect.

use super::{Dialect, LimitHandler, LimitOffsetHandler};
use crate::{error::Result, metadata::GenerationType};

/// H2 embedded database.
#[derive(Debug, Clone, Copy, Default)]
pub struct H2Dialect;

impl Dialect for H2Dialect {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn native_identifier_generator_strategy(&self) -> GenerationType {
        GenerationType::Sequence
    }

    fn identity_select_string(&self, _table: &str, _column: &str, _type_code: i32) -> Result<String> {
        Ok("call identity()".to_string())
    }

    fn sequence_next_val_string(&self, sequence: &str) -> Result<String> {
        Ok(format!("call next value for {sequence}"))
    }

    fn limit_handler(&self) -> &dyn LimitHandler {
        &LimitOffsetHandler
    }
}
