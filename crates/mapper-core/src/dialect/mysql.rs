// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! MySQL dialect.

use super::{Dialect, LimitHandler, MySqlLimitHandler};
use crate::{error::Result, metadata::GenerationType};

/// MySQL and MariaDB. No sequences; `auto_increment` identity columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote(&self, identifier: &str) -> String {
        format!("`{identifier}`")
    }

    fn native_identifier_generator_strategy(&self) -> GenerationType {
        GenerationType::Identity
    }

    fn identity_select_string(&self, _table: &str, _column: &str, _type_code: i32) -> Result<String> {
        Ok("select last_insert_id()".to_string())
    }

    fn limit_handler(&self) -> &dyn LimitHandler {
        &MySqlLimitHandler
    }
}
