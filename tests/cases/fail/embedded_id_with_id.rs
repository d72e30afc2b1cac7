// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::Persistent;

#[derive(Persistent)]
#[entity(table = "lines")]
pub struct Line {
    #[embedded_id]
    pub key: (i64, i32),
    #[id]
    pub id: i64
}

fn main() {}
