// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::Persistent;

#[derive(Persistent)]
#[entity(table = "users")]
pub struct User {
    #[id]
    pub id: i64,
    #[generated(strategy = "identity")]
    pub code: i64
}

fn main() {}
