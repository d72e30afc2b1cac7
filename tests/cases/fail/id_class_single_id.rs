// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::Persistent;

#[derive(Persistent)]
#[entity(table = "pairs", id_class = "PairKey")]
pub struct Pair {
    #[id]
    pub left: i64,
    pub label: String
}

fn main() {}
