// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::Persistent;

pub struct PairKey {
    pub left:  i64,
    pub right: i64
}

#[derive(Persistent)]
#[entity(table = "pairs", id_class = "PairKey")]
pub struct Pair {
    #[id]
    pub left: i64,
    #[id]
    pub right: i64,
    pub label: String
}

fn main() {
    let entity = Pair::persistent_entity();
    assert!(entity.has_composite_id());
    assert_eq!(entity.id_class(), Some(std::any::type_name::<PairKey>()));
}
