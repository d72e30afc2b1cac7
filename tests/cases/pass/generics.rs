// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::{JdbcType, Persistent};

#[derive(Persistent)]
#[entity(table = "tagged")]
pub struct Tagged<T: Clone> {
    #[id]
    pub id: i64,
    pub tag: T
}

fn main() {
    let entity = <Tagged<String> as Persistent>::persistent_entity();
    assert_eq!(entity.property("tag").unwrap().column().jdbc_type(), JdbcType::Other);
    assert!(entity.type_name().contains("Tagged<"));
}
