// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::{JdbcType, MappingContext, Persistent};

#[derive(Persistent)]
#[entity(table = "users")]
pub struct User {
    #[id]
    pub id: i64,
    pub name: String,
    pub nickname: Option<String>
}

fn main() {
    let entity = User::persistent_entity();
    assert_eq!(entity.table().text(), "users");
    assert_eq!(entity.properties().len(), 3);
    assert!(entity.id_property().is_some());
    assert_eq!(
        entity.property("nickname").unwrap().column().jdbc_type(),
        JdbcType::Varchar
    );

    let mut context = MappingContext::new();
    context.register::<User>();
    assert!(context.entity(std::any::type_name::<User>()).is_some());
}
