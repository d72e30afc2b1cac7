// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::{GenerationType, JdbcType, PartType, Persistent};

#[derive(Persistent)]
#[entity(table = "users", schema = "core", quoted)]
#[sequence_generator(name = "user_gen", sequence = "users_seq")]
pub struct User {
    #[id]
    #[generated(strategy = "sequence", generator = "user_gen")]
    pub id: i64,

    #[column(name = "user_name", jdbc_type = "CLOB", quoted)]
    #[condition(kind = "containing", ignore_case = "always")]
    #[condition(kind = "is_not_null")]
    pub name: String,

    #[condition(kind = "between", properties("min_age", "max_age"))]
    pub age: i32,

    #[transient]
    pub cache: Vec<u8>
}

fn main() {
    let entity = User::persistent_entity();
    assert_eq!(entity.properties().len(), 3);
    assert_eq!(entity.sequence_generators()[0].sequence_name(), "users_seq");

    let id = entity.property("id").unwrap();
    assert_eq!(
        id.generated_value().unwrap().strategy(),
        GenerationType::Sequence
    );

    let name = entity.property("name").unwrap();
    assert!(name.column().name().is_quoted());
    assert_eq!(name.column().name().text(), "user_name");
    assert_eq!(name.column().jdbc_type(), JdbcType::Clob);
    assert_eq!(name.conditions().len(), 2);
    assert_eq!(name.conditions()[1].part(), PartType::IsNotNull);

    let age = entity.property("age").unwrap();
    assert_eq!(age.conditions()[0].declared_properties(), ["min_age", "max_age"]);
}
