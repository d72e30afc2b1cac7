// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::{Criteria, Persistent};

#[derive(Persistent)]
#[entity(table = "users", example)]
pub struct User {
    #[id]
    pub id: i64,
    pub name: String
}

fn main() {
    let entity = User::persistent_entity();
    assert!(entity.supports_example());
    assert!(entity.example_companion().unwrap().ends_with("::UserExample"));

    let example: UserExample = UserExample::new().or(Criteria::new().and("name =", "alice"));
    assert_eq!(example.ored_criteria().len(), 1);
}
