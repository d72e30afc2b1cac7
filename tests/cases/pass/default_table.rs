// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::Persistent;

#[derive(Persistent)]
pub struct AuditEntry {
    #[id]
    #[generated(strategy = "identity")]
    pub id: i64,
    pub message: String
}

fn main() {
    let entity = AuditEntry::persistent_entity();
    assert_eq!(entity.table().text(), "audit_entry");
    assert!(entity.id_property().unwrap().generated_value().is_some());
}
