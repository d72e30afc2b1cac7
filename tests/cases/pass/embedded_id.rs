// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use mapper_derive::{IdShape, MappingContext, Persistent};

#[derive(Persistent)]
#[entity(embeddable)]
pub struct LineKey {
    pub order_id: i64,
    pub line_no:  i32
}

#[derive(Persistent)]
#[entity(embeddable)]
pub struct Address {
    pub city:   String,
    pub street: String
}

#[derive(Persistent)]
#[entity(table = "lines")]
pub struct Line {
    #[embedded_id]
    pub key: LineKey,
    #[embedded]
    pub address: Address,
    pub qty: i32
}

fn main() {
    let mut context = MappingContext::new();
    let line = context.register::<Line>();
    assert!(matches!(line.id_shape(), IdShape::Embedded(_)));
    assert!(context.entity(std::any::type_name::<LineKey>()).is_some());
    assert!(context.entity(std::any::type_name::<Address>()).is_some());

    let paths: Vec<_> = context
        .column_mappings(&line)
        .unwrap()
        .iter()
        .map(|mapping| mapping.path())
        .collect();
    assert_eq!(
        paths,
        ["key.order_id", "key.line_no", "address.city", "address.street", "qty"]
    );
}
