// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! JDBC type resolution.
//!
//! Columns without `#[column(jdbc_type = "...")]` get a type inferred from
//! the Rust field type.
//!
//! # Type Mapping Table
//!
//! | Rust Type | JDBC Type | Notes |
//! |-----------|-----------|-------|
//! | `String`, `&str` | `VARCHAR` | |
//! | `char` | `CHAR` | |
//! | `i8` | `TINYINT` | |
//! | `i16`, `u8` | `SMALLINT` | |
//! | `i32`, `u16` | `INTEGER` | |
//! | `i64`, `u32`, `u64`, `isize`, `usize` | `BIGINT` | |
//! | `f32` | `REAL` | |
//! | `f64` | `DOUBLE` | |
//! | `bool` | `BOOLEAN` | |
//! | `Decimal`, `BigDecimal` | `DECIMAL` | |
//! | `NaiveDate`, `Date` | `DATE` | |
//! | `NaiveTime`, `Time` | `TIME` | |
//! | `NaiveDateTime`, `PrimitiveDateTime` | `TIMESTAMP` | |
//! | `DateTime<Tz>`, `OffsetDateTime` | `TIMESTAMP_WITH_TIMEZONE` | |
//! | `Vec<u8>` | `VARBINARY` | |
//! | `Vec<T>` | `ARRAY` | |
//! | `Option<T>` | type of `T` | |
//! | anything else | `OTHER` | `Uuid`, JSON values, custom types |

use syn::{GenericArgument, PathArguments, Type};

/// JDBC type names and the `mapper_core::JdbcType` variants they select.
const JDBC_TYPES: [(&str, &str); 26] = [
    ("ARRAY", "Array"),
    ("BIGINT", "Bigint"),
    ("BINARY", "Binary"),
    ("BIT", "Bit"),
    ("BLOB", "Blob"),
    ("BOOLEAN", "Boolean"),
    ("CHAR", "Char"),
    ("CLOB", "Clob"),
    ("DATE", "Date"),
    ("DECIMAL", "Decimal"),
    ("DOUBLE", "Double"),
    ("FLOAT", "Float"),
    ("INTEGER", "Integer"),
    ("LONGVARCHAR", "LongVarchar"),
    ("NCHAR", "Nchar"),
    ("NUMERIC", "Numeric"),
    ("NVARCHAR", "Nvarchar"),
    ("OTHER", "Other"),
    ("REAL", "Real"),
    ("SMALLINT", "Smallint"),
    ("TIME", "Time"),
    ("TIMESTAMP", "Timestamp"),
    ("TIMESTAMP_WITH_TIMEZONE", "TimestampWithTimezone"),
    ("TINYINT", "Tinyint"),
    ("VARBINARY", "Varbinary"),
    ("VARCHAR", "Varchar")
];

/// Variant for a JDBC type name, case-insensitive.
pub fn variant(name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_uppercase().replace([' ', '-'], "_");
    JDBC_TYPES
        .iter()
        .find(|(jdbc, _)| *jdbc == normalized)
        .map(|(_, variant)| *variant)
}

/// Variant inferred from a Rust type.
pub fn infer(ty: &Type) -> &'static str {
    if let Type::Reference(reference) = ty {
        return infer(&reference.elem);
    }
    if let Some(inner) = generic_argument(ty, "Option") {
        return infer(inner);
    }
    if let Some(inner) = generic_argument(ty, "Vec") {
        return if last_ident(inner).as_deref() == Some("u8") {
            "Varbinary"
        } else {
            "Array"
        };
    }

    match last_ident(ty).as_deref() {
        Some("String" | "str") => "Varchar",
        Some("char") => "Char",
        Some("i8") => "Tinyint",
        Some("i16" | "u8") => "Smallint",
        Some("i32" | "u16") => "Integer",
        Some("i64" | "u32" | "u64" | "isize" | "usize") => "Bigint",
        Some("f32") => "Real",
        Some("f64") => "Double",
        Some("bool") => "Boolean",
        Some("Decimal" | "BigDecimal") => "Decimal",
        Some("NaiveDate" | "Date") => "Date",
        Some("NaiveTime" | "Time") => "Time",
        Some("NaiveDateTime" | "PrimitiveDateTime") => "Timestamp",
        Some("DateTime" | "OffsetDateTime") => "TimestampWithTimezone",
        _ => "Other"
    }
}

fn last_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None
    }
}

fn generic_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}
