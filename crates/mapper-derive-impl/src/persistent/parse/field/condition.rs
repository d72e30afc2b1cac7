// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[condition(...)]` declarations.
//!
//! Each attribute adds one guarded predicate to the dynamic condition block
//! of the find and count statements. The attribute is repeatable.
//!
//! ```rust,ignore
//! #[condition]                                          // name = #{__condition.name}
//! #[condition(kind = "containing", ignore_case = "always")]
//! pub name: String,
//!
//! #[condition(kind = "between", properties("min_age", "max_age"))]
//! pub age: i32,
//! ```
//!
//! | Key | Default | Values |
//! |-----|---------|--------|
//! | `kind` | `simple_property` | any condition kind, plus `eq`, `ne`, `lt`, `lte`, `gt`, `gte` |
//! | `ignore_case` | `never` | `never`, `always`, `when_possible` |
//! | `column` | the field's column | raw column text |
//! | `properties` | the field itself | operand names on `__condition` |

use syn::{Attribute, LitStr, Meta, Token, parenthesized, punctuated::Punctuated};

/// Condition kind names and the `mapper_core::PartType` variants they select.
const KINDS: [(&str, &str); 21] = [
    ("SIMPLE_PROPERTY", "SimpleProperty"),
    ("NEGATING_SIMPLE_PROPERTY", "NegatingSimpleProperty"),
    ("LESS_THAN", "LessThan"),
    ("LESS_THAN_EQUAL", "LessThanEqual"),
    ("GREATER_THAN", "GreaterThan"),
    ("GREATER_THAN_EQUAL", "GreaterThanEqual"),
    ("BEFORE", "Before"),
    ("AFTER", "After"),
    ("BETWEEN", "Between"),
    ("LIKE", "Like"),
    ("NOT_LIKE", "NotLike"),
    ("STARTING_WITH", "StartingWith"),
    ("ENDING_WITH", "EndingWith"),
    ("CONTAINING", "Containing"),
    ("NOT_CONTAINING", "NotContaining"),
    ("IN", "In"),
    ("NOT_IN", "NotIn"),
    ("IS_NULL", "IsNull"),
    ("IS_NOT_NULL", "IsNotNull"),
    ("TRUE", "True"),
    ("FALSE", "False")
];

/// `mapper_core::PartType` variant for a kind name or alias.
pub fn kind(name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_uppercase().replace([' ', '-'], "_");
    let alias = match normalized.as_str() {
        "EQ" => Some("SimpleProperty"),
        "NE" => Some("NegatingSimpleProperty"),
        "LT" => Some("LessThan"),
        "LTE" => Some("LessThanEqual"),
        "GT" => Some("GreaterThan"),
        "GTE" => Some("GreaterThanEqual"),
        _ => None
    };
    alias.or_else(|| {
        KINDS
            .iter()
            .find(|(kind, _)| *kind == normalized)
            .map(|(_, variant)| *variant)
    })
}

fn ignore_case(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
        "never" => Some("Never"),
        "always" => Some("Always"),
        "when_possible" => Some("WhenPossible"),
        _ => None
    }
}

/// Parsed `#[condition(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionConfig {
    /// `mapper_core::PartType` variant.
    pub kind:        &'static str,
    /// `mapper_core::IgnoreCaseType` variant.
    pub ignore_case: &'static str,
    /// Column override.
    pub column:      Option<String>,
    /// Operand properties; empty means the annotated field.
    pub properties:  Vec<String>
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            kind:        "SimpleProperty",
            ignore_case: "Never",
            column:      None,
            properties:  Vec::new()
        }
    }
}

impl ConditionConfig {
    /// Parse `#[condition]` or `#[condition(...)]`.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys, kinds and ignore-case modes.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut config = Self::default();

        if let Meta::List(meta_list) = &attr.meta {
            meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("kind") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.kind = kind(&value.value())
                        .ok_or_else(|| syn::Error::new_spanned(&value, "unknown condition kind"))?;
                } else if meta.path.is_ident("ignore_case") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.ignore_case = ignore_case(&value.value()).ok_or_else(|| {
                        syn::Error::new_spanned(
                            &value,
                            "expected one of `never`, `always`, `when_possible`"
                        )
                    })?;
                } else if meta.path.is_ident("column") {
                    config.column = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("properties") {
                    let content;
                    parenthesized!(content in meta.input);
                    let names: Punctuated<LitStr, Token![,]> =
                        content.parse_terminated(|input| input.parse::<LitStr>(), Token![,])?;
                    config.properties = names.iter().map(LitStr::value).collect();
                } else {
                    return Err(meta.error(
                        "expected `kind`, `ignore_case`, `column` or `properties(...)`"
                    ));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}
