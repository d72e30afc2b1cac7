// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic condition translation.
//!
//! Every `#[condition]` becomes one guarded predicate inside the condition
//! block of `__find`, `__find_by_pager` and `__count`:
//!
//! ```text
//! <if test="__condition != null">
//!   <if test="__condition.name != null"> and lower(name) like <bind .../>lower(#{__bind_0_name})</if>
//!   <if test="__condition.min != null and __condition.max != null"> and age  between  #{__condition.min} and #{__condition.max}</if>
//! </if>
//! ```
//!
//! Each predicate starts with ` and `; the enclosing `<where>` strips the
//! first one, so the block conjoins with the `__ids` filter.
//!
//! Like patterns bind to `__bind_{n}_{operand}`, where `n` is the position
//! of the predicate in the block and dots in the operand become `_`.
//!
//! # Operators
//!
//! | Part type | Operator | Right side |
//! |-----------|----------|------------|
//! | `SimpleProperty` | `=` | `#{p}` |
//! | `NegatingSimpleProperty` | `<>` | `#{p}` |
//! | `LessThan`, `Before` | `<` | `#{p}` |
//! | `LessThanEqual` | `<=` | `#{p}` |
//! | `GreaterThan`, `After` | `>` | `#{p}` |
//! | `GreaterThanEqual` | `>=` | `#{p}` |
//! | `Between` | ` between ` | `#{a} and #{b}` |
//! | `Like`, `NotLike` | ` like `, ` not like ` | `#{p}` (caller supplies the pattern) |
//! | `StartingWith`, `EndingWith`, `Containing` | ` like ` | bound pattern |
//! | `NotContaining` | ` not like ` | bound pattern |
//! | `In`, `NotIn` | ` in `, ` not in ` | `<foreach>` list, items folded too |
//! | `IsNull`, `IsNotNull` | ` is null`, ` is not null` | empty |
//! | `True`, `False` | ` = true`, ` = false` | empty |
//!
//! Operators containing `<` are wrapped in CDATA when rendered.

use std::borrow::Cow;

use super::helpers::cdata;
use crate::{
    dialect::Dialect,
    error::{Error, Result},
    metadata::{ConditionSpec, IgnoreCaseType, PartType, PersistentEntity, PersistentProperty},
    params::CONDITION
};

/// Raw SQL operator for a part type.
#[must_use]
pub const fn operator(part: PartType) -> &'static str {
    match part {
        PartType::SimpleProperty => "=",
        PartType::NegatingSimpleProperty => "<>",
        PartType::LessThan | PartType::Before => "<",
        PartType::LessThanEqual => "<=",
        PartType::GreaterThan | PartType::After => ">",
        PartType::GreaterThanEqual => ">=",
        PartType::Between => " between ",
        PartType::Like | PartType::StartingWith | PartType::EndingWith | PartType::Containing => {
            " like "
        }
        PartType::NotLike | PartType::NotContaining => " not like ",
        PartType::In => " in ",
        PartType::NotIn => " not in ",
        PartType::IsNull => " is null",
        PartType::IsNotNull => " is not null",
        PartType::True => " = true",
        PartType::False => " = false"
    }
}

/// Operator as it appears in mapper text.
#[must_use]
pub fn operator_segment(part: PartType) -> String {
    cdata(operator(part))
}

/// Operand properties: the declared list, or the annotated property.
#[must_use]
pub fn operands<'a>(property: &'a PersistentProperty, spec: &'a ConditionSpec) -> Vec<&'a str> {
    if spec.declared_properties().is_empty() {
        vec![property.name()]
    } else {
        spec.declared_properties().iter().map(String::as_str).collect()
    }
}

/// Fail when a kind with operands gets the wrong number of them.
///
/// Kinds with arity zero accept any operand list; the operands only act as
/// presence flags.
///
/// # Errors
///
/// Returns [`Error::ConditionArity`] naming the expected and actual counts.
pub fn check_arity(
    entity: &PersistentEntity,
    property: &PersistentProperty,
    part: PartType,
    actual: usize
) -> Result<()> {
    let expected = part.arity();
    if expected > 0 && expected != actual {
        return Err(Error::ConditionArity {
            entity: entity.type_name().to_string(),
            property: property.name().to_string(),
            part: part.name(),
            expected,
            actual
        });
    }
    Ok(())
}

/// Left side: column, folded when the mode asks for it.
#[must_use]
pub fn left_segment(column: &str, ignore_case: IgnoreCaseType, lowercase: &str) -> String {
    if ignore_case.folds() {
        format!("{lowercase}({column})")
    } else {
        column.to_string()
    }
}

fn bound(path: &str, ignore_case: IgnoreCaseType, lowercase: &str) -> String {
    if ignore_case.folds() {
        format!("{lowercase}(#{{{path}}})")
    } else {
        format!("#{{{path}}}")
    }
}

/// Bind variable for the like pattern of the `index`-th predicate.
#[must_use]
pub fn bind_name(index: usize, operand: &str) -> String {
    format!("__bind_{index}_{}", operand.replace('.', "_"))
}

fn like_pattern(
    property: &str,
    index: usize,
    leading: bool,
    trailing: bool,
    ignore_case: IgnoreCaseType,
    lowercase: &str
) -> String {
    let name = bind_name(index, property);
    format!(
        "<bind name=\"{name}\" value=\"{}{CONDITION}.{property}{}\" />{}",
        if leading { "'%' + " } else { "" },
        if trailing { " + '%'" } else { "" },
        bound(&name, ignore_case, lowercase)
    )
}

/// Right side for `operands` already checked against the arity.
///
/// Operands are read from the `__condition` parameter object. `index` is the
/// position of the predicate in its block and keeps like bindings apart.
#[must_use]
pub fn right_segment(
    part: PartType,
    ignore_case: IgnoreCaseType,
    operands: &[&str],
    index: usize,
    lowercase: &str
) -> String {
    let first = operands.first().copied().unwrap_or_default();
    match part {
        PartType::Between => {
            let second = operands.get(1).copied().unwrap_or_default();
            format!(
                "{} and {}",
                bound(&format!("{CONDITION}.{first}"), ignore_case, lowercase),
                bound(&format!("{CONDITION}.{second}"), ignore_case, lowercase)
            )
        }
        PartType::IsNull | PartType::IsNotNull | PartType::True | PartType::False => String::new(),
        PartType::StartingWith => {
            like_pattern(first, index, false, true, ignore_case, lowercase)
        }
        PartType::EndingWith => like_pattern(first, index, true, false, ignore_case, lowercase),
        PartType::Containing | PartType::NotContaining => {
            like_pattern(first, index, true, true, ignore_case, lowercase)
        }
        PartType::In | PartType::NotIn => format!(
            "<foreach item=\"__item\" index=\"__index\" collection=\"{CONDITION}.{first}\" \
             open=\"(\" separator=\",\" close=\")\">{}</foreach>",
            bound("__item", ignore_case, lowercase)
        ),
        _ => bound(&format!("{CONDITION}.{first}"), ignore_case, lowercase)
    }
}

/// One guarded predicate, the `index`-th of its block.
///
/// # Errors
///
/// Returns [`Error::ConditionArity`] when the operand count is wrong.
pub fn condition_item(
    entity: &PersistentEntity,
    property: &PersistentProperty,
    spec: &ConditionSpec,
    index: usize,
    dialect: &dyn Dialect
) -> Result<String> {
    let operands = operands(property, spec);
    check_arity(entity, property, spec.part(), operands.len())?;

    let test = operands
        .iter()
        .map(|p| format!("{CONDITION}.{p} != null"))
        .collect::<Vec<_>>()
        .join(" and ");
    let column: Cow<'_, str> = match spec.column_override() {
        Some(column) if !column.is_empty() => Cow::Borrowed(column),
        _ => Cow::Owned(property.column().name().render(dialect))
    };
    let lowercase = dialect.lowercase_function();
    let left = left_segment(&column, spec.ignore_case_type(), lowercase);
    let right = right_segment(
        spec.part(),
        spec.ignore_case_type(),
        &operands,
        index,
        lowercase
    );

    let mut predicate = format!("{left} {}", operator_segment(spec.part()));
    if !right.is_empty() {
        predicate.push(' ');
        predicate.push_str(&right);
    }
    Ok(format!("<if test=\"{test}\"> and {predicate}</if>"))
}

/// The whole condition block, guarded by `__condition != null`.
///
/// Predicates follow property declaration order, then condition declaration
/// order within a property.
///
/// # Errors
///
/// Returns [`Error::ConditionArity`] for the first malformed condition.
pub fn condition_block(entity: &PersistentEntity, dialect: &dyn Dialect) -> Result<String> {
    let mut items = String::new();
    let specs = entity
        .properties()
        .iter()
        .flat_map(|property| property.conditions().iter().map(move |spec| (property, spec)));
    for (index, (property, spec)) in specs.enumerate() {
        items.push_str(&condition_item(entity, property, spec, index, dialect)?);
    }
    Ok(format!("<if test=\"{CONDITION} != null\">{items}</if>"))
}
