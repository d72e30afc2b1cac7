// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime parameter objects for generated statements.
//!
//! Generated statements read their inputs from one parameter object. The
//! types here serialize to exactly the names the statements reference:
//!
//! | Name | Type | Used by |
//! |------|------|---------|
//! | `__entity` | entity | insert, update |
//! | `__id` | id | update by id |
//! | `__ids` | list of ids | find, delete by ids |
//! | `__condition` | condition object with optional fields | find, count |
//! | `__sort` | [`Sort`] | find |
//! | `__offset`, `__pageSize` | [`Pageable`] | find by pager |
//! | `oredCriteria`, `distinct`, `orderByClause` | [`Example`] | find by example |
//!
//! ```rust
//! use mapper_core::{Order, Pageable, Sort, StatementParams};
//! use serde_json::json;
//!
//! let params: StatementParams<(), i64, ()> = StatementParams::new()
//!     .with_ids(vec![1, 2])
//!     .with_sort(Sort::by([Order::desc("created_at")]))
//!     .with_page(Pageable::of(2, 20));
//! assert_eq!(
//!     params.to_value().unwrap(),
//!     json!({
//!         "__ids": [1, 2],
//!         "__sort": [{ "property": "created_at", "direction": "desc", "ignoreCase": false }],
//!         "__offset": 40,
//!         "__pageSize": 20
//!     })
//! );
//! ```

use serde::{Deserialize, Serialize, ser::SerializeStruct};
use serde_json::Value;

use crate::error::{Error, Result};

/// Entity parameter name.
pub const ENTITY: &str = "__entity";
/// Id parameter name.
pub const ID: &str = "__id";
/// Id collection parameter name.
pub const IDS: &str = "__ids";
/// Condition object parameter name.
pub const CONDITION: &str = "__condition";
/// Sort parameter name.
pub const SORT: &str = "__sort";

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Parameters {
        message: e.to_string()
    })
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Property path; translated to a column by the statement.
    pub property:    String,
    /// Direction.
    pub direction:   Direction,
    /// Compare case-insensitively.
    pub ignore_case: bool
}

impl Order {
    /// Ascending order on `property`.
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property:    property.into(),
            direction:   Direction::Asc,
            ignore_case: false
        }
    }

    /// Descending order on `property`.
    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            direction: Direction::Desc,
            ..Self::asc(property)
        }
    }

    /// Fold case before comparing.
    #[must_use]
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

/// Ordered list of sort keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sort(Vec<Order>);

impl Sort {
    /// Sort by the given keys in order.
    pub fn by(orders: impl IntoIterator<Item = Order>) -> Self {
        Self(orders.into_iter().collect())
    }

    /// Append a key.
    #[must_use]
    pub fn and(mut self, order: Order) -> Self {
        self.0.push(order);
        self
    }

    /// Keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.0.iter()
    }

    /// Whether no key is set.
    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        self.0.is_empty()
    }
}

/// Page request serialized as `__offset` / `__pageSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
    #[serde(rename = "__offset")]
    offset:    u64,
    #[serde(rename = "__pageSize")]
    page_size: u64
}

impl Pageable {
    /// Zero-based page `page` of `size` rows.
    #[must_use]
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            offset:    page.saturating_mul(size),
            page_size: size
        }
    }

    /// Rows skipped.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

/// Parameter object of the generated statements.
///
/// `E` is the entity type, `I` the id type and `C` the condition type; unset
/// fields are left out of the object so `!= null` guards fail.
#[derive(Debug, Clone, Serialize)]
pub struct StatementParams<E = Value, I = Value, C = Value> {
    #[serde(rename = "__entity", skip_serializing_if = "Option::is_none")]
    entity:    Option<E>,
    #[serde(rename = "__id", skip_serializing_if = "Option::is_none")]
    id:        Option<I>,
    #[serde(rename = "__ids", skip_serializing_if = "Option::is_none")]
    ids:       Option<Vec<I>>,
    #[serde(rename = "__condition", skip_serializing_if = "Option::is_none")]
    condition: Option<C>,
    #[serde(rename = "__sort", skip_serializing_if = "Option::is_none")]
    sort:      Option<Sort>,
    #[serde(flatten)]
    page:      Option<Pageable>
}

impl<E, I, C> Default for StatementParams<E, I, C> {
    fn default() -> Self {
        Self {
            entity:    None,
            id:        None,
            ids:       None,
            condition: None,
            sort:      None,
            page:      None
        }
    }
}

impl<E, I, C> StatementParams<E, I, C> {
    /// Empty parameter object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `__entity`.
    #[must_use]
    pub fn with_entity(mut self, entity: E) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Set `__id`.
    #[must_use]
    pub fn with_id(mut self, id: I) -> Self {
        self.id = Some(id);
        self
    }

    /// Set `__ids`.
    #[must_use]
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = I>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Set `__condition`.
    #[must_use]
    pub fn with_condition(mut self, condition: C) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Set `__sort`; an empty sort is left out.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = (!sort.is_unsorted()).then_some(sort);
        self
    }

    /// Set `__offset` and `__pageSize`.
    #[must_use]
    pub fn with_page(mut self, page: Pageable) -> Self {
        self.page = Some(page);
        self
    }
}

impl<E: Serialize, I: Serialize, C: Serialize> StatementParams<E, I, C> {
    /// Serialize into the parameter object handed to the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameters`] when a field fails to serialize.
    pub fn to_value(&self) -> Result<Value> {
        to_value(self)
    }
}

/// Value shape of one [`Criterion`].
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionValue {
    /// `condition` stands alone (`x is null`).
    None,
    /// `condition #{value}`.
    Single(Value),
    /// `condition #{value} and #{secondValue}`.
    Between(Value, Value),
    /// `condition (#{a}, #{b}, ...)`.
    List(Vec<Value>)
}

/// One raw predicate of an example.
///
/// The condition text is inserted verbatim into the statement and must come
/// from trusted code, never from user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    condition: String,
    value:     CriterionValue
}

impl Criterion {
    /// Predicate text.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Bound values.
    #[must_use]
    pub fn value(&self) -> &CriterionValue {
        &self.value
    }
}

impl Serialize for Criterion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (value, second) = match &self.value {
            CriterionValue::None => (Value::Null, Value::Null),
            CriterionValue::Single(value) => (value.clone(), Value::Null),
            CriterionValue::Between(first, second) => (first.clone(), second.clone()),
            CriterionValue::List(values) => (Value::Array(values.clone()), Value::Null)
        };
        let mut state = serializer.serialize_struct("Criterion", 7)?;
        state.serialize_field("condition", &self.condition)?;
        state.serialize_field("value", &value)?;
        state.serialize_field("secondValue", &second)?;
        state.serialize_field("noValue", &matches!(self.value, CriterionValue::None))?;
        state.serialize_field("singleValue", &matches!(self.value, CriterionValue::Single(_)))?;
        state.serialize_field(
            "betweenValue",
            &matches!(self.value, CriterionValue::Between(..))
        )?;
        state.serialize_field("listValue", &matches!(self.value, CriterionValue::List(_)))?;
        state.end()
    }
}

/// AND-connected group of criteria.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct Criteria {
    criteria: Vec<Criterion>
}

impl Criteria {
    /// Empty group.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, condition: impl Into<String>, value: CriterionValue) -> Self {
        self.criteria.push(Criterion {
            condition: condition.into(),
            value
        });
        self
    }

    /// Predicate without a value, such as `deleted_at is null`.
    pub fn and_condition(self, condition: impl Into<String>) -> Self {
        self.push(condition, CriterionValue::None)
    }

    /// Predicate followed by one value, such as `name =`.
    pub fn and(self, condition: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(condition, CriterionValue::Single(value.into()))
    }

    /// Predicate followed by two values, such as `age between`.
    pub fn and_between(
        self,
        condition: impl Into<String>,
        first: impl Into<Value>,
        second: impl Into<Value>
    ) -> Self {
        self.push(
            condition,
            CriterionValue::Between(first.into(), second.into())
        )
    }

    /// Predicate followed by a value list, such as `id in`.
    pub fn and_list<V: Into<Value>>(
        self,
        condition: impl Into<String>,
        values: impl IntoIterator<Item = V>
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.push(condition, CriterionValue::List(values))
    }

    /// Criteria in order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// A group is rendered only when it has at least one criterion.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.criteria.is_empty()
    }
}

impl Serialize for Criteria {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Criteria", 2)?;
        state.serialize_field("criteria", &self.criteria)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.end()
    }
}

/// Parameter of `__find_by_example`: OR-connected criteria groups.
///
/// ```rust
/// use mapper_core::{Criteria, Example};
///
/// let example = Example::new()
///     .or(Criteria::new().and("name =", "alice").and_list("age in", [30, 31]))
///     .or(Criteria::new().and_condition("deleted_at is null"))
///     .distinct(true)
///     .order_by("name asc");
/// let value = example.to_value().unwrap();
/// assert_eq!(value["oredCriteria"][0]["criteria"][1]["listValue"], true);
/// assert_eq!(value["orderByClause"], "name asc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct Example {
    ored_criteria:   Vec<Criteria>,
    distinct:        bool,
    order_by_clause: Option<String>
}

impl Example {
    /// Example matching every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alternative group.
    pub fn or(mut self, criteria: Criteria) -> Self {
        self.ored_criteria.push(criteria);
        self
    }

    /// Select distinct rows.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Raw `order by` text; trusted input only.
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by_clause = Some(clause.into());
        self
    }

    /// Criteria groups in order.
    #[must_use]
    pub fn ored_criteria(&self) -> &[Criteria] {
        &self.ored_criteria
    }

    /// Serialize into the parameter object handed to the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameters`] when a value fails to serialize.
    pub fn to_value(&self) -> Result<Value> {
        to_value(self)
    }
}
