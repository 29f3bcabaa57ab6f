use std::future::{Ready, ready};
use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest};
use sea_orm::{EntityTrait, Order, QueryOrder, QuerySelect, Select};

pub const LIMIT_PARAM: &str = "limit";
pub const SKIP_PARAM: &str = "skip";
pub const ORDER_BY_PARAM: &str = "order_by";

const LIMIT_DEFAULT: u64 = 50;
const LIMIT_MIN: u64 = 1;
const LIMIT_MAX: u64 = 100;

const SKIP_DEFAULT: u64 = 0;
const SKIP_MIN: u64 = 0;
const SKIP_MAX: u64 = i32::MAX as u64;

/// Sort direction for one `order_by` term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a free-form direction token. Anything that is not a
    /// case-insensitive `desc` means ascending — a bad token never
    /// fails the surrounding term.
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl From<Direction> for Order {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

/// One validated sort key: a field name plus its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// Entities that expose a fixed set of columns clients may sort by.
///
/// `sort_column` must return `Some` for exactly the names listed in
/// `sortable_fields`; the builder filters on the names, the scope step
/// maps them to columns.
pub trait Sortable: EntityTrait {
    fn sortable_fields() -> &'static [&'static str];

    fn sort_column(field: &str) -> Option<Self::Column>;
}

/// Bounded, validated paging and ordering controls for one list request.
///
/// Built once from the raw query parameters and read-only afterwards.
/// Construction never fails: unparseable or out-of-range numbers reset
/// to their defaults and bad order terms are dropped, so a sloppy query
/// string still produces a spec that is safe to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    limit: u64,
    skip: u64,
    order_by: Vec<OrderBy>,
}

impl QuerySpec {
    /// Build a spec from raw parameter values (absent = empty string)
    /// and the entity's allow-list of sortable field names.
    pub fn build(
        raw_limit: &str,
        raw_skip: &str,
        raw_order_by: &[String],
        allowed_fields: &[&str],
    ) -> Self {
        let order_by = raw_order_by
            .iter()
            .filter_map(|term| parse_order_term(term))
            .filter(|o| allowed_fields.contains(&o.field.as_str()))
            .collect();

        QuerySpec {
            limit: parse_bounded(raw_limit, LIMIT_DEFAULT, LIMIT_MIN, LIMIT_MAX),
            skip: parse_bounded(raw_skip, SKIP_DEFAULT, SKIP_MIN, SKIP_MAX),
            order_by,
        }
    }

    /// Row cap, always within [1, 100].
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Row offset, always within [0, 2^31 - 1].
    pub fn skip(&self) -> u64 {
        self.skip
    }

    /// Sort keys in tie-break precedence order. Every field here is
    /// allow-listed for the entity the spec was built for.
    pub fn order_by(&self) -> &[OrderBy] {
        &self.order_by
    }

    /// Apply the spec to a select: each order term in sequence as a
    /// primary/secondary/... sort key, then the offset, then the cap.
    pub fn scope<E: Sortable>(&self, query: Select<E>) -> Select<E> {
        let mut query = query;

        for term in &self.order_by {
            if let Some(col) = E::sort_column(&term.field) {
                query = query.order_by(col, term.direction.into());
            }
        }

        query.offset(self.skip).limit(self.limit)
    }
}

/// Parse a base-10 integer and check it against [min, max]. A value
/// that fails to parse or falls outside the range resets to the
/// default — it is deliberately not clamped to the nearest bound.
fn parse_bounded(input: &str, default: u64, min: u64, max: u64) -> u64 {
    match input.parse::<u64>() {
        Ok(n) if (min..=max).contains(&n) => n,
        _ => default,
    }
}

/// Parse one raw `"<field> <direction>"` term. A term that does not
/// split into exactly two space-separated tokens is dropped.
fn parse_order_term(input: &str) -> Option<OrderBy> {
    let mut tokens = input.split(' ');

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(field), Some(direction), None) => Some(OrderBy {
            field: field.to_owned(),
            direction: Direction::parse(direction),
        }),
        _ => None,
    }
}

/// Pull the raw `limit`, `skip` and repeated `order_by` values out of a
/// query string. actix's serde-based `Query` extractor cannot collect a
/// repeated key, so this walks the pairs directly. For the scalar
/// params the first occurrence wins; `order_by` collects every one.
pub fn collect_raw_params(query: &str) -> (String, String, Vec<String>) {
    let mut limit = None;
    let mut skip = None;
    let mut order_by = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            LIMIT_PARAM if limit.is_none() => limit = Some(value.into_owned()),
            SKIP_PARAM if skip.is_none() => skip = Some(value.into_owned()),
            ORDER_BY_PARAM => order_by.push(value.into_owned()),
            _ => {}
        }
    }

    (
        limit.unwrap_or_default(),
        skip.unwrap_or_default(),
        order_by,
    )
}

/// Extractor that builds a [`QuerySpec`] for entity `E` from the
/// request's query string. Extraction never rejects the request.
pub struct ListQuery<E: Sortable> {
    pub spec: QuerySpec,
    marker: PhantomData<E>,
}

impl<E: Sortable> FromRequest for ListQuery<E> {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let (limit, skip, order_by) = collect_raw_params(req.query_string());

        ready(Ok(ListQuery {
            spec: QuerySpec::build(&limit, &skip, &order_by, E::sortable_fields()),
            marker: PhantomData,
        }))
    }
}
