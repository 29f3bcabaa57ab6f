///! Tests for the query specification builder.
///!
///! The builder is a pure function over the raw query parameters and the
///! entity's allow-list, so everything here runs without a server or a
///! database. Run with: `cargo test --test query_spec_test`
use actix_web::FromRequest;
use actix_web::dev::Payload;
use actix_web::test::TestRequest;
use sea_orm::{DbBackend, EntityTrait, QueryTrait};

use wordbook_backend::models::{categories, words};
use wordbook_backend::query::{
    Direction, ListQuery, OrderBy, QuerySpec, Sortable, collect_raw_params,
};

/// Allow-list used by most tests; matches the categories entity.
const ALLOWED: &[&str] = &["id", "name"];

/// Helper: build a spec from plain string slices.
fn build(limit: &str, skip: &str, order_by: &[&str]) -> QuerySpec {
    let terms: Vec<String> = order_by.iter().map(|s| s.to_string()).collect();
    QuerySpec::build(limit, skip, &terms, ALLOWED)
}

#[test]
fn test_empty_limit_falls_back_to_default() {
    assert_eq!(build("", "", &[]).limit(), 50);
}

#[test]
fn test_non_numeric_limit_falls_back_to_default() {
    assert_eq!(build("abc", "", &[]).limit(), 50);
    assert_eq!(build("1.5", "", &[]).limit(), 50);
}

#[test]
fn test_limit_within_range_is_kept() {
    assert_eq!(build("1", "", &[]).limit(), 1);
    assert_eq!(build("37", "", &[]).limit(), 37);
    assert_eq!(build("100", "", &[]).limit(), 100);
}

#[test]
fn test_limit_out_of_range_resets_to_default() {
    // Resets to 50, deliberately not clamped to the nearest bound.
    assert_eq!(build("0", "", &[]).limit(), 50);
    assert_eq!(build("101", "", &[]).limit(), 50);
    assert_eq!(build("-5", "", &[]).limit(), 50);
}

#[test]
fn test_empty_skip_falls_back_to_default() {
    assert_eq!(build("", "", &[]).skip(), 0);
    assert_eq!(build("", "abc", &[]).skip(), 0);
}

#[test]
fn test_skip_within_range_is_kept() {
    assert_eq!(build("", "0", &[]).skip(), 0);
    assert_eq!(build("", "12345", &[]).skip(), 12345);
    assert_eq!(build("", "2147483647", &[]).skip(), 2147483647);
}

#[test]
fn test_skip_out_of_range_resets_to_default() {
    assert_eq!(build("", "2147483648", &[]).skip(), 0);
    assert_eq!(build("", "-1", &[]).skip(), 0);
}

#[test]
fn test_order_term_with_valid_direction() {
    let spec = build("", "", &["name desc"]);
    assert_eq!(
        spec.order_by(),
        &[OrderBy {
            field: "name".to_string(),
            direction: Direction::Desc,
        }]
    );
}

#[test]
fn test_direction_token_is_case_insensitive() {
    assert_eq!(Direction::parse("asc"), Direction::Asc);
    assert_eq!(Direction::parse("ASC"), Direction::Asc);
    assert_eq!(Direction::parse("desc"), Direction::Desc);
    assert_eq!(Direction::parse("DESC"), Direction::Desc);
    assert_eq!(Direction::parse("Desc"), Direction::Desc);
}

#[test]
fn test_unknown_direction_token_keeps_term_as_asc() {
    let spec = build("", "", &["name up"]);
    assert_eq!(spec.order_by().len(), 1);
    assert_eq!(spec.order_by()[0].field, "name");
    assert_eq!(spec.order_by()[0].direction, Direction::Asc);
}

#[test]
fn test_term_without_space_is_dropped() {
    assert!(build("", "", &["onlyonefield"]).order_by().is_empty());
}

#[test]
fn test_term_with_extra_tokens_is_dropped() {
    assert!(build("", "", &["name desc extra"]).order_by().is_empty());
    assert!(build("", "", &["name  desc"]).order_by().is_empty());
}

#[test]
fn test_field_not_in_allow_list_is_dropped() {
    assert!(build("", "", &["secret desc"]).order_by().is_empty());
}

#[test]
fn test_surviving_terms_keep_relative_order() {
    let spec = build("", "", &["id asc", "secret desc", "name desc"]);
    assert_eq!(
        spec.order_by(),
        &[
            OrderBy {
                field: "id".to_string(),
                direction: Direction::Asc,
            },
            OrderBy {
                field: "name".to_string(),
                direction: Direction::Desc,
            },
        ]
    );
}

#[test]
fn test_building_twice_yields_identical_specs() {
    let a = build("7", "3", &["name desc", "id asc"]);
    let b = build("7", "3", &["name desc", "id asc"]);
    assert_eq!(a, b);
}

#[test]
fn test_direction_renders_as_sql_keyword() {
    assert_eq!(Direction::Asc.as_str(), "ASC");
    assert_eq!(Direction::Desc.as_str(), "DESC");
}

#[test]
fn test_sortable_allow_lists_per_entity() {
    assert_eq!(categories::Entity::sortable_fields(), &["id", "name"]);
    assert_eq!(words::Entity::sortable_fields(), &["id", "term"]);

    assert!(categories::Entity::sort_column("name").is_some());
    assert!(categories::Entity::sort_column("secret").is_none());
    assert!(words::Entity::sort_column("term").is_some());
    assert!(words::Entity::sort_column("name").is_none());
}

#[test]
fn test_scope_composes_order_offset_and_limit() {
    let spec = build("25", "10", &["name desc", "id asc"]);
    let sql = spec
        .scope(categories::Entity::find())
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains("LIMIT 25"), "sql was: {sql}");
    assert!(sql.contains("OFFSET 10"), "sql was: {sql}");
    // name is the primary sort key, id the tie-breaker.
    let name_pos = sql.find("\"name\" DESC").expect("missing name sort key");
    let id_pos = sql.rfind("\"id\" ASC").expect("missing id sort key");
    assert!(name_pos < id_pos, "sql was: {sql}");
}

#[test]
fn test_collect_raw_params_gathers_repeated_order_by() {
    let (limit, skip, order_by) =
        collect_raw_params("limit=10&skip=5&order_by=id+asc&order_by=name+desc");

    assert_eq!(limit, "10");
    assert_eq!(skip, "5");
    assert_eq!(order_by, vec!["id asc".to_string(), "name desc".to_string()]);
}

#[test]
fn test_collect_raw_params_decodes_percent_encoding() {
    let (_, _, order_by) = collect_raw_params("order_by=name%20desc");
    assert_eq!(order_by, vec!["name desc".to_string()]);
}

#[test]
fn test_collect_raw_params_first_scalar_value_wins() {
    let (limit, skip, _) = collect_raw_params("limit=10&limit=abc&skip=3&skip=99");
    assert_eq!(limit, "10");
    assert_eq!(skip, "3");
}

#[test]
fn test_collect_raw_params_on_empty_query_string() {
    let (limit, skip, order_by) = collect_raw_params("");
    assert_eq!(limit, "");
    assert_eq!(skip, "");
    assert!(order_by.is_empty());
}

#[actix_web::test]
async fn test_list_query_extractor_never_rejects() {
    // Garbage paging values and a disallowed sort field still extract.
    let req = TestRequest::with_uri(
        "/api/categories?limit=abc&skip=-1&order_by=secret+desc&order_by=name+desc",
    )
    .to_http_request();

    let query = ListQuery::<categories::Entity>::from_request(&req, &mut Payload::None)
        .await
        .expect("extraction must not fail");

    assert_eq!(query.spec.limit(), 50);
    assert_eq!(query.spec.skip(), 0);
    assert_eq!(
        query.spec.order_by(),
        &[OrderBy {
            field: "name".to_string(),
            direction: Direction::Desc,
        }]
    );
}
