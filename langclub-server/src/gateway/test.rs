use std::time::Duration;

use serde_json::json;

use super::memory::MemoryGateway;
use super::rest::error_message;
use super::*;

#[test]
fn plain_query_selects_everything() {
    let query = Query::from("about_cards");
    assert_eq!(query.query_pairs(), vec![("select", "*".to_string())]);
}

#[test]
fn multi_column_order_is_comma_joined() {
    let query = Query::from("execom_members")
        .select("id,name,batch_year")
        .order("batch_year", Direction::Descending)
        .order("order_index", Direction::Ascending);
    assert_eq!(
        query.query_pairs(),
        vec![
            ("select", "id,name,batch_year".to_string()),
            ("order", "batch_year.desc,order_index.asc".to_string()),
        ]
    );
}

#[test]
fn table_url_is_below_rest_path() {
    let gateway = RestGateway::new(
        "https://example.supabase.co/",
        "anon".to_string(),
        Duration::from_secs(5),
    )
    .unwrap();
    assert_eq!(
        gateway.table_url("home_slides"),
        "https://example.supabase.co/rest/v1/home_slides"
    );
    assert_eq!(
        gateway.table_url("odd table"),
        "https://example.supabase.co/rest/v1/odd%20table"
    );
}

#[test]
fn error_bodies_surface_their_message() {
    assert_eq!(
        error_message(r#"{"code":"42P01","message":"relation \"x\" does not exist"}"#),
        Some("relation \"x\" does not exist".to_string())
    );
    assert_eq!(error_message(r#"{"message":""}"#), None);
    assert_eq!(error_message("<html>bad gateway</html>"), None);
}

#[test]
fn bad_status_display_includes_message() {
    let e = GatewayError::BadStatusCode(StatusCode::NOT_FOUND, Some("no such table".to_string()));
    assert_eq!(
        e.to_string(),
        "Got status code 404 Not Found from the gateway: no such table"
    );
}

#[tokio::test]
async fn memory_gateway_orders_with_tie_breaker() {
    let gateway = MemoryGateway::default().with_table(
        "members",
        vec![
            json!({"id": 1, "batch_year": 2023, "order_index": 2}),
            json!({"id": 2, "batch_year": 2024, "order_index": 1}),
            json!({"id": 3, "batch_year": 2023, "order_index": 1}),
            json!({"id": 4, "batch_year": 2024, "order_index": 0}),
        ],
    );
    let query = Query::from("members")
        .order("batch_year", Direction::Descending)
        .order("order_index", Direction::Ascending);
    let rows = gateway.select(&query).await.unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![4, 2, 3, 1]);
}

#[tokio::test]
async fn fetch_reports_the_table_on_decode_errors() {
    let gateway =
        MemoryGateway::default().with_table("testimonials", vec![json!({"id": "not a number"})]);
    let res = fetch::<langclub_shared::model::Testimonial>(&gateway, &Query::from("testimonials"))
        .await;
    match res {
        Err(GatewayError::Decode(table, _)) => assert_eq!(table, "testimonials"),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_table_is_not_found() {
    let gateway = MemoryGateway::default();
    match gateway.select(&Query::from("nope")).await {
        Err(GatewayError::BadStatusCode(code, _)) => assert_eq!(code, StatusCode::NOT_FOUND),
        other => panic!("expected 404, got {other:?}"),
    }
}
