use serde_json::json;
use time::macros::datetime;

use super::*;

fn member(name: &str, image_url: Option<&str>) -> Member {
    Member {
        id: 1,
        name: name.to_string(),
        role: "Secretary".to_string(),
        batch_year: 2024,
        roll_no: None,
        branch: None,
        image_url: image_url.map(str::to_string),
        linkedin_url: None,
        order_index: 0,
    }
}

#[test]
fn event_date_accepts_rfc3339_with_offset() {
    let row = json!({
        "id": 3,
        "title": "Debate",
        "event_date": "2025-03-01T10:00:00+05:30",
        "order_index": 1,
    });
    let event: EventRecord = serde_json::from_value(row).unwrap();
    assert_eq!(event.event_date, datetime!(2025-03-01 04:30 UTC));
    assert_eq!(event.description, None);
}

#[test]
fn event_date_reads_naive_timestamps_as_utc() {
    assert_eq!(
        event_date::parse("2025-03-01 10:00:00").unwrap(),
        datetime!(2025-03-01 10:00 UTC)
    );
    assert_eq!(
        event_date::parse("2025-03-01T10:00:00.250").unwrap(),
        datetime!(2025-03-01 10:00:00.250 UTC)
    );
    assert_eq!(
        event_date::parse("2025-03-01").unwrap(),
        datetime!(2025-03-01 0:00 UTC)
    );
}

#[test]
fn event_date_reads_postgres_text_offsets() {
    assert_eq!(
        event_date::parse("2025-03-07 10:00:00+00").unwrap(),
        datetime!(2025-03-07 10:00 UTC)
    );
    assert_eq!(
        event_date::parse("2025-03-07 10:00:00+05:30").unwrap(),
        datetime!(2025-03-07 04:30 UTC)
    );
    assert_eq!(
        event_date::parse("2025-03-07 10:00:00.5-02").unwrap(),
        datetime!(2025-03-07 12:00:00.5 UTC)
    );
}

#[test]
fn event_date_allows_missing_seconds() {
    assert_eq!(
        event_date::parse("2025-03-07T10:00").unwrap(),
        datetime!(2025-03-07 10:00 UTC)
    );
    assert_eq!(
        event_date::parse("2025-03-07 10:00+01").unwrap(),
        datetime!(2025-03-07 09:00 UTC)
    );
}

#[test]
fn event_date_rejects_garbage() {
    assert!(event_date::parse("next tuesday").is_err());
}

#[test]
fn event_survives_the_server_function_transport() {
    let event = EventRecord {
        id: 9,
        title: "Poetry night".to_string(),
        description: Some("Verses".to_string()),
        detailed_description: None,
        event_date: datetime!(2024-11-20 18:30 UTC),
        location: Some("Seminar hall".to_string()),
        gallery_link: None,
        order_index: 2,
    };
    let wire = serde_json::to_string(&event).unwrap();
    let back: EventRecord = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, event);
}

#[test]
fn event_date_label_is_day_month_year() {
    let event: EventRecord = serde_json::from_value(json!({
        "id": 1,
        "title": "Debate",
        "event_date": "2025-03-07",
        "order_index": 0,
    }))
    .unwrap();
    assert_eq!(event.date_label(), "07 Mar 2025");
}

#[test]
fn member_avatar_falls_back_to_initial_placeholder() {
    assert_eq!(
        member("ravi", None).avatar_url(),
        format!("{AVATAR_PLACEHOLDER_URL}?text=R")
    );
    assert_eq!(
        member("Ravi", Some("  ")).avatar_url(),
        format!("{AVATAR_PLACEHOLDER_URL}?text=R")
    );
    assert_eq!(
        member("Ravi", Some("https://img/ravi.png")).avatar_url(),
        "https://img/ravi.png"
    );
}

#[test]
fn member_reads_legacy_linkedin_column() {
    let row = json!({
        "id": 4,
        "name": "Asha",
        "role": "Faculty In-charge",
        "batch_year": 2023,
        "linkedin": "https://linkedin.com/in/asha",
        "order_index": 0,
    });
    let m: Member = serde_json::from_value(row).unwrap();
    assert!(m.is_faculty());
    assert_eq!(m.linkedin_url.as_deref(), Some("https://linkedin.com/in/asha"));
}

#[test]
fn about_card_icon_defaults() {
    let mut card = AboutCard {
        id: 1,
        title: "Vision".to_string(),
        description: String::new(),
        order_index: 0,
        icon: None,
    };
    assert_eq!(card.icon_class(), DEFAULT_ABOUT_ICON);
    card.icon = Some("fas fa-globe".to_string());
    assert_eq!(card.icon_class(), "fas fa-globe");
}
