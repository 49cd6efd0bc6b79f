use serde_json::json;

use super::*;

fn row(name: &str, value: serde_json::Value) -> SettingRow {
    SettingRow {
        setting_name: name.to_string(),
        setting_value: value,
    }
}

#[test]
fn empty_settings_fall_back_everywhere() {
    let settings = SiteSettings::default();
    assert!(settings.is_empty());
    assert_eq!(settings.professional_societies().len(), DEFAULT_SOCIETIES.len());
    assert_eq!(settings.clubs()[0].name, "Language Club");
    assert_eq!(settings.contact_info().email, DEFAULT_EMAIL);
    assert_eq!(settings.social_links().len(), DEFAULT_SOCIAL_LINKS.len());
}

#[test]
fn rows_override_defaults() {
    let settings = SiteSettings::from_rows(vec![
        row(
            "social_links",
            json!({ "instagram": "https://insta/club", "facebook": "" }),
        ),
        row(
            "contact_info",
            json!({ "phone": "+91 1", "email": "club@example.org" }),
        ),
        row("clubs", json!([{ "name": "Chess Club", "url": "https://chess" }])),
        row("tagline", json!("Where words meet innovation")),
    ]);

    assert_eq!(settings.len(), 4);
    // empty urls are dropped
    assert_eq!(
        settings.social_links(),
        vec![NamedLink::new("instagram", "https://insta/club")]
    );
    let contact = settings.contact_info();
    assert_eq!(contact.phone, "+91 1");
    assert_eq!(contact.email, "club@example.org");
    assert_eq!(contact.address, DEFAULT_ADDRESS);
    assert_eq!(
        settings.clubs(),
        vec![NamedLink::new("Chess Club", "https://chess")]
    );
    assert_eq!(settings.text("tagline"), Some("Where words meet innovation"));
    assert_eq!(settings.text("clubs"), None);
}

#[test]
fn malformed_list_uses_fallback() {
    let settings = SiteSettings::from_rows(vec![row(
        "professional_societies",
        json!({ "not": "a list" }),
    )]);
    assert_eq!(settings.professional_societies()[0].name, "IEEE");
}

#[test]
fn later_rows_win() {
    let settings = SiteSettings::from_rows(vec![
        row("tagline", json!("old")),
        row("tagline", json!("new")),
    ]);
    assert_eq!(settings.text("tagline"), Some("new"));
}
