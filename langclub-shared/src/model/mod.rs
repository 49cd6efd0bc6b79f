//! Rows as they come out of the gateway
//!
//! All of these are read-only projections. Optional columns are kept optional and only
//! null-guarded when they are displayed.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::urls::AVATAR_PLACEHOLDER_URL;

#[cfg(test)]
mod test;

/// Icon class used for about cards that do not name their own
pub const DEFAULT_ABOUT_ICON: &str = "fas fa-lightbulb";

/// One raw row of the `site_settings` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRow {
    pub setting_name: String,
    pub setting_value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub order_index: i32,
    #[serde(default)]
    pub icon: Option<String>,
}
impl AboutCard {
    pub fn icon_class(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => DEFAULT_ABOUT_ICON,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(with = "event_date")]
    pub event_date: OffsetDateTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gallery_link: Option<String>,
    pub order_index: i32,
}

impl EventRecord {
    /// The date as shown on event cards, e.g. `07 Mar 2025`
    pub fn date_label(&self) -> String {
        self.event_date
            .format(time::macros::format_description!(
                "[day] [month repr:short] [year]"
            ))
            .unwrap_or_else(|_| self.event_date.date().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideshowImage {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSlide {
    pub id: i64,
    pub title_h1: String,
    #[serde(default)]
    pub title_h2: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub quote: String,
    #[serde(default)]
    pub author: Option<String>,
    pub order_index: i32,
}

/// A member of the executive committee or the panel
///
/// Both tables share this layout; which table is read is configured on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub batch_year: i32,
    #[serde(default)]
    pub roll_no: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "linkedin")]
    pub linkedin_url: Option<String>,
    pub order_index: i32,
}
impl Member {
    pub fn is_faculty(&self) -> bool {
        self.role == crate::FACULTY_ROLE
    }

    /// The image to show for this member, falling back to a placeholder with their initial
    pub fn avatar_url(&self) -> String {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => {
                let initial = self
                    .name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_else(|| "?".to_string());
                format!("{AVATAR_PLACEHOLDER_URL}?text={initial}")
            }
        }
    }
}

/// A row of the general club roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubMember {
    pub name: String,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

/// (De-)serialization of event timestamps.
///
/// The gateway hands out `timestamptz` columns as RFC 3339, but rows entered by hand or through
/// the Postgres text format carry `+HH` offsets, no seconds, a naive timestamp or just a date.
/// Anything without an offset is read as UTC.
pub mod event_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{
        format_description::{well_known::Rfc3339, BorrowedFormatItem},
        macros::format_description,
        Date, OffsetDateTime, PrimitiveDateTime,
    };

    const WITH_OFFSET: [&[BorrowedFormatItem<'static>]; 2] = [
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory][optional [:[offset_minute]]]"
        ),
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory][optional [:[offset_minute]]]"
        ),
    ];
    const NAIVE: [&[BorrowedFormatItem<'static>]; 2] = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn parse(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
        let normalized = raw.trim().replacen(' ', "T", 1);
        if let Ok(x) = OffsetDateTime::parse(&normalized, &Rfc3339) {
            return Ok(x);
        }
        for description in WITH_OFFSET {
            if let Ok(x) = OffsetDateTime::parse(&normalized, description) {
                return Ok(x);
            }
        }
        for description in NAIVE {
            if let Ok(x) = PrimitiveDateTime::parse(&normalized, description) {
                return Ok(x.assume_utc());
            }
        }
        Date::parse(&normalized, DATE_ONLY).map(|d| d.midnight().assume_utc())
    }

    pub fn serialize<S: Serializer>(
        value: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
