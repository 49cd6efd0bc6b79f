//! Site-wide settings, fetched once by the shell and consumed by Header and Footer

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::SettingRow;

#[cfg(test)]
mod test;

/// A name with a link, used for societies, clubs and social profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub url: String,
}
impl NamedLink {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

const DEFAULT_SOCIETIES: &[(&str, &str)] = &[
    ("IEEE", "https://ieeesbnbkrist2k24.netlify.app/"),
    ("ISTE", "https://www.nbkrist.co.in/iste.php"),
    ("CSI", "https://www.nbkrist.co.in/csi_sb.php"),
    ("IETE", "https://www.nbkrist.co.in/iete.php"),
    ("IEI", "https://www.nbkrist.co.in/iei.php"),
    ("RSI", "https://www.nbkrist.co.in/rsi.php"),
    ("SAE", "https://www.nbkrist.co.in/sae.php"),
];

const DEFAULT_CLUBS: &[(&str, &str)] = &[
    ("Language Club", "#home"),
    ("Literary Club", "https://www.nbkrist.co.in/Literaryclub.php"),
    ("Coding Club", "https://www.nbkrist.co.in/Codingclub.php"),
    ("Painting Club", "https://www.nbkrist.co.in/Paintingclub.php"),
    ("Cultural Club", "https://www.nbkrist.co.in/Cultural.php"),
    ("Yoga Club", "https://www.nbkrist.co.in/yogaclub.php"),
];

const DEFAULT_SOCIAL_LINKS: &[(&str, &str)] = &[
    ("instagram", "https://www.instagram.com/languageclubnbkrist"),
    ("facebook", "https://www.facebook.com/nbkrist.nbkrist"),
    ("linkedin", "https://www.linkedin.com/in/languageclub/"),
    ("twitter", "https://x.com/NBKRIST2"),
];

const DEFAULT_PHONE: &str = "+91 9063918326";
const DEFAULT_EMAIL: &str = "languageclub@nbkrist.org";
const DEFAULT_ADDRESS: &str = "NBKRIST, Vidyanagar, A.P, India";

/// Mapping from setting name to its (JSON) value
///
/// Every accessor has a built-in fallback, so a partially filled settings table still renders a
/// complete footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    values: BTreeMap<String, serde_json::Value>,
}
impl SiteSettings {
    pub fn from_rows(rows: Vec<SettingRow>) -> Self {
        Self {
            values: rows
                .into_iter()
                .map(|row| (row.setting_name, row.setting_value))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values.get(name)
    }

    /// A setting that holds a plain string
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `social_links` is stored as an object `{ "instagram": "https://..", .. }`
    pub fn social_links(&self) -> Vec<NamedLink> {
        let from_settings = self
            .get("social_links")
            .and_then(|v| v.as_object())
            .map(|obj| {
                obj.iter()
                    .filter_map(|(name, url)| {
                        url.as_str()
                            .filter(|u| !u.is_empty())
                            .map(|u| NamedLink::new(name, u))
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        if from_settings.is_empty() {
            defaults(DEFAULT_SOCIAL_LINKS)
        } else {
            from_settings
        }
    }

    pub fn contact_info(&self) -> ContactInfo {
        let obj = self.get("contact_info").and_then(|v| v.as_object());
        let field = |key: &str, default: &str| {
            obj.and_then(|o| o.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or(default)
                .to_string()
        };
        ContactInfo {
            phone: field("phone", DEFAULT_PHONE),
            email: field("email", DEFAULT_EMAIL),
            address: field("address", DEFAULT_ADDRESS),
        }
    }

    pub fn professional_societies(&self) -> Vec<NamedLink> {
        self.link_list("professional_societies", DEFAULT_SOCIETIES)
    }

    pub fn clubs(&self) -> Vec<NamedLink> {
        self.link_list("clubs", DEFAULT_CLUBS)
    }

    /// A list setting stored as `[{ "name": .., "url": .. }, ..]`
    fn link_list(&self, name: &str, fallback: &[(&str, &str)]) -> Vec<NamedLink> {
        match self
            .get(name)
            .cloned()
            .map(serde_json::from_value::<Vec<NamedLink>>)
        {
            Some(Ok(links)) if !links.is_empty() => links,
            _ => defaults(fallback),
        }
    }
}

fn defaults(pairs: &[(&str, &str)]) -> Vec<NamedLink> {
    pairs
        .iter()
        .map(|(name, url)| NamedLink::new(name, url))
        .collect()
}
