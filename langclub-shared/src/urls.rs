//! URLs shared between front- and backend
//!
//! for consistency, all endpoint urls in this module that live on our own server start with a /

/// Path below the gateway base url where the tables are exposed
pub const GATEWAY_REST_PATH: &str = "/rest/v1";
/// The external relay that forwards contact-form submissions as e-mail
pub const CONTACT_RELAY_ENDPOINT: &str = "https://formsubmit.co/languageclub@nbkrist.org";
/// Placeholder avatar service; the member initial is appended as `?text=`
pub const AVATAR_PLACEHOLDER_URL: &str = "https://placehold.co/128x128/312e81/a5b4fc";
/// Where the college itself lives, linked from the header logo
pub const COLLEGE_HOME_URL: &str = "https://www.nbkrist.co.in/";
