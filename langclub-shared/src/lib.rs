//! Types and functions shared by App and Server

pub mod batch;
pub mod contact;
pub mod events;
pub mod fetch;
pub mod model;
pub mod pages;
pub mod route;
pub mod settings;
pub mod urls;
pub mod widgets;

use serde::{Deserialize, Serialize};

/// The role that gets the primary slot on the Execom and Panel pages
pub const FACULTY_ROLE: &str = "Faculty In-charge";

/// What kind of message is shown in the global message box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient message shown on top of the whole site.
///
/// The App provides an `RwSignal<Option<Notification>>`; setting it to `Some` shows the message
/// box, closing it resets the signal to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}
impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            text: text.into(),
        }
    }
}
