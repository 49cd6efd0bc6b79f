//! Routing on the URL fragment
//!
//! The site is a single document; which section is shown is decided by `#<page-tag>` alone.
//! There is no nesting and no history stack of our own: back/forward is handled by the browser,
//! which changes the fragment and lets us re-derive the page.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    About,
    Events,
    Panel,
    Execom,
    /// Anything we do not know, carrying the tag that was asked for
    NotFound(String),
}
impl Page {
    /// The pages that show up in the navigation, in navigation order
    pub const NAVIGABLE: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Events,
        Page::Panel,
        Page::Execom,
    ];

    /// Parse a fragment with or without its leading `#`.
    ///
    /// An empty fragment is the home page; an unknown tag is [`Page::NotFound`].
    pub fn from_fragment(fragment: &str) -> Self {
        let tag = fragment.strip_prefix('#').unwrap_or(fragment).trim();
        match tag {
            "" | "home" => Self::Home,
            "about" => Self::About,
            "events" => Self::Events,
            "panel" => Self::Panel,
            "execom" => Self::Execom,
            other => Self::NotFound(other.to_string()),
        }
    }

    /// The tag written into the fragment (without `#`)
    pub fn tag(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Events => "events",
            Self::Panel => "panel",
            Self::Execom => "execom",
            Self::NotFound(tag) => tag,
        }
    }

    /// The fragment including the leading `#`, usable as `href`
    pub fn fragment(&self) -> String {
        format!("#{}", self.tag())
    }

    /// Label in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Events => "Events",
            Self::Panel => "Panel",
            Self::Execom => "Execom",
            Self::NotFound(_) => "Not found",
        }
    }

    /// Font-awesome icon for the compact mobile navigation
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Home => "fas fa-home",
            Self::About => "fas fa-info-circle",
            Self::Events => "fas fa-calendar-alt",
            Self::Panel => "fas fa-users",
            Self::Execom => "fas fa-ellipsis-h",
            Self::NotFound(_) => "fas fa-question",
        }
    }
}
impl Default for Page {
    fn default() -> Self {
        Self::Home
    }
}

/// The shell's routing state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashRouter {
    current: Page,
}
impl HashRouter {
    /// Start from whatever fragment the document was loaded with
    pub fn from_fragment(fragment: &str) -> Self {
        Self {
            current: Page::from_fragment(fragment),
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    /// Go to `page`. Returns the fragment that has to be written into the location.
    pub fn navigate(&mut self, page: Page) -> String {
        let fragment = page.fragment();
        self.current = page;
        fragment
    }

    /// The fragment was changed from outside (back/forward, typed or pasted link).
    ///
    /// Returns whether the current page changed.
    pub fn on_fragment_change(&mut self, fragment: &str) -> bool {
        let page = Page::from_fragment(fragment);
        if page == self.current {
            false
        } else {
            self.current = page;
            true
        }
    }
}
