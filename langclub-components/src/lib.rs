//! Components shared across the pages of the site

pub mod buttons;
pub mod contact;
pub mod feedback;
pub mod fetch;
pub mod icons;
pub mod widgets;

/// Section headings on every page
pub const SECTION_TITLE_CLASSES: &str = "text-3xl font-bold text-gray-800 dark:text-white";
pub const SECTION_TAGLINE_CLASSES: &str = "text-lg text-gray-600 dark:text-gray-400 mt-2";

pub const CARD_CLASSES: &str = "bg-white dark:bg-gray-700 shadow-lg rounded-lg p-6 transition-all duration-300 hover:scale-105 hover:shadow-xl";

pub const TEXTAREA_DEFAULT_ROWS: i32 = 4;
