//! The animated and interactive parts of the pages
//!
//! State machines live in `langclub_shared::widgets`; this module drives them with browser timers.
//! Timers are only ever started inside effects, which never run during server rendering, and each
//! one is cleared when its owner is cleaned up.

mod carousel;
mod reveal;
mod roster;
mod slideshow;
mod typewriter;

pub use carousel::{MemberStrip, MEMBER_CAROUSEL_COOLDOWN_TICKS, MEMBER_CAROUSEL_PERIOD};
pub use reveal::Reveal;
pub use roster::RosterTable;
pub use slideshow::{use_slideshow, SlideControls, SlideshowHandle};
pub use typewriter::{TypewriterText, TYPEWRITER_DELAY};
