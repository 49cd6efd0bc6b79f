//! State machines behind the animated widgets
//!
//! None of these know about timers. The components drive them from intervals or timeouts that
//! are scoped to the component and cleared when it goes away.

mod carousel;
mod roster;
mod slideshow;
mod typewriter;

pub use carousel::MemberCarousel;
pub use roster::{Roster, ROSTER_PAGE_SIZE};
pub use slideshow::Slideshow;
pub use typewriter::{Typewriter, DEFAULT_TYPEWRITER_TEXT, TYPEWRITER_HOLD};
