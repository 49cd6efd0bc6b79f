use std::time::Duration;

use langclub_shared::widgets::Typewriter;
use leptos::{logging::error, prelude::*};

/// Delay between two typed characters
pub const TYPEWRITER_DELAY: Duration = Duration::from_millis(150);

/// Types `texts` one after another, forever
#[component]
pub fn TypewriterText(
    texts: Vec<String>,
    #[prop(default = TYPEWRITER_DELAY)] type_delay: Duration,
) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(texts, type_delay));
    // (steps taken, delay until the next one); every step schedules the next
    let schedule = RwSignal::new((0_u64, type_delay));

    Effect::new(move |_| {
        let (_, delay) = schedule.get();
        let step = move || {
            if let Some(next) = typewriter.try_update(Typewriter::step) {
                schedule.try_update(|(n, d)| {
                    *n += 1;
                    *d = next;
                });
            }
        };
        match set_timeout_with_handle(step, delay) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => error!("Unable to schedule the typewriter: {e:?}"),
        }
    });

    view! {
        <span class="typing-cursor">{move || typewriter.with(Typewriter::visible)}</span>
    }
}
