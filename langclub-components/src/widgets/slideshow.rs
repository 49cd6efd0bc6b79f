use std::time::Duration;

use langclub_shared::widgets::Slideshow;
use leptos::{logging::error, prelude::*};

use crate::buttons::ButtonIcon;

/// A running slideshow: its position plus a counter whose change restarts the timer
#[derive(Debug, Clone, Copy)]
pub struct SlideshowHandle {
    state: RwSignal<Slideshow>,
    restarts: RwSignal<u64>,
}
impl SlideshowHandle {
    pub fn index(&self) -> usize {
        self.state.with(Slideshow::index)
    }

    pub fn len(&self) -> usize {
        self.state.with(Slideshow::len)
    }

    pub fn is_active(&self, idx: usize) -> bool {
        self.state.with(|s| s.is_active(idx))
    }

    pub fn is_static(&self) -> bool {
        self.state.with(Slideshow::is_static)
    }

    pub fn is_empty(&self) -> bool {
        self.state.with_untracked(Slideshow::is_empty)
    }

    pub fn next(&self) {
        self.state.update(Slideshow::next);
        self.restart();
    }

    pub fn prev(&self) {
        self.state.update(Slideshow::prev);
        self.restart();
    }

    pub fn jump(&self, target: usize) {
        self.state.update(|s| s.jump(target));
        self.restart();
    }

    /// Manual navigation gives the new slide a full period
    fn restart(&self) {
        self.restarts.update(|n| *n += 1);
    }
}

/// A slideshow over `len` slides advancing every `period`
pub fn use_slideshow(len: usize, period: Duration) -> SlideshowHandle {
    let state = RwSignal::new(Slideshow::new(len));
    let restarts = RwSignal::new(0_u64);

    Effect::new(move |_| {
        restarts.track();
        if state.with_untracked(Slideshow::is_static) {
            return;
        }
        match set_interval_with_handle(move || state.update(Slideshow::tick), period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => error!("Unable to start the slideshow timer: {e:?}"),
        }
    });

    SlideshowHandle { state, restarts }
}

/// Previous/next arrows and one dot per slide. Arrows are left out for a static slideshow,
/// everything is left out when there are no slides.
#[component]
pub fn SlideControls(handle: SlideshowHandle) -> impl IntoView {
    if handle.is_empty() {
        return ().into_any();
    }
    let dots = (0..handle.len())
        .map(|idx| {
            view! {
                <button
                    type="button"
                    aria-label=format!("Slide {}", idx + 1)
                    class="h-3 w-3 rounded-full transition-all duration-300"
                    class=(["bg-white", "w-6"], move || handle.is_active(idx))
                    class=(["bg-white/40"], move || !handle.is_active(idx))
                    on:click=move |_| handle.jump(idx)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="flex items-center justify-center gap-4 py-4">
            <Show when=move || !handle.is_static()>
                <ButtonIcon
                    label="Previous slide"
                    on_click=move |_| handle.prev()
                    inner_icon=|| view! { <span class="px-1">"❮"</span> }
                />
            </Show>
            <div class="flex items-center gap-2">{dots}</div>
            <Show when=move || !handle.is_static()>
                <ButtonIcon
                    label="Next slide"
                    on_click=move |_| handle.next()
                    inner_icon=|| view! { <span class="px-1">"❯"</span> }
                />
            </Show>
        </div>
    }
    .into_any()
}
