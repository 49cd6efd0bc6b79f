//! Upcoming and completed events, with a detail overlay per event

use langclub_components::{
    feedback::EmptyPlaceholder,
    fetch::{use_page_data, FetchView},
    icons::CloseIcon,
    widgets::Reveal,
    CARD_CLASSES, SECTION_TAGLINE_CLASSES, SECTION_TITLE_CLASSES,
};
use langclub_shared::{events::EventBoard, model::EventRecord};
use leptos::prelude::*;

const EVENTS_FAILURE_MESSAGE: &str = "Failed to load events. Please try again later.";

/// The split happens here, at the time of the request
#[server]
async fn get_events() -> Result<EventBoard, ServerFnError> {
    let config = crate::app::server_config()?;
    langclub_server::content::events_page(
        config.gateway.as_ref(),
        &config.sources,
        time::OffsetDateTime::now_utc(),
    )
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let board = use_page_data(EVENTS_FAILURE_MESSAGE, get_events);
    view! { <FetchView state=board ready=|board: EventBoard| view! { <EventLists board /> } /> }
}

#[component]
fn EventLists(board: EventBoard) -> impl IntoView {
    let selected = RwSignal::new(None::<i64>);
    let board = StoredValue::new(board);

    let upcoming = board.with_value(|b| event_cards(&b.upcoming, selected));
    let completed = board.with_value(|b| event_cards(&b.completed, selected));
    let detail = move || {
        selected
            .get()
            .and_then(|id| board.with_value(|b| b.find(id).cloned()))
            .map(|event| view! { <EventDetail event on_close=Callback::new(move |_| selected.set(None)) /> })
    };

    view! {
        <section class="py-20 px-4 max-w-6xl mx-auto">
            <div class="text-center mb-12">
                <h2 class=SECTION_TITLE_CLASSES>"Upcoming Events"</h2>
                <p class=SECTION_TAGLINE_CLASSES>"Mark your calendar."</p>
            </div>
            {upcoming.unwrap_or_else(|| view! { <EmptyPlaceholder text="No upcoming events." /> }.into_any())}
            <div class="text-center my-12">
                <h2 class=SECTION_TITLE_CLASSES>"Completed Events"</h2>
                <p class=SECTION_TAGLINE_CLASSES>"What we have been up to."</p>
            </div>
            {completed.unwrap_or_else(|| view! { <EmptyPlaceholder text="No completed events yet." /> }.into_any())}
        </section>
        {detail}
    }
}

/// `None` for an empty list
fn event_cards(events: &[EventRecord], selected: RwSignal<Option<i64>>) -> Option<AnyView> {
    if events.is_empty() {
        return None;
    }
    let cards = events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let event = event.clone();
            let id = event.id;
            view! {
                <Reveal delay_ms=idx as u32 * 100>
                    <button
                        type="button"
                        class=format!("{CARD_CLASSES} w-full text-left hover:-translate-y-2 cursor-pointer")
                        on:click=move |_| selected.set(Some(id))
                    >
                        <span class="badge inline-block mb-2 px-3 py-1 rounded-full bg-purple-100 text-purple-700 text-sm font-semibold">
                            {event.date_label()}
                        </span>
                        <h3 class="text-xl font-bold text-purple-600 dark:text-purple-400 mb-2">
                            {event.title.clone()}
                        </h3>
                        {event.location.clone().map(|l| {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400 mb-2">
                                    <i class="fas fa-map-marker-alt mr-2"></i>
                                    {l}
                                </p>
                            }
                        })}
                        <p class="text-gray-600 dark:text-gray-300">{event.description.clone()}</p>
                    </button>
                </Reveal>
            }
        })
        .collect_view();
    Some(view! { <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div> }.into_any())
}

#[component]
fn EventDetail(event: EventRecord, on_close: Callback<()>) -> impl IntoView {
    let body = event
        .detailed_description
        .clone()
        .or_else(|| event.description.clone());
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative bg-white dark:bg-gray-800 rounded-2xl shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto p-8"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute top-4 right-4 text-gray-500 hover:text-gray-800 dark:hover:text-white"
                    on:click=move |_| on_close.run(())
                >
                    <CloseIcon inner_class="w-6 h-6" />
                </button>
                <span class="badge inline-block mb-3 px-3 py-1 rounded-full bg-purple-100 text-purple-700 text-sm font-semibold">
                    {event.date_label()}
                </span>
                <h2 class="text-3xl font-bold text-gray-800 dark:text-white mb-4">{event.title}</h2>
                {event.location.map(|l| {
                    view! {
                        <p class="text-gray-500 dark:text-gray-400 mb-4">
                            <i class="fas fa-map-marker-alt mr-2"></i>
                            {l}
                        </p>
                    }
                })}
                <p class="text-gray-700 dark:text-gray-300 whitespace-pre-line">{body}</p>
                {event.gallery_link.map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block mt-6 px-6 py-2 rounded-full bg-purple-600 text-white font-semibold hover:bg-purple-700"
                        >
                            "View Gallery"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}
