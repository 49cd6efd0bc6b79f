//! Loading, error and empty states, and the global message box

use langclub_shared::{Notification, NotificationKind};
use leptos::prelude::*;

use crate::icons::{CheckIcon, CloseIcon, InfoIcon};

/// The global notification. Provided once by the App, `None` while no message is shown.
pub type NotificationSlot = RwSignal<Option<Notification>>;

/// Show `notification` in the message box, if the App provided one
pub fn notify(slot: Option<NotificationSlot>, notification: Notification) {
    match slot {
        Some(slot) => {
            slot.try_set(Some(notification));
        }
        None => {
            leptos::logging::warn!("No message box mounted for: {}", notification.text);
        }
    }
}

#[component]
pub fn LoadingSpinner(
    /// Cover the whole viewport instead of just the page area
    #[prop(optional)]
    full_page: bool,
) -> impl IntoView {
    view! {
        <div
            class="flex items-center justify-center"
            class=(["fixed", "inset-0", "bg-gray-900/75", "z-50"], move || full_page)
            class=(["p-20", "min-h-[50vh]"], move || !full_page)
        >
            <div class="animate-spin rounded-full h-32 w-32 border-t-2 border-b-2 border-blue-500"></div>
            <p class="text-lg ml-4" class=("text-white", move || full_page)>
                "Loading..."
            </p>
        </div>
    }
}

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(optional)] full_page: bool,
) -> impl IntoView {
    view! {
        <div
            class="flex items-center justify-center"
            class=(["min-h-screen", "bg-gray-900", "text-white"], move || full_page)
            class=(["min-h-[50vh]", "text-red-500"], move || !full_page)
        >
            <p class="text-xl">"Error: " {message}</p>
        </div>
    }
}

/// Shown where a collection came back empty
#[component]
pub fn EmptyPlaceholder(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="text-gray-600 dark:text-gray-400 col-span-full text-center py-8">{text}</p> }
}

/// Classes for (background, border, text) of a message
fn kind_classes(kind: NotificationKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        NotificationKind::Success => ("bg-green-100", "border-green-400", "text-green-700"),
        NotificationKind::Error => ("bg-red-100", "border-red-400", "text-red-700"),
        NotificationKind::Info => ("bg-blue-100", "border-blue-400", "text-blue-700"),
    }
}

/// The overlay showing the current global notification until it is closed
#[component]
pub fn MessageBox() -> impl IntoView {
    let slot = use_context::<NotificationSlot>().expect("App provides the notification slot");

    move || {
        slot.get().map(|notification| {
            let (bg, border, text) = kind_classes(notification.kind);
            let icon = match notification.kind {
                NotificationKind::Success => {
                    view! { <CheckIcon inner_class="h-6 w-6 mr-2 text-green-600" /> }.into_any()
                }
                _ => view! { <InfoIcon inner_class="h-6 w-6 mr-2" /> }.into_any(),
            };
            view! {
                <div class="fixed inset-0 flex items-center justify-center z-[9999]">
                    <div class="absolute inset-0 bg-black opacity-50" on:click=move |_| slot.set(None)></div>
                    <div class=format!("{bg} {border} border p-4 rounded-lg shadow-lg max-w-sm w-full z-50")>
                        <div class="flex justify-between items-center">
                            <div class=format!("{text} flex items-center")>
                                {icon}
                                <p class="font-semibold">{notification.text}</p>
                            </div>
                            <button
                                type="button"
                                aria-label="Close"
                                class="text-gray-500 hover:text-gray-700 focus:outline-none"
                                on:click=move |_| slot.set(None)
                            >
                                <CloseIcon inner_class="w-5 h-5" />
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
