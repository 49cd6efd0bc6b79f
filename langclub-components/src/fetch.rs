//! Loading page data through a [`FetchLifecycle`]

use std::{
    future::Future,
    sync::{Arc, Mutex},
};

use langclub_shared::{
    fetch::{FetchLifecycle, FetchState},
    Notification,
};
use leptos::{either::EitherOf3, logging::error, prelude::*, task::spawn_local};

use crate::feedback::{notify, ErrorBanner, LoadingSpinner, NotificationSlot};

/// Fetch the data for one page once it is mounted.
///
/// The returned state starts out [`FetchState::Loading`] and settles once. A failed fetch is
/// logged, reported to the message box and settles to `Failed(failure_message)`. Results arriving
/// after the calling component was cleaned up are dropped.
pub fn use_page_data<T, E, Fut, F>(
    failure_message: &'static str,
    fetcher: F,
) -> ReadSignal<FetchState<T>>
where
    T: Send + Sync + 'static,
    E: core::fmt::Display + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    F: Fn() -> Fut + 'static,
{
    let (state, set_state) = signal(FetchState::<T>::Loading);
    let slot = use_context::<NotificationSlot>();
    let lifecycle = Arc::new(Mutex::new(FetchLifecycle::default()));

    {
        let lifecycle = lifecycle.clone();
        on_cleanup(move || {
            if let Ok(mut l) = lifecycle.lock() {
                l.teardown();
            }
        });
    }

    // effects only run in the browser, so this fetches after hydration
    Effect::new(move |_| {
        let ticket = match lifecycle.lock() {
            Ok(mut l) => l.begin(),
            Err(_) => return,
        };
        let lifecycle = lifecycle.clone();
        let pending = fetcher();
        spawn_local(async move {
            let result = pending.await;
            let accepted = lifecycle
                .lock()
                .map(|l| l.accepts(&ticket))
                .unwrap_or(false);
            if !accepted {
                leptos::logging::log!("Dropping a result that arrived after its page was left.");
                return;
            }
            if let Err(e) = &result {
                error!("{failure_message} ({e})");
                notify(slot, Notification::error(failure_message));
            }
            set_state.try_set(FetchState::settle(result, failure_message));
        });
    });

    state
}

/// Render `state`: a spinner while loading, the error banner on failure, `ready` once there is data
#[component]
pub fn FetchView<T, F, IV>(
    state: ReadSignal<FetchState<T>>,
    ready: F,
    #[prop(optional)] full_page: bool,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    move || match state.get() {
        FetchState::Loading => EitherOf3::A(view! { <LoadingSpinner full_page=full_page /> }),
        FetchState::Failed(message) => {
            EitherOf3::B(view! { <ErrorBanner message=message full_page=full_page /> })
        }
        FetchState::Ready(data) => EitherOf3::C(ready(data)),
    }
}
