use langclub_components::{
    feedback::{LoadingSpinner, MessageBox, NotificationSlot},
    fetch::{use_page_data, FetchView},
};
use langclub_shared::{
    route::{HashRouter, Page},
    settings::SiteSettings,
    Notification,
};
use leptos::{ev::hashchange, logging::error, prelude::*};
use leptos_meta::{provide_meta_context, Link, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use leptos_use::{use_event_listener, use_window};

mod layout;
mod pages;

use layout::{Footer, Header, MobileNav};
use pages::{AboutPage, EventsPage, ExecomPage, HomePage, NotFound, PanelPage};

pub const SETTINGS_FAILURE_MESSAGE: &str = "Failed to load site settings. Please try again later.";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// The config every server function runs against
#[cfg(feature = "ssr")]
pub(crate) fn server_config(
) -> Result<std::sync::Arc<langclub_server::config::Config>, ServerFnError> {
    use_context::<std::sync::Arc<langclub_server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))
}

#[server]
async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    let config = server_config()?;
    langclub_server::content::site_settings(config.gateway.as_ref(), &config.sources)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let notification: NotificationSlot = RwSignal::new(None::<Notification>);
    provide_context(notification);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/langclub.css" />
        <Link
            rel="stylesheet"
            href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
        />

        <Title text="LanguageClub NBKRIST" />

        // the path only ever is `/`; sections are chosen by the url fragment
        <Router>
            <Routes fallback=|| view! { <NotFound tag="".to_string() /> }>
                <Route path=StaticSegment("") view=Site />
            </Routes>
        </Router>
        <MessageBox />
    }
}

/// Header, the section named by the url fragment, and Footer
#[component]
fn Site() -> impl IntoView {
    let settings = use_page_data(SETTINGS_FAILURE_MESSAGE, get_site_settings);

    view! {
        <FetchView
            state=settings
            full_page=true
            ready=|settings: SiteSettings| view! { <SiteBody settings /> }
        />
    }
}

#[component]
fn SiteBody(settings: SiteSettings) -> impl IntoView {
    // only built in the browser, once the settings have loaded
    let initial = window().location().hash().unwrap_or_default();
    let router = RwSignal::new(HashRouter::from_fragment(&initial));
    // only an actual change of page remounts (and refetches) the page
    let current = Memo::new(move |_| router.with(|r| r.current().clone()));

    let _cleanup = use_event_listener(use_window(), hashchange, move |_| {
        let hash = window().location().hash().unwrap_or_default();
        router.update(|r| {
            r.on_fragment_change(&hash);
        });
    });

    let navigate = Callback::new(move |page: Page| {
        if let Some(fragment) = router.try_update(|r| r.navigate(page)) {
            if let Err(e) = window().location().set_hash(&fragment) {
                error!("Unable to set the location hash: {e:?}");
            }
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <Header current=current on_navigate=navigate />
            <main class="flex-grow">
                <Suspense fallback=|| view! { <LoadingSpinner full_page=true /> }>
                    {move || match current.get() {
                        Page::Home => view! { <HomePage /> }.into_any(),
                        Page::About => view! { <AboutPage /> }.into_any(),
                        Page::Events => view! { <EventsPage /> }.into_any(),
                        Page::Panel => view! { <PanelPage /> }.into_any(),
                        Page::Execom => view! { <ExecomPage /> }.into_any(),
                        Page::NotFound(tag) => view! { <NotFound tag /> }.into_any(),
                    }}
                </Suspense>
            </main>
            <MobileNav current=current on_navigate=navigate />
            <Footer settings />
        </div>
    }
}
