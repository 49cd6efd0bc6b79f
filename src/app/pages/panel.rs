use langclub_components::{
    fetch::{use_page_data, FetchView},
    widgets::RosterTable,
    SECTION_TAGLINE_CLASSES, SECTION_TITLE_CLASSES,
};
use langclub_shared::pages::PanelContent;
use leptos::prelude::*;

use super::{home::TestimonialsTeaser, members::BatchBoard};

const PANEL_FAILURE_MESSAGE: &str = "Failed to load panel members. Please try again later.";

#[server]
async fn get_panel_content() -> Result<PanelContent, ServerFnError> {
    let config = crate::app::server_config()?;
    langclub_server::content::panel_page(config.gateway.as_ref(), &config.sources)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Panel members by batch, what they say about the club, and the full roster
#[component]
pub fn PanelPage() -> impl IntoView {
    let content = use_page_data(PANEL_FAILURE_MESSAGE, get_panel_content);
    view! {
        <FetchView
            state=content
            ready=|content: PanelContent| {
                view! {
                    <section class="bg-gradient-to-b from-gray-900 to-indigo-950 py-20 px-4">
                        <div class="text-center mb-12">
                            <h2 class="text-4xl font-bold text-white">"Panel Members"</h2>
                        </div>
                        <BatchBoard members=content.members />
                    </section>
                    <TestimonialsTeaser testimonials=content.testimonials />
                    <section class="py-20 px-4 max-w-6xl mx-auto">
                        <div class="text-center mb-12">
                            <h2 class=SECTION_TITLE_CLASSES>"Club Members"</h2>
                            <p class=SECTION_TAGLINE_CLASSES>"Everyone who makes the club what it is."</p>
                        </div>
                        <RosterTable members=content.roster />
                    </section>
                }
            }
        />
    }
}
