use langclub_components::fetch::{use_page_data, FetchView};
use langclub_shared::model::Member;
use leptos::prelude::*;

use super::members::BatchBoard;

const EXECOM_FAILURE_MESSAGE: &str = "Failed to load execom members. Please try again later.";

#[server]
async fn get_execom_members() -> Result<Vec<Member>, ServerFnError> {
    let config = crate::app::server_config()?;
    langclub_server::content::execom_page(config.gateway.as_ref(), &config.sources)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn ExecomPage() -> impl IntoView {
    let members = use_page_data(EXECOM_FAILURE_MESSAGE, get_execom_members);
    view! {
        <section class="min-h-screen bg-gradient-to-b from-gray-900 to-indigo-950 py-20 px-4">
            <div class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold text-white">"Executive Committee"</h1>
                <p class="text-indigo-300 mt-4">"The students who run the club, year by year."</p>
            </div>
            <FetchView
                state=members
                ready={|members: Vec<Member>| view! { <BatchBoard members /> }}
            />
        </section>
    }
}
