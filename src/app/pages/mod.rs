//! One module per section of the site, each with the server function it loads from

mod about;
mod events;
mod execom;
mod home;
mod members;
mod panel;

pub use about::AboutPage;
pub use events::EventsPage;
pub use execom::ExecomPage;
pub use home::HomePage;
pub use panel::PanelPage;

use leptos::prelude::*;

#[component]
pub fn NotFound(tag: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <h1 class="text-6xl font-bold text-purple-600">"404"</h1>
            <p class="text-xl text-gray-700 dark:text-gray-300 mt-4">
                {if tag.is_empty() {
                    "This page does not exist.".to_string()
                } else {
                    format!("There is no section called \"{tag}\".")
                }}
            </p>
            <a href="#home" class="mt-6 px-6 py-2 rounded-full bg-purple-600 text-white font-semibold hover:bg-purple-700">
                "Back to Home"
            </a>
        </div>
    }
}
