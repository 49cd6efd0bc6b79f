use std::time::Duration;

use langclub_components::{
    feedback::EmptyPlaceholder,
    fetch::{use_page_data, FetchView},
    widgets::{use_slideshow, Reveal, SlideControls},
    CARD_CLASSES, SECTION_TAGLINE_CLASSES, SECTION_TITLE_CLASSES,
};
use langclub_shared::{
    model::{AboutCard, SlideshowImage},
    pages::AboutContent,
};
use leptos::prelude::*;

const ABOUT_FAILURE_MESSAGE: &str = "Failed to load about content. Please try again later.";
const GALLERY_PERIOD: Duration = Duration::from_secs(5);

#[server]
async fn get_about_content() -> Result<AboutContent, ServerFnError> {
    let config = crate::app::server_config()?;
    langclub_server::content::about_page(config.gateway.as_ref(), &config.sources)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let content = use_page_data(ABOUT_FAILURE_MESSAGE, get_about_content);
    view! {
        <FetchView
            state=content
            ready=|content: AboutContent| {
                view! {
                    <section class="py-20 px-4 max-w-6xl mx-auto">
                        <div class="text-center mb-12">
                            <h2 class=SECTION_TITLE_CLASSES>"About Us"</h2>
                            <p class=SECTION_TAGLINE_CLASSES>
                                "A community of learners who love languages and the people who speak them."
                            </p>
                        </div>
                        <Gallery images=content.images />
                        <CardGrid cards=content.cards />
                    </section>
                }
            }
        />
    }
}

#[component]
fn Gallery(images: Vec<SlideshowImage>) -> impl IntoView {
    if images.is_empty() {
        return view! { <EmptyPlaceholder text="No slideshow images available." /> }.into_any();
    }
    let handle = use_slideshow(images.len(), GALLERY_PERIOD);
    let slides = images
        .into_iter()
        .enumerate()
        .map(|(idx, image)| {
            let alt = image.caption.clone().unwrap_or_else(|| format!("Slide {}", idx + 1));
            view! {
                <figure
                    class="absolute inset-0 transition-opacity duration-1000"
                    class=(["opacity-100"], move || handle.is_active(idx))
                    class=(["opacity-0", "pointer-events-none"], move || !handle.is_active(idx))
                >
                    <img src=image.image_url alt=alt class="w-full h-full object-cover" />
                    {image.caption.map(|c| {
                        view! {
                            <figcaption class="absolute bottom-0 inset-x-0 bg-black/50 text-white text-center py-2">
                                {c}
                            </figcaption>
                        }
                    })}
                </figure>
            }
        })
        .collect_view();

    view! {
        <div class="mb-12">
            <div class="relative h-64 md:h-96 rounded-2xl overflow-hidden shadow-lg">{slides}</div>
            <div class="mt-4">
                <SlideControls handle />
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn CardGrid(cards: Vec<AboutCard>) -> impl IntoView {
    if cards.is_empty() {
        return view! { <EmptyPlaceholder text="No about cards available." /> }.into_any();
    }
    let cards = cards
        .into_iter()
        .enumerate()
        .map(|(idx, card)| {
            let icon = format!("{} text-4xl text-purple-500 mb-4", card.icon_class());
            view! {
                <Reveal delay_ms=idx as u32 * 100>
                    <div class=CARD_CLASSES>
                        <i class=icon></i>
                        <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">{card.title}</h3>
                        <p class="text-gray-600 dark:text-gray-300">{card.description}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();
    view! { <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div> }.into_any()
}
