//! The landing page: hero slider, then a teaser of every other section and the contact form

use std::time::Duration;

use langclub_components::{
    contact::ContactSection,
    feedback::EmptyPlaceholder,
    fetch::{use_page_data, FetchView},
    widgets::{use_slideshow, MemberStrip, Reveal, SlideControls, TypewriterText},
    CARD_CLASSES, SECTION_TAGLINE_CLASSES, SECTION_TITLE_CLASSES,
};
use langclub_shared::{
    model::{AboutCard, EventRecord, HomeSlide, Testimonial},
    pages::HomeContent,
};
use leptos::prelude::*;

const HOME_FAILURE_MESSAGE: &str = "Failed to load content. Please try again later.";
/// How long each hero video stays
const HERO_SLIDE_PERIOD: Duration = Duration::from_secs(7);

/// What the club offers, fixed text on the execom teaser
const SERVICES: [&str; 3] = [
    "Website translation",
    "Content preparation",
    "Social media",
];

#[server]
async fn get_home_content() -> Result<HomeContent, ServerFnError> {
    let config = crate::app::server_config()?;
    langclub_server::content::home_page(config.gateway.as_ref(), &config.sources)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let content = use_page_data(HOME_FAILURE_MESSAGE, get_home_content);
    view! {
        <FetchView
            state=content
            ready=|content: HomeContent| view! { <HomeSections content /> }
        />
    }
}

#[component]
fn HomeSections(content: HomeContent) -> impl IntoView {
    let titles = content.hero_titles();
    let HomeContent {
        slides,
        about_cards,
        events,
        testimonials,
        members,
    } = content;

    view! {
        <div class="bg-white dark:bg-gray-900 transition-colors duration-500">
            <Hero slides titles />
            <AboutTeaser cards=about_cards />
            <EventsTeaser events />
            <TestimonialsTeaser testimonials />
            <section id="execom" class="py-12 px-4">
                <div class="text-center mb-12">
                    <h2 class=SECTION_TITLE_CLASSES>"Our Services & Team"</h2>
                    <p class=SECTION_TAGLINE_CLASSES>
                        "Meet the visionaries steering LanguageClub NBKRIST forward."
                    </p>
                </div>
                <div class="grid sm:grid-cols-1 md:grid-cols-3 gap-8 mb-12">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(idx, service)| {
                            view! {
                                <Reveal delay_ms=(idx as u32 + 1) * 100>
                                    <div class=format!("{CARD_CLASSES} text-center")>
                                        <h3 class="text-xl font-semibold text-indigo-800 dark:text-indigo-300">
                                            {*service}
                                        </h3>
                                        <p class="text-gray-500 dark:text-gray-400">"LanguageClub"</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal>
                    <div class="text-center mb-4">
                        <h2 class="text-xl font-bold text-gray-800 dark:text-white">"Developers Team"</h2>
                    </div>
                    {if members.is_empty() {
                        view! { <EmptyPlaceholder text="No team members listed yet." /> }.into_any()
                    } else {
                        view! { <MemberStrip members /> }.into_any()
                    }}
                </Reveal>
            </section>
            <ContactSection />
        </div>
    }
}

#[component]
fn Hero(slides: Vec<HomeSlide>, titles: Vec<String>) -> impl IntoView {
    let handle = use_slideshow(slides.len(), HERO_SLIDE_PERIOD);
    let videos = slides
        .iter()
        .enumerate()
        .filter_map(|(idx, slide)| {
            slide.video_url.clone().map(|url| {
                view! {
                    <video
                        class="absolute inset-0 w-full h-full object-cover transition-opacity duration-1000"
                        class=(["opacity-100"], move || handle.is_active(idx))
                        class=(["opacity-0"], move || !handle.is_active(idx))
                        src=url
                        autoplay=true
                        muted=true
                        loop=true
                        playsinline=true
                    ></video>
                }
            })
        })
        .collect_view();
    let current = move || slides.get(handle.index()).cloned();

    view! {
        <section id="home" class="relative min-h-[80vh] flex flex-col justify-center overflow-hidden bg-gray-900">
            {videos}
            <div class="absolute inset-0 bg-black/50"></div>
            <div class="relative z-10 text-center px-4">
                <h1 class="text-4xl md:text-6xl font-bold text-white min-h-[80px] md:min-h-[100px]">
                    <TypewriterText texts=titles />
                </h1>
                {move || {
                    current()
                        .map(|slide| {
                            view! {
                                {slide.title_h2.map(|t| view! { <h2 class="text-2xl text-purple-300 mt-4">{t}</h2> })}
                                {slide.description.map(|d| view! { <p class="text-gray-100 mt-2 max-w-2xl mx-auto">{d}</p> })}
                                {slide.button_text.map(|b| {
                                    view! {
                                        <a href="#about" class="inline-block mt-6 px-6 py-3 rounded-full bg-purple-600 text-white font-bold hover:scale-105 transition-transform duration-300">
                                            {b}
                                        </a>
                                    }
                                })}
                            }
                        })
                }}
            </div>
            {(!handle.is_empty())
                .then(|| {
                    view! {
                        <div class="relative z-10 mt-8">
                            <SlideControls handle />
                        </div>
                    }
                })}
        </section>
    }
}

#[component]
fn AboutTeaser(cards: Vec<AboutCard>) -> impl IntoView {
    let grid = if cards.is_empty() {
        view! { <EmptyPlaceholder text="No about cards available yet." /> }.into_any()
    } else {
        cards
            .into_iter()
            .enumerate()
            .map(|(idx, card)| {
                let icon = format!("{} text-4xl text-purple-500 mb-4", card.icon_class());
                view! {
                    <Reveal delay_ms=idx as u32 * 100>
                        <div class=format!("{CARD_CLASSES} text-center")>
                            <i class=icon></i>
                            <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">{card.title}</h3>
                            <p class="text-gray-600 dark:text-gray-300">{card.description}</p>
                        </div>
                    </Reveal>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <section id="about" class="bg-gray-50 dark:bg-gray-800 py-20 px-4">
            <div class="text-center mb-12">
                <h2 class=SECTION_TITLE_CLASSES>
                    "About " <span class="text-purple-600 dark:text-purple-400">"LanguageClub NBKRIST"</span>
                </h2>
                <p class=SECTION_TAGLINE_CLASSES>"Where words meet innovation, and ideas find their voice."</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{grid}</div>
        </section>
    }
}

#[component]
fn EventsTeaser(events: Vec<EventRecord>) -> impl IntoView {
    let cards = if events.is_empty() {
        view! { <EmptyPlaceholder text="No events announced yet." /> }.into_any()
    } else {
        events
            .into_iter()
            .enumerate()
            .map(|(idx, event)| {
                view! {
                    <Reveal delay_ms=idx as u32 * 100>
                        <div class=format!("{CARD_CLASSES} hover:-translate-y-2")>
                            <h3 class="text-xl font-bold text-purple-600 dark:text-purple-400 mb-3">{event.title}</h3>
                            <p class="text-gray-600 dark:text-gray-300">{event.description}</p>
                        </div>
                    </Reveal>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <section id="events" class="py-20 px-4">
            <div class="text-center mb-12">
                <h2 class=SECTION_TITLE_CLASSES>"WHAT WE DO?"</h2>
                <p class=SECTION_TAGLINE_CLASSES>"Get ready to explore, learn, and lead, on club time."</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
        </section>
    }
}

#[component]
pub(super) fn TestimonialsTeaser(testimonials: Vec<Testimonial>) -> impl IntoView {
    let cards = if testimonials.is_empty() {
        view! { <EmptyPlaceholder text="No testimonials available yet." /> }.into_any()
    } else {
        testimonials
            .into_iter()
            .enumerate()
            .map(|(idx, t)| {
                view! {
                    <Reveal delay_ms=idx as u32 * 100>
                        <div class="bg-white dark:bg-gray-700 p-6 rounded-lg shadow-lg">
                            <p class="text-gray-600 dark:text-gray-300 italic">"\"" {t.quote} "\""</p>
                            {t.author.map(|a| view! { <p class="text-right text-purple-500 font-semibold mt-4">"- " {a}</p> })}
                        </div>
                    </Reveal>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <section id="panel" class="bg-gray-50 dark:bg-gray-800 py-20 px-4">
            <div class="text-center mb-12">
                <h2 class=SECTION_TITLE_CLASSES>"Member Testimonials"</h2>
                <p class=SECTION_TAGLINE_CLASSES>
                    "Whatever the members think about the Language Club, their opinions matter to us."
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
        </section>
    }
}
