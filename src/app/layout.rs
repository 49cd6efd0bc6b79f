//! Header, bottom navigation and footer around every page

use langclub_shared::{route::Page, settings::SiteSettings, urls::COLLEGE_HOME_URL};
use leptos::{ev::MouseEvent, prelude::*};

const NAVBAR_LINK_CLASSES: &str = "px-4 py-2 rounded-full font-semibold transition-colors duration-300";

/// Clicking a section link goes through the router instead of letting the browser jump
fn nav_click(page: Page, on_navigate: Callback<Page>) -> impl Fn(MouseEvent) {
    move |ev: MouseEvent| {
        ev.prevent_default();
        on_navigate.run(page.clone());
    }
}

#[component]
pub fn Header(current: Memo<Page>, on_navigate: Callback<Page>) -> impl IntoView {
    let links = Page::NAVIGABLE
        .into_iter()
        .map(|page| {
            let active = {
                let page = page.clone();
                move || current.get() == page
            };
            view! {
                <li>
                    <a
                        href=page.fragment()
                        class=NAVBAR_LINK_CLASSES
                        class=(["bg-purple-600", "text-white"], active.clone())
                        class=(["text-gray-200", "hover:bg-white/10"], { let active = active.clone(); move || !active() })
                        on:click=nav_click(page.clone(), on_navigate)
                    >
                        {page.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header-bar sticky top-0 z-40 flex items-center justify-between px-4 py-2 bg-gray-900/90 backdrop-blur">
            <a href=COLLEGE_HOME_URL class="flex items-center">
                <img src="/logo.png" alt="Logo" class="logo h-12" />
            </a>
            <img src="/title.png" alt="Title Image" class="title-image h-10 md:hidden" />
            <nav class="hidden sm:block">
                <ul class="flex space-x-2">{links}</ul>
            </nav>
            <img src="/clublogo.png" alt="Club Logo" class="clublogo h-12" />
        </header>
    }
}

/// Icon-only navigation pinned to the bottom on small screens
#[component]
pub fn MobileNav(current: Memo<Page>, on_navigate: Callback<Page>) -> impl IntoView {
    let links = Page::NAVIGABLE
        .into_iter()
        .map(|page| {
            let active = {
                let page = page.clone();
                move || current.get() == page
            };
            view! {
                <a
                    href=page.fragment()
                    aria-label=page.label()
                    class="p-3 rounded-full text-white transition-all"
                    class=(["bg-white/40"], active.clone())
                    class=(["bg-white/20", "hover:bg-white/40"], { let active = active.clone(); move || !active() })
                    on:click=nav_click(page.clone(), on_navigate)
                >
                    <i class=page.icon_class()></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="sm:hidden fixed bottom-4 left-1/2 -translate-x-1/2 z-20 flex space-x-2 bg-black/30 backdrop-blur-sm p-2 rounded-full">
            {links}
        </div>
    }
}

fn social_icon(name: &str) -> String {
    match name {
        "instagram" | "facebook" | "linkedin" | "twitter" | "youtube" | "github" => {
            format!("fab fa-{name}")
        }
        "x" => "fab fa-x-twitter".to_string(),
        _ => "fas fa-link".to_string(),
    }
}

#[component]
pub fn Footer(settings: SiteSettings) -> impl IntoView {
    let link_list = |links: Vec<langclub_shared::settings::NamedLink>| {
        links
            .into_iter()
            .map(|link| {
                view! {
                    <li>
                        <a href=link.url class="text-gray-300 hover:text-white transition-colors duration-300">
                            {link.name}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };
    let societies = link_list(settings.professional_societies());
    let clubs = link_list(settings.clubs());
    let contact = settings.contact_info();
    let socials = settings
        .social_links()
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.name.clone()
                    class="text-2xl text-gray-300 hover:text-white transition-transform duration-300 hover:scale-110"
                >
                    <i class=social_icon(&link.name)></i>
                </a>
            }
        })
        .collect_view();
    let copyright = settings
        .text("copyright")
        .unwrap_or("© 2025 NBKR IST Language Club. All rights reserved.")
        .to_string();

    view! {
        <footer class="bg-gradient-to-r from-[#2c3e50] to-black text-white p-8 md:p-12">
            <div class="container mx-auto">
                <div class="footer-content-grid grid gap-8 md:grid-cols-3">
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Professional Societies"</h3>
                        <ul class="space-y-2">{societies}</ul>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Clubs"</h3>
                        <ul class="space-y-2">{clubs}</ul>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Contact Us"</h3>
                        <ul class="space-y-3">
                            <li class="flex items-center justify-center md:justify-start">
                                <i class="fas fa-phone mr-3"></i>
                                <a href=format!("tel:{}", contact.phone) class="text-gray-300 hover:text-white">
                                    {contact.phone.clone()}
                                </a>
                            </li>
                            <li class="flex items-center justify-center md:justify-start">
                                <i class="fas fa-envelope mr-3"></i>
                                <a href=format!("mailto:{}", contact.email) class="text-gray-300 hover:text-white">
                                    {contact.email.clone()}
                                </a>
                            </li>
                            <li class="flex items-center justify-center md:justify-start">
                                <i class="fas fa-map-marker-alt mr-3"></i>
                                <span class="text-gray-300">{contact.address.clone()}</span>
                            </li>
                        </ul>
                        <div class="flex justify-center md:justify-start space-x-5 mt-5">{socials}</div>
                    </div>
                </div>
                <div class="text-center text-gray-400 border-t border-gray-700 mt-8 pt-6">
                    <p>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
