use std::time::Duration;

use langclub_shared::{model::Member, widgets::MemberCarousel};
use leptos::{logging::error, prelude::*};

/// How often the selection moves on by itself
pub const MEMBER_CAROUSEL_PERIOD: Duration = Duration::from_secs(3);
/// Ticks the auto-advance holds after a click
pub const MEMBER_CAROUSEL_COOLDOWN_TICKS: u32 = 3;

/// Member avatars scrolling endlessly, with the selected member's details below
#[component]
pub fn MemberStrip(members: Vec<Member>) -> impl IntoView {
    let carousel = RwSignal::new(MemberCarousel::new(
        members.len(),
        MEMBER_CAROUSEL_COOLDOWN_TICKS,
    ));

    Effect::new(move |_| {
        if carousel.with_untracked(|c| c.selected().is_none()) {
            return;
        }
        match set_interval_with_handle(
            move || carousel.update(MemberCarousel::tick),
            MEMBER_CAROUSEL_PERIOD,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => error!("Unable to start the member carousel timer: {e:?}"),
        }
    });

    let track = carousel
        .with_untracked(|c| c.looped_indices().collect::<Vec<_>>())
        .into_iter()
        .enumerate()
        .map(|(position, idx)| {
            let member = &members[idx];
            view! {
                <button
                    type="button"
                    // the second copy is decoration only
                    aria-hidden=(position >= members.len()).to_string()
                    class="flex-shrink-0 rounded-full p-1 transition-transform duration-300 hover:scale-105"
                    class=(["ring-2", "ring-purple-400"], move || carousel.with(|c| c.selected() == Some(idx)))
                    on:click=move |_| carousel.update(|c| c.select(idx))
                >
                    <img
                        src=member.avatar_url()
                        alt=member.name.clone()
                        class="w-20 h-20 rounded-full object-cover"
                    />
                </button>
            }
        })
        .collect_view();

    let selected = move || {
        carousel
            .with(MemberCarousel::selected)
            .and_then(|idx| members.get(idx).cloned())
    };

    view! {
        <div class="bg-gray-800 dark:bg-black py-6 px-3 rounded-md mt-6">
            <div class="overflow-hidden">
                <div class="flex gap-4 w-max auto-scroll">{track}</div>
            </div>
            {move || {
                selected()
                    .map(|member| {
                        view! {
                            <div class="mt-4 bg-gray-900/50 p-4 rounded-md flex flex-col md:flex-row items-center text-center md:text-left">
                                <img
                                    src=member.avatar_url()
                                    alt=member.name.clone()
                                    class="rounded-full w-24 h-24 mx-auto md:mx-0 border-2 border-purple-400"
                                />
                                <div class="md:ml-4 mt-2 md:mt-0">
                                    <h3 class="text-xl font-bold mb-1 text-white">{member.name.clone()}</h3>
                                    <div class="mb-2 space-x-1 text-xs">
                                        <span class="badge bg-red-500 text-white">{member.role.clone()}</span>
                                        {member.roll_no.clone().map(|r| view! { <span class="badge bg-gray-700 text-white">{r}</span> })}
                                        {member.branch.clone().map(|b| view! { <span class="badge bg-gray-700 text-white">{b}</span> })}
                                    </div>
                                    {member.linkedin_url.clone().map(|url| {
                                        view! {
                                            <a href=url target="_blank" rel="noopener noreferrer" class="text-sm text-purple-300 hover:text-white">
                                                <i class="fab fa-linkedin-in mr-1"></i>
                                                "LinkedIn"
                                            </a>
                                        }
                                    })}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
