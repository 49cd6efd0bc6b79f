//! Member cards grouped into batches, shared by the Execom and Panel pages

use langclub_components::feedback::EmptyPlaceholder;
use langclub_shared::{batch::BatchGroups, model::Member, urls::AVATAR_PLACEHOLDER_URL};
use leptos::prelude::*;
use web_sys::HtmlImageElement;

#[component]
pub fn MemberCard(member: Member, #[prop(optional)] primary: bool) -> impl IntoView {
    let (card, image, name, role) = if primary {
        ("bg-indigo-500/30 p-6", "w-32 h-32", "text-xl", "text-indigo-200 text-base")
    } else {
        ("bg-indigo-500/10 p-4", "w-24 h-24", "text-lg", "text-indigo-300 text-sm")
    };
    view! {
        <div class=format!(
            "w-full max-w-xs sm:w-72 flex-shrink-0 backdrop-blur-md border border-indigo-500/30 rounded-xl text-center transition-all duration-300 hover:bg-indigo-500/40 hover:shadow-2xl {card}",
        )>
            <img
                src=member.avatar_url()
                alt=member.name.clone()
                class=format!("mx-auto rounded-full object-cover border-4 border-indigo-400/50 mb-4 {image}")
                on:error=|ev| {
                    let img = event_target::<HtmlImageElement>(&ev);
                    // only once, the placeholder itself might be unreachable
                    img.set_onerror(None);
                    img.set_src(&format!("{AVATAR_PLACEHOLDER_URL}?text=Img"));
                }
            />
            <h3 class=format!("font-bold text-white {name}")>{member.name.clone()}</h3>
            <p class=format!("font-semibold {role}")>{member.role.clone()}</p>
            {member.branch.clone().map(|b| view! { <p class="text-xs text-indigo-300/80">{b}</p> })}
            {member.linkedin_url.clone().map(|url| {
                view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center justify-center text-indigo-300 mt-2 hover:text-white transition-colors"
                    >
                        <i class="fab fa-linkedin mr-1"></i>
                        "Profile"
                    </a>
                }
            })}
        </div>
    }
}

/// Year tabs (only with more than one batch) and the members of the selected batch
#[component]
pub fn BatchBoard(members: Vec<Member>) -> impl IntoView {
    let groups = StoredValue::new(BatchGroups::new(members));
    let selected = RwSignal::new(groups.with_value(BatchGroups::default_year));

    let tabs = groups.with_value(|g| {
        g.years()
            .iter()
            .copied()
            .map(|year| {
                view! {
                    <button
                        type="button"
                        class="px-5 py-2 text-sm font-semibold rounded-full transition-all duration-300 whitespace-nowrap"
                        class=(["bg-indigo-600", "text-white", "shadow-lg"], move || selected.get() == Some(year))
                        class=(["text-gray-300", "hover:bg-gray-700"], move || selected.get() != Some(year))
                        on:click=move |_| selected.set(Some(year))
                    >
                        "Batch "
                        {year}
                    </button>
                }
            })
            .collect_view()
    });
    let has_choice = groups.with_value(BatchGroups::has_choice);

    let batch = move || {
        let Some(year) = selected.get() else {
            return view! { <EmptyPlaceholder text="No members found for this year." /> }.into_any();
        };
        groups.with_value(|g| {
            let batch_view = g.view(year);
            if batch_view.is_empty() {
                return view! { <EmptyPlaceholder text="No members found for this year." /> }
                    .into_any();
            }
            let faculty = batch_view.faculty.cloned();
            let students = batch_view
                .students
                .into_iter()
                .cloned()
                .map(|member| view! { <MemberCard member /> })
                .collect_view();
            view! {
                <section class="bg-indigo-900/20 backdrop-blur-xl border border-indigo-500/30 rounded-2xl p-6 md:p-8">
                    <h2 class="text-3xl font-bold text-center text-white mb-8">"Batch " {year}</h2>
                    {faculty.map(|member| {
                        view! {
                            <div class="flex justify-center mb-8">
                                <MemberCard member primary=true />
                            </div>
                        }
                    })}
                    <div class="flex flex-wrap justify-center gap-6">{students}</div>
                </section>
            }
            .into_any()
        })
    };

    let tab_row = has_choice.then(|| {
        view! {
            <div class="flex justify-center items-center mb-12">
                <div class="bg-black/30 backdrop-blur-sm border border-gray-700 rounded-full p-2 flex items-center space-x-2 overflow-x-auto">
                    {tabs}
                </div>
            </div>
        }
    });

    view! {
        {tab_row}
        {batch}
    }
}
