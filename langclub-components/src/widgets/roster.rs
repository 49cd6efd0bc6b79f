use langclub_shared::{
    model::ClubMember,
    widgets::{Roster, ROSTER_PAGE_SIZE},
};
use leptos::prelude::*;

use crate::feedback::EmptyPlaceholder;

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// The club roster as a table, revealed a page at a time
#[component]
pub fn RosterTable(members: Vec<ClubMember>) -> impl IntoView {
    if members.is_empty() {
        return view! { <EmptyPlaceholder text="No club members listed yet." /> }.into_any();
    }
    let roster = RwSignal::new(Roster::new(members.len(), ROSTER_PAGE_SIZE));

    let rows = move || {
        let visible = roster.with(Roster::visible);
        members
            .iter()
            .take(visible)
            .map(|m| {
                view! {
                    <tr class="border-b border-gray-200 dark:border-gray-700">
                        <td class="px-4 py-2 font-semibold">{m.name.clone()}</td>
                        <td class="px-4 py-2">{cell(&m.roll_number)}</td>
                        <td class="px-4 py-2">{cell(&m.year)}</td>
                        <td class="px-4 py-2">{cell(&m.branch)}</td>
                        <td class="px-4 py-2">
                            {m.linkedin_url.clone().map(|url| {
                                view! {
                                    <a href=url target="_blank" rel="noopener noreferrer" class="text-purple-500 hover:text-purple-700">
                                        <i class="fab fa-linkedin"></i>
                                    </a>
                                }
                            })}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left text-gray-700 dark:text-gray-300">
                <thead class="text-sm uppercase bg-gray-100 dark:bg-gray-700">
                    <tr>
                        <th class="px-4 py-2">"Name"</th>
                        <th class="px-4 py-2">"Roll No."</th>
                        <th class="px-4 py-2">"Year"</th>
                        <th class="px-4 py-2">"Branch"</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
        <Show when=move || roster.with(Roster::has_more)>
            <div class="flex justify-center mt-6">
                <button
                    type="button"
                    class="px-6 py-2 rounded-full bg-purple-600 text-white font-semibold hover:bg-purple-700"
                    on:click=move |_| roster.update(Roster::show_more)
                >
                    "Show more"
                </button>
            </div>
        </Show>
    }
    .into_any()
}
