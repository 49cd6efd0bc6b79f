use leptos::{html::Div, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view
#[component]
pub fn Reveal(
    children: Children,
    /// Stagger for items of a grid
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = use_element_visibility(node);
    let revealed = RwSignal::new(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=node
            class="reveal transition-all duration-1000"
            class=(["opacity-0", "translate-y-8"], move || !revealed.get())
            class=(["opacity-100", "translate-y-0"], move || revealed.get())
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
