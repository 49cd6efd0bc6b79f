use crate::icons::SpinIcon;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// A round icon-only button, used for slide arrows and overlay close buttons
#[component]
pub fn ButtonIcon<F, IV>(
    on_click: impl Fn(MouseEvent) + 'static,
    inner_icon: F,
    #[prop(default = "")] label: &'static str,
) -> impl IntoView
where
    F: Fn() -> IV,
    IV: IntoView,
{
    view! {
        <button
            type="button"
            aria-label=label
            class="inline-flex items-center justify-center text-base font-semibold text-white/80 cursor-pointer p-2 rounded-full bg-black/30 hover:text-white hover:bg-black/50"
            on:click=on_click
        >
            {inner_icon()}
        </button>
    }
}

/// A wide button that shows a spinner and `busy_label` while `busy_reader` is set.
///
/// With `submit` it submits its form instead of handling clicks itself.
#[component]
pub fn Button(
    #[prop(into)] busy_reader: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "")] busy_label: &'static str,
    #[prop(optional)] submit: bool,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class="h-12 flex justify-center items-center space-x-4 w-full text-white bg-purple-600 hover:bg-purple-700 focus:ring-2 focus:outline-none focus:ring-purple-500 font-bold rounded-lg text-center transition-all duration-300 disabled:opacity-60"
            disabled=move || busy_reader.get()
            on:click=move |ev| {
                if busy_reader.get() {
                    ev.prevent_default();
                } else if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >

            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="animate-spin h-5 w-5 mr-2 text-white" />
            </Show>

            {move || if busy_reader.get() { busy_label.to_string() } else { label.to_string() }}
        </button>
    }
}
