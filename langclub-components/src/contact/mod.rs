//! The "Get in touch" form

use langclub_shared::{
    contact::{ContactForm, ValidContact},
    Notification,
};
use leptos::prelude::*;

use crate::{
    buttons::Button,
    feedback::{notify, NotificationSlot},
    TEXTAREA_DEFAULT_ROWS,
};

mod services;

pub const CONTACT_SENT_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const CONTACT_FAILED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

#[component]
fn FloatingField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows=TEXTAREA_DEFAULT_ROWS
                class="peer floating-input"
                placeholder=" "
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=kind
                class="peer floating-input"
                placeholder=" "
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };
    view! {
        <div class="relative">
            {input}
            <label for=id class="floating-label">{label}</label>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let slot = use_context::<NotificationSlot>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let send_action = Action::new_local(move |contact: &ValidContact| {
        let contact = contact.clone();
        async move {
            let res = services::send_to_relay(&contact).await;
            if let Err(ref e) = res {
                leptos::logging::error!("Contact relay failed: {e}");
            };
            res
        }
    });
    let sending = send_action.pending();
    let reply = send_action.value();

    Effect::new(move |_| match reply.get() {
        Some(Ok(())) => {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            notify(slot, Notification::success(CONTACT_SENT_MESSAGE));
        }
        // the input stays so the user can try again
        Some(Err(_)) => notify(slot, Notification::error(CONTACT_FAILED_MESSAGE)),
        None => {}
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(contact) => {
                send_action.dispatch_local(contact);
            }
            Err(e) => notify(slot, Notification::info(e.to_string())),
        }
    };

    view! {
        <section id="contact" class="bg-gray-50 dark:bg-gray-800 py-20 px-4">
            <div class="text-center mb-12">
                <h2 class=crate::SECTION_TITLE_CLASSES>"Get In Touch"</h2>
                <p class=crate::SECTION_TAGLINE_CLASSES>
                    "Have a question or a project in mind? Let's talk."
                </p>
            </div>
            <div class="max-w-2xl mx-auto">
                <form class="space-y-6" novalidate=true on:submit=on_submit>
                    <FloatingField id="name" label="Your Name" value=name />
                    <FloatingField id="email" label="Your Email" value=email kind="email" />
                    <FloatingField id="message" label="Your Message" value=message multiline=true />
                    <Button
                        busy_reader=sending
                        submit=true
                        label="Send Message"
                        busy_label="Sending..."
                    />
                </form>
            </div>
        </section>
    }
}
