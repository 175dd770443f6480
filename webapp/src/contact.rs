use dioxus::prelude::*;
use tracing::{debug, warn};

use api::contact::{SubmitContactReq, submit_contact};

use crate::i18n::{tr, use_locale};

#[derive(Clone, Copy, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[component]
pub fn ContactSection() -> Element {
    let locale = use_locale();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut honey_pot = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();

        if status() == FormStatus::Sending {
            return;
        }

        status.set(FormStatus::Sending);

        let req = SubmitContactReq {
            name: name(),
            email: email(),
            message: message(),
            honey_pot: honey_pot(),
        };

        match submit_contact(&req).await {
            Ok(resp) if resp.success => {
                debug!("contact message relayed");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                status.set(FormStatus::Sent);
            }
            Ok(resp) => {
                warn!(reason = ?resp.message, "contact relay refused the message");
                status.set(FormStatus::Failed);
            }
            Err(err) => {
                warn!("failed to submit contact form: {err}");
                status.set(FormStatus::Failed);
            }
        }
    };

    let sending = status() == FormStatus::Sending;
    let button_label = if sending {
        tr(locale(), "contact.sending")
    } else {
        tr(locale(), "contact.send")
    };

    let title = tr(locale(), "contact.title");
    let name_label = tr(locale(), "contact.name");
    let email_label = tr(locale(), "contact.email");
    let message_label = tr(locale(), "contact.message");

    rsx! {
        section { id: "contact", class: "contact",
            h2 { "{title}" }
            form { onsubmit,
                div { class: "form-group",
                    label { r#for: "contact-name", "{name_label}" }
                    input {
                        id: "contact-name",
                        class: "form-input",
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "contact-email", "{email_label}" }
                    input {
                        id: "contact-email",
                        class: "form-input",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "contact-message", "{message_label}" }
                    textarea {
                        id: "contact-message",
                        class: "form-textarea",
                        rows: 6,
                        required: true,
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                div { class: "form-honeypot", aria_hidden: "true",
                    input {
                        r#type: "text",
                        name: "honeyPot",
                        tabindex: -1,
                        autocomplete: "off",
                        value: "{honey_pot}",
                        oninput: move |evt| honey_pot.set(evt.value()),
                    }
                }
                button { class: "btn", r#type: "submit", disabled: sending, "{button_label}" }
            }
            {
                match status() {
                    FormStatus::Sent => rsx! {
                        p { class: "form-status", role: "status", {tr(locale(), "contact.success")} }
                    },
                    FormStatus::Failed => rsx! {
                        p { class: "form-status error", role: "alert", {tr(locale(), "contact.error")} }
                    },
                    _ => rsx! {},
                }
            }
        }
    }
}
