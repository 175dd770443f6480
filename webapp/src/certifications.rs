use dioxus::prelude::*;

use api::catalog::CERTIFICATIONS;
use common::carousel::wrap;

use crate::i18n::{tr, use_locale};

#[component]
pub fn CertificationsSection() -> Element {
    let mut index = use_signal(|| 0usize);
    let locale = use_locale();

    let len = CERTIFICATIONS.len();
    let mut step = move |delta: i64| {
        let next = wrap(*index.peek() as i64 + delta, len);
        index.set(next);
    };

    let title = tr(locale(), "certs.title");
    let view_label = tr(locale(), "certs.view");
    let previous = tr(locale(), "work.previous");
    let next = tr(locale(), "work.next");

    let Some(cert) = CERTIFICATIONS.get(index()) else {
        return rsx! {};
    };

    rsx! {
        section { id: "certifications", class: "certifications",
            h2 { "{title}" }
            div { class: "cert-card",
                img { class: "logo", src: cert.logo, alt: cert.institute }
                div {
                    h3 { "{cert.name}" }
                    p { "{cert.institute} · {cert.year}" }
                    if let Some(url) = cert.url {
                        a {
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{view_label}"
                        }
                    }
                }
            }
            div { class: "carousel-controls",
                button { class: "btn", title: previous, onclick: move |_| step(-1), "‹" }
                button { class: "btn", title: next, onclick: move |_| step(1), "›" }
            }
            div { class: "cert-dots",
                for i in 0..len {
                    button {
                        key: "{i}",
                        class: if i == index() { "active" } else { "" },
                        title: "{CERTIFICATIONS[i].name}",
                        onclick: move |_| index.set(i),
                    }
                }
            }
        }
    }
}
