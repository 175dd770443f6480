use dioxus::prelude::*;

use api::catalog::EXPERIENCE;

use crate::i18n::{tr, use_locale};

#[component]
pub fn ExperienceSection() -> Element {
    let locale = use_locale();

    let title = tr(locale(), "experience.title");
    let visit = tr(locale(), "experience.visit");

    rsx! {
        section { id: "experience", class: "experience",
            h2 { "{title}" }
            ol { class: "timeline",
                for item in EXPERIENCE {
                    li { key: "{item.date}-{item.role}",
                        span { class: "date", "{item.date}" }
                        h3 { "{item.role}" }
                        p { class: "company",
                            "{item.company}"
                            if let Some(url) = item.url {
                                " · "
                                a {
                                    href: url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{visit}"
                                }
                            }
                        }
                        p { "{item.description}" }
                    }
                }
            }
        }
    }
}
