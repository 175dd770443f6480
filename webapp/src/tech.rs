use dioxus::prelude::*;

use api::catalog::TECH_STACK;

use crate::i18n::{tr, use_locale};
use crate::projects::use_catalog;

// every chip doubles as a shortcut into the catalog, filtered down to that tech
#[component]
pub fn TechStackSection() -> Element {
    let mut catalog = use_catalog();
    let locale = use_locale();

    let selected = catalog.selected_tech();
    let title = tr(locale(), "tech.title");

    rsx! {
        section { id: "tech", class: "tech",
            h2 { "{title}" }
            div { class: "tech-grid",
                for tech in TECH_STACK {
                    button {
                        key: "{tech.id}",
                        class: if selected.as_deref() == Some(tech.id) { "chip active" } else { "chip" },
                        title: "{tech.kind:?}",
                        onclick: move |_| catalog.set_tech_filter(Some(tech.id)),
                        "{tech.name}"
                    }
                }
            }
        }
    }
}
