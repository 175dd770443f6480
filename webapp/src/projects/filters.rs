use dioxus::prelude::*;

use api::catalog::{Category, TECH_STACK, tech_name};
use common::filter::search_tech;

use crate::i18n::{tr, use_locale};
use crate::projects::use_catalog;

#[component]
pub fn FilterBar() -> Element {
    let mut catalog = use_catalog();
    let locale = use_locale();

    let (active, any_filter) = {
        let carousel = catalog.carousel.read();
        let selection = carousel.selection();

        let active: Vec<(Category, bool)> = Category::ALL
            .iter()
            .map(|c| (*c, selection.is_active(*c)))
            .collect();

        (active, !selection.is_empty())
    };

    rsx! {
        div { class: "filter-bar",
            for (category, is_active) in active {
                button {
                    key: "{category}",
                    class: if is_active { "chip active" } else { "chip" },
                    onclick: move |_| catalog.toggle_category(category),
                    {tr(locale(), &category.label_key()).to_owned()}
                }
            }
            TechSearch {}
            if any_filter {
                button {
                    class: "btn",
                    onclick: move |_| catalog.clear(),
                    {tr(locale(), "work.clear")}
                }
            }
        }
    }
}

// dropdown with a search box over the whole tech stack; picking an entry sets the
// tech filter, picking the selected one again clears it
#[component]
fn TechSearch() -> Element {
    let mut catalog = use_catalog();
    let locale = use_locale();

    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut focused = use_signal(|| None::<usize>);

    let selected = catalog.selected_tech();
    let label = match &selected {
        Some(id) => tech_name(id).to_owned(),
        None => tr(locale(), "work.filterByTech").to_owned(),
    };

    let results: Vec<(&'static str, &'static str)> = search_tech(TECH_STACK, &query())
        .into_iter()
        .map(|tech| (tech.id, tech.name))
        .collect();

    let mut reset = move || {
        open.set(false);
        query.set(String::new());
        focused.set(None);
    };

    let mut choose = move |tech_id: &'static str| {
        catalog.set_tech_filter(Some(tech_id));
        reset();
    };

    let button_class = if selected.is_some() || open() {
        "chip active"
    } else {
        "chip"
    };

    rsx! {
        div { class: "tech-search",
            button {
                class: button_class,
                onclick: move |_| {
                    if open() {
                        reset();
                    } else {
                        open.set(true);
                    }
                },
                "⌕ {label}"
            }
            if open() {
                div { class: "dropdown",
                    input {
                        class: "form-input",
                        r#type: "text",
                        autofocus: true,
                        placeholder: tr(locale(), "work.searchPlaceholder"),
                        value: "{query}",
                        oninput: move |evt| {
                            query.set(evt.value());
                            focused.set(None);
                        },
                        onkeydown: move |evt| {
                            let count = search_tech(TECH_STACK, &query.peek()).len();
                            let current = *focused.peek();

                            match evt.key() {
                                Key::ArrowDown if count > 0 => {
                                    focused.set(Some(current.map_or(0, |i| (i + 1).min(count - 1))));
                                }
                                Key::ArrowUp if count > 0 => {
                                    focused.set(Some(current.map_or(0, |i| i.saturating_sub(1))));
                                }
                                Key::Enter => {
                                    let hit = current
                                        .and_then(|i| search_tech(TECH_STACK, &query.peek()).get(i).map(|t| t.id));

                                    if let Some(id) = hit {
                                        choose(id);
                                    }
                                }
                                Key::Escape => reset(),
                                _ => (),
                            }
                        },
                    }
                    if results.is_empty() {
                        div { class: "result", {tr(locale(), "work.noResults")} }
                    }
                    for (index, (id, name)) in results.into_iter().enumerate() {
                        div {
                            key: "{id}",
                            class: if focused() == Some(index) { "result focused" } else { "result" },
                            onmouseenter: move |_| focused.set(Some(index)),
                            onclick: move |_| choose(id),
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
