use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use tracing::debug;

use api::catalog::{Project, tech_name};
use common::{
    carousel::{ACTIVE_POSITION, Direction},
    drag::DragGesture,
};

use crate::i18n::{tr, use_locale};
use crate::projects::{Details, use_catalog};
use crate::shared::now_millis;
use crate::stars::StarBadge;

// owned copy of a ring slot, so the carousel signal is not held across the render
#[derive(Clone, Debug, PartialEq)]
struct CardSlot {
    key: String,
    project: Project,
    position: i64,
    active: bool,
}

fn button_code(button: Option<MouseButton>) -> i16 {
    match button {
        Some(MouseButton::Primary) => 0,
        Some(MouseButton::Auxiliary) => 1,
        Some(MouseButton::Secondary) => 2,
        _ => -1,
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CarouselStageProps {
    leaving: bool,
}

#[component]
pub fn CarouselStage(props: CarouselStageProps) -> Element {
    let mut catalog = use_catalog();
    let mut details = use_context::<Details>();
    let locale = use_locale();

    let mut drag = use_signal(DragGesture::default);
    let mut dragged = use_signal(|| false);

    let leaving = props.leaving;
    let previous = tr(locale(), "work.previous");
    let next = tr(locale(), "work.next");

    let slots: Vec<CardSlot> = catalog
        .carousel
        .read()
        .ring()
        .slots
        .into_iter()
        .map(|slot| CardSlot {
            key: slot.key,
            project: slot.project.clone(),
            position: slot.position,
            active: slot.active,
        })
        .collect();

    let mut step = move |direction: Direction| {
        if leaving {
            return;
        }

        if catalog.carousel.write().shift(direction, now_millis()) {
            debug!(?direction, "carousel stepped");
        }
    };

    if slots.is_empty() {
        return rsx! {
            div { class: "carousel-empty",
                p { {tr(locale(), "work.empty")} }
                button { class: "btn", onclick: move |_| catalog.clear(), {tr(locale(), "work.clear")} }
            }
        };
    }

    rsx! {
        div {
            class: if leaving { "carousel-stage leaving" } else { "carousel-stage" },
            tabindex: 0,
            onkeydown: move |evt| match evt.key() {
                Key::ArrowLeft => step(Direction::Backward),
                Key::ArrowRight => step(Direction::Forward),
                _ => (),
            },
            onpointerdown: move |evt| {
                dragged.set(false);
                drag.write().pointer_down(evt.client_coordinates().x, button_code(evt.trigger_button()));
            },
            onpointermove: move |evt| {
                if !drag.peek().is_dragging() {
                    return;
                }

                let direction = drag.write().pointer_move(evt.client_coordinates().x);

                if let Some(direction) = direction {
                    dragged.set(true);
                    step(direction);
                }
            },
            onpointerup: move |_| drag.write().pointer_up(),
            onpointerleave: move |_| drag.write().pointer_up(),
            ontransitionend: move |evt| {
                if leaving && evt.downcast::<web_sys::TransitionEvent>().is_some_and(|e| e.property_name() == "opacity") {
                    details.transition_ended();
                }
            },
            for slot in slots {
                ProjectCard {
                    key: "{slot.key}",
                    project: slot.project,
                    position: slot.position,
                    active: slot.active,
                    dragged,
                }
            }
        }
        div { class: "carousel-controls",
            button {
                class: "btn",
                disabled: leaving,
                onclick: move |_| step(Direction::Backward),
                "‹ {previous}"
            }
            button {
                class: "btn",
                disabled: leaving,
                onclick: move |_| step(Direction::Forward),
                "{next} ›"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    position: i64,
    active: bool,
    dragged: Signal<bool>,
}

// clicking a side card brings it to the middle, clicking the middle one opens it
#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut catalog = use_catalog();
    let mut details = use_context::<Details>();
    let locale = use_locale();

    let selected_tech = catalog.selected_tech();

    let project = props.project.clone();
    let project_id = project.id;
    let active = props.active;
    let dragged = props.dragged;

    let distance = (props.position - ACTIVE_POSITION).abs();
    let description = tr(locale(), &project.description_key()).to_owned();

    rsx! {
        article {
            class: if active { "project-card active" } else { "project-card" },
            style: "--position: {props.position}; --distance: {distance};",
            "data-position": "{props.position}",
            // a card sliding into place is not the stage fading out
            ontransitionend: move |evt| evt.stop_propagation(),
            onclick: move |_| {
                if *dragged.peek() || !details.view.peek().carousel_interactive() {
                    return;
                }

                if active {
                    details.open(project_id);
                } else {
                    catalog.carousel.write().focus(project_id);
                }
            },
            h3 { "{project.title}" }
            StarBadge { repo: project.repo }
            p { "{description}" }
            div { class: "tech-list",
                for tech in project.tech.iter().copied() {
                    span {
                        key: "{tech}",
                        class: if selected_tech.as_deref() == Some(tech) { "chip active" } else { "chip" },
                        {tech_name(tech)}
                    }
                }
            }
        }
    }
}
