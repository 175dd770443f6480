use dioxus::prelude::*;

use api::catalog::{Media, PROJECTS, SecondaryLink, tech_name};

use crate::i18n::{tr, use_locale};
use crate::projects::Details;
use crate::stars::StarBadge;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectDetailProps {
    leaving: bool,
}

#[component]
pub fn ProjectDetail(props: ProjectDetailProps) -> Element {
    let mut details = use_context::<Details>();
    let locale = use_locale();

    let leaving = props.leaving;

    let selected = details.view.read().selected().map(str::to_owned);
    let Some(project) = selected.and_then(|id| PROJECTS.iter().find(|p| p.id == id)) else {
        return rsx! {};
    };

    let description = tr(locale(), &project.description_key()).to_owned();
    let back = tr(locale(), "detail.back");
    let repo_label = tr(locale(), "detail.repo");
    let repo_url = project.repo_url();

    let secondary = match project.link {
        SecondaryLink::Website(url) => Some((url, tr(locale(), "detail.website"))),
        SecondaryLink::Installer(url) => Some((url, tr(locale(), "detail.installer"))),
        SecondaryLink::None => None,
    };

    rsx! {
        div {
            class: if leaving { "project-detail leaving" } else { "project-detail" },
            ontransitionend: move |evt| {
                if leaving && evt.downcast::<web_sys::TransitionEvent>().is_some_and(|e| e.property_name() == "opacity") {
                    details.transition_ended();
                }
            },
            button {
                class: "btn",
                disabled: leaving,
                onclick: move |_| details.close(),
                "← {back}"
            }
            h3 { "{project.title}" }
            StarBadge { repo: project.repo }
            p { "{description}" }
            {
                match project.media {
                    Some(Media::Image(src)) => rsx! {
                        img { class: "media", src, alt: project.title }
                    },
                    Some(Media::Video(src)) => rsx! {
                        video {
                            class: "media",
                            src,
                            autoplay: true,
                            muted: true,
                            r#loop: true,
                            "playsinline": "true",
                        }
                    },
                    None => rsx! {},
                }
            }
            div { class: "tech-list",
                for tech in project.tech.iter().copied() {
                    span { key: "{tech}", class: "chip", {tech_name(tech)} }
                }
            }
            div { class: "links",
                a {
                    href: "{repo_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{repo_label}"
                }
                if let Some((url, label)) = secondary {
                    a {
                        href: url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{label}"
                    }
                }
            }
        }
    }
}
