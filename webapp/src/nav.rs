use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::i18n::{LanguageSwitcher, tr, use_locale};
use crate::theme::ThemeButtons;

#[derive(Clone, PartialEq, Props)]
struct NavAnchorProps {
    label_key: &'static str,
    anchor: &'static str,
}

// in-page links; the sections all live on the home route
#[component]
fn NavAnchor(props: NavAnchorProps) -> Element {
    let locale = use_locale();
    let label = tr(locale(), props.label_key);

    rsx! {
        a { class: "nav-link", href: "/#{props.anchor}", "{label}" }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "navbar",
            Link { to: Route::Home {}, class: "logo", "folio" }
            nav { class: "nav-links",
                NavAnchor { label_key: "nav.projects", anchor: "projects" }
                NavAnchor { label_key: "nav.experience", anchor: "experience" }
                NavAnchor { label_key: "nav.certifications", anchor: "certifications" }
                NavAnchor { label_key: "nav.contact", anchor: "contact" }
            }
            div { class: "nav-tools",
                LanguageSwitcher {}
                ThemeButtons {}
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
