use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::certifications::CertificationsSection;
use crate::contact::ContactSection;
use crate::experience::ExperienceSection;
use crate::i18n::{tr, use_locale};
use crate::projects::{ProjectsSection, use_catalog_provider};
use crate::tech::TechStackSection;

#[component]
fn Hero() -> Element {
    let locale = use_locale();

    let greeting = tr(locale(), "hero.greeting");
    let subtitle = tr(locale(), "hero.subtitle");

    rsx! {
        section { class: "hero",
            h1 { "{greeting}" }
            p { "{subtitle}" }
        }
    }
}

// the whole site is this one page; the catalog is provided here so the tech stack and
// the projects section filter the same list
#[component]
pub fn Home() -> Element {
    use_catalog_provider();

    rsx! {
        Hero {}
        TechStackSection {}
        ProjectsSection {}
        ExperienceSection {}
        CertificationsSection {}
        ContactSection {}
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = use_locale();
    let title = tr(locale(), "notFound.title");
    let path = segments.join("/");

    rsx! {
        section { class: "not-found",
            h1 { "404" }
            p { "{title}: /{path}" }
            Link { to: Route::Home {}, class: "btn", "folio" }
        }
    }
}
