#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod shared;
use shared::style::MODERN_STYLES;

mod certifications;
mod contact;
mod experience;
mod i18n;
mod projects;
mod stars;
mod tech;

mod theme;
use theme::{ThemeStyle, ThemeToast, use_theme_provider};

mod nav;
use nav::NavBar;

mod home;
use home::{Home, PageNotFound};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_theme_provider();
    i18n::use_locale_provider();
    stars::use_stars_provider();

    rsx! {
        style { "{MODERN_STYLES}" }
        ThemeStyle {}
        ThemeToast {}
        Router::<Route> { config: RouterConfig::default }
    }
}
