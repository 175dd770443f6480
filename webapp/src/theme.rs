use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use common::theme::{Palette, ThemeStore};

use crate::i18n::{tr, use_locale};

const TOAST_MS: u32 = 4000;

// one per palette change; seq tells a newer toast apart from an older one with the same name
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toast {
    seq: u64,
    palette: &'static Palette,
}

// the theme store lives in a signal at the root; the toast hears about changes through a
// store subscription rather than by watching the signal
pub fn use_theme_provider() -> Signal<ThemeStore> {
    let mut store = use_context_provider(|| Signal::new(ThemeStore::default()));
    let mut toast = use_context_provider(|| Signal::new(None::<Toast>));

    let subscription = use_hook(move || {
        let mut seq = 0;

        store.write().subscribe(move |palette| {
            seq += 1;
            toast.set(Some(Toast { seq, palette }));
        })
    });

    use_drop(move || {
        if let Ok(mut store) = store.try_write() {
            store.unsubscribe(subscription);
        }
    });

    store
}

pub fn use_theme() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

#[component]
pub fn ThemeStyle() -> Element {
    let store = use_theme();
    let rule = store.read().current().root_rule();

    rsx! {
        style { "{rule}" }
    }
}

#[component]
pub fn ThemeButtons() -> Element {
    let mut store = use_theme();
    let locale = use_locale();

    rsx! {
        div { class: "theme-buttons",
            button {
                class: "btn",
                title: tr(locale(), "nav.theme_previous"),
                onclick: move |_| {
                    store.write().previous();
                },
                "◀"
            }
            button {
                class: "btn",
                title: tr(locale(), "nav.theme_next"),
                onclick: move |_| {
                    store.write().next();
                },
                "▶"
            }
        }
    }
}

#[component]
pub fn ThemeToast() -> Element {
    let mut toast = use_context::<Signal<Option<Toast>>>();
    let locale = use_locale();

    // each toast starts its own timer, and only clears itself
    use_effect(move || {
        if let Some(shown) = toast() {
            spawn(async move {
                TimeoutFuture::new(TOAST_MS).await;

                if *toast.peek() == Some(shown) {
                    debug!(palette = shown.palette.name, "hiding theme toast");
                    toast.set(None);
                }
            });
        }
    });

    let Some(shown) = toast() else {
        return rsx! {};
    };

    let palette = shown.palette;
    let label = tr(locale(), "toast.theme");

    rsx! {
        div { class: "theme-toast", role: "status",
            strong { "{label}: {palette.name}" }
            div { class: "swatches",
                for color in [palette.background, palette.accent_1, palette.accent_2] {
                    div {
                        key: "{color}",
                        class: "swatch",
                        title: "{color}",
                        style: "background: {color};",
                    }
                }
            }
        }
    }
}
