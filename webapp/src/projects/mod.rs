use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};

use api::catalog::{Category, PROJECTS};
use common::{
    carousel::Carousel,
    detail::{DetailView, Ticket},
    filter::{FilterChange, FilterSelection},
};

use crate::i18n::{tr, use_locale};

mod detail;
mod filters;
mod stage;

pub const CATALOG_ANCHOR: &str = "projects";

// the carousel and its filters, shared by the tech stack section and the projects
// section so that picking a tech anywhere narrows the same list
#[derive(Clone, Copy)]
pub struct Catalog {
    pub carousel: Signal<Carousel>,
    anchor: Signal<Option<Rc<MountedData>>>,
}

impl Catalog {
    fn follow(&self, change: FilterChange) {
        if !change.scroll_to_catalog {
            return;
        }

        let Some(anchor) = self.anchor.peek().clone() else {
            return;
        };

        spawn(async move {
            if let Err(err) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                warn!("failed to scroll to the catalog: {err:?}");
            }
        });
    }

    pub fn toggle_category(&mut self, category: Category) {
        let change = self.carousel.write().toggle_category(category);
        self.follow(change);
    }

    pub fn set_tech_filter(&mut self, tech_id: Option<&str>) {
        let change = self.carousel.write().set_tech_filter(tech_id);
        self.follow(change);
    }

    pub fn clear(&mut self) {
        self.carousel.write().apply(FilterSelection::default());
    }

    pub fn selected_tech(&self) -> Option<String> {
        self.carousel.read().selection().tech().map(str::to_owned)
    }
}

pub fn use_catalog_provider() -> Catalog {
    let carousel = use_signal(|| Carousel::new(PROJECTS.to_vec()));
    let anchor = use_signal(|| None);

    use_context_provider(|| Catalog { carousel, anchor })
}

pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

// the carousel <-> detail switch as the components see it
//
// timers run in the projects section's coroutine so they outlive whichever card or
// detail markup started them; a transitionend on the animated wrapper may finish the
// same ticket sooner
#[derive(Clone, Copy)]
pub struct Details {
    pub view: Signal<DetailView>,
    pending: Signal<Option<Ticket>>,
    timers: Coroutine<Ticket>,
}

impl Details {
    fn start(&mut self, ticket: Ticket) {
        self.pending.set(Some(ticket));
        self.timers.send(ticket);
    }

    pub fn open(&mut self, project_id: &str) {
        let ticket = self.view.write().open(project_id);

        if let Some(ticket) = ticket {
            self.start(ticket);
        }
    }

    pub fn close(&mut self) {
        let ticket = self.view.write().close();

        if let Some(ticket) = ticket {
            self.start(ticket);
        }
    }

    pub fn transition_ended(&mut self) {
        let pending = *self.pending.peek();

        if let Some(ticket) = pending {
            self.view.write().complete(ticket);
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    let mut catalog = use_catalog();
    let mut view = use_signal(DetailView::default);
    let pending = use_signal(|| None::<Ticket>);
    let locale = use_locale();

    let timers = use_coroutine(move |mut rx: UnboundedReceiver<Ticket>| async move {
        while let Some(ticket) = rx.next().await {
            spawn(async move {
                TimeoutFuture::new(ticket.delay_ms()).await;

                if view.write().complete(ticket) {
                    debug!(phase = ?view.peek().phase(), "detail transition finished");
                }
            });
        }
    });

    use_context_provider(|| Details {
        view,
        pending,
        timers,
    });

    // anything still animating is settled, and its timers become stale
    use_drop(move || {
        if let Ok(mut view) = view.try_write() {
            view.cancel();
        }
    });

    let showing_detail = view.read().shows_detail();
    let leaving = view.read().is_transitioning();
    let title = tr(locale(), "work.title");

    rsx! {
        section {
            id: CATALOG_ANCHOR,
            class: "projects",
            onmounted: move |evt| catalog.anchor.set(Some(evt.data())),
            h2 { "{title}" }
            if showing_detail {
                detail::ProjectDetail { leaving }
            } else {
                filters::FilterBar {}
                stage::CarouselStage { leaving }
            }
        }
    }
}
