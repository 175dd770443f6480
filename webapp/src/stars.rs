use dioxus::prelude::*;
use tracing::{debug, warn};

use api::{catalog::PROJECTS, stars::fetch_repo_stars};
use common::{
    SystemClock,
    stars::{StarCache, StarCounts, gather_stars},
};

use crate::shared::storage::LocalStore;

// star counts for every project repository, from the day-old cache when there is one,
// otherwise straight from github; the page never waits on this
pub fn use_stars_provider() -> Signal<StarCounts> {
    let mut stars = use_context_provider(|| Signal::new(StarCounts::new()));

    use_future(move || async move {
        let cache = StarCache::new(LocalStore, SystemClock);

        if let Some(cached) = cache.load() {
            debug!(repos = cached.len(), "using cached star counts");
            stars.set(cached);
            return;
        }

        let fresh = gather_stars(PROJECTS.iter().map(|p| p.repo), |repo| async move {
            fetch_repo_stars(&repo).await
        })
        .await;

        if let Err(err) = cache.store(&fresh) {
            warn!("failed to cache star counts: {err}");
        }

        stars.set(fresh);
    });

    stars
}

#[derive(Clone, PartialEq, Props)]
pub struct StarBadgeProps {
    repo: &'static str,
}

// nothing at all for a repository without stars, or one we could not reach
#[component]
pub fn StarBadge(props: StarBadgeProps) -> Element {
    let stars = use_context::<Signal<StarCounts>>();

    let count = stars.read().get(props.repo).copied().unwrap_or(0);

    if count == 0 {
        return rsx! {};
    }

    rsx! {
        span { class: "star-badge", title: "GitHub stars", "★ {count}" }
    }
}
