use std::{
    collections::{BTreeMap, BTreeSet},
    future::Future,
};

use anyhow::Context;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Clock;

pub const CACHE_KEY: &str = "folio_github_stars";

pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

pub type StarCounts = BTreeMap<String, u64>;

// string storage, the shape of window.localStorage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<T: KeyValueStore> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        T::get(self, key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        T::set(self, key, value)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CachedStars {
    pub data: StarCounts,
    pub timestamp: i64,
}

// star counts with a one day shelf life
#[derive(Debug)]
pub struct StarCache<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> StarCache<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        StarCache { store, clock }
    }

    // only a fresh, well-formed entry counts; anything else is a miss
    pub fn load(&self) -> Option<StarCounts> {
        let raw = self.store.get(CACHE_KEY)?;

        let cached: CachedStars = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(err) => {
                warn!(key = CACHE_KEY, error = %err, "ignoring malformed star cache");
                return None;
            }
        };

        let age = self.clock.now_millis() - cached.timestamp;

        if !(0..CACHE_TTL_MS).contains(&age) {
            debug!(age_ms = age, "star cache is stale");
            return None;
        }

        Some(cached.data)
    }

    pub fn store(&self, data: &StarCounts) -> anyhow::Result<()> {
        let cached = CachedStars {
            data: data.clone(),
            timestamp: self.clock.now_millis(),
        };

        let raw = serde_json::to_string(&cached).context("failed to encode star cache")?;

        self.store.set(CACHE_KEY, &raw)
    }
}

// one fetch per distinct repository, all in flight at once
//
// a repository that fails or has no count is simply absent from the result
pub async fn gather_stars<'a, F, Fut>(repos: impl IntoIterator<Item = &'a str>, fetch: F) -> StarCounts
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = anyhow::Result<Option<u64>>>,
{
    let unique: BTreeSet<&str> = repos.into_iter().collect();

    let results = join_all(unique.into_iter().map(|repo| {
        let fut = fetch(repo.to_owned());
        async move { (repo, fut.await) }
    }))
    .await;

    results
        .into_iter()
        .filter_map(|(repo, result)| match result {
            Ok(Some(stars)) => Some((repo.to_owned(), stars)),
            Ok(None) => {
                debug!(repo = repo, "no star count");
                None
            }
            Err(err) => {
                warn!(repo = repo, error = %err, "failed to fetch star count");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
    };

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::ManualClock;

    #[derive(Debug, Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    fn counts(pairs: &[(&str, u64)]) -> StarCounts {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn fresh_entries_hit_and_stale_entries_miss() {
        let store = MemoryStore::default();
        let clock = ManualClock::at(1_000_000);
        let cache = StarCache::new(&store, &clock);

        let data = counts(&[("a/b", 3), ("c/d", 0)]);
        cache.store(&data).unwrap();

        assert_eq!(cache.load(), Some(data.clone()));

        clock.advance(CACHE_TTL_MS - 1);
        assert_eq!(cache.load(), Some(data));

        clock.advance(1);
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn malformed_entries_are_a_miss() {
        let store = MemoryStore::default();
        let clock = ManualClock::at(0);
        let cache = StarCache::new(&store, &clock);

        store.set(CACHE_KEY, "{not json").unwrap();
        assert_eq!(cache.load(), None);

        store.set(CACHE_KEY, r#"{"data": {"a/b": "many"}, "timestamp": 0}"#).unwrap();
        assert_eq!(cache.load(), None);

        store.set(CACHE_KEY, r#"{"data": {"a/b": 7}, "timestamp": 0}"#).unwrap();
        assert_eq!(cache.load(), Some(counts(&[("a/b", 7)])));
    }

    #[test]
    fn empty_store_is_a_miss() {
        let store = MemoryStore::default();
        let clock = ManualClock::at(0);
        let cache = StarCache::new(&store, &clock);

        assert_eq!(cache.load(), None);
    }

    #[test]
    fn gathering_fetches_each_repo_once_and_drops_failures() {
        let calls = Cell::new(0);

        let stars = block_on(gather_stars(
            ["a/ok", "b/none", "c/err", "a/ok", "d/zero"],
            |repo| {
                calls.set(calls.get() + 1);

                async move {
                    match repo.as_str() {
                        "a/ok" => Ok(Some(12)),
                        "d/zero" => Ok(Some(0)),
                        "b/none" => Ok(None),
                        _ => Err(anyhow::Error::msg("rate limited")),
                    }
                }
            },
        ));

        assert_eq!(calls.get(), 4);
        assert_eq!(stars, counts(&[("a/ok", 12), ("d/zero", 0)]));
    }
}
