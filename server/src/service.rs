use std::{future::Future, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::config::FolioConfig;

// these are the services that make up the folio server backend
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ServiceType {
    Http,
    Relay,
}

// Folio Service Messages
//
// without higher-kinded types, we use the normal enum-of-enums
// to enable general safe message passing between services
pub type ESMSender = tokio::sync::mpsc::Sender<ESM>;
pub type ESMReceiver = tokio::sync::mpsc::Receiver<ESM>;

// message responses are carried back via oneshot channels.  this
// type eliminates quite a bit of boilerplate in the responder logic.
pub type ESMResp<T> = tokio::sync::oneshot::Sender<Result<T>>;

#[derive(Debug)]
pub enum ESM {
    Relay(crate::relay::msg::RelayMsg),
}

// service registry
//
// each service is instantiated once and there is one message namespace, so a service
// can find its dependencies by type alone.  services that talk to each other often
// clone the sender once instead of going through the map.
#[derive(Clone, Debug, Default)]
pub struct ESMRegistry(Arc<DashMap<ServiceType, ESMSender>>);

impl ESMRegistry {
    pub fn new() -> Self {
        ESMRegistry(Arc::new(DashMap::new()))
    }

    pub fn insert(&self, k: ServiceType, v: ESMSender) -> Result<()> {
        match self.0.entry(k) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(anyhow::Error::msg(
                "internal error: a sender was added twice to the registry",
            )),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(v);
                Ok(())
            }
        }
    }

    pub fn get(&self, k: &ServiceType) -> Result<ESMSender> {
        Ok(self
            .0
            .get(k)
            .ok_or_else(|| {
                anyhow::Error::msg(format!(
                    "internal error: a service was started without a necessary dependency ({k:?})"
                ))
            })?
            .clone())
    }
}

// core service trait
//
// the outer part owns the channel receiver and the task handles; everything
// interesting lives in the Inner type
#[async_trait]
pub trait FolioService: Send + Sync + 'static {
    type Inner: ESInner;

    fn create(config: Arc<FolioConfig>, registry: &ESMRegistry) -> Result<Self>
    where
        Self: Sized;

    async fn start(&self, registry: &ESMRegistry) -> Result<()>;
}

// service message responder
//
// the message_handler is the rpc entry point; services may also answer on other
// channels (http) as well
#[async_trait]
pub trait ESInner: Sized + Send + Sync + 'static {
    fn new(config: Arc<FolioConfig>, registry: ESMRegistry) -> Result<Self>;

    fn registry(&self) -> ESMRegistry;

    async fn message_handler(&self, esm: ESM) -> Result<()>;

    // rather than have the rpc functions respond directly, the message_handler loop
    // wraps them with this, so they can call each other without any Option<resp>
    async fn respond<T, Fut>(&self, resp: ESMResp<T>, fut: Fut) -> Result<()>
    where
        T: Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        resp.send(fut.await).map_err(|_| {
            anyhow::Error::msg(format!(
                "failed to respond to a {} message",
                std::any::type_name::<T>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_refuses_duplicates() {
        let registry = ESMRegistry::new();
        let (tx, _rx) = tokio::sync::mpsc::channel::<ESM>(1);

        registry.insert(ServiceType::Relay, tx.clone()).unwrap();

        assert!(registry.insert(ServiceType::Relay, tx).is_err());
        assert!(registry.get(&ServiceType::Relay).is_ok());
        assert!(registry.get(&ServiceType::Http).is_err());
    }
}
