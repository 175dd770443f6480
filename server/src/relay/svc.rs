use std::{sync::Arc, time::Duration};

use anyhow::Result;
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::http::StatusCode;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{Level, debug, error, info, instrument, warn};

use crate::config::FolioConfig;
use crate::relay::{
    ESRelayService, RelayOutcome,
    msg::RelayMsg,
    upstream::{HyperUpstream, Upstream},
};
use crate::service::{ESInner, ESM, ESMReceiver, ESMRegistry, FolioService, ServiceType};
use api::contact::SubmitContactReq;

pub struct RelayService {
    config: Arc<FolioConfig>,
    receiver: Arc<Mutex<ESMReceiver>>,
    handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
}

#[async_trait]
impl FolioService for RelayService {
    type Inner = RelayRunner;

    fn create(config: Arc<FolioConfig>, registry: &ESMRegistry) -> Result<Self> {
        let (tx, rx) = tokio::sync::mpsc::channel::<ESM>(64);

        registry.insert(ServiceType::Relay, tx)?;

        Ok(RelayService {
            config: config.clone(),
            receiver: Arc::new(Mutex::new(rx)),
            handle: AsyncCell::new(),
        })
    }

    #[instrument(level=Level::DEBUG, skip(self, registry))]
    async fn start(&self, registry: &ESMRegistry) -> Result<()> {
        info!("starting");

        let receiver = Arc::clone(&self.receiver);
        let state = Arc::new(RelayRunner::new(self.config.clone(), registry.clone())?);

        let serve = {
            async move {
                let mut receiver = receiver.lock().await;

                while let Some(msg) = receiver.recv().await {
                    let state = Arc::clone(&state);
                    tokio::task::spawn(async move {
                        match state.message_handler(msg).await {
                            Ok(()) => (),
                            Err(err) => {
                                error!({service = "relay", channel = "esm", error = %err})
                            }
                        }
                    });
                }

                Err(anyhow::Error::msg("relay service esm channel disconnected"))
            }
        };

        self.handle.set(tokio::task::spawn(serve));

        debug!("started");
        Ok(())
    }
}

// what the form api gets: the key plus the visitor's fields, never the honeypot
#[derive(Debug, Serialize)]
struct UpstreamPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

pub struct RelayRunner {
    registry: ESMRegistry,
    access_key: Option<String>,
    upstream: Arc<dyn Upstream>,
}

impl RelayRunner {
    pub fn with_upstream(
        registry: ESMRegistry,
        access_key: Option<String>,
        upstream: Arc<dyn Upstream>,
    ) -> Self {
        RelayRunner {
            registry,
            access_key,
            upstream,
        }
    }
}

#[async_trait]
impl ESInner for RelayRunner {
    fn new(config: Arc<FolioConfig>, registry: ESMRegistry) -> Result<Self> {
        let upstream = HyperUpstream::new(
            &config.relay.endpoint,
            Duration::from_secs(config.relay.timeout_secs),
        )?;

        Ok(RelayRunner::with_upstream(
            registry,
            config.relay.resolve_access_key(),
            Arc::new(upstream),
        ))
    }

    fn registry(&self) -> ESMRegistry {
        self.registry.clone()
    }

    async fn message_handler(&self, esm: ESM) -> Result<()> {
        match esm {
            ESM::Relay(message) => match message {
                RelayMsg::Submit { resp, submission } => {
                    self.respond(resp, self.submit(submission)).await
                }
            },
        }
    }
}

#[async_trait]
impl ESRelayService for RelayRunner {
    #[instrument(level=Level::DEBUG, skip_all)]
    async fn submit(&self, submission: SubmitContactReq) -> Result<RelayOutcome> {
        let Some(access_key) = self.access_key.as_deref() else {
            warn!(service = "relay", "dropping contact submission, no access key");
            return Ok(RelayOutcome::MissingKey);
        };

        let payload = serde_json::to_vec(&UpstreamPayload {
            access_key,
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        })?;

        let reply = self.upstream.post_json(payload).await?;

        let body = match serde_json::from_slice::<serde_json::Value>(&reply.body) {
            Ok(serde_json::Value::Null) => None,
            Ok(body) => Some(body),
            Err(err) => {
                warn!(service = "relay", status = %reply.status, error = %err, "upstream body is not json");
                None
            }
        };

        let Some(body) = body else {
            return Ok(RelayOutcome::BadUpstream);
        };

        let status = if reply.status.is_success() {
            StatusCode::OK
        } else {
            reply.status
        };

        debug!(service = "relay", status = %status, "relayed contact submission");

        Ok(RelayOutcome::Relayed { status, body })
    }
}
