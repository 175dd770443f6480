use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::http::{
    Method, Request, StatusCode, Uri,
    header::{ACCEPT, CONTENT_TYPE},
};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::{Level, debug, instrument};

#[derive(Clone, Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

// the far end of the contact relay
#[async_trait]
pub trait Upstream: Send + Sync + 'static {
    async fn post_json(&self, body: Vec<u8>) -> Result<UpstreamReply>;
}

// https-only client for the form api
#[derive(Clone, Debug)]
pub struct HyperUpstream {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    endpoint: Uri,
    timeout: Duration,
}

impl HyperUpstream {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint: Uri = endpoint
            .parse()
            .with_context(|| format!("invalid relay endpoint {endpoint:?}"))?;

        let https = HttpsConnectorBuilder::new()
            .with_native_roots()
            .context("failed to load native root certificates")?
            .https_only()
            .enable_http1()
            .enable_http2()
            .build();

        Ok(HyperUpstream {
            client: Client::builder(TokioExecutor::new()).build(https),
            endpoint,
            timeout,
        })
    }
}

#[async_trait]
impl Upstream for HyperUpstream {
    #[instrument(level=Level::DEBUG, skip(self, body), fields(endpoint = %self.endpoint))]
    async fn post_json(&self, body: Vec<u8>) -> Result<UpstreamReply> {
        let req = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(Full::new(Bytes::from(body)))?;

        let resp = tokio::time::timeout(self.timeout, self.client.request(req))
            .await
            .context("relay upstream timed out")?
            .context("relay upstream request failed")?;

        let status = resp.status();

        let body = tokio::time::timeout(self.timeout, resp.into_body().collect())
            .await
            .context("relay upstream body timed out")?
            .context("failed to read relay upstream body")?
            .to_bytes();

        debug!(status = %status, bytes = body.len(), "relay upstream answered");

        Ok(UpstreamReply { status, body })
    }
}
