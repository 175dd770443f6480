use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    routing::{any, get, post},
};
use tokio::{net::TcpListener, sync::Mutex};
use tower::Service;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{Level, debug, error, info, instrument};

use crate::config::FolioConfig;
use crate::http::{contact::submit_contact, locale};
use crate::service::*;

pub struct HttpService {
    config: Arc<FolioConfig>,
    receiver: Arc<Mutex<ESMReceiver>>,
    msg_handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
    hyper_handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
}

#[async_trait]
impl FolioService for HttpService {
    type Inner = HttpEndpoint;

    fn create(config: Arc<FolioConfig>, registry: &ESMRegistry) -> Result<Self> {
        let (tx, rx) = tokio::sync::mpsc::channel::<ESM>(32);

        registry.insert(ServiceType::Http, tx)?;

        Ok(HttpService {
            config: config.clone(),
            receiver: Arc::new(Mutex::new(rx)),
            msg_handle: AsyncCell::new(),
            hyper_handle: AsyncCell::new(),
        })
    }

    #[instrument(level=Level::DEBUG, skip(self, registry))]
    async fn start(&self, registry: &ESMRegistry) -> Result<()> {
        info!("starting");

        let receiver = Arc::clone(&self.receiver);
        let state = Arc::new(HttpEndpoint::new(self.config.clone(), registry.clone())?);

        // a socket that is already in use is a startup failure, not a background one
        let socket = self.config.http.socket_addr()?;
        let listener = TcpListener::bind(socket)
            .await
            .with_context(|| format!("failed to bind http socket {socket}"))?;

        info!(socket = %socket, doc_root = %self.config.http.doc_root.display(), "listening");

        self.hyper_handle
            .set(tokio::task::spawn(serve_http(listener, Arc::clone(&state))));

        let msg_serve = {
            async move {
                let mut receiver = receiver.lock().await;

                while let Some(msg) = receiver.recv().await {
                    let state = Arc::clone(&state);
                    tokio::task::spawn(async move {
                        match state.message_handler(msg).await {
                            Ok(()) => (),
                            Err(err) => {
                                error!({service = "http", channel = "esm", error = %err})
                            }
                        }
                    });
                }

                Err(anyhow::Error::msg("http service esm channel disconnected"))
            }
        };

        self.msg_handle.set(tokio::task::spawn(msg_serve));

        debug!("started");
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    registry: ESMRegistry,
    pub(super) relay_svc_sender: ESMSender,
    doc_root: PathBuf,
}

#[async_trait]
impl ESInner for HttpEndpoint {
    fn new(config: Arc<FolioConfig>, registry: ESMRegistry) -> Result<Self> {
        Ok(HttpEndpoint {
            registry: registry.clone(),
            relay_svc_sender: registry.get(&ServiceType::Relay)?,
            doc_root: config.http.doc_root.clone(),
        })
    }

    fn registry(&self) -> ESMRegistry {
        self.registry.clone()
    }

    // nothing sends to the http service yet; it only answers on its socket
    async fn message_handler(&self, esm: ESM) -> Result<()> {
        Err(anyhow::Error::msg(format!(
            "http service does not handle {esm:?}"
        )))
    }
}

// api routes first; anything else is the single page app, whose router takes it from there
pub fn router(state: Arc<HttpEndpoint>) -> Router {
    let index = state.doc_root.join("index.html");
    let app = ServeDir::new(&state.doc_root).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/locale", get(locale::get_locale).put(locale::set_locale))
        .route("/api/{*rest}", any(api_not_found))
        .fallback_service(app)
        .with_state(state)
}

async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn serve_http(listener: TcpListener, state: Arc<HttpEndpoint>) -> Result<()> {
    let router = router(state);

    let service = hyper::service::service_fn(move |request: Request<hyper::body::Incoming>| {
        router.clone().call(request)
    });

    // the main http server loop
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                error!({service = "http", channel = "accept", error = %err});
                continue;
            }
        };

        let service = service.clone();
        let io = hyper_util::rt::TokioIo::new(stream);

        tokio::task::spawn(async move {
            match hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                .serve_connection(io, service)
                .await
            {
                Ok(()) => (),
                Err(err) => debug!({service = "http", peer = %peer, error = %err}),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{
            Method,
            header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, SET_COOKIE},
        },
        response::Response,
    };
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::relay::{RelayOutcome, msg::RelayMsg};

    fn endpoint(doc_root: PathBuf) -> (Arc<HttpEndpoint>, ESMReceiver) {
        let (tx, rx) = tokio::sync::mpsc::channel::<ESM>(4);

        let state = HttpEndpoint {
            registry: ESMRegistry::new(),
            relay_svc_sender: tx,
            doc_root,
        };

        (Arc::new(state), rx)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact(honey_pot: &str) -> Value {
        json!({"name": "Ada", "email": "ada@example.com", "message": "hi", "honeyPot": honey_pot})
    }

    #[tokio::test]
    async fn honeypot_is_rejected_without_reaching_the_relay() {
        let (state, mut relay_rx) = endpoint(PathBuf::from("/nonexistent"));

        let resp = router(state)
            .oneshot(json_request(Method::POST, "/api/contact", contact("gotcha")))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await, json!({"message": "Bot detected"}));
        assert!(relay_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn relay_outcome_becomes_the_response() {
        let (state, mut relay_rx) = endpoint(PathBuf::from("/nonexistent"));

        let relay = tokio::spawn(async move {
            let Some(ESM::Relay(RelayMsg::Submit { resp, submission })) = relay_rx.recv().await
            else {
                panic!("expected a submit message");
            };

            assert_eq!(submission.name, "Ada");

            resp.send(Ok(RelayOutcome::Relayed {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                body: json!({"success": false, "message": "bad email"}),
            }))
            .unwrap();
        });

        let resp = router(state)
            .oneshot(json_request(Method::POST, "/api/contact", contact("")))
            .await
            .unwrap();

        relay.await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(resp).await,
            json!({"success": false, "message": "bad email"})
        );
    }

    #[tokio::test]
    async fn relay_errors_are_a_generic_500() {
        let (state, mut relay_rx) = endpoint(PathBuf::from("/nonexistent"));

        tokio::spawn(async move {
            if let Some(ESM::Relay(RelayMsg::Submit { resp, .. })) = relay_rx.recv().await {
                let _ = resp.send(Err(anyhow::Error::msg("tls handshake eof")));
            }
        });

        let resp = router(state)
            .oneshot(json_request(Method::POST, "/api/contact", contact("")))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            json!({"message": "Internal Server Error"})
        );
    }

    #[tokio::test]
    async fn missing_key_and_bad_upstream_map_to_their_statuses() {
        for (outcome, status) in [
            (RelayOutcome::MissingKey, StatusCode::INTERNAL_SERVER_ERROR),
            (RelayOutcome::BadUpstream, StatusCode::BAD_GATEWAY),
        ] {
            let (state, mut relay_rx) = endpoint(PathBuf::from("/nonexistent"));

            tokio::spawn(async move {
                if let Some(ESM::Relay(RelayMsg::Submit { resp, .. })) = relay_rx.recv().await {
                    let _ = resp.send(Ok(outcome));
                }
            });

            let resp = router(state)
                .oneshot(json_request(Method::POST, "/api/contact", contact("")))
                .await
                .unwrap();

            assert_eq!(resp.status(), status);
            assert!(body_json(resp).await["message"].is_string());
        }
    }

    #[tokio::test]
    async fn malformed_contact_body_is_a_client_error() {
        let (state, mut relay_rx) = endpoint(PathBuf::from("/nonexistent"));

        let resp = router(state)
            .oneshot(json_request(Method::POST, "/api/contact", json!({"name": 3})))
            .await
            .unwrap();

        assert!(resp.status().is_client_error());
        assert!(relay_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn locale_comes_from_cookie_then_accept_language() {
        let (state, _relay_rx) = endpoint(PathBuf::from("/nonexistent"));
        let app = router(state);

        let req = axum::http::Request::builder()
            .uri("/api/locale")
            .header(COOKIE, "theme=0")
            .header(COOKIE, "locale=it")
            .header(ACCEPT_LANGUAGE, "es")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(body_json(resp).await, json!({"locale": "it"}));

        let req = axum::http::Request::builder()
            .uri("/api/locale")
            .header(ACCEPT_LANGUAGE, "es-AR,es;q=0.9,en;q=0.8")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(body_json(resp).await, json!({"locale": "es"}));

        let req = axum::http::Request::builder()
            .uri("/api/locale")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(body_json(resp).await, json!({"locale": "en"}));
    }

    #[tokio::test]
    async fn setting_the_locale_sets_the_cookie() {
        let (state, _relay_rx) = endpoint(PathBuf::from("/nonexistent"));
        let app = router(state);

        let resp = app
            .clone()
            .oneshot(json_request(Method::PUT, "/api/locale", json!({"locale": "es"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(SET_COOKIE).unwrap(),
            "locale=es; Path=/; Max-Age=31536000; SameSite=Lax"
        );
        assert_eq!(body_json(resp).await, json!({"locale": "es"}));

        let resp = app
            .oneshot(json_request(Method::PUT, "/api/locale", json!({"locale": "fr"})))
            .await
            .unwrap();

        assert!(resp.status().is_client_error());
        assert!(resp.headers().get(SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn unknown_paths_get_the_app_and_unknown_api_paths_do_not() {
        let doc_root = std::env::temp_dir().join(format!("folio-doc-root-{}", std::process::id()));
        std::fs::create_dir_all(&doc_root).unwrap();
        std::fs::write(doc_root.join("index.html"), "<div id=\"main\"></div>").unwrap();

        let (state, _relay_rx) = endpoint(doc_root.clone());
        let app = router(state);

        let req = axum::http::Request::builder()
            .uri("/projects/civy")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<div id=\"main\"></div>");

        let req = axum::http::Request::builder()
            .uri("/api/nope")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(doc_root).unwrap();
    }
}
