use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{Level, info, instrument};

use crate::http::{AppError, svc::HttpEndpoint};
use crate::relay::msg::RelayMsg;
use api::contact::{ErrorResp, SubmitContactReq};

#[instrument(level=Level::DEBUG, skip_all)]
pub(super) async fn submit_contact(
    State(state): State<Arc<HttpEndpoint>>,
    Json(submission): Json<SubmitContactReq>,
) -> Result<Response, AppError> {
    // bots get an answer but nothing leaves the server
    if submission.is_spam() {
        info!(service = "http", route = "contact", "honeypot filled, rejecting");

        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorResp {
                message: "Bot detected".to_owned(),
            }),
        )
            .into_response());
    }

    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .relay_svc_sender
        .send(
            RelayMsg::Submit {
                resp: tx,
                submission,
            }
            .into(),
        )
        .await
        .context("failed to send Submit message")?;

    let outcome = rx.await.context("failed to receive Submit response")??;

    Ok(outcome.into_response())
}
