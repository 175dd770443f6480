use anyhow::Result;
use async_trait::async_trait;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::ESInner;
use api::contact::{ErrorResp, SubmitContactReq};

pub mod msg;
pub mod svc;
pub mod upstream;

pub const MISSING_KEY_MESSAGE: &str = "Missing WEB3FORMS_ACCESS_KEY environment variable";
pub const BAD_UPSTREAM_MESSAGE: &str = "Web3Forms failed to respond correctly";

// contact form relay
//
// transport failures are errors (the http side turns those into a generic 500); every
// other result, including a rejection by the form api, is an outcome to report
#[async_trait]
pub trait ESRelayService: ESInner {
    async fn submit(&self, submission: SubmitContactReq) -> Result<RelayOutcome>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum RelayOutcome {
    // no access key was configured, so nothing was sent
    MissingKey,

    // the form api answered with something other than json
    BadUpstream,

    // the form api's json, with 200 for any success and its own status otherwise
    Relayed {
        status: StatusCode,
        body: serde_json::Value,
    },
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        let reply = |status: StatusCode, message: &str| {
            (
                status,
                Json(ErrorResp {
                    message: message.to_owned(),
                }),
            )
                .into_response()
        };

        match self {
            RelayOutcome::MissingKey => reply(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE),
            RelayOutcome::BadUpstream => reply(StatusCode::BAD_GATEWAY, BAD_UPSTREAM_MESSAGE),
            RelayOutcome::Relayed { status, body } => (status, Json(body)).into_response(),
        }
    }
}
