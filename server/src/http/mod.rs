use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use api::contact::ErrorResp;

pub mod contact;
pub mod locale;
pub mod svc;

// the detail goes to the log, the client only learns that something broke
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = format!("{:#}", self.0);
        error!({service = "http", error = %err});

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResp {
                message: "Internal Server Error".to_owned(),
            }),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
