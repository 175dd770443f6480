use axum::{
    Json,
    http::{
        HeaderMap,
        header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use tracing::{Level, debug, instrument};

use api::locale::{GetLocaleResp, SetLocaleReq, SetLocaleResp};
use common::locale::{locale_cookie, resolve_locale};

// browsers may split cookies over several headers
fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<&str> = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    (!cookies.is_empty()).then(|| cookies.join("; "))
}

#[instrument(level=Level::DEBUG, skip_all)]
pub(super) async fn get_locale(headers: HeaderMap) -> Json<GetLocaleResp> {
    let cookies = cookie_header(&headers);

    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let locale = resolve_locale(cookies.as_deref(), accept_language);
    debug!(locale = %locale, "resolved locale");

    Json(GetLocaleResp { locale })
}

#[instrument(level=Level::DEBUG, skip_all)]
pub(super) async fn set_locale(Json(req): Json<SetLocaleReq>) -> Response {
    debug!(locale = %req.locale, "switching locale");

    (
        [(SET_COOKIE, locale_cookie(req.locale))],
        Json(SetLocaleResp { locale: req.locale }),
    )
        .into_response()
}
