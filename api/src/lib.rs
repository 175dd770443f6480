pub mod catalog;
pub mod contact;
pub mod locale;
pub mod stars;

// all api routes hang off of this prefix; the server and the webapp must agree on it
pub const API_URL_ROOT: &str = "/api";

// browser-side helper for an api endpoint
//
// endpoint!(post, SubmitContact, "contact") expands to
//
//   pub async fn submit_contact(req: &SubmitContactReq) -> anyhow::Result<SubmitContactResp>
//
// which sends the request as json to /api/contact.  non-2xx responses are turned into an
// error carrying the response body so that callers can log it
#[macro_export]
macro_rules! endpoint {
    ($method:ident, $name:ident, $path:literal) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::$method(format!("{}/{}", $crate::API_URL_ROOT, $path).as_str())
                    .json(&req.clone())?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}
