use serde::{Deserialize, Serialize};

use crate::endpoint;

// contact form relay
//
// the honeypot field is rendered invisibly in the form; people leave it empty, form-filling
// bots usually do not
endpoint!(post, SubmitContact, "contact");

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubmitContactReq {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "honeyPot", default)]
    pub honey_pot: String,
}

impl SubmitContactReq {
    pub fn is_spam(&self) -> bool {
        !self.honey_pot.is_empty()
    }
}

// the server passes the upstream body through, so everything past these two fields is
// whatever the form api decided to send
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubmitContactResp {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// error body for responses the server generates itself
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ErrorResp {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honeypot_uses_camel_case_on_the_wire() {
        let req: SubmitContactReq = serde_json::from_str(
            r#"{"name":"a","email":"b@c.d","message":"hi","honeyPot":"x"}"#,
        )
        .unwrap();

        assert!(req.is_spam());
    }

    #[test]
    fn missing_honeypot_is_not_spam() {
        let req: SubmitContactReq =
            serde_json::from_str(r#"{"name":"a","email":"b@c.d","message":"hi"}"#).unwrap();

        assert!(!req.is_spam());
    }

    #[test]
    fn upstream_body_with_extra_fields_still_parses() {
        let resp: SubmitContactResp =
            serde_json::from_str(r#"{"success":true,"data":{"id":"abc"}}"#).unwrap();

        assert!(resp.success);
        assert_eq!(resp.message, None);
    }
}
