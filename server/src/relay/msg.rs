use crate::relay::RelayOutcome;
use crate::service::{ESM, ESMResp};
use api::contact::SubmitContactReq;

#[derive(Debug)]
pub enum RelayMsg {
    Submit {
        resp: ESMResp<RelayOutcome>,
        submission: SubmitContactReq,
    },
}

impl From<RelayMsg> for ESM {
    fn from(value: RelayMsg) -> Self {
        ESM::Relay(value)
    }
}
