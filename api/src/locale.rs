use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::endpoint;

pub const LOCALE_COOKIE: &str = "locale";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    It,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::It];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::It => "it",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    // exact codes only; callers normalise whatever their source allows
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "it" => Ok(Locale::It),
            other => Err(anyhow::Error::msg(format!("unsupported locale {other}"))),
        }
    }
}

// ask the server which locale this browser resolved to
pub async fn get_locale() -> anyhow::Result<GetLocaleResp> {
    let resp = gloo_net::http::Request::get(format!("{}/locale", crate::API_URL_ROOT).as_str())
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GetLocaleResp {
    pub locale: Locale,
}

// switch language; the server answers with a Set-Cookie so later visits start there
endpoint!(put, SetLocale, "locale");

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SetLocaleReq {
    pub locale: Locale,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SetLocaleResp {
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_exact_codes_only() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("it".parse::<Locale>().unwrap(), Locale::It);
        assert!("ES".parse::<Locale>().is_err());
        assert!(" it".parse::<Locale>().is_err());
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn serializes_as_code() {
        let body = serde_json::to_string(&GetLocaleResp { locale: Locale::It }).unwrap();
        assert_eq!(body, r#"{"locale":"it"}"#);
    }
}
