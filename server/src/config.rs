use std::{fmt, net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

// environment fallback for the contact relay key, so it can stay out of the config file
pub const ACCESS_KEY_ENV: &str = "WEB3FORMS_ACCESS_KEY";

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

// folio server configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FolioConfig {
    pub http: HttpConfig,

    #[serde(default)]
    pub relay: RelayConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for the http server
    pub socket: String,

    // location of the built wasm app; unknown paths get its index.html
    pub doc_root: PathBuf,
}

impl HttpConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.socket
            .parse()
            .with_context(|| format!("invalid http socket {:?}", self.socket))
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    // form api that contact submissions are forwarded to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub access_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            endpoint: default_endpoint(),
            access_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// keep the key out of the logs
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RelayConfig {
    // the config file wins; an empty value counts as unset
    pub fn resolve_access_key(&self) -> Option<String> {
        let key = self
            .access_key
            .clone()
            .or_else(|| std::env::var(ACCESS_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        if key.is_none() {
            warn!("no relay access key in config or {ACCESS_KEY_ENV}, contact form will fail");
        }

        key
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: FolioConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<FolioConfig> {
    // the toml error echoes the offending line, which may well be the access key
    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse config file: {}", err.message())))?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<FolioConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn relay_table_is_optional() {
        let config = parse_config(
            r#"
            [config.http]
            socket = "127.0.0.1:8080"
            doc_root = "/srv/folio"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.relay.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.relay.access_key, None);
        assert_eq!(config.relay.timeout_secs, 10);
    }

    #[test]
    fn configured_key_wins_and_stays_out_of_debug() {
        let config = parse_config(
            r#"
            [config.http]
            socket = "0.0.0.0:80"
            doc_root = "dist"

            [config.relay]
            access_key = "sekrit"
            timeout_secs = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.relay.resolve_access_key().as_deref(), Some("sekrit"));
        assert!(!format!("{config:?}").contains("sekrit"));
    }

    #[test]
    fn parse_errors_do_not_echo_the_document() {
        let err = parse_config(
            r#"
            [config.relay]
            access_key = "sekrit
            "#,
        )
        .unwrap_err();

        assert!(!err.to_string().contains("sekrit"));
    }

    #[test]
    fn bad_socket_is_reported() {
        let http = HttpConfig {
            socket: "localhost".to_owned(),
            doc_root: PathBuf::from("dist"),
        };

        assert!(http.socket_addr().is_err());
    }
}
