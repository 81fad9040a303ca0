//! Configuration module
//!
//! Client configuration for the backend hosting the URL issuer and the metadata writer.
//! The storage PUT goes to whatever URL the issuer returns, so it has no setting here.

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_IMAGES_PATH, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_UPLOAD_URL_PATH,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub upload_url_path: String,
    pub images_path: String,
    /// `None` disables the per-request timeout
    pub request_timeout: Option<Duration>,
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upload_url_path: DEFAULT_UPLOAD_URL_PATH.to_string(),
            images_path: DEFAULT_IMAGES_PATH.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
            api_key: None,
        }
    }
}

impl ClientConfig {
    /// Load from the process environment (and `.env` when present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PICDROP_API_URL")
            .or_else(|| lookup("API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(anyhow::anyhow!("PICDROP_API_URL must not be empty"));
        }

        let upload_url_path = normalize_path(
            lookup("PICDROP_UPLOAD_URL_PATH").unwrap_or_else(|| DEFAULT_UPLOAD_URL_PATH.into()),
        );
        let images_path = normalize_path(
            lookup("PICDROP_IMAGES_PATH").unwrap_or_else(|| DEFAULT_IMAGES_PATH.into()),
        );

        let timeout_secs = match lookup("PICDROP_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("PICDROP_REQUEST_TIMEOUT_SECS must be a valid number")
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        let request_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let api_key = lookup("PICDROP_API_KEY").filter(|k| !k.trim().is_empty());

        Ok(Self {
            api_url,
            upload_url_path,
            images_path,
            request_timeout,
            api_key,
        })
    }

    pub fn upload_url_endpoint(&self) -> String {
        format!("{}{}", self.api_url, self.upload_url_path)
    }

    pub fn images_endpoint(&self) -> String {
        format!("{}{}", self.api_url, self.images_path)
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            config.upload_url_endpoint(),
            "http://localhost:3001/api/upload-url"
        );
        assert_eq!(config.images_endpoint(), "http://localhost:3001/api/images");
    }

    #[test]
    fn overrides_and_fallbacks() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://backend.example/"),
            ("PICDROP_IMAGES_PATH", "v1/images"),
            ("PICDROP_REQUEST_TIMEOUT_SECS", "0"),
            ("PICDROP_API_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://backend.example");
        assert_eq!(config.images_endpoint(), "https://backend.example/v1/images");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn primary_url_wins_over_fallback() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("PICDROP_API_URL", "https://a.example"),
            ("API_URL", "https://b.example"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://a.example");
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let err = ClientConfig::from_lookup(lookup_from(&[(
            "PICDROP_REQUEST_TIMEOUT_SECS",
            "soon",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("PICDROP_REQUEST_TIMEOUT_SECS"));
    }
}
