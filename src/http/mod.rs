use crate::config::Config;
use crate::error::CheckError;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

const LIMITS_PATH: &str = "/account/limits.json";

pub fn build_client(cfg: &Config) -> reqwest::Result<Client> {
    let mut default_headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(&cfg.user_agent) {
        default_headers.insert(USER_AGENT, ua);
    }
    Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()
}

/// Issue the single limits query and return the raw response body.
///
/// Only transport-level failures (connect, timeout, body read) are
/// errors here. The HTTP status is not inspected: face.com reports
/// failures inside the JSON body, which the validator interprets.
pub async fn fetch_limits(client: &Client, cfg: &Config) -> Result<String, CheckError> {
    let url = format!("{}{}", cfg.api_url.trim_end_matches('/'), LIMITS_PATH);
    debug!("POST {}", url);

    let res = client
        .post(&url)
        .form(&[
            ("api_key", cfg.api_key.as_str()),
            ("api_secret", cfg.api_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| {
            warn!("limits request failed: {}", e);
            CheckError::Transport(e)
        })?;

    debug!("limits response status {}", res.status());
    let body = res.text().await.map_err(CheckError::Transport)?;
    Ok(body)
}
