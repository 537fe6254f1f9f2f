// src/core/net.rs
// Blocking HTTPS GET returning the decoded JSON body.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::consts::USER_AGENT;
use crate::error::Result;

pub fn build_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` with `query` pairs. Non-2xx statuses and undecodable bodies are errors.
pub fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let resp = client.get(url).query(query).send()?.error_for_status()?;
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}
