//! Basic REST calls. These issue the request directly with whatever headers
//! the caller supplies (see [`crate::headers::auth_header`]) and print
//! nothing, which is what an application wants over the display-oriented
//! issuers in [`crate::pretty`].

use crate::errors::Result;
use crate::headers::to_header_map;
use crate::response::{parse_response, RawResponse};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;

/// DELETE with caller-supplied headers.
pub async fn delete(url: &str, headers: &HashMap<String, String>) -> Result<Value> {
    tracing::debug!("DELETE {url}");
    let response = Client::new()
        .delete(url)
        .headers(to_header_map(headers)?)
        .send()
        .await?;
    let response = RawResponse::read(response).await?;

    Ok(parse_response(&response))
}

/// GET without authentication.
pub async fn get(url: &str) -> Result<Value> {
    tracing::debug!("GET {url}");
    let response = RawResponse::read(reqwest::get(url).await?).await?;

    Ok(parse_response(&response))
}

/// POST form fields with caller-supplied headers.
pub async fn post(
    url: &str,
    headers: &HashMap<String, String>,
    data: &HashMap<String, String>,
) -> Result<Value> {
    tracing::debug!("POST {url}");
    let response = Client::new()
        .post(url)
        .headers(to_header_map(headers)?)
        .form(data)
        .send()
        .await?;
    let response = RawResponse::read(response).await?;

    Ok(parse_response(&response))
}

/// PUT form fields with caller-supplied headers.
pub async fn put(
    url: &str,
    headers: &HashMap<String, String>,
    data: &HashMap<String, String>,
) -> Result<Value> {
    tracing::debug!("PUT {url}");
    let response = Client::new()
        .put(url)
        .headers(to_header_map(headers)?)
        .form(data)
        .send()
        .await?;
    let response = RawResponse::read(response).await?;

    Ok(parse_response(&response))
}
