use crate::errors::Result;
use reqwest::StatusCode;
use serde_json::{Map, Value};

/// An HTTP response captured as plain data: the request URL it answered, the
/// status, and the body text. Reading the body consumes the transport
/// response, so capture is an explicit step between sending and parsing.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Capture a [`reqwest::Response`], reading the full body.
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let url = response.url().to_string();
        let status = response.status();
        let body = response.text().await?;

        Ok(Self { url, status, body })
    }

    /// The canonical reason phrase for the status, e.g. `Internal Server Error`.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Decode the body as JSON, surfacing the decode error to the caller.
    ///
    /// Unlike [`parse_response`], this lets callers tell a parse failure apart
    /// from a response that was legitimately `{}`.
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Parse a response body as JSON.
///
/// Returns whatever the body decodes to. If the body is not valid JSON
/// (including an empty body), prints a diagnostic line with the request URL,
/// status, reason phrase and raw body, and returns an empty object instead.
/// Never fails.
pub fn parse_response(response: &RawResponse) -> Value {
    match response.json() {
        Ok(value) => value,
        Err(_) => {
            println!(
                "URL: {}\n{} ({}): {}",
                response.url,
                response.status.as_u16(),
                response.reason(),
                response.body
            );
            Value::Object(Map::new())
        }
    }
}
