//! Request issuers that display the web traffic they generate.
//!
//! Each call prints the fully prepared request before sending it, so an
//! audience can see exactly what goes over the wire. Credentials and bodies
//! are printed in cleartext; use the [`crate::rest`] issuers for anything
//! beyond a demo.

use crate::errors::Result;
use crate::headers::{auth_header, to_header_map};
use crate::response::{parse_response, RawResponse};
use reqwest::{Client, Request, Response};
use serde_json::Value;
use std::collections::HashMap;

/// Print a prepared request: method and URL, headers one per line, then the
/// body text (empty when the request has none).
fn print_request(request: &Request) {
    let headers = request
        .headers()
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect::<Vec<_>>()
        .join("\n");
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default();

    println!(
        "{}\n{} {}\n{}\n\n{}",
        "-----------REQUEST-----------",
        request.method(),
        request.url(),
        headers,
        body,
    );
}

/// Print a prepared request, then dispatch it on a fresh session and return
/// the raw response.
pub async fn send(request: Request) -> Result<Response> {
    print_request(&request);
    tracing::debug!("Sending {} {}", request.method(), request.url());

    let session = Client::new();
    Ok(session.execute(request).await?)
}

/// DELETE with a bearer token, displaying the traffic.
pub async fn pretty_delete(url: &str, access_token: &str) -> Result<Value> {
    let request = Client::new()
        .delete(url)
        .headers(to_header_map(&auth_header(access_token))?)
        .build()?;
    let response = RawResponse::read(send(request).await?).await?;

    Ok(parse_response(&response))
}

/// GET without authentication, displaying the traffic.
pub async fn pretty_get(url: &str) -> Result<Value> {
    let request = Client::new().get(url).build()?;
    let response = RawResponse::read(send(request).await?).await?;

    Ok(parse_response(&response))
}

/// POST form fields with a bearer token, displaying the traffic.
pub async fn pretty_post(
    url: &str,
    access_token: &str,
    data: &HashMap<String, String>,
) -> Result<Value> {
    let request = Client::new()
        .post(url)
        .headers(to_header_map(&auth_header(access_token))?)
        .form(data)
        .build()?;
    let response = RawResponse::read(send(request).await?).await?;

    Ok(parse_response(&response))
}

/// PUT form fields with a bearer token, displaying the traffic.
pub async fn pretty_put(
    url: &str,
    access_token: &str,
    data: &HashMap<String, String>,
) -> Result<Value> {
    let request = Client::new()
        .put(url)
        .headers(to_header_map(&auth_header(access_token))?)
        .form(data)
        .build()?;
    let response = RawResponse::read(send(request).await?).await?;

    Ok(parse_response(&response))
}
