use crate::errors::{RestError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Build a bearer-token authorization header from an access token (e.g. a
/// JWT). The token is used verbatim; nothing is parsed or validated.
pub fn auth_header(access_token: &str) -> HashMap<String, String> {
    HashMap::from([(
        "Authorization".to_string(),
        format!("Bearer {access_token}"),
    )])
}

/// Convert caller-supplied string headers into a [`HeaderMap`].
pub fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RestError::HeaderError(format!("invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| RestError::HeaderError(format!("invalid header value '{value}': {e}")))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
