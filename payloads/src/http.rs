//! JSON transport shared by the typed [`ServiceClient`](crate::ServiceClient)
//! calls and the UI's URL-driven request hook.

use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::ClientError;

/// Longest response body excerpt carried in an [`ClientError::APIError`].
pub const BODY_EXCERPT_MAX: usize = 200;

/// Send one JSON request and interpret the response.
///
/// `Accept: application/json` is always sent; `headers` are applied on top
/// and may override it. A `body`, when given, is sent as JSON.
pub async fn send_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    method: Method,
    url: &str,
    headers: &[(String, String)],
    body: Option<&serde_json::Value>,
) -> Result<Option<T>, ClientError> {
    let mut request =
        client.request(method, url).header(ACCEPT, "application/json");
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    ok_json(response).await
}

/// Read a response to completion.
///
/// A non-success status becomes an [`ClientError::APIError`] carrying a
/// trimmed excerpt of the body. `204 No Content` and blank bodies yield
/// `None`.
pub async fn ok_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ClientError::api(status, &text));
    }
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    decode_body(&bytes)
}

/// Decode a successful response body, treating a blank body as "no data".
pub fn decode_body<T: DeserializeOwned>(
    bytes: &[u8],
) -> Result<Option<T>, ClientError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(bytes)?))
}

/// Trim a response body and cut it down to [`BODY_EXCERPT_MAX`] characters.
pub fn body_excerpt(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT_MAX) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
