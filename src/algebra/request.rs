use crate::domain::{RequestError, RequestOutcome};
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Method, StatusCode, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use tracing::warn;

/// Sends a single request and returns the response body as text.
///
/// Methods that are not HTTP-safe carry a JSON content type. Nothing else is
/// added to the request. There is no timeout beyond whatever the client was
/// built with.
pub async fn request(
    client: &ClientWithMiddleware,
    method: Method,
    url: Url,
    body: Option<String>,
) -> RequestOutcome {
    let mut builder = client.request(method.clone(), url.clone());

    if !method.is_safe() {
        builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    if let Some(body) = body {
        builder = builder.body(body);
    }

    let response = builder.send().await.map_err(|e| {
        warn!("Failed to send {} request to {}: {}", method, url, e);
        RequestError::transport(e.to_string().as_str())
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} {} answered with status {}", method, url, status);
        return Err(RequestError::request_failed(&status_text(status)));
    }

    response.text().await.map_err(|e| {
        warn!("Failed to read response body from {}: {}", url, e);
        RequestError::transport(e.to_string().as_str())
    })
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
