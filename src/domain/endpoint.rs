use super::RequestError;
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://platform.here.com";
pub const ACCESS_TOKEN_PATH: &str = "/api/portal/accessToken";

/// Builds `{base_url}/api/portal/accessToken`.
///
/// The base url has to be an absolute `http` or `https` url. A single trailing
/// slash is dropped so that `https://host/` and `https://host` point to the
/// same endpoint.
pub fn access_token_url(base_url: &str) -> Result<Url, RequestError> {
    let base = Url::parse(base_url)
        .map_err(|e| RequestError::invalid_url(base_url, e.to_string().as_str()))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(RequestError::invalid_url(
            base_url,
            format!("unsupported scheme {}", base.scheme()).as_str(),
        ));
    }

    let joined = format!(
        "{}{}",
        base_url.strip_suffix('/').unwrap_or(base_url),
        ACCESS_TOKEN_PATH
    );

    Url::parse(&joined).map_err(|e| RequestError::invalid_url(&joined, e.to_string().as_str()))
}
