use super::request;
use crate::{
    domain::{access_token_url, ProbeResult, RequestError, DEFAULT_BASE_URL},
    service::http_client,
};
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;

/// Checks whether the authentication service currently hands out a token.
///
/// Every call is a single GET with no retry and no cache. Failures never
/// escape: they come back as [`ProbeResult::Error`].
#[derive(Debug, Clone)]
pub struct TokenProbe {
    client: ClientWithMiddleware,
}

impl TokenProbe {
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    pub fn try_default() -> Result<Self, RequestError> {
        Ok(Self::new(http_client()?))
    }

    pub fn client(&self) -> &ClientWithMiddleware {
        &self.client
    }

    #[tracing::instrument(name = "TokenProbe check_token", skip(self))]
    pub async fn check_token(&self, base_url: &str) -> ProbeResult {
        let outcome = match access_token_url(base_url) {
            Ok(url) => {
                tracing::debug!("Requesting access token from {}", url);
                request(&self.client, Method::GET, url, None).await
            }
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(_) => tracing::info!("Access token available"),
            Err(e) => tracing::warn!("No access token: {}", e),
        }

        ProbeResult::from(outcome)
    }

    pub async fn check_default(&self) -> ProbeResult {
        self.check_token(DEFAULT_BASE_URL).await
    }
}
