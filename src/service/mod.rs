mod configuration;

pub use configuration::*;

use crate::domain::RequestError;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

/// HTTP client used by the probe.
///
/// Built without a timeout or default headers: a request waits as long as the
/// underlying connection does.
pub fn http_client() -> Result<ClientWithMiddleware, RequestError> {
    let client = Client::builder()
        .build()
        .map_err(|e| RequestError::Runtime(format!("Failed to build http client: {e}")))?;

    Ok(ClientBuilder::new(client).build())
}
