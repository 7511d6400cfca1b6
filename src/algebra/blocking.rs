use super::{request, TokenProbe};
use crate::domain::{ProbeResult, RequestError, RequestOutcome};
use reqwest::{Method, Url};
use std::future::Future;
use tokio::runtime::{Builder, Handle, Runtime};

/// Synchronous face of [`TokenProbe`] for host code that cannot await.
///
/// Calls suspend the calling thread until the request completes. The probe
/// owns a current-thread runtime; when invoked from inside another tokio
/// runtime the request is driven on a scoped helper thread instead, since
/// blocking on a runtime from within one is not allowed.
#[derive(Debug)]
pub struct BlockingTokenProbe {
    probe: TokenProbe,
    // Only `None` while dropping.
    runtime: Option<Runtime>,
}

impl BlockingTokenProbe {
    pub fn new(probe: TokenProbe) -> Result<Self, RequestError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RequestError::Runtime(format!("Failed to build runtime: {e}")))?;

        Ok(Self {
            probe,
            runtime: Some(runtime),
        })
    }

    pub fn try_default() -> Result<Self, RequestError> {
        Self::new(TokenProbe::try_default()?)
    }

    /// Blocking token check. `None` probes the default platform.
    ///
    /// One trailing `/` on `base_url` is dropped before the token path is
    /// appended, so `https://host/` requests `https://host/api/portal/accessToken`.
    pub fn has_token_sync(&self, base_url: Option<&str>) -> ProbeResult {
        let result = match base_url {
            Some(base_url) => self.block_on(self.probe.check_token(base_url)),
            None => self.block_on(self.probe.check_default()),
        };

        result.unwrap_or_else(|e| ProbeResult::error(e.to_string().as_str()))
    }

    pub fn sync_request(&self, method: Method, url: &str, body: Option<String>) -> RequestOutcome {
        let url =
            Url::parse(url).map_err(|e| RequestError::invalid_url(url, e.to_string().as_str()))?;

        self.block_on(request(self.probe.client(), method, url, body))?
    }

    fn block_on<F>(&self, future: F) -> Result<F::Output, RequestError>
    where
        F: Future + Send,
        F::Output: Send,
    {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| RequestError::Blocking("runtime already shut down".to_string()))?;

        if Handle::try_current().is_err() {
            return Ok(runtime.block_on(future));
        }

        std::thread::scope(|scope| {
            scope
                .spawn(move || runtime.block_on(future))
                .join()
                .map_err(|_| RequestError::Blocking("helper thread panicked".to_string()))
        })
    }
}

impl Drop for BlockingTokenProbe {
    fn drop(&mut self) {
        // A plain drop blocks, which panics inside an async context.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
