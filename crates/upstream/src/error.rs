/// Errors from a single upstream lookup.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Upstream returned HTTP {status}: {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body did not match the expected shape.
    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Upstream status code, when the upstream answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            FetchError::Network(_) | FetchError::Malformed(_) => None,
        }
    }

    /// Check a response status, capturing the body of failed responses.
    pub(crate) async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
