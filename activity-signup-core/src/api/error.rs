/// Errors surfaced by calls to the activities backend.
///
/// Nothing is retried automatically; every failure is terminal for the user
/// action that triggered it and none is fatal to the page.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure: the request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server rejected the request (status {status})")]
    Rejected { status: u16, detail: Option<String> },

    /// The response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    /// The server-provided detail for rejections, or `fallback` for every
    /// other case.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail,
            _ => fallback,
        }
    }
}
