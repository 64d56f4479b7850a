/// Errors from the trip-planner service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request failed (connect, timeout, or an unparseable body).
    #[error("planner request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The planner answered with a non-success HTTP status.
    #[error("planner returned HTTP {0}")]
    Status(u16),
}
