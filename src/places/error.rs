/// Errors from the places search API.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// The HTTP request failed (connect, timeout, non-success status, or
    /// an unparseable body).
    #[error("places request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered but reported a non-OK search status.
    #[error("places search returned status {0}")]
    Provider(String),
}
