use thiserror::Error;

/// Failure of the external geocoding capability itself, as opposed to a
/// well-formed answer the resolver cannot use.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The HTTP request to the geocoding API failed or returned a non-success
    /// status code.
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The geocoding API answered but reported an error status such as
    /// `REQUEST_DENIED` or `OVER_QUERY_LIMIT`.
    #[error("Geocoding API returned status {status}: {message}")]
    Status {
        /// Status string reported by the API
        status: String,
        /// Accompanying error message, empty when the API sent none
        message: String,
    },
}
