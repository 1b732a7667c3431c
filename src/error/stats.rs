use thiserror::Error;

/// Failures while reading the game-server stats API.
///
/// Both variants abort the whole fetch cycle. The next scheduled tick retries
/// naturally, so no retry logic hangs off these errors.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Endpoint unreachable, timed out or answered with a non-2xx status.
    #[error("Stats API request to {endpoint} failed: {source}")]
    Transport {
        /// URL of the endpoint that failed
        endpoint: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered but the body does not have the expected shape.
    #[error("Stats API returned malformed data from {endpoint}: {source}")]
    MalformedData {
        /// URL of the endpoint that returned the payload
        endpoint: String,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },
}
