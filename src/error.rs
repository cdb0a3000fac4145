use thiserror::Error;

/// Errors surfaced by the fetch pipeline and its supporting stages.
///
/// Every stage returns `Result<_, Error>`, so a failure in one stage
/// short-circuits the chain through `?` instead of silently stopping.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-success HTTP status code.
    #[error("HTTP {0}")]
    Status(u16),
    /// Network-level error (connection refused, timeout, DNS failure, etc.).
    #[error("network error: {0}")]
    Network(String),
    /// Failed to parse the response body as JSON.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// Local configuration could not be read.
    #[error("config error: {0}")]
    Config(String),
    /// The persistent token slot could not be read or written.
    #[error("token store error: {0}")]
    Store(String),
}
