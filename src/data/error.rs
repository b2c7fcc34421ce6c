use thiserror::Error;

/// Failure taxonomy for one remote fetch.
///
/// Every variant is scoped to the store that issued the request; none of them
/// is fatal to the process. Recovery is a manual re-trigger from the UI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Network unreachable, timeout or a non-2xx status.
    #[error("forecast service unreachable: {0}")]
    Transport(String),

    /// The service answered 2xx but set `success: false` in the envelope.
    #[error("{0}")]
    Api(String),

    /// The response body did not match the expected envelope schema.
    #[error("malformed forecast response: {0}")]
    Decode(String),
}
