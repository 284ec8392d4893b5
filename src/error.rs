//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("GraphQL error: {0}")]
    Graph(#[from] GraphError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// GraphQL-layer errors (the transport succeeded, the operation did not).
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("{}", join_messages(.0))]
    Errors(Vec<graphql_client::Error>),

    #[error("Response for `{0}` carried no data")]
    MissingData(String),
}

fn join_messages(errors: &[graphql_client::Error]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Order-creation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    /// Rejected by the order API; carries its description.
    #[error("{0}")]
    Rejected(String),

    #[error("No wallet account connected")]
    NoAccount,

    #[error("Order submission cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_error(message: &str) -> graphql_client::Error {
        graphql_client::Error {
            message: message.to_string(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    #[test]
    fn test_graph_errors_join_messages() {
        let err = GraphError::Errors(vec![graph_error("bad field"), graph_error("denied")]);
        assert_eq!(err.to_string(), "bad field; denied");
    }

    #[test]
    fn test_order_rejected_displays_description() {
        let err = SdkError::from(OrderError::Rejected("insufficient balance".to_string()));
        assert_eq!(err.to_string(), "Order error: insufficient balance");
    }
}
