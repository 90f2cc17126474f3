use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Failure to get any answer out of the node.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Unsupported URL scheme '{scheme}' for {transport} client")]
    UnsupportedScheme {
        scheme: String,
        transport: &'static str,
    },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Connection closed before a reply to request {0}")]
    ConnectionClosed(u64),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}
