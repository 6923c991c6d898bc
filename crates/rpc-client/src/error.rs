use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Server { code: i64, message: String },

    /// Structurally unexpected response.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Every raced endpoint failed its health probe.
    #[error("no responsive node among {attempted} candidates")]
    NoResponsiveNode { attempted: usize },
}

pub type RpcResult<T> = Result<T, RpcError>;
