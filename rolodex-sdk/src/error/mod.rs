use thiserror::Error;

/// errors produced while talking to the remote user source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}: {message}")]
    Server { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}
