//! Errors for the boat console
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoatConsoleError {
    #[error("remote fetch failed: {message}")]
    RemoteFetch { message: String },

    #[error("remote write failed: {message}")]
    RemoteWrite {
        message: String,
        /// Raw error body returned by the service, if any.
        details: Option<serde_json::Value>,
    },

    #[error("device location unavailable: {message}")]
    DeviceUnavailable { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("configuration error")]
    Config(#[from] config::ConfigError),
}

impl BoatConsoleError {
    /// Message as provided by the remote service, without the error-kind
    /// prefix added by `Display`. Used where the service message must be
    /// surfaced verbatim.
    pub fn service_message(&self) -> String {
        match self {
            Self::RemoteFetch { message }
            | Self::RemoteWrite { message, .. }
            | Self::DeviceUnavailable { message }
            | Self::Configuration { message } => message.clone(),
            Self::Config(e) => e.to_string(),
        }
    }
}
