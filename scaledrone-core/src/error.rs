// Error handling for the Scaledrone REST client
// Every failure is terminal for the call that produced it

use thiserror::Error;

/// Type alias for Scaledrone results
pub type ScaledroneResult<T> = Result<T, ScaledroneError>;

#[derive(Debug, Error)]
pub enum ScaledroneError {
    /// DNS, connect, timeout or body-read failure in the HTTP layer
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Any response whose status is not exactly 200.
    /// `body` is the raw response body; `message` is the same body as text,
    /// with invalid UTF-8 replaced.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        body: Vec<u8>,
    },

    /// A 200 response whose body does not match the expected JSON shape
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },
}

impl ScaledroneError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create an API error from a status code and raw body
    pub fn api(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self::Api {
            status,
            message: String::from_utf8_lossy(&body).into_owned(),
            body,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The human readable detail. For API errors this is the response body.
    pub fn message(&self) -> &str {
        match self {
            ScaledroneError::Network { message, .. }
            | ScaledroneError::Api { message, .. }
            | ScaledroneError::Decode { message, .. }
            | ScaledroneError::Configuration { message } => message,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ScaledroneError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an API error, byte for byte
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            ScaledroneError::Api { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaledroneError::Network { .. } => ErrorCategory::Network,
            ScaledroneError::Api { .. } => ErrorCategory::Api,
            ScaledroneError::Decode { .. } => ErrorCategory::Decode,
            ScaledroneError::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            ScaledroneError::Network { source: Some(e), .. } => e.is_timeout(),
            _ => false,
        }
    }

    pub fn is_connect(&self) -> bool {
        match self {
            ScaledroneError::Network { source: Some(e), .. } => e.is_connect(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ScaledroneError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timeout: {}", err)
        } else if err.is_connect() {
            format!("Connection failed: {}", err)
        } else {
            err.to_string()
        };
        Self::Network {
            message,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ScaledroneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: format!("Failed to parse response: {}", err),
            source: Some(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Network,
    Api,
    Decode,
    Configuration,
}
