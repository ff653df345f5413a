// Authentication module for the Scaledrone client

use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use std::fmt;

use crate::logging::redact;

/// Authentication modes supported by the Scaledrone REST API.
///
/// Exactly one mode is active for a client; there is no way to carry both a
/// secret key and a bearer token at once. The Basic user name is always the
/// channel id of the client the mode is attached to.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// HTTP Basic authentication, channel id as user, secret key as password
    Basic { secret_key: String },
    /// Pre-issued bearer token (JWT)
    Bearer { token: String },
}

impl AuthMode {
    /// Create Basic authentication from a channel secret key
    pub fn basic(secret_key: impl Into<String>) -> Self {
        Self::Basic {
            secret_key: secret_key.into(),
        }
    }

    /// Create bearer token authentication
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header for requests on `channel_id`
    pub fn header_value(&self, channel_id: &str) -> String {
        match self {
            AuthMode::Basic { secret_key } => {
                let credentials = format!("{}:{}", channel_id, secret_key);
                let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
                format!("Basic {}", encoded)
            }
            AuthMode::Bearer { token } => format!("Bearer {}", token),
        }
    }

    /// Stamp the request with this mode's credentials
    pub(crate) fn apply(&self, request: RequestBuilder, channel_id: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, self.header_value(channel_id))
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            AuthMode::Basic { .. } => "basic",
            AuthMode::Bearer { .. } => "bearer",
        }
    }
}

impl fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Basic { secret_key } => f
                .debug_struct("Basic")
                .field("secret_key", &redact(secret_key))
                .finish(),
            AuthMode::Bearer { token } => f
                .debug_struct("Bearer")
                .field("token", &redact(token))
                .finish(),
        }
    }
}
