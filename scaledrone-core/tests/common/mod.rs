// Shared helpers for tests that run against a local mock of the REST API

#![allow(dead_code)]

use scaledrone_core::{AuthMode, Client, HttpConfig};
use std::env;
use std::time::Duration;
use wiremock::MockServer;

pub const CHANNEL_ID: &str = "test-channel";
pub const SECRET_KEY: &str = "test-secret";
pub const BEARER_TOKEN: &str = "test.jwt.token";

/// Client using Basic auth, pointed at the mock server
pub fn basic_client(server: &MockServer) -> Client {
    client_for(server, AuthMode::basic(SECRET_KEY))
}

/// Client using a bearer token, pointed at the mock server
pub fn bearer_client(server: &MockServer) -> Client {
    client_for(server, AuthMode::bearer(BEARER_TOKEN))
}

pub fn client_for(server: &MockServer, auth: AuthMode) -> Client {
    let config = HttpConfig::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build();
    Client::with_config(CHANNEL_ID, auth, config).expect("mock client should build")
}

/// Path under the test channel, e.g. `channel_path("stats")`
pub fn channel_path(rest: &str) -> String {
    format!("/{}/{}", CHANNEL_ID, rest)
}

/// Credentials for the live API, if the environment provides them
pub fn live_credentials() -> Option<(String, String)> {
    match (env::var("CHANNEL_ID"), env::var("SECRET_KEY")) {
        (Ok(channel), Ok(secret)) if !channel.is_empty() && !secret.is_empty() => {
            Some((channel, secret))
        }
        _ => None,
    }
}
