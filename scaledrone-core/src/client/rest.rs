// REST client for the Scaledrone management API
// Publishing to rooms and channel/room membership statistics

use crate::auth::AuthMode;
use crate::error::{ScaledroneError, ScaledroneResult};
use crate::http::{HttpConfig, ScaledroneHttpClient};
use crate::protocol::{RoomMembers, UsersCount};
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Main client for the Scaledrone REST API.
///
/// Holds the channel id and credentials and nothing else; every method is a
/// single request/response cycle. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http_client: ScaledroneHttpClient,
}

impl Client {
    /// Create a client that authenticates with HTTP Basic, using the channel
    /// id as user name and the secret key as password
    pub fn new_basic_auth(
        channel_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> ScaledroneResult<Self> {
        Self::with_config(channel_id, AuthMode::basic(secret_key), HttpConfig::default())
    }

    /// Create a client that sends `Authorization: Bearer <token>`
    pub fn new_bearer(
        channel_id: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> ScaledroneResult<Self> {
        Self::with_config(channel_id, AuthMode::bearer(bearer_token), HttpConfig::default())
    }

    /// Create a client with explicit credentials and HTTP configuration.
    /// Basic credentials always use `channel_id` as the user name.
    pub fn with_config(
        channel_id: impl Into<String>,
        auth: AuthMode,
        config: HttpConfig,
    ) -> ScaledroneResult<Self> {
        Ok(Self {
            http_client: ScaledroneHttpClient::new(config, channel_id, auth)?,
        })
    }

    /// Create a builder for advanced configuration
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn channel_id(&self) -> &str {
        self.http_client.channel_id()
    }

    pub fn auth_mode(&self) -> &AuthMode {
        self.http_client.auth_mode()
    }

    /// Send a message to a single room. The message is the literal request body.
    pub async fn publish(&self, message: impl Into<Vec<u8>>, room: &str) -> ScaledroneResult<()> {
        let path = format!("/{}/{}/publish", self.channel(), segment(room));
        let message = message.into();
        debug!(room, bytes = message.len(), "Publishing message");
        self.http_client.post(&path).body(message).send().await?;
        Ok(())
    }

    /// Send one message to several rooms in a single request.
    /// Each room becomes an `r` query parameter, in the given order.
    pub async fn publish_to_rooms<S: AsRef<str>>(
        &self,
        message: impl Into<Vec<u8>>,
        rooms: &[S],
    ) -> ScaledroneResult<()> {
        let path = format!("/{}/publish/rooms", self.channel());
        let message = message.into();
        debug!(rooms = rooms.len(), bytes = message.len(), "Publishing message to rooms");

        let request = rooms
            .iter()
            .fold(self.http_client.post(&path), |request, room| {
                request.query_param("r", room.as_ref())
            });
        request.body(message).send().await?;
        Ok(())
    }

    /// Number of users connected to the channel
    pub async fn users_count(&self) -> ScaledroneResult<i64> {
        let path = format!("/{}/stats", self.channel());
        let stats: UsersCount = self.http_client.get(&path).send_json().await?;
        Ok(stats.users_count)
    }

    /// Members who have joined one or more rooms
    pub async fn users_in_rooms(&self) -> ScaledroneResult<Vec<String>> {
        let path = format!("/{}/members", self.channel());
        self.http_client.get(&path).send_json().await
    }

    /// Rooms with at least one connected member
    pub async fn active_rooms(&self) -> ScaledroneResult<Vec<String>> {
        let path = format!("/{}/rooms", self.channel());
        self.http_client.get(&path).send_json().await
    }

    /// Members subscribed to `room`; empty when nobody is there
    pub async fn users_in_room(&self, room: &str) -> ScaledroneResult<Vec<String>> {
        let path = format!("/{}/{}/members", self.channel(), segment(room));
        self.http_client.get(&path).send_json().await
    }

    /// Member lists of every non-empty room, keyed by room name
    pub async fn room_members(&self) -> ScaledroneResult<RoomMembers> {
        let path = format!("/{}/room-members", self.channel());
        self.http_client.get(&path).send_json().await
    }

    fn channel(&self) -> Cow<'_, str> {
        segment(self.http_client.channel_id())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("channel_id", &self.channel_id())
            .field("auth", self.auth_mode())
            .field("base_url", &self.http_client.base_url())
            .finish()
    }
}

/// Percent-encode a value so it stays a single path segment
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Builder for a client with non-default HTTP settings
#[derive(Default)]
pub struct ClientBuilder {
    channel_id: Option<String>,
    secret_key: Option<String>,
    bearer_token: Option<String>,
    config: HttpConfig,
}

impl ClientBuilder {
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ScaledroneResult<Client> {
        let channel_id = self
            .channel_id
            .ok_or_else(|| ScaledroneError::configuration("Channel id must be provided"))?;

        let auth = match (self.secret_key, self.bearer_token) {
            (Some(secret_key), None) => AuthMode::basic(secret_key),
            (None, Some(token)) => AuthMode::bearer(token),
            (Some(_), Some(_)) => {
                return Err(ScaledroneError::configuration(
                    "Provide either a secret key or a bearer token, not both",
                ))
            }
            (None, None) => {
                return Err(ScaledroneError::configuration(
                    "Either a secret key or a bearer token must be provided",
                ))
            }
        };

        Client::with_config(channel_id, auth, self.config)
    }
}
