//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the generic `ChatProvider` interface used by the bot's core logic
//! and the specific implementation details of the Matrix SDK.
//! Also owns login and destination-room lookup for scheduled posts.

use crate::domain::config::MatrixConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::TipPayload;
use crate::strings::logs;
use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use matrix_sdk::ruma::{OwnedRoomId, RoomOrAliasId, ServerName};
use matrix_sdk::{Client, RoomState};

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }

    async fn send_content(&self, content: RoomMessageEventContent) -> Result<String, String> {
        self.room
            .send(content)
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_tip(&self, payload: &TipPayload) -> Result<String, String> {
        tracing::info!(
            "Bot sending tip to {}: {}",
            self.room_id(),
            payload.header().unwrap_or_default()
        );
        self.send_content(RoomMessageEventContent::text_markdown(payload.to_markdown()))
            .await
    }

    // Matrix has no per-user ephemeral messages; m.notice is the bot-reply convention
    async fn send_notification(&self, content: &str) -> Result<(), String> {
        tracing::info!("Bot sending notice to {}: {}", self.room_id(), content);
        self.send_content(RoomMessageEventContent::notice_markdown(content))
            .await
            .map(|_| ())
    }
}

/// Builds a client and logs in with the configured credentials.
pub async fn connect(config: &MatrixConfig) -> Result<Client> {
    let client = Client::builder()
        .homeserver_url(&config.homeserver)
        .build()
        .await
        .with_context(|| format!("Failed to build Matrix client for {}", config.homeserver))?;

    client
        .matrix_auth()
        .login_username(&config.username, &config.password)
        .send()
        .await
        .with_context(|| format!("Failed to log in as {}", config.username))?;

    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &config.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    Ok(client)
}

/// Completes a bare alias such as `#general` with the bot's own server name.
/// Room ids and fully qualified aliases pass through unchanged.
pub fn qualify_channel(channel: &str, server: &ServerName) -> String {
    let channel = channel.trim();
    if channel.starts_with('#') && !channel.contains(':') {
        format!("{channel}:{server}")
    } else {
        channel.to_string()
    }
}

/// Finds (or joins) the room that receives scheduled tips.
pub async fn open_destination(client: &Client, channel: &str) -> Result<MatrixService> {
    let user_id = client.user_id().context("Client is not logged in")?;
    let target = qualify_channel(channel, user_id.server_name());
    let id = RoomOrAliasId::parse(&target)
        .with_context(|| format!("Invalid room id or alias '{target}'"))?;

    if let Ok(room_id) = OwnedRoomId::try_from(id.clone())
        && let Some(room) = client.get_room(&room_id)
        && room.state() == RoomState::Joined
    {
        return Ok(MatrixService::new(room));
    }

    let room = client
        .join_room_by_id_or_alias(&id, &[])
        .await
        .with_context(|| format!("Failed to join {target}"))?;
    Ok(MatrixService::new(room))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> &'static ServerName {
        <&ServerName>::try_from("example.org").unwrap()
    }

    #[test]
    fn test_bare_alias_is_qualified() {
        assert_eq!(qualify_channel("#general", server()), "#general:example.org");
        assert_eq!(qualify_channel("  #tips ", server()), "#tips:example.org");
    }

    #[test]
    fn test_qualified_ids_pass_through() {
        assert_eq!(qualify_channel("#general:other.org", server()), "#general:other.org");
        assert_eq!(qualify_channel("!abcdef:example.org", server()), "!abcdef:example.org");
    }

    #[test]
    fn test_qualified_alias_parses() {
        let target = qualify_channel("#general", server());
        let id = RoomOrAliasId::parse(&target).unwrap();
        assert!(id.is_room_alias_id());
    }
}
