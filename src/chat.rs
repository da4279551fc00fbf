//! Chat message events delivered by the host client.

/// Kinds of chat message the client emits.
///
/// Only [`GameMessage`](ChatMessageKind::GameMessage) and
/// [`Spam`](ChatMessageKind::Spam) carry the horn broadcast text; every
/// other kind is ignored by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMessageKind {
    /// Standard game/system text
    GameMessage,
    /// High-frequency system text the client filters into its own tab
    Spam,
    /// Public chat from other players
    Public,
    /// Private messages
    Private,
    /// Clan channel chat
    Clan,
    /// NPC dialog
    Dialog,
    /// Client engine messages
    Engine,
}

/// One chat message, delivered synchronously by the host's event dispatch.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub kind: ChatMessageKind,
    pub text: String,
}

impl ChatMessage {
    pub fn new(kind: ChatMessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
