//! Where a forwarded message originally came from.

use super::common::{Chat, User};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// Origin of a forwarded message.
    pub enum MessageOrigin in "type" {
        /// Sent by a known user.
        "user" => User(MessageOriginUser),
        /// Sent by a user who hides their account.
        "hidden_user" => HiddenUser(MessageOriginHiddenUser),
        /// Sent on behalf of a chat.
        "chat" => Chat(MessageOriginChat),
        /// Posted in a channel.
        "channel" => Channel(MessageOriginChannel),
    }
}

impl MessageOrigin {
    /// Unix time the original message was sent.
    pub fn date(&self) -> i64 {
        match self {
            Self::User(origin) => origin.date,
            Self::HiddenUser(origin) => origin.date,
            Self::Chat(origin) => origin.date,
            Self::Channel(origin) => origin.date,
        }
    }
}

/// The message was originally sent by a known user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginUser {
    /// Unix time of the original message.
    pub date: i64,
    /// User that sent it.
    pub sender_user: User,
}

/// The message was originally sent by an unknown user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginHiddenUser {
    /// Unix time of the original message.
    pub date: i64,
    /// Name of the user that sent it.
    pub sender_user_name: String,
}

/// The message was originally sent on behalf of a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChat {
    /// Unix time of the original message.
    pub date: i64,
    /// Chat that sent it.
    pub sender_chat: Chat,
    /// Signature of the anonymous admin who sent it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}

/// The message was originally posted in a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageOriginChannel {
    /// Unix time of the original message.
    pub date: i64,
    /// Channel it was posted in.
    pub chat: Chat,
    /// Identifier of the original message in the channel.
    pub message_id: i64,
    /// Signature of the post author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
}
