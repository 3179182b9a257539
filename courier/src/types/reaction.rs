//! Message reactions.

use super::common::{Chat, User};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// The kind of a reaction.
    pub enum ReactionType in "type" {
        /// A standard emoji.
        "emoji" => Emoji(ReactionTypeEmoji),
        /// A custom emoji.
        "custom_emoji" => CustomEmoji(ReactionTypeCustomEmoji),
        /// A paid star reaction.
        "paid" => Paid(ReactionTypePaid),
    }
}

impl ReactionType {
    /// Shorthand for a standard emoji reaction.
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji(ReactionTypeEmoji {
            emoji: emoji.into(),
        })
    }
}

/// Reaction with a standard emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTypeEmoji {
    /// The emoji.
    pub emoji: String,
}

/// Reaction with a custom emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTypeCustomEmoji {
    /// Custom emoji identifier.
    pub custom_emoji_id: String,
}

/// Paid reaction; carries no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTypePaid {}

/// A user changed their reactions on a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReactionUpdated {
    /// Chat containing the message.
    pub chat: Chat,
    /// Identifier of the message within the chat.
    pub message_id: i64,
    /// User that changed the reaction, unless anonymous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Chat on whose behalf the reaction was changed, if anonymous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_chat: Option<Chat>,
    /// Unix time of the change.
    pub date: i64,
    /// Reactions set before the change.
    pub old_reaction: Vec<ReactionType>,
    /// Reactions set after the change.
    pub new_reaction: Vec<ReactionType>,
}
