//! Chat boosts.

use super::common::{Chat, User};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// Where a chat boost came from.
    pub enum ChatBoostSource in "source" {
        /// A user subscribed to premium.
        "premium" => Premium(ChatBoostSourcePremium),
        /// A premium gift code was created.
        "gift_code" => GiftCode(ChatBoostSourceGiftCode),
        /// A giveaway was created.
        "giveaway" => Giveaway(ChatBoostSourceGiveaway),
    }
}

/// Boost obtained by a premium subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourcePremium {
    /// User that boosted the chat.
    pub user: User,
}

/// Boost obtained by a premium gift code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiftCode {
    /// User the gift code was created for.
    pub user: User,
}

/// Boost obtained by a giveaway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostSourceGiveaway {
    /// Identifier of the giveaway message. May be 0 if it is not sent yet.
    pub giveaway_message_id: i64,
    /// User that won the prize, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Stars to split between winners, for star giveaways.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_star_count: Option<u32>,
    /// Whether the giveaway ended with nobody winning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unclaimed: Option<bool>,
}

/// A boost added to a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoost {
    /// Unique identifier of the boost.
    pub boost_id: String,
    /// Unix time the chat was boosted.
    pub add_date: i64,
    /// Unix time the boost expires unless renewed.
    pub expiration_date: i64,
    /// Where the boost came from.
    pub source: ChatBoostSource,
}

/// A chat boost was added or changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostUpdated {
    /// Chat which was boosted.
    pub chat: Chat,
    /// Information about the boost.
    pub boost: ChatBoost,
}

/// A boost was removed from a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBoostRemoved {
    /// Chat which was boosted.
    pub chat: Chat,
    /// Unique identifier of the boost.
    pub boost_id: String,
    /// Unix time the boost was removed.
    pub remove_date: i64,
    /// Where the boost came from.
    pub source: ChatBoostSource,
}
