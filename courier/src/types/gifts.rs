//! Gifts.

use super::common::{Chat, Sticker, User};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

/// A gift that can be sent by the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    /// Unique identifier of the gift.
    pub id: String,
    /// Sticker representing the gift.
    pub sticker: Sticker,
    /// Stars to pay to send the sticker.
    pub star_count: u32,
    /// Stars to pay to upgrade the gift to a unique one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_star_count: Option<u32>,
    /// Total number of gifts that can be sent, for limited gifts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    /// Number of gifts still available, for limited gifts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_count: Option<u32>,
    /// Chat that published the gift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_chat: Option<Chat>,
}

/// A gift upgraded to a unique one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueGift {
    /// Human-readable name of the regular gift it was upgraded from.
    pub base_name: String,
    /// Unique name, usable in links.
    pub name: String,
    /// Number among gifts upgraded from the same regular gift.
    pub number: u32,
}

envelope! {
    /// A gift received and owned by a user or chat.
    pub enum OwnedGift in "type" {
        /// A regular gift.
        "regular" => Regular(OwnedGiftRegular),
        /// A unique gift.
        "unique" => Unique(OwnedGiftUnique),
    }
}

/// An owned regular gift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGiftRegular {
    /// The gift.
    pub gift: Gift,
    /// Identifier for the gift, for gifts received on behalf of business
    /// accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_gift_id: Option<String>,
    /// Sender, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_user: Option<User>,
    /// Unix time the gift was sent.
    pub send_date: i64,
    /// Text attached to the gift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether sender and text are shown only to the receiver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Whether the gift is displayed on the owner's profile page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
    /// Whether the gift can be upgraded to a unique one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_upgraded: Option<bool>,
    /// Whether the gift was refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_refunded: Option<bool>,
    /// Stars the gift can be converted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_star_count: Option<u32>,
    /// Stars prepaid by the sender for an upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepaid_upgrade_star_count: Option<u32>,
}

/// An owned unique gift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGiftUnique {
    /// The gift.
    pub gift: UniqueGift,
    /// Identifier for the gift, for gifts received on behalf of business
    /// accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_gift_id: Option<String>,
    /// Sender, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_user: Option<User>,
    /// Unix time the gift was sent.
    pub send_date: i64,
    /// Whether the gift is displayed on the owner's profile page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
    /// Whether the gift can be transferred to another owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_transferred: Option<bool>,
    /// Stars to pay to transfer the gift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_star_count: Option<u32>,
    /// Unix time the gift can next be transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_transfer_date: Option<i64>,
}

impl OwnedGift {
    /// Unix time the gift was sent.
    pub fn send_date(&self) -> i64 {
        match self {
            Self::Regular(gift) => gift.send_date,
            Self::Unique(gift) => gift.send_date,
        }
    }
}
