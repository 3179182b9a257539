//! Incoming updates.
//!
//! An update is an object with an `update_id` and exactly one payload key
//! naming what happened. Unlike the envelopes, the variant is chosen by which
//! key is present rather than by a discriminant value.

use super::boost::{ChatBoostRemoved, ChatBoostUpdated};
use super::chat_member::ChatMemberUpdated;
use super::message::{CallbackQuery, Message};
use super::reaction::MessageReactionUpdated;
use courier_core::{CodecError, Sequenced};
use courier_std::codec;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One event from the update stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Monotonic identifier of the update.
    pub update_id: i64,
    /// What happened.
    pub kind: UpdateKind,
}

/// The payload of an [`Update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateKind {
    /// New incoming message.
    Message(Box<Message>),
    /// An earlier message was edited.
    EditedMessage(Box<Message>),
    /// New channel post.
    ChannelPost(Box<Message>),
    /// An earlier channel post was edited.
    EditedChannelPost(Box<Message>),
    /// New message from a connected business account.
    BusinessMessage(Box<Message>),
    /// A message from a connected business account was edited.
    EditedBusinessMessage(Box<Message>),
    /// A user changed a reaction on a message.
    MessageReaction(MessageReactionUpdated),
    /// An inline keyboard button was pressed.
    CallbackQuery(CallbackQuery),
    /// The bot's own membership status changed.
    MyChatMember(ChatMemberUpdated),
    /// A member's status changed in a chat the bot administers.
    ChatMember(ChatMemberUpdated),
    /// A chat boost was added or changed.
    ChatBoost(ChatBoostUpdated),
    /// A chat boost was removed.
    RemovedChatBoost(ChatBoostRemoved),
    /// Any other update, kept as raw JSON.
    Other {
        /// The payload key.
        kind: String,
        /// The payload, undecoded.
        payload: Value,
    },
}

/// Payload keys decoded into typed variants, in lookup order.
const TYPED_KINDS: &[&str] = &[
    "message",
    "edited_message",
    "channel_post",
    "edited_channel_post",
    "business_message",
    "edited_business_message",
    "message_reaction",
    "callback_query",
    "my_chat_member",
    "chat_member",
    "chat_boost",
    "removed_chat_boost",
];

impl UpdateKind {
    /// The payload key this kind is sent under.
    pub fn name(&self) -> &str {
        match self {
            Self::Message(_) => "message",
            Self::EditedMessage(_) => "edited_message",
            Self::ChannelPost(_) => "channel_post",
            Self::EditedChannelPost(_) => "edited_channel_post",
            Self::BusinessMessage(_) => "business_message",
            Self::EditedBusinessMessage(_) => "edited_business_message",
            Self::MessageReaction(_) => "message_reaction",
            Self::CallbackQuery(_) => "callback_query",
            Self::MyChatMember(_) => "my_chat_member",
            Self::ChatMember(_) => "chat_member",
            Self::ChatBoost(_) => "chat_boost",
            Self::RemovedChatBoost(_) => "removed_chat_boost",
            Self::Other { kind, .. } => kind,
        }
    }

    fn decode(kind: &str, payload: Value) -> Result<Self, CodecError> {
        Ok(match kind {
            "message" => Self::Message(codec::from_value(payload)?),
            "edited_message" => Self::EditedMessage(codec::from_value(payload)?),
            "channel_post" => Self::ChannelPost(codec::from_value(payload)?),
            "edited_channel_post" => Self::EditedChannelPost(codec::from_value(payload)?),
            "business_message" => Self::BusinessMessage(codec::from_value(payload)?),
            "edited_business_message" => {
                Self::EditedBusinessMessage(codec::from_value(payload)?)
            }
            "message_reaction" => Self::MessageReaction(codec::from_value(payload)?),
            "callback_query" => Self::CallbackQuery(codec::from_value(payload)?),
            "my_chat_member" => Self::MyChatMember(codec::from_value(payload)?),
            "chat_member" => Self::ChatMember(codec::from_value(payload)?),
            "chat_boost" => Self::ChatBoost(codec::from_value(payload)?),
            "removed_chat_boost" => Self::RemovedChatBoost(codec::from_value(payload)?),
            _ => Self::Other {
                kind: kind.to_owned(),
                payload,
            },
        })
    }

    fn encode(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Message(message)
            | Self::EditedMessage(message)
            | Self::ChannelPost(message)
            | Self::EditedChannelPost(message)
            | Self::BusinessMessage(message)
            | Self::EditedBusinessMessage(message) => serde_json::to_value(message),
            Self::MessageReaction(reaction) => serde_json::to_value(reaction),
            Self::CallbackQuery(query) => serde_json::to_value(query),
            Self::MyChatMember(member) | Self::ChatMember(member) => serde_json::to_value(member),
            Self::ChatBoost(boost) => serde_json::to_value(boost),
            Self::RemovedChatBoost(removed) => serde_json::to_value(removed),
            Self::Other { payload, .. } => Ok(payload.clone()),
        }
    }
}

impl Update {
    /// Create an update.
    pub fn new(update_id: i64, kind: UpdateKind) -> Self {
        Self { update_id, kind }
    }

    /// The message carried by any of the message-like kinds.
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message)
            | UpdateKind::BusinessMessage(message)
            | UpdateKind::EditedBusinessMessage(message) => Some(message),
            UpdateKind::CallbackQuery(query) => query.message.as_deref(),
            _ => None,
        }
    }

    /// Decode an update from raw JSON.
    ///
    /// Typed payload keys win over unknown ones; an object carrying only
    /// unknown keys becomes [`UpdateKind::Other`].
    pub fn decode(raw: Value) -> Result<Self, CodecError> {
        let Value::Object(mut fields) = raw else {
            return Err(CodecError::NotAnObject { envelope: "Update" });
        };

        let update_id = fields
            .remove("update_id")
            .ok_or_else(|| CodecError::Json(serde_json::Error::missing_field("update_id")))?;
        let update_id: i64 = serde_json::from_value(update_id)?;

        let Some((kind, payload)) = take_payload(&mut fields) else {
            return Err(CodecError::Json(serde_json::Error::custom(format!(
                "update {update_id} has no payload"
            ))));
        };

        Ok(Self {
            update_id,
            kind: UpdateKind::decode(&kind, payload)?,
        })
    }
}

fn take_payload(fields: &mut Map<String, Value>) -> Option<(String, Value)> {
    let key = TYPED_KINDS
        .iter()
        .find(|kind| fields.contains_key(**kind))
        .map(|kind| (*kind).to_owned())
        .or_else(|| fields.keys().next().cloned())?;
    let payload = fields.remove(&key)?;
    Some((key, payload))
}

impl courier_core::Message for Update {}

impl Sequenced for Update {
    const KINDS: &'static [&'static str] = &[
        "message",
        "edited_message",
        "channel_post",
        "edited_channel_post",
        "business_connection",
        "business_message",
        "edited_business_message",
        "deleted_business_messages",
        "message_reaction",
        "message_reaction_count",
        "inline_query",
        "chosen_inline_result",
        "callback_query",
        "shipping_query",
        "pre_checkout_query",
        "purchased_paid_media",
        "poll",
        "poll_answer",
        "my_chat_member",
        "chat_member",
        "chat_join_request",
        "chat_boost",
        "removed_chat_boost",
    ];

    fn sequence_id(&self) -> i64 {
        self.update_id
    }

    fn kind(&self) -> &str {
        self.kind.name()
    }
}

impl Serialize for Update {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = self
            .kind
            .encode()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("update_id", &self.update_id)?;
        map.serialize_entry(self.kind.name(), &payload)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Update {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize_with(deserializer, Update::decode)
    }
}
