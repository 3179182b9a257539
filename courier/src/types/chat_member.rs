//! Chat membership.

use super::common::{Chat, User};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// A chat member and their status.
    pub enum ChatMember in "status" {
        /// Owns the chat.
        "creator" => Owner(ChatMemberOwner),
        /// Administrator with some privileges.
        "administrator" => Administrator(ChatMemberAdministrator),
        /// Regular member.
        "member" => Member(ChatMemberMember),
        /// Member under restrictions (supergroups only).
        "restricted" => Restricted(ChatMemberRestricted),
        /// Not a member, but may join.
        "left" => Left(ChatMemberLeft),
        /// Banned.
        "kicked" => Banned(ChatMemberBanned),
    }
}

impl ChatMember {
    /// The member this status describes.
    pub fn user(&self) -> &User {
        match self {
            Self::Owner(member) => &member.user,
            Self::Administrator(member) => &member.user,
            Self::Member(member) => &member.user,
            Self::Restricted(member) => &member.user,
            Self::Left(member) => &member.user,
            Self::Banned(member) => &member.user,
        }
    }

    /// Whether the user currently counts as being in the chat.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Owner(_) | Self::Administrator(_) | Self::Member(_) => true,
            Self::Restricted(member) => member.is_member,
            Self::Left(_) | Self::Banned(_) => false,
        }
    }
}

/// Chat owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    /// The user.
    pub user: User,
    /// Whether the owner's presence is hidden.
    pub is_anonymous: bool,
    /// Custom title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

/// Chat administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    /// The user.
    pub user: User,
    /// Whether the bot may edit this administrator's privileges.
    pub can_be_edited: bool,
    /// Whether the administrator's presence is hidden.
    pub is_anonymous: bool,
    /// May see the event log, members and hidden members.
    pub can_manage_chat: bool,
    /// May delete messages of other users.
    pub can_delete_messages: bool,
    /// May manage video chats.
    pub can_manage_video_chats: bool,
    /// May restrict, ban or unban members.
    pub can_restrict_members: bool,
    /// May add administrators.
    pub can_promote_members: bool,
    /// May change the chat title, photo and other settings.
    pub can_change_info: bool,
    /// May invite users.
    pub can_invite_users: bool,
    /// May post stories.
    pub can_post_stories: bool,
    /// May edit stories posted by others.
    pub can_edit_stories: bool,
    /// May delete stories posted by others.
    pub can_delete_stories: bool,
    /// May post in the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    /// May edit messages of other users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    /// May pin messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    /// May manage forum topics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
    /// Custom title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

/// Member without extra privileges or restrictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    /// The user.
    pub user: User,
    /// Unix time the user's subscription expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

/// Member under restrictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    /// The user.
    pub user: User,
    /// Whether the user is a member at the moment of the request.
    pub is_member: bool,
    /// May send text, contacts, giveaways, invoices, locations and venues.
    pub can_send_messages: bool,
    /// May send audios.
    pub can_send_audios: bool,
    /// May send documents.
    pub can_send_documents: bool,
    /// May send photos.
    pub can_send_photos: bool,
    /// May send videos.
    pub can_send_videos: bool,
    /// May send video notes.
    pub can_send_video_notes: bool,
    /// May send voice notes.
    pub can_send_voice_notes: bool,
    /// May send polls.
    pub can_send_polls: bool,
    /// May send animations, games, stickers and inline bot results.
    pub can_send_other_messages: bool,
    /// May add link previews.
    pub can_add_web_page_previews: bool,
    /// May change the chat title, photo and other settings.
    pub can_change_info: bool,
    /// May invite users.
    pub can_invite_users: bool,
    /// May pin messages.
    pub can_pin_messages: bool,
    /// May create forum topics.
    pub can_manage_topics: bool,
    /// Unix time restrictions are lifted; 0 means forever.
    pub until_date: i64,
}

/// Not a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    /// The user.
    pub user: User,
}

/// Banned from the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    /// The user.
    pub user: User,
    /// Unix time the ban is lifted; 0 means forever.
    pub until_date: i64,
}

/// A chat member's status changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    /// Chat the user belongs to.
    pub chat: Chat,
    /// Performer of the action that caused the change.
    pub from: User,
    /// Unix time of the change.
    pub date: i64,
    /// Previous status.
    pub old_chat_member: ChatMember,
    /// New status.
    pub new_chat_member: ChatMember,
    /// Whether the user joined after a join request sent without an invite
    /// link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_join_request: Option<bool>,
    /// Whether the user joined through a chat folder invite link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_chat_folder_invite_link: Option<bool>,
}

impl ChatMemberUpdated {
    /// Whether the user went from absent to present.
    pub fn joined(&self) -> bool {
        !self.old_chat_member.is_present() && self.new_chat_member.is_present()
    }

    /// Whether the user went from present to absent.
    pub fn left(&self) -> bool {
        self.old_chat_member.is_present() && !self.new_chat_member.is_present()
    }
}
