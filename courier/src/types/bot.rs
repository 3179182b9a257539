//! Bot command scopes and menu buttons.

use super::common::{ChatId, WebAppInfo};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// Which users see a set of bot commands.
    pub enum BotCommandScope in "type" {
        /// Used when no narrower scope applies.
        "default" => Default(BotCommandScopeDefault),
        /// All private chats.
        "all_private_chats" => AllPrivateChats(BotCommandScopeAllPrivateChats),
        /// All group and supergroup chats.
        "all_group_chats" => AllGroupChats(BotCommandScopeAllGroupChats),
        /// All group and supergroup chat administrators.
        "all_chat_administrators" => AllChatAdministrators(BotCommandScopeAllChatAdministrators),
        /// One chat.
        "chat" => Chat(BotCommandScopeChat),
        /// Administrators of one chat.
        "chat_administrators" => ChatAdministrators(BotCommandScopeChatAdministrators),
        /// One member of one chat.
        "chat_member" => ChatMember(BotCommandScopeChatMember),
    }
}

impl Default for BotCommandScope {
    fn default() -> Self {
        Self::Default(BotCommandScopeDefault {})
    }
}

/// Default scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeDefault {}

/// All private chats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeAllPrivateChats {}

/// All group chats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeAllGroupChats {}

/// All chat administrators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeAllChatAdministrators {}

/// A specific chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChat {
    /// Target chat.
    pub chat_id: ChatId,
}

/// Administrators of a specific chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatAdministrators {
    /// Target chat.
    pub chat_id: ChatId,
}

/// A specific member of a specific chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommandScopeChatMember {
    /// Target chat.
    pub chat_id: ChatId,
    /// Target user.
    pub user_id: i64,
}

envelope! {
    /// The bot's menu button in a private chat.
    pub enum MenuButton in "type" {
        /// Opens the bot's command list.
        "commands" => Commands(MenuButtonCommands),
        /// Launches a Web App.
        "web_app" => WebApp(MenuButtonWebApp),
        /// No specific value was set.
        "default" => Default(MenuButtonDefault),
    }
}

/// Menu button that opens the command list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonCommands {}

/// Menu button that launches a Web App.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonWebApp {
    /// Button label.
    pub text: String,
    /// The Web App to launch.
    pub web_app: WebAppInfo,
}

/// Default menu button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButtonDefault {}
