//! The bot API wire model.
//!
//! Every polymorphic object is an envelope declared with
//! [`envelope!`](crate::envelope) and decoded by [`codec`](crate::codec).
//! Plain objects are ordinary serde structs; fields the model does not type
//! are ignored on decode.

mod background;
mod boost;
mod bot;
mod chat_member;
mod common;
mod gifts;
mod media;
mod message;
mod origin;
mod passport;
mod payments;
mod reaction;
mod story;
mod update;

pub use background::{
    BackgroundFill, BackgroundFillFreeformGradient, BackgroundFillGradient, BackgroundFillSolid,
    BackgroundType, BackgroundTypeChatTheme, BackgroundTypeFill, BackgroundTypePattern,
    BackgroundTypeWallpaper, ChatBackground,
};
pub use boost::{
    ChatBoost, ChatBoostRemoved, ChatBoostSource, ChatBoostSourceGiftCode,
    ChatBoostSourceGiveaway, ChatBoostSourcePremium, ChatBoostUpdated,
};
pub use bot::{
    BotCommandScope, BotCommandScopeAllChatAdministrators, BotCommandScopeAllGroupChats,
    BotCommandScopeAllPrivateChats, BotCommandScopeChat, BotCommandScopeChatAdministrators,
    BotCommandScopeChatMember, BotCommandScopeDefault, MenuButton, MenuButtonCommands,
    MenuButtonDefault, MenuButtonWebApp,
};
pub use chat_member::{
    ChatMember, ChatMemberAdministrator, ChatMemberBanned, ChatMemberLeft, ChatMemberMember,
    ChatMemberOwner, ChatMemberRestricted, ChatMemberUpdated,
};
pub use common::{Chat, ChatId, ChatType, Document, PhotoSize, Sticker, User, Video, WebAppInfo};
pub use gifts::{Gift, OwnedGift, OwnedGiftRegular, OwnedGiftUnique, UniqueGift};
pub use media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo, InputPaidMedia, InputPaidMediaPhoto, InputPaidMediaVideo, PaidMedia,
    PaidMediaInfo, PaidMediaPhoto, PaidMediaPreview, PaidMediaVideo,
};
pub use message::{CallbackQuery, Message};
pub use origin::{
    MessageOrigin, MessageOriginChannel, MessageOriginChat, MessageOriginHiddenUser,
    MessageOriginUser,
};
pub use passport::{
    PassportElementError, PassportElementErrorDataField, PassportElementErrorFile,
    PassportElementErrorFiles, PassportElementErrorFrontSide, PassportElementErrorReverseSide,
    PassportElementErrorSelfie, PassportElementErrorTranslationFile,
    PassportElementErrorTranslationFiles, PassportElementErrorUnspecified,
};
pub use payments::{
    AffiliateInfo, RevenueWithdrawalState, RevenueWithdrawalStateFailed,
    RevenueWithdrawalStatePending, RevenueWithdrawalStateSucceeded, TransactionPartner,
    TransactionPartnerAffiliateProgram, TransactionPartnerChat, TransactionPartnerFragment,
    TransactionPartnerOther, TransactionPartnerTelegramAds, TransactionPartnerTelegramApi,
    TransactionPartnerUser,
};
pub use reaction::{
    MessageReactionUpdated, ReactionType, ReactionTypeCustomEmoji, ReactionTypeEmoji,
    ReactionTypePaid,
};
pub use story::{
    LocationAddress, StoryAreaType, StoryAreaTypeLink, StoryAreaTypeLocation,
    StoryAreaTypeSuggestedReaction, StoryAreaTypeUniqueGift, StoryAreaTypeWeather,
};
pub use update::{Update, UpdateKind};
