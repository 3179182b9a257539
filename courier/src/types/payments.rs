//! Star transactions and revenue withdrawals.

use super::common::{Chat, User};
use super::gifts::Gift;
use super::media::PaidMedia;
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// State of a revenue withdrawal.
    pub enum RevenueWithdrawalState in "type" {
        /// In progress.
        "pending" => Pending(RevenueWithdrawalStatePending),
        /// Completed.
        "succeeded" => Succeeded(RevenueWithdrawalStateSucceeded),
        /// Failed; the transaction was refunded.
        "failed" => Failed(RevenueWithdrawalStateFailed),
    }
}

/// Withdrawal in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueWithdrawalStatePending {}

/// Withdrawal completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueWithdrawalStateSucceeded {
    /// Unix time the withdrawal completed.
    pub date: i64,
    /// HTTPS URL to inspect the withdrawal.
    pub url: String,
}

/// Withdrawal failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueWithdrawalStateFailed {}

envelope! {
    /// The other side of a star transaction.
    pub enum TransactionPartner in "type" {
        /// A user.
        "user" => User(TransactionPartnerUser),
        /// A chat.
        "chat" => Chat(TransactionPartnerChat),
        /// An affiliate program.
        "affiliate_program" => AffiliateProgram(TransactionPartnerAffiliateProgram),
        /// A withdrawal through Fragment.
        "fragment" => Fragment(TransactionPartnerFragment),
        /// A withdrawal to the ads platform.
        "telegram_ads" => TelegramAds(TransactionPartnerTelegramAds),
        /// Paid broadcasting.
        "telegram_api" => TelegramApi(TransactionPartnerTelegramApi),
        /// Anything else.
        "other" => Other(TransactionPartnerOther),
    }
}

/// Transaction with a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerUser {
    /// `invoice_payment`, `paid_media_payment`, `gift_purchase`,
    /// `premium_purchase` or `business_account_transfer`.
    pub transaction_type: String,
    /// The user.
    pub user: User,
    /// Affiliate that received a commission, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<AffiliateInfo>,
    /// Bot-specified invoice payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_payload: Option<String>,
    /// Subscription period in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_period: Option<u32>,
    /// Media bought by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_media: Option<Vec<PaidMedia>>,
    /// Bot-specified paid media payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_media_payload: Option<String>,
    /// Gift sent to the user by the bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
    /// Months of premium bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_subscription_duration: Option<u32>,
}

/// Transaction with a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerChat {
    /// The chat.
    pub chat: Chat,
    /// Gift sent to the chat by the bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
}

/// Commission received from an affiliate program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerAffiliateProgram {
    /// Bot that sponsored the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_user: Option<User>,
    /// Stars received per 1000 stars of referred users' purchases.
    pub commission_per_mille: u32,
}

/// Withdrawal through Fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPartnerFragment {
    /// State of the withdrawal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawal_state: Option<RevenueWithdrawalState>,
}

/// Withdrawal to the ads platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPartnerTelegramAds {}

/// Paid broadcast messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPartnerTelegramApi {
    /// Successful requests that exceeded regular limits and were billed.
    pub request_count: u32,
}

/// Unknown transaction partner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPartnerOther {}

/// Affiliate that received a commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateInfo {
    /// Affiliating bot or user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_user: Option<User>,
    /// Affiliating chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_chat: Option<Chat>,
    /// Stars received per 1000 stars of referred users' purchases.
    pub commission_per_mille: u32,
    /// Integer amount of stars received; may be negative for refunds.
    pub amount: i64,
    /// Nanostars received; may be negative for refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanostar_amount: Option<i32>,
}
