#![allow(dead_code)]

use courier::types::{Update, UpdateKind};
use courier::{Envelope, codec};
use serde_json::{Value, json};
use std::fmt::Debug;

// ============================================================================
// Plain Objects
// ============================================================================

pub fn user(id: i64) -> Value {
    json!({"id": id, "is_bot": false, "first_name": "Ada"})
}

pub fn chat(id: i64) -> Value {
    json!({"id": id, "type": "private", "first_name": "Ada"})
}

pub fn channel(id: i64) -> Value {
    json!({"id": id, "type": "channel", "title": "News"})
}

pub fn photo_size() -> Value {
    json!({"file_id": "p1", "file_unique_id": "u1", "width": 90, "height": 90})
}

pub fn video() -> Value {
    json!({
        "file_id": "v1",
        "file_unique_id": "uv1",
        "width": 640,
        "height": 480,
        "duration": 12
    })
}

pub fn document() -> Value {
    json!({"file_id": "d1", "file_unique_id": "ud1", "file_name": "wall.jpg"})
}

pub fn sticker() -> Value {
    json!({
        "file_id": "s1",
        "file_unique_id": "us1",
        "type": "regular",
        "width": 512,
        "height": 512,
        "is_animated": false,
        "is_video": false,
        "emoji": "🎁"
    })
}

pub fn gift() -> Value {
    json!({"id": "g1", "sticker": sticker(), "star_count": 50})
}

pub fn message(id: i64, chat_id: i64, text: &str) -> Value {
    json!({"message_id": id, "date": 1700000000, "chat": chat(chat_id), "text": text})
}

// ============================================================================
// Updates
// ============================================================================

pub fn update_json(update_id: i64, kind: &str, payload: Value) -> Value {
    json!({"update_id": update_id, (kind): payload})
}

/// A text message update.
pub fn text_update(update_id: i64) -> Update {
    let raw = update_json(update_id, "message", message(update_id, 42, "hello"));
    Update::decode(raw).expect("fixture update decodes")
}

/// An update whose payload is kept raw.
pub fn raw_update(update_id: i64) -> Update {
    Update::new(
        update_id,
        UpdateKind::Other {
            kind: "poll".into(),
            payload: json!({"id": update_id.to_string()}),
        },
    )
}

pub fn text_updates(ids: impl IntoIterator<Item = i64>) -> Vec<Update> {
    ids.into_iter().map(text_update).collect()
}

// ============================================================================
// Envelope Fixtures
// ============================================================================

/// Decode every fixture, check it encodes back unchanged and that together
/// the fixtures cover every registered discriminant.
pub fn assert_round_trips<T: Envelope + Debug>(fixtures: Vec<Value>) {
    let mut seen = Vec::new();
    for raw in fixtures {
        let decoded: T = codec::decode(raw.clone())
            .unwrap_or_else(|err| panic!("{} failed on {raw}: {err}", T::NAME));
        assert_eq!(
            raw.get(T::DISCRIMINANT).and_then(Value::as_str),
            Some(decoded.kind()),
            "{}: kind mismatch",
            T::NAME
        );
        assert_eq!(codec::encode(&decoded).unwrap(), raw, "{}", T::NAME);
        seen.push(decoded.kind());
    }
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen, T::registry().tags(), "{}: uncovered variants", T::NAME);
}

pub fn message_origins() -> Vec<Value> {
    vec![
        json!({"type": "user", "date": 1, "sender_user": user(1)}),
        json!({"type": "hidden_user", "date": 2, "sender_user_name": "Anon"}),
        json!({"type": "chat", "date": 3, "sender_chat": channel(-100), "author_signature": "ed"}),
        json!({"type": "channel", "date": 4, "chat": channel(-100), "message_id": 77}),
    ]
}

pub fn reaction_types() -> Vec<Value> {
    vec![
        json!({"type": "emoji", "emoji": "🔥"}),
        json!({"type": "custom_emoji", "custom_emoji_id": "5368324170671202286"}),
        json!({"type": "paid"}),
    ]
}

pub fn background_fills() -> Vec<Value> {
    vec![
        json!({"type": "solid", "color": 16711680}),
        json!({"type": "gradient", "top_color": 255, "bottom_color": 65280, "rotation_angle": 45}),
        json!({"type": "freeform_gradient", "colors": [1, 2, 3]}),
    ]
}

pub fn background_types() -> Vec<Value> {
    vec![
        json!({"type": "fill", "fill": {"type": "solid", "color": 0}, "dark_theme_dimming": 20}),
        json!({"type": "wallpaper", "document": document(), "dark_theme_dimming": 0, "is_blurred": true}),
        json!({
            "type": "pattern",
            "document": document(),
            "fill": {"type": "freeform_gradient", "colors": [4, 5, 6, 7]},
            "intensity": 60
        }),
        json!({"type": "chat_theme", "theme_name": "🌸"}),
    ]
}

pub fn chat_boost_sources() -> Vec<Value> {
    vec![
        json!({"source": "premium", "user": user(2)}),
        json!({"source": "gift_code", "user": user(3)}),
        json!({"source": "giveaway", "giveaway_message_id": 9, "prize_star_count": 500}),
    ]
}

pub fn chat_members() -> Vec<Value> {
    vec![
        json!({"status": "creator", "user": user(1), "is_anonymous": false}),
        json!({
            "status": "administrator",
            "user": user(2),
            "can_be_edited": true,
            "is_anonymous": false,
            "can_manage_chat": true,
            "can_delete_messages": true,
            "can_manage_video_chats": false,
            "can_restrict_members": true,
            "can_promote_members": false,
            "can_change_info": true,
            "can_invite_users": true,
            "can_post_stories": false,
            "can_edit_stories": false,
            "can_delete_stories": false,
            "can_pin_messages": true
        }),
        json!({"status": "member", "user": user(3)}),
        json!({
            "status": "restricted",
            "user": user(4),
            "is_member": true,
            "can_send_messages": true,
            "can_send_audios": false,
            "can_send_documents": false,
            "can_send_photos": true,
            "can_send_videos": false,
            "can_send_video_notes": false,
            "can_send_voice_notes": false,
            "can_send_polls": false,
            "can_send_other_messages": false,
            "can_add_web_page_previews": false,
            "can_change_info": false,
            "can_invite_users": false,
            "can_pin_messages": false,
            "can_manage_topics": false,
            "until_date": 0
        }),
        json!({"status": "left", "user": user(5)}),
        json!({"status": "kicked", "user": user(6), "until_date": 1800000000}),
    ]
}

pub fn input_media() -> Vec<Value> {
    vec![
        json!({"type": "photo", "media": "attach://p", "caption": "hi", "has_spoiler": true}),
        json!({"type": "video", "media": "attach://v", "width": 640, "supports_streaming": true}),
        json!({"type": "animation", "media": "file-id", "duration": 3}),
        json!({"type": "audio", "media": "https://example.com/a.mp3", "performer": "Band"}),
        json!({"type": "document", "media": "attach://d", "disable_content_type_detection": true}),
    ]
}

pub fn input_paid_media() -> Vec<Value> {
    vec![
        json!({"type": "photo", "media": "attach://p"}),
        json!({"type": "video", "media": "attach://v", "duration": 30}),
    ]
}

pub fn paid_media() -> Vec<Value> {
    vec![
        json!({"type": "preview", "width": 100, "height": 80}),
        json!({"type": "photo", "photo": [photo_size()]}),
        json!({"type": "video", "video": video()}),
    ]
}

pub fn bot_command_scopes() -> Vec<Value> {
    vec![
        json!({"type": "default"}),
        json!({"type": "all_private_chats"}),
        json!({"type": "all_group_chats"}),
        json!({"type": "all_chat_administrators"}),
        json!({"type": "chat", "chat_id": -1001234}),
        json!({"type": "chat_administrators", "chat_id": "@news"}),
        json!({"type": "chat_member", "chat_id": 42, "user_id": 7}),
    ]
}

pub fn menu_buttons() -> Vec<Value> {
    vec![
        json!({"type": "commands"}),
        json!({"type": "web_app", "text": "Open", "web_app": {"url": "https://example.com/app"}}),
        json!({"type": "default"}),
    ]
}

pub fn revenue_withdrawal_states() -> Vec<Value> {
    vec![
        json!({"type": "pending"}),
        json!({"type": "succeeded", "date": 1700000000, "url": "https://fragment.com/tx/1"}),
        json!({"type": "failed"}),
    ]
}

pub fn transaction_partners() -> Vec<Value> {
    vec![
        json!({
            "type": "user",
            "transaction_type": "paid_media_payment",
            "user": user(8),
            "paid_media": [{"type": "preview", "duration": 5}],
            "gift": gift()
        }),
        json!({"type": "chat", "chat": channel(-200)}),
        json!({"type": "affiliate_program", "commission_per_mille": 150}),
        json!({"type": "fragment", "withdrawal_state": {"type": "pending"}}),
        json!({"type": "telegram_ads"}),
        json!({"type": "telegram_api", "request_count": 12}),
        json!({"type": "other"}),
    ]
}

pub fn passport_element_errors() -> Vec<Value> {
    vec![
        json!({"source": "data", "type": "passport", "field_name": "number", "data_hash": "aA==", "message": "bad"}),
        json!({"source": "front_side", "type": "driver_license", "file_hash": "bA==", "message": "blurry"}),
        json!({"source": "reverse_side", "type": "identity_card", "file_hash": "cA==", "message": "cut"}),
        json!({"source": "selfie", "type": "passport", "file_hash": "dA==", "message": "dark"}),
        json!({"source": "file", "type": "utility_bill", "file_hash": "eA==", "message": "old"}),
        json!({"source": "files", "type": "bank_statement", "file_hashes": ["fA==", "gA=="], "message": "old"}),
        json!({"source": "translation_file", "type": "passport", "file_hash": "hA==", "message": "wrong"}),
        json!({"source": "translation_files", "type": "rental_agreement", "file_hashes": ["iA=="], "message": "missing"}),
        json!({"source": "unspecified", "type": "address", "element_hash": "jA==", "message": "check"}),
    ]
}

pub fn owned_gifts() -> Vec<Value> {
    vec![
        json!({"type": "regular", "gift": gift(), "send_date": 1700000000, "text": "for you", "is_saved": true}),
        json!({
            "type": "unique",
            "gift": {"base_name": "Plush Pepe", "name": "PlushPepe-12", "number": 12},
            "send_date": 1700000001,
            "can_be_transferred": true,
            "transfer_star_count": 25
        }),
    ]
}

pub fn story_area_types() -> Vec<Value> {
    vec![
        json!({
            "type": "location",
            "latitude": 52.52,
            "longitude": 13.405,
            "address": {"country_code": "DE", "city": "Berlin"}
        }),
        json!({"type": "suggested_reaction", "reaction_type": {"type": "emoji", "emoji": "👍"}, "is_dark": true}),
        json!({"type": "link", "url": "https://example.com"}),
        json!({"type": "weather", "temperature": 21.5, "emoji": "☀️", "background_color": 4294967295u32}),
        json!({"type": "unique_gift", "name": "PlushPepe-12"}),
    ]
}
