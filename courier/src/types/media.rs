//! Media to send and paid media received.

use super::common::{PhotoSize, Video};
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// Content of a media message to be sent.
    pub enum InputMedia in "type" {
        /// A photo.
        "photo" => Photo(InputMediaPhoto),
        /// A video.
        "video" => Video(InputMediaVideo),
        /// An animation (GIF or soundless H.264/MPEG-4 video).
        "animation" => Animation(InputMediaAnimation),
        /// An audio file to be treated as music.
        "audio" => Audio(InputMediaAudio),
        /// A general file.
        "document" => Document(InputMediaDocument),
    }
}

/// Photo to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
    /// Caption, 0-1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Mode for parsing entities in the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Whether the caption goes above the media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_caption_above_media: Option<bool>,
    /// Whether to cover the photo with a spoiler animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

/// Video to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
    /// Thumbnail, as `attach://<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Start timestamp in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<u32>,
    /// Caption, 0-1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Mode for parsing entities in the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Whether the video is suitable for streaming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    /// Whether to cover the video with a spoiler animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

/// Animation to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
    /// Thumbnail, as `attach://<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Caption, 0-1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Mode for parsing entities in the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Whether to cover the animation with a spoiler animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

/// Audio to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
    /// Thumbnail, as `attach://<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Caption, 0-1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Mode for parsing entities in the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Performer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    /// Track title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// General file to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
    /// Thumbnail, as `attach://<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Caption, 0-1024 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Mode for parsing entities in the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    /// Disables server-side content type detection for uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

envelope! {
    /// Paid media to be sent.
    pub enum InputPaidMedia in "type" {
        /// A paid photo.
        "photo" => Photo(InputPaidMediaPhoto),
        /// A paid video.
        "video" => Video(InputPaidMediaVideo),
    }
}

/// Paid photo to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaidMediaPhoto {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
}

/// Paid video to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaidMediaVideo {
    /// File id, HTTP URL or `attach://<name>`.
    pub media: String,
    /// Thumbnail, as `attach://<name>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Cover image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Start timestamp in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<u32>,
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Whether the video is suitable for streaming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

envelope! {
    /// Paid media attached to a received message.
    pub enum PaidMedia in "type" {
        /// Not yet paid for; only dimensions are known.
        "preview" => Preview(PaidMediaPreview),
        /// A photo.
        "photo" => Photo(PaidMediaPhoto),
        /// A video.
        "video" => Video(PaidMediaVideo),
    }
}

/// Paid media not available before payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMediaPreview {
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Paid photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaPhoto {
    /// Available sizes.
    pub photo: Vec<PhotoSize>,
}

/// Paid video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaVideo {
    /// The video.
    pub video: Video,
}

/// Paid media attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaInfo {
    /// Stars to pay for access.
    pub star_count: u32,
    /// The media.
    pub paid_media: Vec<PaidMedia>,
}

impl InputMedia {
    /// The `media` reference of whichever variant is held.
    pub fn media(&self) -> &str {
        match self {
            Self::Photo(media) => &media.media,
            Self::Video(media) => &media.media,
            Self::Animation(media) => &media.media,
            Self::Audio(media) => &media.media,
            Self::Document(media) => &media.media,
        }
    }
}
