//! Chat backgrounds.

use super::common::Document;
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// How a background is filled.
    pub enum BackgroundFill in "type" {
        /// A single color.
        "solid" => Solid(BackgroundFillSolid),
        /// A two-color gradient.
        "gradient" => Gradient(BackgroundFillGradient),
        /// A freeform gradient of three or four colors.
        "freeform_gradient" => FreeformGradient(BackgroundFillFreeformGradient),
    }
}

/// Solid fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFillSolid {
    /// Color in RGB24.
    pub color: u32,
}

/// Gradient fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFillGradient {
    /// Top color in RGB24.
    pub top_color: u32,
    /// Bottom color in RGB24.
    pub bottom_color: u32,
    /// Clockwise rotation in degrees, 0-359.
    pub rotation_angle: u16,
}

/// Freeform gradient fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundFillFreeformGradient {
    /// Base colors in RGB24.
    pub colors: Vec<u32>,
}

envelope! {
    /// The kind of a chat background.
    pub enum BackgroundType in "type" {
        /// Filled automatically.
        "fill" => Fill(BackgroundTypeFill),
        /// A wallpaper image.
        "wallpaper" => Wallpaper(BackgroundTypeWallpaper),
        /// A pattern drawn over a fill.
        "pattern" => Pattern(BackgroundTypePattern),
        /// Taken from a chat theme.
        "chat_theme" => ChatTheme(BackgroundTypeChatTheme),
    }
}

/// Background filled by a [`BackgroundFill`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTypeFill {
    /// The fill.
    pub fill: BackgroundFill,
    /// Dimming in dark themes, as a percentage.
    pub dark_theme_dimming: u8,
}

/// Wallpaper in JPEG format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTypeWallpaper {
    /// The wallpaper file.
    pub document: Document,
    /// Dimming in dark themes, as a percentage.
    pub dark_theme_dimming: u8,
    /// Whether the wallpaper is downscaled and blurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blurred: Option<bool>,
    /// Whether the background moves slightly when the device is tilted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moving: Option<bool>,
}

/// PNG or TGV pattern combined with a fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTypePattern {
    /// The pattern file.
    pub document: Document,
    /// Fill the pattern is combined with.
    pub fill: BackgroundFill,
    /// Pattern intensity, 0-100.
    pub intensity: u8,
    /// Whether the fill applies only to the pattern itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inverted: Option<bool>,
    /// Whether the background moves slightly when the device is tilted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moving: Option<bool>,
}

/// Background taken from a built-in chat theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTypeChatTheme {
    /// Name of the theme, usually an emoji.
    pub theme_name: String,
}

/// A chat background was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBackground {
    /// The background.
    #[serde(rename = "type")]
    pub background_type: BackgroundType,
}
