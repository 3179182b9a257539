//! Clickable areas on stories.

use super::reaction::ReactionType;
use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// What a story area does.
    pub enum StoryAreaType in "type" {
        /// Shows a location.
        "location" => Location(StoryAreaTypeLocation),
        /// Shows a reaction.
        "suggested_reaction" => SuggestedReaction(StoryAreaTypeSuggestedReaction),
        /// Links to a URL.
        "link" => Link(StoryAreaTypeLink),
        /// Shows weather.
        "weather" => Weather(StoryAreaTypeWeather),
        /// Shows a unique gift.
        "unique_gift" => UniqueGift(StoryAreaTypeUniqueGift),
    }
}

/// A location area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAreaTypeLocation {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Address of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<LocationAddress>,
}

/// Address of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAddress {
    /// Two-letter ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Street.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

/// A suggested reaction area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAreaTypeSuggestedReaction {
    /// The reaction.
    pub reaction_type: ReactionType,
    /// Whether the area has a dark background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dark: Option<bool>,
    /// Whether the reaction area corner is flipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flipped: Option<bool>,
}

/// A link area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryAreaTypeLink {
    /// HTTP or tg:// URL opened on click.
    pub url: String,
}

/// A weather area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAreaTypeWeather {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Emoji representing the weather.
    pub emoji: String,
    /// Background color in ARGB.
    pub background_color: u32,
}

/// A unique gift area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryAreaTypeUniqueGift {
    /// Unique name of the gift.
    pub name: String,
}
