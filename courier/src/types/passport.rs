//! Errors reported back on Telegram Passport data.

use courier_std::envelope;
use serde::{Deserialize, Serialize};

envelope! {
    /// An error in a submitted Passport element.
    pub enum PassportElementError in "source" {
        /// A data field.
        "data" => DataField(PassportElementErrorDataField),
        /// The front side of a document.
        "front_side" => FrontSide(PassportElementErrorFrontSide),
        /// The reverse side of a document.
        "reverse_side" => ReverseSide(PassportElementErrorReverseSide),
        /// The selfie with a document.
        "selfie" => Selfie(PassportElementErrorSelfie),
        /// A document scan.
        "file" => File(PassportElementErrorFile),
        /// A list of scans.
        "files" => Files(PassportElementErrorFiles),
        /// One file of a document translation.
        "translation_file" => TranslationFile(PassportElementErrorTranslationFile),
        /// The files of a document translation.
        "translation_files" => TranslationFiles(PassportElementErrorTranslationFiles),
        /// An unspecified place.
        "unspecified" => Unspecified(PassportElementErrorUnspecified),
    }
}

impl PassportElementError {
    /// The element type the error refers to.
    pub fn element_type(&self) -> &str {
        match self {
            Self::DataField(error) => &error.element_type,
            Self::FrontSide(error) => &error.element_type,
            Self::ReverseSide(error) => &error.element_type,
            Self::Selfie(error) => &error.element_type,
            Self::File(error) => &error.element_type,
            Self::Files(error) => &error.element_type,
            Self::TranslationFile(error) => &error.element_type,
            Self::TranslationFiles(error) => &error.element_type,
            Self::Unspecified(error) => &error.element_type,
        }
    }
}

/// Error in a data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Name of the data field.
    pub field_name: String,
    /// Base64 data hash.
    pub data_hash: String,
    /// Error message.
    pub message: String,
}

/// Error in the front side of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFrontSide {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hash of the file.
    pub file_hash: String,
    /// Error message.
    pub message: String,
}

/// Error in the reverse side of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorReverseSide {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hash of the file.
    pub file_hash: String,
    /// Error message.
    pub message: String,
}

/// Error in the selfie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorSelfie {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hash of the file.
    pub file_hash: String,
    /// Error message.
    pub message: String,
}

/// Error in a document scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hash of the file.
    pub file_hash: String,
    /// Error message.
    pub message: String,
}

/// Error in a list of scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorFiles {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hashes of the files.
    pub file_hashes: Vec<String>,
    /// Error message.
    pub message: String,
}

/// Error in one translation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFile {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hash of the file.
    pub file_hash: String,
    /// Error message.
    pub message: String,
}

/// Error in the translation files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFiles {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hashes of the files.
    pub file_hashes: Vec<String>,
    /// Error message.
    pub message: String,
}

/// Error in an unspecified place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportElementErrorUnspecified {
    /// Section of the user's Passport with the error.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Base64 hash of the element.
    pub element_hash: String,
    /// Error message.
    pub message: String,
}
