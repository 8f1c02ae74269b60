use serde::{Deserialize, Serialize};

/// One row of the reference dataset.
///
/// Field names mirror the snapshot's column headers; the descriptive fields
/// may be empty strings but are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Canonical color name, non-empty.
    #[serde(rename = "Color Name")]
    pub name: String,

    /// Six-hex-digit code, stored with or without a leading `#`.
    #[serde(rename = "HEX Code")]
    pub hex: String,

    /// Red channel.
    #[serde(rename = "R")]
    pub r: u8,

    /// Green channel.
    #[serde(rename = "G")]
    pub g: u8,

    /// Blue channel.
    #[serde(rename = "B")]
    pub b: u8,

    /// Color family, e.g. "Red" or "Pastel".
    #[serde(rename = "Category")]
    pub category: String,

    /// Personality traits associated with the color.
    #[serde(rename = "Personality")]
    pub personality: String,

    /// Emotion associated with the color.
    #[serde(rename = "Emotion")]
    pub emotion: String,

    /// Mood associated with the color.
    #[serde(rename = "Mood")]
    pub mood: String,

    /// What the color commonly symbolizes.
    #[serde(rename = "Symbolism")]
    pub symbolism: String,

    /// Free-text description.
    #[serde(rename = "Description")]
    pub description: String,

    /// Typical use cases, e.g. branding or interiors.
    #[serde(rename = "Use Case")]
    pub use_case: String,

    /// Comma-separated keywords.
    #[serde(rename = "Keywords")]
    pub keywords: String,
}

impl ColorRecord {
    /// The record's channel triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
