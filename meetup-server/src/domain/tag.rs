//! Preference tag vocabulary.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an unknown preference tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference tag: {0:?}")]
pub struct UnknownTag(pub String);

/// One of the eight activity categories a participant can ask for.
///
/// Each tag has an ASCII slug (used in URLs and JSON) and the label used by
/// the Taipei attraction data set. Both forms parse to the same tag.
///
/// # Examples
///
/// ```
/// use meetup_server::domain::PreferenceTag;
///
/// assert_eq!(PreferenceTag::parse("cafe"), Ok(PreferenceTag::Cafe));
/// assert_eq!(PreferenceTag::parse("咖啡廳"), Ok(PreferenceTag::Cafe));
/// assert_eq!(PreferenceTag::parse("Night-Market"), Ok(PreferenceTag::NightMarket));
/// assert!(PreferenceTag::parse("karaoke").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceTag {
    Attraction,
    Walk,
    Exhibition,
    Cafe,
    Shopping,
    Movie,
    Handmade,
    NightMarket,
}

impl PreferenceTag {
    /// Every tag, in display order.
    pub const ALL: [PreferenceTag; 8] = [
        PreferenceTag::Attraction,
        PreferenceTag::Walk,
        PreferenceTag::Exhibition,
        PreferenceTag::Cafe,
        PreferenceTag::Shopping,
        PreferenceTag::Movie,
        PreferenceTag::Handmade,
        PreferenceTag::NightMarket,
    ];

    /// ASCII identifier.
    pub fn slug(self) -> &'static str {
        match self {
            PreferenceTag::Attraction => "attraction",
            PreferenceTag::Walk => "walk",
            PreferenceTag::Exhibition => "exhibition",
            PreferenceTag::Cafe => "cafe",
            PreferenceTag::Shopping => "shopping",
            PreferenceTag::Movie => "movie",
            PreferenceTag::Handmade => "handmade",
            PreferenceTag::NightMarket => "night-market",
        }
    }

    /// Label as it appears in the attraction table's `tags` column.
    pub fn label(self) -> &'static str {
        match self {
            PreferenceTag::Attraction => "景點",
            PreferenceTag::Walk => "散步",
            PreferenceTag::Exhibition => "看展",
            PreferenceTag::Cafe => "咖啡廳",
            PreferenceTag::Shopping => "逛街",
            PreferenceTag::Movie => "電影",
            PreferenceTag::Handmade => "手作",
            PreferenceTag::NightMarket => "夜市",
        }
    }

    /// Parse a tag from its slug (case-insensitive) or its data-set label.
    pub fn parse(s: &str) -> Result<Self, UnknownTag> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.slug().eq_ignore_ascii_case(trimmed) || tag.label() == trimmed)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }

    /// Whether an attraction's category label names this tag.
    pub fn matches(self, label: &str) -> bool {
        Self::parse(label).is_ok_and(|tag| tag == self)
    }
}

impl fmt::Display for PreferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
