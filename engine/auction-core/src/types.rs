//! Shared identifier and localization types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Announcement ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnouncementId(pub Uuid);

impl AnnouncementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnnouncementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bid ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BidId(pub Uuid);

impl BidId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BidId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locales the platform serves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// BCP 47 language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A piece of text with a default rendering and per-locale variants.
///
/// Lookup is explicit: a missing variant falls back to `default`, never to
/// another locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub default: String,
    pub variants: HashMap<Locale, String>,
}

impl LocalizedText {
    /// Create a text with only the default rendering
    pub fn new(default: impl Into<String>) -> Self {
        Self { default: default.into(), variants: HashMap::new() }
    }

    /// Add or replace the rendering for `locale`
    pub fn with_variant(mut self, locale: Locale, text: impl Into<String>) -> Self {
        self.variants.insert(locale, text.into());
        self
    }

    /// Rendering for `locale`, or the default when no variant exists
    pub fn resolve(&self, locale: Locale) -> &str {
        self.variants.get(&locale).map(String::as_str).unwrap_or(&self.default)
    }
}

/// Apartment size descriptor of a moving request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApartmentSize {
    OneRoom,
    TwoRooms,
    ThreeRooms,
    FourRoomsPlus,
    House,
    Office,
}

impl ApartmentSize {
    /// Human-facing label in the given locale
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ApartmentSize::OneRoom, Locale::En) => "1-room apartment",
            (ApartmentSize::OneRoom, Locale::De) => "1-Zimmer-Wohnung",
            (ApartmentSize::TwoRooms, Locale::En) => "2-room apartment",
            (ApartmentSize::TwoRooms, Locale::De) => "2-Zimmer-Wohnung",
            (ApartmentSize::ThreeRooms, Locale::En) => "3-room apartment",
            (ApartmentSize::ThreeRooms, Locale::De) => "3-Zimmer-Wohnung",
            (ApartmentSize::FourRoomsPlus, Locale::En) => "4+ room apartment",
            (ApartmentSize::FourRoomsPlus, Locale::De) => "Wohnung mit 4+ Zimmern",
            (ApartmentSize::House, Locale::En) => "house",
            (ApartmentSize::House, Locale::De) => "Haus",
            (ApartmentSize::Office, Locale::En) => "office",
            (ApartmentSize::Office, Locale::De) => "Büro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        let id = AnnouncementId::new();
        assert_eq!(id, id);
        assert_ne!(AnnouncementId::new(), AnnouncementId::new());
    }

    #[test]
    fn test_localized_text_resolve() {
        let text = LocalizedText::new("hello").with_variant(Locale::De, "hallo");

        assert_eq!(text.resolve(Locale::De), "hallo");
        assert_eq!(text.resolve(Locale::En), "hello");
    }

    #[test]
    fn test_localized_text_fallback_to_default() {
        let text = LocalizedText::new("moving day");

        // No variant registered, both locales read the default
        assert_eq!(text.resolve(Locale::En), "moving day");
        assert_eq!(text.resolve(Locale::De), "moving day");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_apartment_size_labels() {
        assert_eq!(ApartmentSize::TwoRooms.label(Locale::De), "2-Zimmer-Wohnung");
        assert_eq!(ApartmentSize::House.label(Locale::En), "house");
    }
}
