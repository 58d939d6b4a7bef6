//! Supported language set

/// Languages the FleetKeeper site ships translations for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Romanian,
    German,
    Hungarian,
    Polish,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Bulgarian,
    Czech,
}

impl Language {
    /// ISO 639-1 code for this language
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Romanian => "ro",
            Self::German => "de",
            Self::Hungarian => "hu",
            Self::Polish => "pl",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Bulgarian => "bg",
            Self::Czech => "cs",
        }
    }

    /// Parse a language from an exact ISO 639-1 code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "ro" => Some(Self::Romanian),
            "de" => Some(Self::German),
            "hu" => Some(Self::Hungarian),
            "pl" => Some(Self::Polish),
            "fr" => Some(Self::French),
            "es" => Some(Self::Spanish),
            "it" => Some(Self::Italian),
            "pt" => Some(Self::Portuguese),
            "nl" => Some(Self::Dutch),
            "bg" => Some(Self::Bulgarian),
            "cs" => Some(Self::Czech),
            _ => None,
        }
    }

    /// Parse a language from a locale tag by its primary subtag
    ///
    /// Accepts BCP 47 tags (`de-DE`) as well as POSIX locale strings
    /// (`de_DE.UTF-8`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or(tag);
        Self::from_code(primary)
    }

    /// All supported languages in display order
    pub const fn all() -> &'static [Self] {
        &[
            Self::English,
            Self::Romanian,
            Self::German,
            Self::Hungarian,
            Self::Polish,
            Self::French,
            Self::Spanish,
            Self::Italian,
            Self::Portuguese,
            Self::Dutch,
            Self::Bulgarian,
            Self::Czech,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
