use std::fmt;
use std::str::FromStr;

/// A supported language. The enum is exactly the target-language set;
/// the source set is the subset returned by [`Language::source_languages`]
/// (everything except Arabic and Turkish).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Polish,
    Russian,
    Japanese,
    Chinese,
    Korean,
    Arabic,
    Turkish,
}

const SOURCE_LANGUAGES: [Language; 12] = [
    Language::English,
    Language::French,
    Language::German,
    Language::Spanish,
    Language::Italian,
    Language::Portuguese,
    Language::Dutch,
    Language::Polish,
    Language::Russian,
    Language::Japanese,
    Language::Chinese,
    Language::Korean,
];

const TARGET_LANGUAGES: [Language; 14] = [
    Language::English,
    Language::French,
    Language::German,
    Language::Spanish,
    Language::Italian,
    Language::Portuguese,
    Language::Dutch,
    Language::Polish,
    Language::Russian,
    Language::Japanese,
    Language::Chinese,
    Language::Korean,
    Language::Arabic,
    Language::Turkish,
];

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Polish => "Polish",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
            Language::Turkish => "Turkish",
        }
    }

    /// Languages accepted as the source of a translation.
    pub fn source_languages() -> &'static [Language] {
        &SOURCE_LANGUAGES
    }

    /// Languages accepted as the target of a translation (superset of the
    /// source set).
    pub fn target_languages() -> &'static [Language] {
        &TARGET_LANGUAGES
    }

    pub fn is_valid_source(&self) -> bool {
        SOURCE_LANGUAGES.contains(self)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "English" => Ok(Language::English),
            "French" => Ok(Language::French),
            "German" => Ok(Language::German),
            "Spanish" => Ok(Language::Spanish),
            "Italian" => Ok(Language::Italian),
            "Portuguese" => Ok(Language::Portuguese),
            "Dutch" => Ok(Language::Dutch),
            "Polish" => Ok(Language::Polish),
            "Russian" => Ok(Language::Russian),
            "Japanese" => Ok(Language::Japanese),
            "Chinese" => Ok(Language::Chinese),
            "Korean" => Ok(Language::Korean),
            "Arabic" => Ok(Language::Arabic),
            "Turkish" => Ok(Language::Turkish),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
