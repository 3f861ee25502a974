//! Transcription languages and their whisper language codes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Languages accepted for transcription.
///
/// The set matches what the whisper models were trained on well enough to
/// be worth offering; the model is always told the language explicitly
/// rather than asked to auto-detect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Afrikaans,
    Arabic,
    Armenian,
    Azerbaijani,
    Belarusian,
    Bosnian,
    Bulgarian,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    #[default]
    English,
    Estonian,
    Finnish,
    French,
    Galician,
    German,
    Greek,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Italian,
    Japanese,
    Kannada,
    Kazakh,
    Korean,
    Latvian,
    Lithuanian,
    Macedonian,
    Malay,
    Marathi,
    Maori,
    Nepali,
    Norwegian,
    Persian,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    Serbian,
    Slovak,
    Slovenian,
    Spanish,
    Swahili,
    Swedish,
    Tagalog,
    Tamil,
    Thai,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
}

impl Language {
    /// The ISO 639-1 code whisper.cpp expects.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Afrikaans => "af",
            Self::Arabic => "ar",
            Self::Armenian => "hy",
            Self::Azerbaijani => "az",
            Self::Belarusian => "be",
            Self::Bosnian => "bs",
            Self::Bulgarian => "bg",
            Self::Catalan => "ca",
            Self::Chinese => "zh",
            Self::Croatian => "hr",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Estonian => "et",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::Galician => "gl",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hebrew => "he",
            Self::Hindi => "hi",
            Self::Hungarian => "hu",
            Self::Icelandic => "is",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Kannada => "kn",
            Self::Kazakh => "kk",
            Self::Korean => "ko",
            Self::Latvian => "lv",
            Self::Lithuanian => "lt",
            Self::Macedonian => "mk",
            Self::Malay => "ms",
            Self::Marathi => "mr",
            Self::Maori => "mi",
            Self::Nepali => "ne",
            Self::Norwegian => "no",
            Self::Persian => "fa",
            Self::Polish => "pl",
            Self::Portuguese => "pt",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::Serbian => "sr",
            Self::Slovak => "sk",
            Self::Slovenian => "sl",
            Self::Spanish => "es",
            Self::Swahili => "sw",
            Self::Swedish => "sv",
            Self::Tagalog => "tl",
            Self::Tamil => "ta",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Urdu => "ur",
            Self::Vietnamese => "vi",
            Self::Welsh => "cy",
        }
    }

    /// The capitalized English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Afrikaans => "Afrikaans",
            Self::Arabic => "Arabic",
            Self::Armenian => "Armenian",
            Self::Azerbaijani => "Azerbaijani",
            Self::Belarusian => "Belarusian",
            Self::Bosnian => "Bosnian",
            Self::Bulgarian => "Bulgarian",
            Self::Catalan => "Catalan",
            Self::Chinese => "Chinese",
            Self::Croatian => "Croatian",
            Self::Czech => "Czech",
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Estonian => "Estonian",
            Self::Finnish => "Finnish",
            Self::French => "French",
            Self::Galician => "Galician",
            Self::German => "German",
            Self::Greek => "Greek",
            Self::Hebrew => "Hebrew",
            Self::Hindi => "Hindi",
            Self::Hungarian => "Hungarian",
            Self::Icelandic => "Icelandic",
            Self::Indonesian => "Indonesian",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Kannada => "Kannada",
            Self::Kazakh => "Kazakh",
            Self::Korean => "Korean",
            Self::Latvian => "Latvian",
            Self::Lithuanian => "Lithuanian",
            Self::Macedonian => "Macedonian",
            Self::Malay => "Malay",
            Self::Marathi => "Marathi",
            Self::Maori => "Maori",
            Self::Nepali => "Nepali",
            Self::Norwegian => "Norwegian",
            Self::Persian => "Persian",
            Self::Polish => "Polish",
            Self::Portuguese => "Portuguese",
            Self::Romanian => "Romanian",
            Self::Russian => "Russian",
            Self::Serbian => "Serbian",
            Self::Slovak => "Slovak",
            Self::Slovenian => "Slovenian",
            Self::Spanish => "Spanish",
            Self::Swahili => "Swahili",
            Self::Swedish => "Swedish",
            Self::Tagalog => "Tagalog",
            Self::Tamil => "Tamil",
            Self::Thai => "Thai",
            Self::Turkish => "Turkish",
            Self::Ukrainian => "Ukrainian",
            Self::Urdu => "Urdu",
            Self::Vietnamese => "Vietnamese",
            Self::Welsh => "Welsh",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_iso_639_1() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Chinese.code(), "zh");
        assert_eq!(Language::Welsh.code(), "cy");
        assert_eq!(Language::Persian.code(), "fa");
    }

    #[test]
    fn serializes_lowercase_name() {
        let json = serde_json::to_string(&Language::Italian).unwrap();
        assert_eq!(json, "\"italian\"");
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Language::Italian);
    }

    #[test]
    fn display_is_capitalized() {
        assert_eq!(Language::Ukrainian.to_string(), "Ukrainian");
    }
}
