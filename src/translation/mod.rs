mod client;
mod language;

pub use client::{TranslateError, TranslationClient, TranslationRequest};
pub use language::{
    LANGUAGES, Language, LanguagePair, SelectionError, choices_hint, find_language,
    language_code, print_languages, validate_pair,
};
