//! Tests for languages and the translation dictionary
//!
//! Tests cover:
//! - Language enum methods (locale_code, display_name, all, next)
//! - Default language selection
//! - Serialization/deserialization
//! - Dictionary loading and structural parity

use farmsite::i18n::{Dictionary, Language};

// ============================================
// Language Enum Basic Tests
// ============================================

#[test]
fn test_language_default_is_english() {
    let lang = Language::default();
    assert_eq!(lang, Language::English);
}

#[test]
fn test_language_english_locale_code() {
    assert_eq!(Language::English.locale_code(), "en");
}

#[test]
fn test_language_marathi_locale_code() {
    assert_eq!(Language::Marathi.locale_code(), "mr");
}

#[test]
fn test_language_english_display_name() {
    assert_eq!(Language::English.display_name(), "English");
}

#[test]
fn test_language_marathi_display_name() {
    // Display name should be in the native language
    assert_eq!(Language::Marathi.display_name(), "मराठी");
}

#[test]
fn test_language_all_returns_all_languages() {
    let all = Language::all();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&Language::English));
    assert!(all.contains(&Language::Marathi));
}

#[test]
fn test_language_all_english_first() {
    // English should be first in the list as the default
    let all = Language::all();
    assert_eq!(all[0], Language::English);
}

// ============================================
// Cyclic Toggle Order Tests
// ============================================

#[test]
fn test_next_advances_in_fixed_order() {
    assert_eq!(Language::English.next(), Language::Marathi);
    assert_eq!(Language::Marathi.next(), Language::English);
}

#[test]
fn test_next_visits_every_language_once_per_cycle() {
    let mut seen = vec![Language::English];
    let mut lang = Language::English;
    for _ in 1..Language::all().len() {
        lang = lang.next();
        assert!(!seen.contains(&lang), "cycle revisited {:?}", lang);
        seen.push(lang);
    }
    assert_eq!(lang.next(), Language::English);
}

#[test]
fn test_from_locale_code_roundtrip() {
    for lang in Language::all() {
        assert_eq!(Language::from_locale_code(lang.locale_code()), Some(*lang));
    }
}

#[test]
fn test_from_locale_code_unknown_is_none() {
    assert_eq!(Language::from_locale_code("de"), None);
    assert_eq!(Language::from_locale_code(""), None);
}

// ============================================
// Language Serialization Tests
// ============================================

#[test]
fn test_language_serialize_english() {
    let json = serde_json::to_string(&Language::English).unwrap();
    assert_eq!(json, "\"English\"");
}

#[test]
fn test_language_deserialize_marathi() {
    let lang: Language = serde_json::from_str("\"Marathi\"").unwrap();
    assert_eq!(lang, Language::Marathi);
}

#[test]
fn test_language_roundtrip_serialization() {
    for lang in Language::all() {
        let json = serde_json::to_string(lang).unwrap();
        let deserialized: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(*lang, deserialized);
    }
}

// ============================================
// Dictionary Tests
// ============================================

#[test]
fn test_dictionary_loads_embedded_locales() {
    let dict = Dictionary::from_embedded().unwrap();
    for lang in Language::all() {
        let bundle = dict.bundle(*lang);
        assert!(bundle.is_some(), "no bundle for {:?}", lang);
        assert!(!bundle.unwrap().is_empty(), "empty bundle for {:?}", lang);
    }
}

#[test]
fn test_dictionary_lookup_known_keys() {
    let dict = Dictionary::from_embedded().unwrap();
    assert_eq!(dict.lookup(Language::English, "nav.home"), Some("Home"));
    assert_eq!(dict.lookup(Language::Marathi, "nav.home"), Some("मुख्यपृष्ठ"));
    assert_eq!(
        dict.lookup(Language::English, "contact.phoneLabel"),
        Some("Phone Number")
    );
    assert_eq!(
        dict.lookup(Language::Marathi, "toast.languageChanged"),
        Some("भाषा बदलली")
    );
}

#[test]
fn test_dictionary_lookup_missing_key_is_absent() {
    let dict = Dictionary::from_embedded().unwrap();
    assert_eq!(dict.lookup(Language::English, "nav.blog"), None);
    assert_eq!(dict.lookup(Language::Marathi, "definitely.not.a.key"), None);
}

#[test]
fn test_dictionary_structural_parity() {
    // Every language must expose the identical set of section keys.
    let dict = Dictionary::from_embedded().unwrap();
    let missing = dict.missing_keys();
    assert!(missing.is_empty(), "locales out of parity: {:?}", missing);
}

#[test]
fn test_dictionary_key_sets_are_identical() {
    let dict = Dictionary::from_embedded().unwrap();
    let english = dict.bundle(Language::English).unwrap().keys();
    let marathi = dict.bundle(Language::Marathi).unwrap().keys();
    assert_eq!(english, marathi);
}

#[test]
fn test_dictionary_from_sources_reports_missing_keys() {
    let dict = Dictionary::from_sources(&[
        (Language::English, r#"{"nav": {"home": "Home", "about": "About"}}"#),
        (Language::Marathi, r#"{"nav": {"home": "मुख्यपृष्ठ"}}"#),
    ])
    .unwrap();

    let missing = dict.missing_keys();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].0, Language::Marathi);
    assert_eq!(missing[0].1, "nav.about");
}

#[test]
fn test_dictionary_rejects_malformed_locale() {
    let result = Dictionary::from_sources(&[(Language::English, "not json")]);
    assert!(result.is_err());
}
