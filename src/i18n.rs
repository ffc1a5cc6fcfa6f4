//! Language selection and the translation dictionary.
//!
//! Locale data ships as one embedded JSON file per language. Each file is a
//! two-level map (section -> key -> string) flattened into dot-notation
//! section keys (`nav.home`, `contact.phoneLabel`) at load time. The
//! dictionary is read-only after loading; adding a language is a data-only
//! change (new JSON file plus one row in `LOCALES`).

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported site languages, in toggle order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Marathi,
}

impl Language {
    /// Get the locale code used to key the dictionary
    pub fn locale_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Marathi => "mr",
        }
    }

    /// Get the display name for the language (in its native language)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Marathi => "मराठी",
        }
    }

    /// Get all available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Marathi]
    }

    /// The language after this one in the fixed cyclic toggle order.
    pub fn next(&self) -> Language {
        let all = Self::all();
        let index = all.iter().position(|l| l == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Resolve a locale code; unknown codes are `None`, callers substitute
    /// the default.
    pub fn from_locale_code(code: &str) -> Option<Language> {
        Self::all().iter().copied().find(|l| l.locale_code() == code)
    }
}

/// Embedded locale files. Order matters only for error reporting.
const LOCALES: &[(Language, &str)] = &[
    (Language::English, include_str!("../i18n/en.json")),
    (Language::Marathi, include_str!("../i18n/mr.json")),
];

/// Errors raised while loading locale data.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A locale file is not valid JSON in the expected two-level shape
    #[error("Failed to parse locale '{locale}': {source}")]
    Parse {
        locale: &'static str,
        source: serde_json::Error,
    },
}

/// One language's flattened section-key -> string table.
#[derive(Clone, Debug, Default)]
pub struct PageBundle {
    entries: HashMap<String, String>,
}

impl PageBundle {
    fn from_sections(sections: HashMap<String, HashMap<String, String>>) -> Self {
        let mut entries = HashMap::new();
        for (section, keys) in sections {
            for (key, value) in keys {
                entries.insert(format!("{}.{}", section, key), value);
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full translation dictionary: locale code -> flattened bundle.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    bundles: HashMap<&'static str, PageBundle>,
}

impl Dictionary {
    /// Parse every embedded locale file.
    pub fn from_embedded() -> Result<Self, DictionaryError> {
        Self::from_sources(LOCALES)
    }

    /// Parse locale data from (language, raw JSON) pairs. The embedded set
    /// goes through here; tests feed reduced sets through the same path.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, DictionaryError> {
        let mut bundles = HashMap::new();
        for &(language, raw) in sources {
            let sections: HashMap<String, HashMap<String, String>> = serde_json::from_str(raw)
                .map_err(|source| DictionaryError::Parse {
                    locale: language.locale_code(),
                    source,
                })?;
            bundles.insert(language.locale_code(), PageBundle::from_sections(sections));
        }
        Ok(Self { bundles })
    }

    /// Look up one section key. Absence is not an error.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.bundles
            .get(language.locale_code())
            .and_then(|bundle| bundle.get(key))
    }

    pub fn bundle(&self, language: Language) -> Option<&PageBundle> {
        self.bundles.get(language.locale_code())
    }

    /// Section keys a locale is missing relative to the union across all
    /// locales. Every language must resolve the same key set; violations are
    /// logged by the caller and the affected keys fail soft at apply time.
    pub fn missing_keys(&self) -> Vec<(Language, String)> {
        let mut union: BTreeSet<&str> = BTreeSet::new();
        for bundle in self.bundles.values() {
            union.extend(bundle.keys());
        }

        let mut missing = Vec::new();
        for language in Language::all() {
            let keys = self
                .bundle(*language)
                .map(|b| b.keys())
                .unwrap_or_default();
            for key in &union {
                if !keys.contains(key) {
                    missing.push((*language, key.to_string()));
                }
            }
        }
        missing
    }
}

/// Where the controller gets its dictionary from. Models late availability:
/// a source may not be ready yet and the controller retries within a bound.
pub trait DictionarySource {
    fn dictionary(&self) -> Option<Arc<Dictionary>>;
}

/// Dictionary compiled into the binary; always ready once parsed.
pub struct EmbeddedSource {
    dictionary: Arc<Dictionary>,
}

impl EmbeddedSource {
    pub fn load() -> Result<Self, DictionaryError> {
        Ok(Self {
            dictionary: Arc::new(Dictionary::from_embedded()?),
        })
    }
}

impl DictionarySource for EmbeddedSource {
    fn dictionary(&self) -> Option<Arc<Dictionary>> {
        Some(Arc::clone(&self.dictionary))
    }
}
