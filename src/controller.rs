//! The language controller.
//!
//! Owns the current language selection, applies translations to the loaded
//! page model, and persists the selection on every change. All failure
//! modes are contained here: a missing dictionary entry or a missing page
//! hook degrades to a log line and a skipped element, never an error the
//! page can see.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::dom::{Document, Tag};
use crate::i18n::{Dictionary, DictionarySource, Language};
use crate::pages::PageKind;
use crate::settings::UserSettings;
use crate::state::{DICTIONARY_RETRY_DELAY_MS, DICTIONARY_RETRY_LIMIT};

/// Errors the controller can report to its caller
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The dictionary source never became ready within the retry cap
    #[error("Translation dictionary unavailable after {attempts} polls")]
    DictionaryUnavailable { attempts: u32 },
}

/// Tally of one translation pass, for logging and tests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Elements whose text (or placeholder) was rewritten
    pub updated: usize,
    /// Section keys with no dictionary entry in the active language
    pub missing_keys: usize,
    /// Bindings that matched no element on this page
    pub missing_targets: usize,
}

// ============================================================================
// Section-key bindings
// ============================================================================

/// How one section key finds its element(s) on a page.
///
/// Structural targets (id, class, label-for) are preferred. `Text` is the
/// compatibility shim for markup without stable hooks: it scans a bounded
/// tag set and matches on a substring of the current text, so its needle
/// list must contain one recognizable substring per supported language or
/// the binding stops matching after the first switch.
#[derive(Clone, Copy, Debug)]
pub enum Target {
    Id(&'static str),
    Class(&'static str),
    /// The nth element carrying a class, for repeated hooks like the
    /// about-page intro paragraphs
    ClassNth(&'static str, usize),
    LabelFor(&'static str),
    /// Rewrites the `placeholder` attribute of the element with this id
    Placeholder(&'static str),
    Text {
        tags: &'static [Tag],
        needles: &'static [&'static str],
    },
}

/// One section key, its target, and an optional decorative glyph prefix.
/// The full text is rewritten each pass, so prefixes never accumulate.
#[derive(Clone, Copy, Debug)]
pub struct KeyBinding {
    pub key: &'static str,
    pub target: Target,
    pub prefix: Option<&'static str>,
}

const fn bind(key: &'static str, target: Target) -> KeyBinding {
    KeyBinding {
        key,
        target,
        prefix: None,
    }
}

const fn bind_prefixed(
    key: &'static str,
    target: Target,
    prefix: &'static str,
) -> KeyBinding {
    KeyBinding {
        key,
        target,
        prefix: Some(prefix),
    }
}

/// Navigation links, shared by every page kind including Unknown.
/// Matched by href so the desktop and mobile variants update together.
const NAV_BINDINGS: &[(&str, &str)] = &[
    ("nav.home", "index.html"),
    ("nav.about", "about.html"),
    ("nav.products", "products.html"),
    ("nav.contact", "contact.html"),
];

const HOME_BINDINGS: &[KeyBinding] = &[
    bind("home.title", Target::Class("hero__title")),
    bind("home.tagline", Target::Class("hero__tagline")),
    bind("home.intro", Target::Class("hero__intro")),
    bind("common.learnMore", Target::Id("learn-more-link")),
    bind("home.whyDifferent", Target::Id("why-different")),
    bind("home.featuredProducts", Target::Id("featured-products")),
    bind("home.testimonials", Target::Id("testimonials")),
    bind_prefixed(
        "common.orderWhatsApp",
        Target::Text {
            tags: &[Tag::Button],
            needles: &["Order via WhatsApp", "\u{1F4F1}"],
        },
        "\u{1F4F1} ",
    ),
    bind(
        "common.viewAll",
        Target::Text {
            tags: &[Tag::Button],
            needles: &["View All Products", "सर्व उत्पादने पहा"],
        },
    ),
    bind(
        "home.readyToOrder",
        Target::Text {
            tags: &[Tag::H2],
            needles: &["Ready to Order", "ऑर्डर करण्यासाठी तयार"],
        },
    ),
    bind(
        "home.orderDescription",
        Target::Text {
            tags: &[Tag::P],
            needles: &["Get fresh", "तुमच्या दारात ताजे"],
        },
    ),
];

const ABOUT_BINDINGS: &[KeyBinding] = &[
    bind("about.title", Target::Class("hero__title")),
    bind("about.tagline", Target::Class("hero__tagline")),
    bind("about.story1", Target::ClassNth("hero__intro", 0)),
    bind("about.story2", Target::ClassNth("hero__intro", 1)),
    bind("about.values", Target::Id("values")),
    bind("about.practices", Target::Id("practices")),
    bind("about.photos", Target::Id("farm-photos")),
    bind(
        "about.transparency",
        Target::Text {
            tags: &[Tag::H2],
            needles: &["Transparency", "पारदर्शकता"],
        },
    ),
    bind(
        "about.transparencyText",
        Target::Text {
            tags: &[Tag::P],
            needles: &["transparency builds trust", "पारदर्शकता विश्वास"],
        },
    ),
    bind(
        "about.transparencyText2",
        Target::Text {
            tags: &[Tag::P],
            needles: &["proud of our practices", "पद्धतींवर अभिमान"],
        },
    ),
    bind(
        "about.scheduleVisit",
        Target::Text {
            tags: &[Tag::Button],
            needles: &["Schedule", "वेळ निश्चित"],
        },
    ),
];

const PRODUCTS_BINDINGS: &[KeyBinding] = &[
    bind("products.title", Target::Class("hero__title")),
    bind("products.tagline", Target::Class("hero__tagline")),
    bind("products.intro", Target::Class("hero__intro")),
    bind("products.allProducts", Target::Id("all-products")),
    bind("products.howToOrder", Target::Id("ordering-info")),
    bind_prefixed(
        "products.step1",
        Target::Text {
            tags: &[Tag::H3],
            needles: &["WhatsApp Us", "आम्हाला WhatsApp"],
        },
        "1\u{FE0F}\u{20E3} ",
    ),
    bind("products.step1Desc", Target::Id("step-1-desc")),
    bind_prefixed(
        "products.step2",
        Target::Text {
            tags: &[Tag::H3],
            needles: &["Confirm Order", "ऑर्डरची पुष्टी"],
        },
        "2\u{FE0F}\u{20E3} ",
    ),
    bind("products.step2Desc", Target::Id("step-2-desc")),
    bind_prefixed(
        "products.step3",
        Target::Text {
            tags: &[Tag::H3],
            needles: &["Receive Fresh", "ताजी उत्पादने"],
        },
        "3\u{FE0F}\u{20E3} ",
    ),
    bind("products.step3Desc", Target::Id("step-3-desc")),
    bind("products.whyChoose", Target::Id("benefits")),
    bind_prefixed(
        "common.orderWhatsApp",
        Target::Text {
            tags: &[Tag::Button],
            needles: &["Order via WhatsApp", "\u{1F4F1}"],
        },
        "\u{1F4F1} ",
    ),
    // Product cards
    bind("productsList.milk1l", Target::Id("product-milk1l")),
    bind("productsList.milk1lDesc", Target::Id("product-milk1l-desc")),
    bind("productsList.perLiter", Target::Id("product-milk1l-unit")),
    bind("productsList.available", Target::Id("product-milk1l-stock")),
    bind("productsList.milk2l", Target::Id("product-milk2l")),
    bind("productsList.milk2lDesc", Target::Id("product-milk2l-desc")),
    bind("productsList.per2Liters", Target::Id("product-milk2l-unit")),
    bind("productsList.available", Target::Id("product-milk2l-stock")),
    bind("productsList.milk5l", Target::Id("product-milk5l")),
    bind("productsList.milk5lDesc", Target::Id("product-milk5l-desc")),
    bind("productsList.per5Liters", Target::Id("product-milk5l-unit")),
    bind("productsList.available", Target::Id("product-milk5l-stock")),
    bind("productsList.ghee500g", Target::Id("product-ghee500g")),
    bind("productsList.ghee500gDesc", Target::Id("product-ghee500g-desc")),
    bind("productsList.per500g", Target::Id("product-ghee500g-unit")),
    bind("productsList.available", Target::Id("product-ghee500g-stock")),
    bind("productsList.ghee1kg", Target::Id("product-ghee1kg")),
    bind("productsList.ghee1kgDesc", Target::Id("product-ghee1kg-desc")),
    bind("productsList.per1kg", Target::Id("product-ghee1kg-unit")),
    bind("productsList.limitedStock", Target::Id("product-ghee1kg-stock")),
    bind("productsList.curd500g", Target::Id("product-curd500g")),
    bind("productsList.curd500gDesc", Target::Id("product-curd500g-desc")),
    bind("productsList.per500g", Target::Id("product-curd500g-unit")),
    bind("productsList.available", Target::Id("product-curd500g-stock")),
];

const CONTACT_BINDINGS: &[KeyBinding] = &[
    bind("contact.title", Target::Class("hero__title")),
    bind("contact.tagline", Target::Class("hero__tagline")),
    bind("contact.intro", Target::Class("hero__intro")),
    bind("contact.whatsappOrder", Target::Id("whatsapp-order")),
    bind(
        "contact.whatsappDesc",
        Target::Text {
            tags: &[Tag::P],
            needles: &["fastest way", "सर्वात वेगवान"],
        },
    ),
    bind_prefixed(
        "common.orderWhatsApp",
        Target::Text {
            tags: &[Tag::Button],
            needles: &["Order via WhatsApp", "\u{1F4F1}"],
        },
        "\u{1F4F1} ",
    ),
    bind("contact.contactInfo", Target::Id("contact-info")),
    bind_prefixed(
        "contact.phone",
        Target::Text {
            tags: &[Tag::H3],
            needles: &["Phone", "फोन"],
        },
        "\u{1F4DE} ",
    ),
    bind("contact.hours", Target::Id("phone-hours")),
    bind_prefixed(
        "contact.email",
        Target::Text {
            tags: &[Tag::H3],
            needles: &["Email", "ईमेल"],
        },
        "\u{1F4E7} ",
    ),
    bind("contact.respondTime", Target::Id("email-response-time")),
    bind_prefixed(
        "contact.address",
        Target::Text {
            tags: &[Tag::H3],
            needles: &["Address", "पत्ता"],
        },
        "\u{1F4CD} ",
    ),
    bind("contact.findUs", Target::Id("location")),
    bind("contact.sendMessage", Target::Id("contact-form")),
    bind("contact.name", Target::LabelFor("name")),
    bind("contact.phoneLabel", Target::LabelFor("phone")),
    bind("contact.emailLabel", Target::LabelFor("email")),
    bind("contact.message", Target::LabelFor("message")),
    bind("contact.messagePlaceholder", Target::Placeholder("message")),
    bind("common.send", Target::Id("form-submit")),
    bind("contact.visitFarm", Target::Id("visit-farm")),
    bind("contact.visitFarmDesc", Target::Text {
        tags: &[Tag::P],
        needles: &["welcome visitors", "अभ्यागतांचे स्वागत"],
    }),
];

fn bindings_for(page: PageKind) -> &'static [KeyBinding] {
    match page {
        PageKind::Home => HOME_BINDINGS,
        PageKind::About => ABOUT_BINDINGS,
        PageKind::Products => PRODUCTS_BINDINGS,
        PageKind::Contact => CONTACT_BINDINGS,
        PageKind::Unknown => &[],
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Owns the language selection and drives translation passes.
///
/// Explicitly constructed (no ambient globals) so tests can run several
/// independent instances against their own storage paths.
pub struct LanguageController {
    current: Language,
    settings: UserSettings,
    storage_path: Option<PathBuf>,
    dictionary: Option<Arc<Dictionary>>,
}

impl LanguageController {
    /// Construct from already-loaded settings; the persisted language (or
    /// its default) becomes the active selection.
    pub fn new(settings: UserSettings) -> Self {
        Self {
            current: settings.language,
            settings,
            storage_path: None,
            dictionary: None,
        }
    }

    /// Persist to an explicit file instead of the platform config dir.
    pub fn with_storage_path(mut self, path: PathBuf) -> Self {
        self.storage_path = Some(path);
        self
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Look up a key in the active language.
    pub fn translate(&self, key: &str) -> Option<String> {
        self.dictionary
            .as_ref()
            .and_then(|dict| dict.lookup(self.current, key))
            .map(str::to_string)
    }

    /// Resolve the dictionary and run the first translation pass.
    ///
    /// Safe to call before the dictionary is ready: the source is polled up
    /// to `DICTIONARY_RETRY_LIMIT` times with a short delay between polls,
    /// then the controller gives up with a typed error instead of polling
    /// forever. The page stays usable (untranslated) either way.
    pub fn initialize(
        &mut self,
        source: &dyn DictionarySource,
        doc: &mut Document,
        page: PageKind,
    ) -> Result<ApplyOutcome, ControllerError> {
        let mut attempts = 0;
        let dictionary = loop {
            if let Some(dict) = source.dictionary() {
                break dict;
            }
            attempts += 1;
            if attempts >= DICTIONARY_RETRY_LIMIT {
                warn!(attempts, "Giving up waiting for the translation dictionary");
                return Err(ControllerError::DictionaryUnavailable { attempts });
            }
            debug!(
                attempts,
                limit = DICTIONARY_RETRY_LIMIT,
                "Translation dictionary not ready, retrying"
            );
            std::thread::sleep(Duration::from_millis(DICTIONARY_RETRY_DELAY_MS));
        };

        for (language, key) in dictionary.missing_keys() {
            warn!(
                locale = language.locale_code(),
                key = %key,
                "Locale is missing a section key"
            );
        }

        self.dictionary = Some(dictionary);
        Ok(self.apply(doc, page))
    }

    /// Advance to the next language, persist the selection, re-apply, and
    /// return the localized confirmation message for the toast layer.
    pub fn toggle(&mut self, doc: &mut Document, page: PageKind) -> String {
        self.current = self.current.next();
        self.settings.language = self.current;
        self.persist();
        self.apply(doc, page);

        self.translate("toast.languageChanged")
            .unwrap_or_else(|| "Language changed".to_string())
    }

    /// One translation pass over the loaded page: shared navigation first,
    /// then the page kind's bindings. Idempotent.
    pub fn apply(&self, doc: &mut Document, page: PageKind) -> ApplyOutcome {
        let Some(dictionary) = self.dictionary.as_ref() else {
            warn!("No dictionary loaded, page stays in its base language");
            return ApplyOutcome::default();
        };

        let mut outcome = ApplyOutcome::default();

        for &(key, href) in NAV_BINDINGS {
            let Some(translation) = dictionary.lookup(self.current, key) else {
                warn!(key, locale = self.current.locale_code(), "Missing dictionary entry");
                outcome.missing_keys += 1;
                continue;
            };
            let translation = translation.to_string();
            let mut updated = 0;
            for element in doc.by_href_mut(href) {
                element.text = translation.clone();
                updated += 1;
            }
            if updated == 0 {
                debug!(key, href, "No navigation link for this href");
                outcome.missing_targets += 1;
            } else {
                outcome.updated += updated;
            }
        }

        for binding in bindings_for(page) {
            self.apply_binding(dictionary, binding, doc, &mut outcome);
        }

        debug!(
            page = %page,
            locale = self.current.locale_code(),
            updated = outcome.updated,
            missing_keys = outcome.missing_keys,
            missing_targets = outcome.missing_targets,
            "Applied language"
        );
        outcome
    }

    fn apply_binding(
        &self,
        dictionary: &Dictionary,
        binding: &KeyBinding,
        doc: &mut Document,
        outcome: &mut ApplyOutcome,
    ) {
        let Some(translation) = dictionary.lookup(self.current, binding.key) else {
            warn!(
                key = binding.key,
                locale = self.current.locale_code(),
                "Missing dictionary entry"
            );
            outcome.missing_keys += 1;
            return;
        };
        // Empty strings are placeholders in the locale data; leave the
        // element as it is rather than blanking it.
        if translation.is_empty() {
            debug!(key = binding.key, "Empty translation, element untouched");
            return;
        }

        let text = match binding.prefix {
            Some(prefix) => format!("{}{}", prefix, translation),
            None => translation.to_string(),
        };

        let mut updated = 0;
        match binding.target {
            Target::Id(id) => {
                if let Some(element) = doc.by_id_mut(id) {
                    element.text = text;
                    updated = 1;
                }
            }
            Target::Class(class) => {
                for element in doc.by_class_mut(class) {
                    element.text = text.clone();
                    updated += 1;
                }
            }
            Target::ClassNth(class, index) => {
                if let Some(element) = doc.by_class_mut(class).nth(index) {
                    element.text = text;
                    updated = 1;
                }
            }
            Target::LabelFor(field) => {
                for element in doc
                    .iter_mut()
                    .filter(|e| e.tag == Tag::Label && e.attr("for") == Some(field))
                {
                    element.text = text.clone();
                    updated += 1;
                }
            }
            Target::Placeholder(id) => {
                if let Some(element) = doc.by_id_mut(id) {
                    element.set_attr("placeholder", &text);
                    updated = 1;
                }
            }
            Target::Text { tags, needles } => {
                for element in doc.iter_mut().filter(|e| {
                    tags.contains(&e.tag) && needles.iter().any(|n| e.text.contains(n))
                }) {
                    element.text = text.clone();
                    updated += 1;
                }
            }
        }

        if updated == 0 {
            debug!(key = binding.key, "No matching element on this page");
            outcome.missing_targets += 1;
        } else {
            outcome.updated += updated;
        }
    }

    fn persist(&self) {
        let result = match &self.storage_path {
            Some(path) => self.settings.save_to(path),
            None => self.settings.save(),
        };
        if let Err(e) = result {
            warn!("Failed to save language selection: {}", e);
        }
    }
}
