//! Tests for page classification and the page models
//!
//! Tests cover:
//! - Path-to-page classification, including the home alias set
//! - Shared navigation structure
//! - Active link marking and the external-link policy
//! - The hooks each page exposes to the language controller

use farmsite::dom::Tag;
use farmsite::pages::{PageKind, HOME_ALIASES};

// ============================================
// Classification Tests
// ============================================

#[test]
fn test_home_aliases_are_configuration() {
    // The published site answers on several path variants; all must map to
    // the same page kind.
    for alias in HOME_ALIASES {
        assert_eq!(PageKind::from_path(alias), PageKind::Home, "{:?}", alias);
    }
}

#[test]
fn test_nested_paths_classify_by_trailing_segment() {
    assert_eq!(PageKind::from_path("/FarmProject/index.html"), PageKind::Home);
    assert_eq!(PageKind::from_path("/FarmProject/"), PageKind::Home);
    assert_eq!(PageKind::from_path("site/v2/about.html"), PageKind::About);
    assert_eq!(PageKind::from_path("/products.html"), PageKind::Products);
}

#[test]
fn test_unknown_paths_classify_as_unknown() {
    assert_eq!(PageKind::from_path("careers.html"), PageKind::Unknown);
    assert_eq!(PageKind::from_path("index.htm"), PageKind::Unknown);
}

#[test]
fn test_file_names_round_trip_through_classification() {
    for page in [
        PageKind::Home,
        PageKind::About,
        PageKind::Products,
        PageKind::Contact,
    ] {
        let file = page.file_name().unwrap();
        assert_eq!(PageKind::from_path(file), page);
    }
    assert_eq!(PageKind::Unknown.file_name(), None);
}

// ============================================
// Navigation Structure Tests
// ============================================

#[test]
fn test_every_page_carries_both_nav_variants() {
    for page in [
        PageKind::Home,
        PageKind::About,
        PageKind::Products,
        PageKind::Contact,
        PageKind::Unknown,
    ] {
        let doc = page.document();
        assert_eq!(doc.by_class("header__nav-link").count(), 4, "{:?}", page);
        assert_eq!(doc.by_class("menu-link").count(), 4, "{:?}", page);
    }
}

#[test]
fn test_current_page_nav_link_is_active() {
    let doc = PageKind::Products.document();

    let active: Vec<_> = doc.by_class("header__nav-link--active").collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].href(), Some("products.html"));
    assert_eq!(active[0].attr("aria-current"), Some("page"));

    // Mobile twin gets aria-current but not the desktop active class.
    let mobile_active: Vec<_> = doc
        .by_class("menu-link")
        .filter(|e| e.attr("aria-current") == Some("page"))
        .collect();
    assert_eq!(mobile_active.len(), 1);
}

// ============================================
// External Link Policy Tests
// ============================================

#[test]
fn test_whatsapp_links_open_in_a_new_context() {
    let doc = PageKind::Home.document();
    let whatsapp = doc.by_class("btn--whatsapp").next().unwrap();
    assert_eq!(whatsapp.attr("target"), Some("_blank"));
    assert_eq!(whatsapp.attr("rel"), Some("noopener noreferrer"));
}

#[test]
fn test_tel_and_mailto_links_stay_in_app() {
    let doc = PageKind::Contact.document();
    assert_eq!(doc.by_id("phone-link").unwrap().attr("target"), Some("_self"));
    assert_eq!(doc.by_id("email-link").unwrap().attr("target"), Some("_self"));
}

#[test]
fn test_map_links_open_in_a_new_context() {
    let doc = PageKind::Contact.document();
    let map = doc.by_id("map-link").unwrap();
    assert_eq!(map.attr("target"), Some("_blank"));
    assert_eq!(map.attr("rel"), Some("noopener noreferrer"));
}

#[test]
fn test_internal_links_are_untagged() {
    let doc = PageKind::Home.document();
    for link in doc.by_class("header__nav-link") {
        assert_eq!(link.attr("target"), None, "{:?}", link.href());
    }
}

// ============================================
// Page Hook Tests
// ============================================

#[test]
fn test_home_page_exposes_its_heading_hooks() {
    let doc = PageKind::Home.document();
    for id in ["why-different", "featured-products", "testimonials"] {
        assert!(doc.by_id(id).is_some(), "missing #{}", id);
    }
}

#[test]
fn test_about_page_has_two_intro_paragraphs() {
    // The second one is the empty continuation slot.
    let doc = PageKind::About.document();
    let intros: Vec<_> = doc.by_class("hero__intro").collect();
    assert_eq!(intros.len(), 2);
    assert!(!intros[0].text.is_empty());
    assert!(intros[1].text.is_empty());
}

#[test]
fn test_products_page_has_six_cards_with_metadata() {
    let doc = PageKind::Products.document();
    let cards: Vec<_> = doc.by_class("product-card").collect();
    assert_eq!(cards.len(), 6);
    for card in &cards {
        let id = card.attr("data-product-id").unwrap();
        assert!(!id.is_empty());
        assert!(card.attr("data-product-name").is_some());
        assert!(doc.by_id(&format!("product-{}", id)).is_some());
        assert!(doc.by_id(&format!("product-{}-unit", id)).is_some());
        assert!(doc.by_id(&format!("product-{}-stock", id)).is_some());
    }
}

#[test]
fn test_contact_page_exposes_the_form_contract() {
    let doc = PageKind::Contact.document();

    for field in ["name", "phone", "email", "message"] {
        assert!(doc.by_id(field).is_some(), "missing field #{}", field);
        let label = doc
            .elements()
            .iter()
            .find(|e| e.tag == Tag::Label && e.attr("for") == Some(field));
        assert!(label.is_some(), "missing label for {}", field);
    }

    let textarea = doc.by_id("message").unwrap();
    assert_eq!(textarea.tag, Tag::TextArea);
    assert!(textarea.attr("placeholder").is_some());
    assert!(doc.by_id("form-submit").is_some());
}
