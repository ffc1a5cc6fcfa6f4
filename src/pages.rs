//! Page identity and the per-page element models.
//!
//! Each navigation is a full page load: the target page's model is rebuilt
//! from scratch in the base language and the current language is re-applied
//! on top. The builders here mirror the site markup's stable hooks (hero
//! classes, section heading ids, nav hrefs, form field ids). A handful of
//! elements carry no id because the markup has none; those are reached by
//! the controller's text-match fallback.

use strum::Display;
use tracing::debug;

use crate::dom::{Document, Element, Tag};

/// Path segments that resolve to the home page. Treated as configuration:
/// the published site answers on all of these.
pub const HOME_ALIASES: &[&str] = &["", "index.html", "FarmProject", "FarmProject/"];

/// WhatsApp order line used across pages
pub const WHATSAPP_URL: &str = "https://wa.me/919011463179";

/// Farm landline shown on the contact page
pub const PHONE_URL: &str = "tel:+919011463179";

/// Closed classification of which page is currently displayed
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum PageKind {
    #[default]
    Home,
    About,
    Products,
    Contact,
    Unknown,
}

impl PageKind {
    /// Classify a resource path by its trailing segment. Unknown paths get
    /// only the shared navigation treatment.
    pub fn from_path(path: &str) -> PageKind {
        let segment = path.rsplit('/').next().unwrap_or(path);
        match segment {
            "about.html" => PageKind::About,
            "products.html" => PageKind::Products,
            "contact.html" => PageKind::Contact,
            s if HOME_ALIASES.contains(&s) => PageKind::Home,
            _ => {
                debug!(path, "Unrecognized page path");
                PageKind::Unknown
            }
        }
    }

    /// The file name a nav link pointing at this page carries.
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            PageKind::Home => Some("index.html"),
            PageKind::About => Some("about.html"),
            PageKind::Products => Some("products.html"),
            PageKind::Contact => Some("contact.html"),
            PageKind::Unknown => None,
        }
    }

    /// Build this page's element model in the base language.
    pub fn document(&self) -> Document {
        let mut doc = Document::from_elements(nav_elements());
        match self {
            PageKind::Home => push_home_body(&mut doc),
            PageKind::About => push_about_body(&mut doc),
            PageKind::Products => push_products_body(&mut doc),
            PageKind::Contact => push_contact_body(&mut doc),
            PageKind::Unknown => {}
        }
        apply_link_policy(&mut doc);
        mark_active_nav(&mut doc, *self);
        doc
    }
}

// ============================================================================
// Shared navigation
// ============================================================================

/// Desktop nav links plus their mobile-menu twins, in site order.
fn nav_elements() -> Vec<Element> {
    let entries = [
        ("index.html", "Home"),
        ("about.html", "About"),
        ("products.html", "Products"),
        ("contact.html", "Contact"),
    ];

    let mut elements = Vec::new();
    for (href, label) in entries {
        elements.push(
            Element::new(Tag::A)
                .with_class("header__nav-link")
                .with_attr("href", href)
                .with_text(label),
        );
    }
    for (href, label) in entries {
        elements.push(
            Element::new(Tag::A)
                .with_class("menu-link")
                .with_attr("href", href)
                .with_text(label),
        );
    }
    elements
}

/// Mark the nav link matching the current page active. Mirrors the site's
/// `aria-current` handling: the desktop link also gets the active class.
pub fn mark_active_nav(doc: &mut Document, page: PageKind) {
    let Some(current) = page.file_name() else {
        return;
    };
    for element in doc.by_href_mut(current) {
        element.set_attr("aria-current", "page");
        if element.has_class("header__nav-link") {
            element.classes.push("header__nav-link--active".to_string());
        }
    }
}

/// Tag external links the way the site script does: WhatsApp and map links
/// open in a new context, tel/mailto stay in-app. Internal links are left
/// alone. Only attributes are touched, never text.
pub fn apply_link_policy(doc: &mut Document) {
    for element in doc.iter_mut() {
        if element.tag != Tag::A && element.tag != Tag::Button {
            continue;
        }
        let Some(href) = element.href().map(str::to_string) else {
            continue;
        };

        if href.contains("wa.me") || href.contains("whatsapp") {
            element.set_attr("target", "_blank");
            element.set_attr("rel", "noopener noreferrer");
        } else if href.starts_with("tel:") || href.starts_with("mailto:") {
            element.set_attr("target", "_self");
        } else if href.contains("maps.google") || href.contains("google.com/maps") {
            element.set_attr("target", "_blank");
            element.set_attr("rel", "noopener noreferrer");
        }
    }
}

// ============================================================================
// Page builders
// ============================================================================

fn push_hero(doc: &mut Document, title: &str, tagline: &str) {
    doc.push(Element::new(Tag::H1).with_class("hero__title").with_text(title));
    doc.push(Element::new(Tag::P).with_class("hero__tagline").with_text(tagline));
}

fn push_home_body(doc: &mut Document) {
    push_hero(
        doc,
        "Farm Fresh Organic Dairy",
        "Pure by nature. Trusted by families.",
    );
    doc.push(Element::new(Tag::P).with_class("hero__intro").with_text(
        "We are a family-owned farm dedicated to providing you with the freshest, \
         most natural milk and ghee. Our cows are raised with care, fed organic \
         feed, and treated with respect. Every product you receive is a testament \
         to our commitment to quality and ethical farming.",
    ));

    doc.push(
        Element::new(Tag::A)
            .with_id("learn-more-link")
            .with_attr("href", "#why-different")
            .with_text("Learn More"),
    );

    doc.push(
        Element::new(Tag::H2)
            .with_id("why-different")
            .with_text("Why Our Farm is Different"),
    );
    doc.push(
        Element::new(Tag::H2)
            .with_id("featured-products")
            .with_text("Our Products"),
    );
    doc.push(
        Element::new(Tag::Button)
            .with_class("btn--whatsapp")
            .with_class("btn")
            .with_attr("href", WHATSAPP_URL)
            .with_text("\u{1F4F1} Order via WhatsApp"),
    );
    doc.push(
        Element::new(Tag::Button)
            .with_class("btn")
            .with_attr("href", "products.html")
            .with_text("View All Products"),
    );
    doc.push(
        Element::new(Tag::H2)
            .with_id("testimonials")
            .with_text("What Our Customers Say"),
    );

    // The closing call-to-action section has no stable hooks in the markup.
    doc.push(Element::new(Tag::H2).with_text("Ready to Order?"));
    doc.push(
        Element::new(Tag::P)
            .with_text("Get fresh, organic dairy products delivered to your doorstep."),
    );
}

fn push_about_body(doc: &mut Document) {
    push_hero(
        doc,
        "Our Farm Story",
        "No Pesticides, No Chemicals for over two decades",
    );
    doc.push(Element::new(Tag::P).with_class("hero__intro").with_text(
        " We are a family-owned farm dedicated to providing you with the freshest, \
         most natural milk and ghee. Our cows are raised with care, fed organic \
         feed, and treated with respect. Every product you receive is a testament \
         to our commitment to quality and ethical farming for over two decades.",
    ));
    doc.push(Element::new(Tag::P).with_class("hero__intro"));

    doc.push(
        Element::new(Tag::H2)
            .with_id("values")
            .with_text("Our Values & Ethics"),
    );
    doc.push(
        Element::new(Tag::H2)
            .with_id("practices")
            .with_text("Our Farming & Animal Care Practices"),
    );
    doc.push(
        Element::new(Tag::H2)
            .with_id("farm-photos")
            .with_text("Farm Photos"),
    );

    // The transparency section never got ids.
    doc.push(Element::new(Tag::H2).with_text("Transparency & Openness"));
    doc.push(Element::new(Tag::P).with_text(
        "We believe transparency builds trust. That's why we invite you to visit \
         our farm anytime. See our animals, watch our processes, and ask any \
         questions you have.",
    ));
    doc.push(Element::new(Tag::P).with_text(
        "We're proud of our practices and happy to show you exactly how we \
         produce your food. No secrets, no hidden processes—just honest, ethical \
         farming.",
    ));
    doc.push(
        Element::new(Tag::Button)
            .with_class("btn")
            .with_attr("href", WHATSAPP_URL)
            .with_text("Schedule a Farm Visit"),
    );
}

/// Product catalogue: card metadata plus the hook ids the controller binds.
struct ProductEntry {
    id: &'static str,
    name: &'static str,
    desc: &'static str,
    unit: &'static str,
    stock: &'static str,
}

const PRODUCTS: &[ProductEntry] = &[
    ProductEntry {
        id: "milk1l",
        name: "Fresh Organic Milk - 1 Liter",
        desc: "Daily fresh milk from our grass-fed cows. Rich in calcium, protein, \
               and natural vitamins. Perfect for your morning coffee, tea, or cereal.",
        unit: "Per Liter",
        stock: "Available",
    },
    ProductEntry {
        id: "milk2l",
        name: "Fresh Organic Milk - 2 Liters",
        desc: "Same great quality in a larger pack. Perfect for families. Fresh \
               daily delivery available.",
        unit: "Per 2 Liters",
        stock: "Available",
    },
    ProductEntry {
        id: "milk5l",
        name: "Fresh Organic Milk - 5 Liters",
        desc: "Best value for large families or regular customers. Bulk pricing \
               available for weekly orders.",
        unit: "Per 5 Liters",
        stock: "Available",
    },
    ProductEntry {
        id: "ghee500g",
        name: "Pure Desi Ghee - 500g",
        desc: "Traditional method ghee made from our organic milk. Rich, aromatic, \
               and perfect for cooking, drizzling, or adding to your roti.",
        unit: "Per 500g",
        stock: "Available",
    },
    ProductEntry {
        id: "ghee1kg",
        name: "Pure Desi Ghee - 1 Kilogram",
        desc: "Our best-selling ghee in a larger pack. Made with the same \
               traditional methods and quality standards.",
        unit: "Per 1Kg",
        stock: "Limited Stock",
    },
    ProductEntry {
        id: "curd500g",
        name: "Fresh Organic Curd - 500g",
        desc: "Creamy, probiotic-rich curd made from our fresh milk. Perfect for \
               your daily diet or as a side dish.",
        unit: "Per 500g",
        stock: "Available",
    },
];

fn push_product_cards(doc: &mut Document) {
    for product in PRODUCTS {
        doc.push(
            Element::new(Tag::Div)
                .with_class("product-card")
                .with_attr("data-product-id", product.id)
                .with_attr("data-product-name", product.name),
        );
        doc.push(
            Element::new(Tag::H3)
                .with_id(&format!("product-{}", product.id))
                .with_text(product.name),
        );
        doc.push(
            Element::new(Tag::P)
                .with_id(&format!("product-{}-desc", product.id))
                .with_text(product.desc),
        );
        doc.push(
            Element::new(Tag::P)
                .with_id(&format!("product-{}-unit", product.id))
                .with_class("product-card__price")
                .with_text(product.unit),
        );
        doc.push(
            Element::new(Tag::P)
                .with_id(&format!("product-{}-stock", product.id))
                .with_class("product-card__stock")
                .with_text(product.stock),
        );
    }
}

fn push_products_body(doc: &mut Document) {
    push_hero(
        doc,
        "Our Products",
        "Fresh, Organic, and Delivered to Your Doorstep",
    );
    doc.push(Element::new(Tag::P).with_class("hero__intro").with_text(
        "All our products are made with care, using traditional methods and the \
         highest quality ingredients. Order via WhatsApp for quick delivery.",
    ));

    doc.push(
        Element::new(Tag::H2)
            .with_id("all-products")
            .with_text("All Products"),
    );
    push_product_cards(doc);

    doc.push(
        Element::new(Tag::H2)
            .with_id("ordering-info")
            .with_text("How to Order"),
    );
    // Step headings carry keycap glyphs in the markup and no ids.
    doc.push(Element::new(Tag::H3).with_text("1\u{FE0F}\u{20E3} WhatsApp Us"));
    doc.push(Element::new(Tag::P).with_id("step-1-desc").with_text(
        "Send us a message on WhatsApp with your product list and delivery address.",
    ));
    doc.push(Element::new(Tag::H3).with_text("2\u{FE0F}\u{20E3} Confirm Order"));
    doc.push(Element::new(Tag::P).with_id("step-2-desc").with_text(
        "We'll confirm availability and delivery time. Usually same-day or \
         next-day delivery.",
    ));
    doc.push(Element::new(Tag::H3).with_text("3\u{FE0F}\u{20E3} Receive Fresh Products"));
    doc.push(Element::new(Tag::P).with_id("step-3-desc").with_text(
        "Get your fresh, organic products delivered to your doorstep. Cash on \
         delivery available.",
    ));

    doc.push(
        Element::new(Tag::H2)
            .with_id("benefits")
            .with_text("Why Choose Our Products?"),
    );
    doc.push(
        Element::new(Tag::Button)
            .with_class("btn--whatsapp")
            .with_class("btn")
            .with_attr("href", WHATSAPP_URL)
            .with_text("\u{1F4F1} Order via WhatsApp"),
    );
}

fn push_contact_body(doc: &mut Document) {
    push_hero(doc, "Get in Touch", "We're Here to Help You");
    doc.push(Element::new(Tag::P).with_class("hero__intro").with_text(
        "Have questions? Want to place an order? Or just want to visit our farm? \
         We'd love to hear from you!",
    ));

    doc.push(
        Element::new(Tag::H2)
            .with_id("whatsapp-order")
            .with_text("Order via WhatsApp"),
    );
    doc.push(Element::new(Tag::P).with_text(
        "The fastest way to place your order. Send us a message with your product \
         list and we'll confirm delivery details.",
    ));
    doc.push(
        Element::new(Tag::Button)
            .with_class("btn--whatsapp")
            .with_class("btn")
            .with_attr("href", WHATSAPP_URL)
            .with_text("\u{1F4F1} Order via WhatsApp"),
    );

    doc.push(
        Element::new(Tag::H2)
            .with_id("contact-info")
            .with_text("Contact Information"),
    );
    doc.push(Element::new(Tag::H3).with_text("\u{1F4DE} Phone"));
    doc.push(
        Element::new(Tag::A)
            .with_id("phone-link")
            .with_attr("href", PHONE_URL)
            .with_text("+91 90114 63179"),
    );
    doc.push(
        Element::new(Tag::P)
            .with_id("phone-hours")
            .with_text("7 AM - 8 PM daily"),
    );
    doc.push(Element::new(Tag::H3).with_text("\u{1F4E7} Email"));
    doc.push(
        Element::new(Tag::A)
            .with_id("email-link")
            .with_attr("href", "mailto:hello@farmfreshdairy.in")
            .with_text("hello@farmfreshdairy.in"),
    );
    doc.push(
        Element::new(Tag::P)
            .with_id("email-response-time")
            .with_text("We respond within 24 hours"),
    );
    doc.push(Element::new(Tag::H3).with_text("\u{1F4CD} Address"));
    doc.push(
        Element::new(Tag::A)
            .with_id("map-link")
            .with_attr("href", "https://maps.google.com/?q=Farm+Fresh+Organic+Dairy")
            .with_text("Farm Fresh Organic Dairy, Pune Road"),
    );

    doc.push(Element::new(Tag::H2).with_id("location").with_text("Find Us"));

    doc.push(
        Element::new(Tag::H2)
            .with_id("contact-form")
            .with_text("Send Us a Message"),
    );
    doc.push(
        Element::new(Tag::Label)
            .with_attr("for", "name")
            .with_text("Your Name"),
    );
    doc.push(Element::new(Tag::Input).with_id("name"));
    doc.push(
        Element::new(Tag::Label)
            .with_attr("for", "phone")
            .with_text("Phone Number"),
    );
    doc.push(Element::new(Tag::Input).with_id("phone"));
    doc.push(
        Element::new(Tag::Label)
            .with_attr("for", "email")
            .with_text("Email (Optional)"),
    );
    doc.push(Element::new(Tag::Input).with_id("email"));
    doc.push(
        Element::new(Tag::Label)
            .with_attr("for", "message")
            .with_text("Message"),
    );
    doc.push(
        Element::new(Tag::TextArea)
            .with_id("message")
            .with_attr("placeholder", "Tell us how we can help you..."),
    );
    doc.push(
        Element::new(Tag::Button)
            .with_id("form-submit")
            .with_class("btn")
            .with_text("Send"),
    );

    doc.push(
        Element::new(Tag::H2)
            .with_id("visit-farm")
            .with_text("Visit Our Farm"),
    );
    doc.push(Element::new(Tag::P).with_text(
        "We welcome visitors! Come see our farm, meet our cows, and learn about \
         our practices. Please call or WhatsApp us to schedule a visit.",
    ));
}
