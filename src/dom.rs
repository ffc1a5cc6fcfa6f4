//! In-memory page model.
//!
//! The site's markup is consumed as data: a flat list of elements in
//! document order, each carrying the stable hooks (id, classes, attributes)
//! the language controller resolves against. Layout and styling live in the
//! rendering layer, not here.

use std::collections::HashMap;

use strum::Display;

/// Element tags that appear in the page models.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Tag {
    H1,
    H2,
    H3,
    P,
    A,
    Label,
    Button,
    TextArea,
    Input,
    Div,
}

/// A single element: tag, optional id, classes, visible text, attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    pub attrs: HashMap<String, String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            text: String::new(),
            attrs: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// The `href` attribute, for anchors and link-like buttons.
    pub fn href(&self) -> Option<&str> {
        self.attr("href")
    }
}

/// A loaded page: elements in document order with id/class/tag lookups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn extend(&mut self, elements: Vec<Element>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
    }

    pub fn by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.has_class(class))
    }

    pub fn by_class_mut<'a>(&'a mut self, class: &'a str) -> impl Iterator<Item = &'a mut Element> {
        self.elements
            .iter_mut()
            .filter(move |e| e.has_class(class))
    }

    pub fn by_tag<'a>(&'a self, tag: Tag) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.tag == tag)
    }

    pub fn by_tag_mut<'a>(&'a mut self, tag: Tag) -> impl Iterator<Item = &'a mut Element> {
        self.elements.iter_mut().filter(move |e| e.tag == tag)
    }

    /// All anchors whose `href` matches `href` exactly.
    pub fn by_href_mut<'a>(&'a mut self, href: &'a str) -> impl Iterator<Item = &'a mut Element> {
        self.elements
            .iter_mut()
            .filter(move |e| e.tag == Tag::A && e.href() == Some(href))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    /// Concatenated visible text of the whole page, one element per line.
    /// Used to compare rendered states without caring about structure.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            out.push_str(&element.text);
            out.push('\n');
        }
        out
    }
}
