//! In-memory page document model
//!
//! The concrete stand-in for the rendered page: hosts populate a
//! [`PageDocument`] from their markup and render from it after the
//! controllers and the translation applicator have written into it.

use std::collections::{BTreeMap, BTreeSet};

/// Class toggled on interactive elements when they are engaged
pub const ACTIVE_CLASS: &str = "active";

/// A single page element
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    /// Element id; unique within a page
    pub id: String,
    /// Whether the element is currently displayed
    pub visible: bool,
    /// Text content
    pub text: String,
    /// Placeholder attribute (form controls)
    pub placeholder: Option<String>,
    /// Title attribute
    pub title: Option<String>,
    /// Current value (form controls)
    pub value: Option<String>,
    /// Vertical offset from the top of the page, in pixels
    pub offset_top: f64,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
}

impl PageElement {
    /// Create a visible, empty element
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: true,
            text: String::new(),
            placeholder: None,
            title: None,
            value: None,
            offset_top: 0.0,
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Builder: add a class
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Builder: set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: set the placeholder attribute
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Builder: set the title attribute
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the form value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder: set an arbitrary attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Builder: set the vertical offset
    pub fn with_offset_top(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    /// Builder: start hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Read an attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether the element carries a class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a class
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Remove a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }
}

/// The page the runtime reads from and writes into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDocument {
    /// Document title
    pub title: String,
    /// Content of the description meta element; `None` when the page has no
    /// such element
    pub meta_description: Option<String>,
    /// Document language code (the `documentElement.lang` analog)
    pub language: Option<String>,
    /// Whether body scrolling is locked (open mobile menu)
    pub body_scroll_locked: bool,
    elements: Vec<PageElement>,
}

impl PageDocument {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add an element
    pub fn with_element(mut self, element: PageElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Builder: set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: give the page a description meta element
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Add an element
    pub fn push(&mut self, element: PageElement) {
        self.elements.push(element);
    }

    /// Look up an element by id
    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Look up an element by id, mutably
    pub fn element_mut(&mut self, id: &str) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// All elements
    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    /// All elements, mutably
    pub fn elements_mut(&mut self) -> &mut [PageElement] {
        &mut self.elements
    }

    /// Ids of every element carrying a class
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builders() {
        let element = PageElement::new("hero")
            .with_class("section")
            .with_text("Welcome")
            .with_attr("data-i18n", "hero.title")
            .with_offset_top(120.0);

        assert_eq!(element.id, "hero");
        assert!(element.visible);
        assert!(element.has_class("section"));
        assert_eq!(element.text, "Welcome");
        assert_eq!(element.attr("data-i18n"), Some("hero.title"));
        assert_eq!(element.attr("data-other"), None);
        assert_eq!(element.offset_top, 120.0);
    }

    #[test]
    fn test_class_toggle() {
        let mut element = PageElement::new("menu");

        assert!(element.toggle_class(ACTIVE_CLASS));
        assert!(element.has_class(ACTIVE_CLASS));
        assert!(!element.toggle_class(ACTIVE_CLASS));
        assert!(!element.has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_document_element_lookup() {
        let mut page = PageDocument::new()
            .with_element(PageElement::new("header"))
            .with_element(PageElement::new("footer"));

        assert!(page.element("header").is_some());
        assert!(page.element("missing").is_none());

        page.element_mut("footer").expect("footer exists").text = "contact".to_string();
        assert_eq!(page.element("footer").expect("footer exists").text, "contact");
    }

    #[test]
    fn test_ids_with_class() {
        let page = PageDocument::new()
            .with_element(PageElement::new("q1").with_class("faq-item"))
            .with_element(PageElement::new("q2").with_class("faq-item"))
            .with_element(PageElement::new("hero"));

        assert_eq!(page.ids_with_class("faq-item"), vec!["q1", "q2"]);
    }
}
