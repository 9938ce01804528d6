//! Style sinks: where an applied theme is written.
//!
//! In a browser the sink is the document root element and head (see the
//! `web` module on wasm32). Everywhere else, [`MemoryDocument`] records the
//! same mutations and can render them as a stylesheet.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Target of theme application.
///
/// Mirrors the handful of DOM mutations a theme switch performs: toggling
/// classes and writing custom properties on the root element, plus making
/// sure a named `<meta>` tag exists in the head.
pub trait StyleSink {
    /// Remove a class from the root element. Absent classes are ignored.
    fn remove_class(&mut self, class: &str);

    /// Add a class to the root element. Present classes are not duplicated.
    fn add_class(&mut self, class: &str);

    /// Set a custom property (`--name`) on the root element.
    fn set_property(&mut self, name: &str, value: &str);

    /// Create a `<meta name="...">` tag in the head unless one exists.
    fn ensure_meta_tag(&mut self, name: &str);
}

/// A `<meta>` element recorded by [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: Option<String>,
}

/// In-memory stand-in for a document root and head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    classes: Vec<String>,
    properties: BTreeMap<String, String>,
    meta_tags: Vec<MetaTag>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root element classes, in the order they were added.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Value of a custom property, e.g. `property("--ring")`.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// All custom properties, sorted by name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn meta_tags(&self) -> &[MetaTag] {
        &self.meta_tags
    }

    pub fn meta_tag(&self, name: &str) -> Option<&MetaTag> {
        self.meta_tags.iter().find(|tag| tag.name == name)
    }

    /// Renders the root state as a stylesheet rule.
    ///
    /// ```rust
    /// use vibetheme::{MemoryDocument, StyleSink};
    ///
    /// let mut doc = MemoryDocument::new();
    /// doc.add_class("dark");
    /// doc.set_property("--ring", "0 0% 0%");
    /// assert_eq!(doc.to_css(), ":root.dark {\n  --ring: 0 0% 0%;\n}\n");
    /// ```
    pub fn to_css(&self) -> String {
        let mut selector = String::from(":root");
        for class in &self.classes {
            selector.push('.');
            selector.push_str(class);
        }

        let mut css = format!("{} {{\n", selector);
        for (name, value) in &self.properties {
            // Writing to a String cannot fail.
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSink for MemoryDocument {
    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn ensure_meta_tag(&mut self, name: &str) {
        if self.meta_tag(name).is_none() {
            self.meta_tags.push(MetaTag {
                name: name.to_string(),
                content: None,
            });
        }
    }
}
