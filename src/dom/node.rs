// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types
//!
//! The tree is plain owned data: an element owns its children, and there
//! are no parent or sibling links. Functions that "change" a tree build a
//! new one.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

use super::validate::{validate_attributes, Allowed};

/// A single attribute (name, value) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<(&str, &str)> for Attribute {
    fn from((name, value): (&str, &str)) -> Self {
        Self::new(name, value)
    }
}

impl From<(String, String)> for Attribute {
    fn from((name, value): (String, String)) -> Self {
        Self { name, value }
    }
}

/// Element node: tag name, ordered attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in source order (names are not guaranteed unique)
    pub attrs: Vec<Attribute>,
    /// Child nodes in source order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(name, value));
        self
    }

    /// Append children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Get the first attribute value with this name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if has an attribute
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        descendants(&self.children)
            .filter_map(Node::as_text)
            .collect()
    }

    /// Validate this element's attributes
    pub fn validate(
        &self,
        required: &[&str],
        allowed: &Allowed,
    ) -> std::result::Result<(), ValidationError> {
        validate_attributes(&self.attrs, required, allowed)
    }
}

/// A tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Element node (like <div>, <p>, etc.)
    Element(Element),
    /// Text node
    Text(String),
}

impl Node {
    /// Get the element if this is an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Get the text if this is a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Check if this is a text node made only of HTML (ASCII) whitespace
    ///
    /// `&nbsp;` is content, not whitespace.
    pub fn is_whitespace(&self) -> bool {
        match self {
            Node::Text(t) => t.chars().all(|c| c.is_ascii_whitespace()),
            Node::Element(_) => false,
        }
    }

    /// Child nodes (always empty for text)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Text(_) => &[],
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

/// An ordered sequence of top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document from top-level nodes
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Parse HTML text with the default configuration
    pub fn parse(html: &str) -> Result<Self> {
        super::parser::parse(html)
    }

    /// Top-level nodes
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the document, returning its top-level nodes
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Serialize back to HTML
    pub fn to_html(&self) -> Result<String> {
        super::serialize::serialize(&self.nodes)
    }

    /// Pretty-printed JSON form of the tree
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Deref for Document {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.nodes
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.to_html().map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}

/// Pre-order iterator over every node of a forest
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped first
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Visit every node in `nodes` and below, parents before children
pub fn descendants(nodes: &[Node]) -> Descendants<'_> {
    Descendants {
        stack: nodes.iter().rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node> {
        vec![
            Element::new("div")
                .with_attr("id", "a")
                .with_children([
                    Node::Text("one".into()),
                    Element::new("span")
                        .with_children([Node::Text("two".into())])
                        .into(),
                ])
                .into(),
            Node::Text("three".into()),
        ]
    }

    #[test]
    fn test_descendants_pre_order() {
        let nodes = sample();
        let order: Vec<String> = descendants(&nodes)
            .map(|n| match n {
                Node::Element(e) => e.name.clone(),
                Node::Text(t) => t.clone(),
            })
            .collect();
        assert_eq!(order, ["div", "one", "span", "two", "three"]);
    }

    #[test]
    fn test_text_content() {
        let nodes = sample();
        let div = nodes[0].as_element().unwrap();
        assert_eq!(div.text_content(), "onetwo");
        assert_eq!(div.attr("id"), Some("a"));
        assert!(!div.has_attr("class"));
    }

    #[test]
    fn test_is_whitespace() {
        assert!(Node::Text(" \n\t".into()).is_whitespace());
        assert!(Node::Text(String::new()).is_whitespace());
        assert!(!Node::Text(" x ".into()).is_whitespace());
        assert!(!Node::Element(Element::new("br")).is_whitespace());
    }

    #[test]
    fn test_nbsp_is_not_whitespace() {
        assert!(!Node::Text("\u{a0}".into()).is_whitespace());
        assert!(!Node::Text(" \u{a0} ".into()).is_whitespace());
        assert!(Node::Text("\x0c\r\n".into()).is_whitespace());
    }

    #[test]
    fn test_attr_returns_first_duplicate() {
        let el = Element::new("a").with_attr("id", "1").with_attr("id", "2");
        assert_eq!(el.attr("id"), Some("1"));
        assert_eq!(el.attrs.len(), 2);
    }

    #[test]
    fn test_document_json_shape() {
        let doc = Document::new(vec![Element::new("p")
            .with_children([Node::Text("hi".into())])
            .into()]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"element": {"name": "p", "attrs": [], "children": [{"text": "hi"}]}}
            ])
        );
        assert_eq!(serde_json::from_str::<Document>(&doc.to_json().unwrap()).unwrap(), doc);
    }
}
