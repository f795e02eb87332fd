// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tag-name queries over a node forest

use std::collections::BTreeSet;

use super::node::{descendants, Element, Node};
use super::transform::fold;
use crate::error::{Error, Result};

/// Check if a node is an element with this tag name
pub fn is_named(node: &Node, name: &str) -> bool {
    matches!(node, Node::Element(e) if e.name == name)
}

/// Find the top-most elements with this tag name
///
/// Search is depth-first in document order. Once an element matches, its
/// subtree is not searched again, so `<div><div/></div>` yields only the
/// outer div.
pub fn find_all<'a>(nodes: &'a [Node], tag: &str) -> Vec<&'a Element> {
    let mut results = Vec::new();
    find_in_subtree(nodes, tag, &mut results);
    results
}

fn find_in_subtree<'a>(nodes: &'a [Node], tag: &str, results: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name == tag {
                results.push(el);
            } else {
                find_in_subtree(&el.children, tag, results);
            }
        }
    }
}

/// Check if any `tag` element contains another `tag` element below it
pub fn is_nested(tag: &str, nodes: &[Node]) -> bool {
    descendants(nodes)
        .filter_map(Node::as_element)
        .filter(|el| el.name == tag)
        .any(|el| descendants(&el.children).any(|n| is_named(n, tag)))
}

/// Every distinct attribute name in the forest
pub fn collect_attribute_names(nodes: &[Node]) -> BTreeSet<String> {
    fold(nodes, BTreeSet::new(), |mut names, node| {
        if let Node::Element(el) = node {
            names.extend(el.attrs.iter().map(|a| a.name.clone()));
        }
        names
    })
}

/// Children of the one `<body>` element
///
/// Bodies are counted at any depth; anything other than exactly one is an
/// [`Error::MissingElement`].
pub fn get_body_children<'a>(nodes: &'a [Node], source_label: Option<&str>) -> Result<&'a [Node]> {
    let bodies: Vec<&Element> = descendants(nodes)
        .filter_map(Node::as_element)
        .filter(|el| el.name == "body")
        .collect();

    match bodies.as_slice() {
        [body] => Ok(&body.children),
        _ => {
            tracing::debug!(count = bodies.len(), label = ?source_label, "body lookup failed");
            Err(Error::missing_element("body", bodies.len(), source_label))
        }
    }
}
