// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tree rebuilding, folding and outline printing

use std::io::{self, Write};

use super::node::{descendants, Document, Element, Node};

/// Rebuild the forest without whitespace-only text nodes
///
/// Elements are always kept, even when filtering leaves them empty.
pub fn filter_whitespace(nodes: &[Node]) -> Document {
    filter_nodes(nodes).into()
}

fn filter_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes
        .iter()
        .filter(|n| !n.is_whitespace())
        .map(|n| match n {
            Node::Element(el) => Node::Element(Element {
                name: el.name.clone(),
                attrs: el.attrs.clone(),
                children: filter_nodes(&el.children),
            }),
            Node::Text(t) => Node::Text(t.clone()),
        })
        .collect()
}

/// Pre-order accumulation over every node (elements and text)
pub fn fold<B, F>(nodes: &[Node], init: B, f: F) -> B
where
    F: FnMut(B, &Node) -> B,
{
    descendants(nodes).fold(init, f)
}

/// Like [`fold`], stopping at the first error
pub fn try_fold<B, E, F>(nodes: &[Node], init: B, mut f: F) -> Result<B, E>
where
    F: FnMut(B, &Node) -> Result<B, E>,
{
    let mut acc = init;
    for node in descendants(nodes) {
        acc = f(acc, node)?;
    }
    Ok(acc)
}

/// Outline printing options
#[derive(Debug, Clone, Default)]
pub struct OutlineOptions {
    /// Tags skipped together with their subtree
    pub exclude: Vec<String>,
    /// Attributes shown next to the tag
    pub keep_attrs: Vec<String>,
}

impl OutlineOptions {
    /// Create new outline options
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip elements with this tag
    pub fn exclude(mut self, tag: impl Into<String>) -> Self {
        self.exclude.push(tag.into());
        self
    }

    /// Show this attribute
    pub fn keep_attr(mut self, name: impl Into<String>) -> Self {
        self.keep_attrs.push(name.into());
        self
    }
}

/// Write an indented outline, one line per element
pub fn write_outline<W: Write>(out: &mut W, nodes: &[Node], options: &OutlineOptions) -> io::Result<()> {
    write_level(out, nodes, options, 0)
}

fn write_level<W: Write>(
    out: &mut W,
    nodes: &[Node],
    options: &OutlineOptions,
    depth: usize,
) -> io::Result<()> {
    for el in nodes.iter().filter_map(Node::as_element) {
        if options.exclude.iter().any(|t| *t == el.name) {
            continue;
        }

        write!(out, "{:indent$}{}", "", el.name, indent = depth * 2)?;
        for attr in el.attrs.iter().filter(|a| options.keep_attrs.contains(&a.name)) {
            write!(out, " {}=\"{}\"", attr.name, attr.value)?;
        }
        writeln!(out)?;

        write_level(out, &el.children, options, depth + 1)?;
    }
    Ok(())
}

/// Print an outline to stdout
pub fn print_outline(nodes: &[Node], options: &OutlineOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_outline(&mut lock, nodes, options)
}
