// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever
//!
//! html5ever builds an `RcDom`, which is then converted into our owned
//! [`Node`] tree. Comments, doctypes and processing instructions are dropped
//! during conversion.

use html5ever::tendril::TendrilSink;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{local_name, namespace_url, ns, parse_document, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::node::{Attribute, Document, Element, Node};
use crate::error::{Error, Result};

/// Default element nesting limit, the same cap browsers apply
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Which html5ever tree construction algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Document when the markup opens with a doctype, `<html>`, `<head>` or
    /// `<body>`; fragment otherwise
    #[default]
    Auto,
    /// Full document algorithm (implies html/head/body)
    Document,
    /// Fragment algorithm in a `<body>` context; top-level nodes are kept as written
    Fragment,
}

/// Parser configuration
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Tree construction mode
    pub mode: ParseMode,
    /// Fail on any error reported by html5ever
    pub strict: bool,
    /// Parse as if scripting were enabled (affects <noscript>)
    pub scripting_enabled: bool,
    /// Deepest element nesting accepted; deeper input is a parse error
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Auto,
            strict: false,
            scripting_enabled: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseConfig {
    /// Create a new parse config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tree construction mode
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject input html5ever reports errors for
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable/disable scripting
    pub fn scripting_enabled(mut self, enabled: bool) -> Self {
        self.scripting_enabled = enabled;
        self
    }

    /// Set the element nesting limit
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    fn parse_opts(&self) -> ParseOpts {
        ParseOpts {
            tokenizer: TokenizerOpts {
                exact_errors: self.strict,
                ..Default::default()
            },
            tree_builder: TreeBuilderOpts {
                exact_errors: self.strict,
                scripting_enabled: self.scripting_enabled,
                ..Default::default()
            },
        }
    }
}

/// Parse HTML string into a Document
pub fn parse(html: &str) -> Result<Document> {
    parse_with(html, &ParseConfig::default())
}

/// Parse HTML string with an explicit configuration
pub fn parse_with(html: &str, config: &ParseConfig) -> Result<Document> {
    let mode = match config.mode {
        ParseMode::Auto if looks_like_document(html) => ParseMode::Document,
        ParseMode::Auto => ParseMode::Fragment,
        mode => mode,
    };

    let dom = match mode {
        ParseMode::Document => parse_document(RcDom::default(), config.parse_opts())
            .from_utf8()
            .read_from(&mut html.as_bytes()),
        _ => parse_fragment(
            RcDom::default(),
            config.parse_opts(),
            QualName::new(None, ns!(html), local_name!("body")),
            Vec::new(),
        )
        .from_utf8()
        .read_from(&mut html.as_bytes()),
    }
    .map_err(|e| Error::parse(e.to_string()))?;

    if !dom.errors.is_empty() {
        if config.strict {
            let messages: Vec<String> = dom.errors.iter().map(|e| e.to_string()).collect();
            return Err(Error::parse(messages.join("; ")));
        }
        tracing::debug!(errors = dom.errors.len(), "html5ever recovered from parse errors");
    }

    let nodes = match mode {
        ParseMode::Document => convert_children(&dom.document, 0, config.max_depth)?,
        // The fragment algorithm wraps its output in a synthetic <html> root
        _ => match dom
            .document
            .children
            .borrow()
            .iter()
            .find(|h| matches!(h.data, RcNodeData::Element { .. }))
        {
            Some(root) => convert_children(root, 0, config.max_depth)?,
            None => Vec::new(),
        },
    };

    tracing::trace!(mode = ?mode, top_level = nodes.len(), "parsed HTML");
    Ok(Document::new(nodes))
}

/// Parse and require exactly one top-level element
///
/// Whitespace-only text at the top level is ignored; any other extra node
/// is an [`Error::Structure`].
pub fn parse_single(html: &str, source_label: Option<&str>) -> Result<Element> {
    let mut nodes: Vec<Node> = parse(html)
        .map_err(|e| match source_label {
            Some(label) => e.with_label(label),
            None => e,
        })?
        .into_nodes()
        .into_iter()
        .filter(|n| !n.is_whitespace())
        .collect();

    match (nodes.len(), nodes.pop()) {
        (1, Some(Node::Element(el))) => Ok(el),
        (count, _) => Err(Error::structure(count, source_label)),
    }
}

/// Check whether the markup opens like a whole document
fn looks_like_document(html: &str) -> bool {
    let mut rest = html.trim_start_matches('\u{FEFF}').trim_start();
    while let Some(after) = rest.strip_prefix("<!--") {
        rest = match after.find("-->") {
            Some(end) => after[end + 3..].trim_start(),
            None => return false,
        };
    }

    let head: String = rest.chars().take(9).collect::<String>().to_ascii_lowercase();
    ["<!doctype", "<html", "<head", "<body"]
        .iter()
        .any(|p| head.starts_with(p))
}

/// Convert the children of `handle`, which sits `depth` elements deep
fn convert_children(handle: &Handle, depth: usize, max_depth: usize) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    for child in handle.children.borrow().iter() {
        if let Some(node) = convert_node(child, depth, max_depth)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

fn convert_node(handle: &Handle, depth: usize, max_depth: usize) -> Result<Option<Node>> {
    match handle.data {
        RcNodeData::Text { ref contents } => Ok(Some(Node::Text(contents.borrow().to_string()))),
        RcNodeData::Element {
            ref name,
            ref attrs,
            ref template_contents,
            ..
        } => {
            let depth = depth + 1;
            if depth > max_depth {
                return Err(Error::parse(format!(
                    "elements nested deeper than {} levels",
                    max_depth
                )));
            }

            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    let name = match attr.name.prefix {
                        Some(ref prefix) => format!("{}:{}", prefix, attr.name.local),
                        None => attr.name.local.to_string(),
                    };
                    Attribute::new(name, attr.value.to_string())
                })
                .collect();

            let mut children = convert_children(handle, depth, max_depth)?;
            if let Some(ref contents) = *template_contents.borrow() {
                children.extend(convert_children(contents, depth, max_depth)?);
            }

            Ok(Some(Node::Element(Element {
                name: name.local.to_string(),
                attrs,
                children,
            })))
        }
        // Document, doctype, comments and processing instructions
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &[Node]) -> Vec<&str> {
        doc.iter()
            .filter_map(Node::as_element)
            .map(|e| e.name.as_str())
            .collect()
    }

    #[test]
    fn test_parse_fragment_keeps_top_level() {
        let doc = parse("<p>one</p><p>two</p>").unwrap();
        assert_eq!(names(&doc), ["p", "p"]);
    }

    #[test]
    fn test_parse_document_implies_structure() {
        let doc = parse("<!DOCTYPE html><title>T</title><p>x</p>").unwrap();
        assert_eq!(names(&doc), ["html"]);

        let html = doc[0].as_element().unwrap();
        assert_eq!(names(&html.children), ["head", "body"]);
    }

    #[test]
    fn test_auto_mode_skips_leading_comments() {
        assert!(looks_like_document("  <!-- generated --> \n<HTML lang=en>"));
        assert!(looks_like_document("<body></body>"));
        assert!(!looks_like_document("<div>x</div>"));
        assert!(!looks_like_document("<!-- unterminated <html>"));
    }

    #[test]
    fn test_auto_mode_skips_byte_order_mark() {
        assert!(looks_like_document("\u{FEFF}<!DOCTYPE html><html></html>"));

        let doc = parse("\u{FEFF}<!DOCTYPE html><html><body><p>a</p></body></html>").unwrap();
        assert_eq!(names(&doc), ["html"]);
        let html = doc[0].as_element().unwrap();
        assert_eq!(names(&html.children), ["head", "body"]);
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let err = parse(&"<div>".repeat(5_000)).unwrap_err();
        match err {
            Error::Parse { message, .. } => assert!(message.contains("512")),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_max_depth_limit() {
        let config = ParseConfig::new().max_depth(3);
        let doc = parse_with("<div><div><div>x</div></div></div>", &config).unwrap();
        assert_eq!(names(&doc), ["div"]);

        let err = parse_with("<div><div><div><div>x</div></div></div></div>", &config).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        // Implied html/body count towards the depth in document mode
        let config = config.mode(ParseMode::Document);
        assert!(parse_with("<div>x</div>", &config).is_ok());
        assert!(parse_with("<div><div>x</div></div>", &config).is_err());

        assert!(parse(&"<div>".repeat(DEFAULT_MAX_DEPTH)).is_ok());
    }

    #[test]
    fn test_forced_document_mode() {
        let config = ParseConfig::new().mode(ParseMode::Document);
        let doc = parse_with("<div>x</div>", &config).unwrap();
        assert_eq!(names(&doc), ["html"]);
    }

    #[test]
    fn test_parse_with_attributes() {
        let doc = parse("<div id=\"test\" class=\"foo bar\">content</div>").unwrap();
        let div = doc[0].as_element().unwrap();
        assert_eq!(div.attr("id"), Some("test"));
        assert_eq!(div.attr("class"), Some("foo bar"));
        assert_eq!(div.children, vec![Node::Text("content".into())]);
    }

    #[test]
    fn test_comments_dropped() {
        let doc = parse("<ul><!-- note --><li>a</li></ul>").unwrap();
        let ul = doc[0].as_element().unwrap();
        assert_eq!(names(&ul.children), ["li"]);
        assert_eq!(ul.children.len(), 1);
    }

    #[test]
    fn test_template_contents_become_children() {
        let doc = parse("<template><span>t</span></template>").unwrap();
        let template = doc[0].as_element().unwrap();
        assert_eq!(names(&template.children), ["span"]);
    }

    #[test]
    fn test_strict_rejects_duplicate_attribute() {
        let config = ParseConfig::new().strict(true);
        let err = parse_with("<a id=\"1\" id=\"2\">x</a>", &config).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        // Lenient mode keeps the first value
        let doc = parse("<a id=\"1\" id=\"2\">x</a>").unwrap();
        assert_eq!(doc[0].as_element().unwrap().attrs.len(), 1);
    }

    #[test]
    fn test_parse_single() {
        let el = parse_single("\n<article><p>x</p></article>\n", None).unwrap();
        assert_eq!(el.name, "article");
    }

    #[test]
    fn test_parse_single_rejects_many() {
        let err = parse_single("<p>a</p><p>b</p>", Some("page.html")).unwrap_err();
        match err {
            Error::Structure { count, label } => {
                assert_eq!(count, 2);
                assert_eq!(label.as_deref(), Some("page.html"));
            }
            other => panic!("Expected Structure, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_single_rejects_empty_and_text() {
        assert!(matches!(
            parse_single("   ", None),
            Err(Error::Structure { count: 0, .. })
        ));
        assert!(matches!(
            parse_single("just text", None),
            Err(Error::Structure { count: 1, .. })
        ));
    }
}
