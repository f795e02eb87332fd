// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element constructors, one per common tag
//!
//! ```
//! use htmltree::dom::builders::{a, li, text, ul};
//!
//! let nav = ul(&[("class", "nav")], vec![
//!     li(&[], vec![a(&[("href", "/")], vec![text("Home")])]),
//! ]);
//! assert_eq!(nav.as_element().unwrap().name, "ul");
//! ```

use super::node::{Attribute, Element, Node};

fn build(name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element(Element {
        name: name.to_string(),
        attrs: attrs.iter().map(|&pair| Attribute::from(pair)).collect(),
        children,
    })
}

macro_rules! container {
    ($($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($tag), ">` element")]
            pub fn $tag(attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
                build(stringify!($tag), attrs, children)
            }
        )*
    };
}

macro_rules! void {
    ($($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($tag), ">` void element")]
            pub fn $tag(attrs: &[(&str, &str)]) -> Node {
                build(stringify!($tag), attrs, Vec::new())
            }
        )*
    };
}

container!(
    html, head, title, script, body, nav, footer, article, div, span, p, pre, a, i, small, sup,
    h1, h2, h3, h4, h5, h6, ul, li, dl, dd, table, thead, tbody, tr, th, td,
);

void!(br, meta, link);

/// Text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}
