// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML serialization through html5ever's serializer
//!
//! Escaping, void elements and raw-text parents (script, style) are handled
//! by html5ever; this module only walks our tree.

use std::io;

use html5ever::serialize::{serialize as html5ever_serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{namespace_url, ns, LocalName, QualName};

use super::node::{Element, Node};
use crate::error::{Error, Result};

/// Serialize a forest of nodes to HTML
pub fn serialize(nodes: &[Node]) -> Result<String> {
    render(&Forest(nodes), SerializeOpts::default())
}

/// Serialize a forest of nodes, prefixed with `<!DOCTYPE html>`
pub fn serialize_with_doctype(nodes: &[Node]) -> Result<String> {
    Ok(format!("<!DOCTYPE html>{}", serialize(nodes)?))
}

impl Element {
    /// Serialize this element, including its own tags
    pub fn to_html(&self) -> Result<String> {
        render(
            self,
            SerializeOpts {
                traversal_scope: TraversalScope::IncludeNode,
                ..Default::default()
            },
        )
    }
}

fn render<T: Serialize>(node: &T, opts: SerializeOpts) -> Result<String> {
    let mut buf = Vec::new();
    html5ever_serialize(&mut buf, node, opts)?;
    String::from_utf8(buf).map_err(|e| Error::other(format!("serializer produced invalid UTF-8: {}", e)))
}

struct Forest<'a>(&'a [Node]);

impl Serialize for Forest<'_> {
    fn serialize<S>(&self, serializer: &mut S, _scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        for node in self.0 {
            write_node(node, serializer)?;
        }
        Ok(())
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: &mut S, scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match scope {
            TraversalScope::IncludeNode => write_element(self, serializer),
            TraversalScope::ChildrenOnly(_) => self
                .children
                .iter()
                .try_for_each(|child| write_node(child, serializer)),
        }
    }
}

fn write_node<S: Serializer>(node: &Node, serializer: &mut S) -> io::Result<()> {
    match node {
        Node::Text(text) => serializer.write_text(text),
        Node::Element(el) => write_element(el, serializer),
    }
}

fn write_element<S: Serializer>(el: &Element, serializer: &mut S) -> io::Result<()> {
    let name = QualName::new(None, ns!(html), LocalName::from(el.name.as_str()));
    let attr_names: Vec<QualName> = el
        .attrs
        .iter()
        .map(|a| QualName::new(None, ns!(), LocalName::from(a.name.as_str())))
        .collect();

    serializer.start_elem(
        name.clone(),
        attr_names
            .iter()
            .zip(&el.attrs)
            .map(|(qual, attr)| (qual, attr.value.as_str())),
    )?;
    for child in &el.children {
        write_node(child, serializer)?;
    }
    serializer.end_elem(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Node {
        Element::new("p")
            .with_children([Node::Text(text.into())])
            .into()
    }

    #[test]
    fn test_serialize_escapes_text_and_attrs() {
        let nodes: Vec<Node> = vec![Element::new("a")
            .with_attr("title", "say \"hi\" & go")
            .with_children([Node::Text("1 < 2".into())])
            .into()];
        assert_eq!(
            serialize(&nodes).unwrap(),
            r#"<a title="say &quot;hi&quot; &amp; go">1 &lt; 2</a>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let nodes = vec![p("a"), Element::new("br").into(), p("b")];
        assert_eq!(serialize(&nodes).unwrap(), "<p>a</p><br><p>b</p>");
    }

    #[test]
    fn test_script_text_is_raw() {
        let nodes: Vec<Node> = vec![Element::new("script")
            .with_children([Node::Text("if (a < b) {}".into())])
            .into()];
        assert_eq!(
            serialize(&nodes).unwrap(),
            "<script>if (a < b) {}</script>"
        );
    }

    #[test]
    fn test_element_to_html() {
        let el = Element::new("ul")
            .with_attr("class", "nav")
            .with_children([Element::new("li").into()]);
        assert_eq!(el.to_html().unwrap(), r#"<ul class="nav"><li></li></ul>"#);
    }

    #[test]
    fn test_with_doctype() {
        assert_eq!(
            serialize_with_doctype(&[p("x")]).unwrap(),
            "<!DOCTYPE html><p>x</p>"
        );
    }
}
