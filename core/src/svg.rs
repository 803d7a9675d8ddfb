//! Markup tree for rendered badges
//!
//! Badges are built as a small tree of elements and text runs rather than by
//! string concatenation, so callers (and tests) can inspect the output before
//! it is serialized. Serialization is deterministic: attributes keep their
//! insertion order and every text run or attribute value is XML-escaped.

use std::fmt::{self, Display, Write};

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Borrow the element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all of its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(text) => text.clone(),
        }
    }

    /// Serialize the tree to markup
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same name
    pub fn attr(mut self, name: &'static str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text run
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Look up an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of all descendant text runs
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// This element and every descendant element, in document order
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// First element (self included) with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|el| el.tag == tag)
    }

    /// All elements (self included) with the given tag
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    /// Whether any text run in the subtree equals `text` once surrounding
    /// whitespace is trimmed
    pub fn contains_text(&self, text: &str) -> bool {
        self.descendants().iter().any(|el| {
            el.children
                .iter()
                .any(|c| matches!(c, Node::Text(t) if t.trim() == text))
        })
    }
}

fn walk<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(el);
    for child in &el.children {
        if let Node::Element(child) = child {
            walk(child, out);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(el) => collect_text(&el.children, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"", name)?;
            write_escaped(f, value, true)?;
            f.write_char('"')?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_char('>')?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(text) => write_escaped(f, text, false),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str, in_attr: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if in_attr => f.write_str("&quot;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}
