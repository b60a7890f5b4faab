//! Element tree builder
//!
//! A minimal HTML element tree with a chainable builder surface. Attributes
//! keep insertion order (indexmap) so rendered output is stable, and all
//! text/attribute content is escaped on serialization.

use indexmap::IndexMap;

/// Tags serialized without a closing tag
const VOID_TAGS: &[&str] = &["meta", "link", "br", "hr", "img"];

/// A node in the element tree
#[derive(Clone, Debug)]
enum Node {
    Element(Element),
    /// Escaped text content
    Text(String),
    /// Pre-rendered markup inserted verbatim (stylesheet, script)
    Raw(String),
}

/// An HTML element under construction
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

/// Create an element with the given tag
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        classes: Vec::new(),
        attrs: IndexMap::new(),
        children: Vec::new(),
    }
}

impl Element {
    /// Append one or more space-separated classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute (last write wins)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Append an escaped text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append pre-rendered markup verbatim
    ///
    /// Only for content the caller already controls (generated CSS/JS);
    /// never for profile data.
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append every element from an iterator
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Append a child only when `condition` holds
    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Element) -> Self {
        if condition {
            self.child(child())
        } else {
            self
        }
    }

    /// Number of direct element children (stagger group size)
    pub fn child_element_count(&self) -> usize {
        self.children
            .iter()
            .filter(|n| matches!(n, Node::Element(_)))
            .count()
    }

    /// Serialize to HTML
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&html_escape::encode_double_quoted_attribute(class));
            }
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(e) => e.render_into(out),
                Node::Text(t) => out.push_str(&html_escape::encode_text(t)),
                Node::Raw(r) => out.push_str(r),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_render() {
        let html = el("p").class("muted").text("hello").render();
        assert_eq!(html, "<p class=\"muted\">hello</p>");
    }

    #[test]
    fn test_text_is_escaped() {
        let html = el("span").text("a < b & c").render();
        assert_eq!(html, "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn test_attr_value_is_escaped() {
        let html = el("a").attr("href", "x\"y").render();
        assert!(html.contains("href=\"x&quot;y\""));
    }

    #[test]
    fn test_attr_order_is_stable() {
        let html = el("a")
            .attr("href", "#x")
            .attr("target", "_blank")
            .attr("rel", "noreferrer")
            .render();
        assert_eq!(
            html,
            "<a href=\"#x\" target=\"_blank\" rel=\"noreferrer\"></a>"
        );
    }

    #[test]
    fn test_void_tag_has_no_closing() {
        assert_eq!(el("meta").attr("charset", "utf-8").render(), "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_child_element_count_ignores_text() {
        let e = el("div").text("x").child(el("span")).child(el("span"));
        assert_eq!(e.child_element_count(), 2);
    }

    #[test]
    fn test_nested_children() {
        let html = el("ul")
            .children((0..2).map(|i| el("li").text(format!("item {i}"))))
            .render();
        assert_eq!(html, "<ul><li>item 0</li><li>item 1</li></ul>");
    }
}
