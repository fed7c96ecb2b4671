use super::node::{Element, Node};

/// Escape text for use between tags.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(s) => out.push_str(&escape_text(s)),
        Node::Element(el) => write_element(el, out),
    }
}

pub(crate) fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if let Some(id) = &el.id {
        out.push_str(" id=\"");
        out.push_str(&escape_attr(id));
        out.push('"');
    }
    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&el.classes.join(" ")));
        out.push('"');
    }
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        // Empty values render as bare boolean attributes (async, open)
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    for child in &el.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_text("हिन्दी 🚀 ₹499"), "हिन्दी 🚀 ₹499");
    }

    #[test]
    fn test_write_element_with_attrs() {
        let el = Element::new("div")
            .with_id("calendlyInline")
            .with_class("calendly-inline-widget")
            .with_attr("data-url", "https://example.com/?a=1&b=2");

        let mut out = String::new();
        write_element(&el, &mut out);
        assert_eq!(
            out,
            r#"<div id="calendlyInline" class="calendly-inline-widget" data-url="https://example.com/?a=1&amp;b=2"></div>"#
        );
    }

    #[test]
    fn test_write_boolean_attr() {
        let el = Element::new("script").with_attr("async", "").with_attr("src", "x.js");
        let mut out = String::new();
        write_element(&el, &mut out);
        assert_eq!(out, r#"<script async src="x.js"></script>"#);
    }

    #[test]
    fn test_write_nested_text_is_escaped() {
        let el = Element::new("div").with_child(Element::new("strong").with_text("<script>"));
        let mut out = String::new();
        write_element(&el, &mut out);
        assert_eq!(out, "<div><strong>&lt;script&gt;</strong></div>");
    }
}
