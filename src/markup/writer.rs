//! Serializes an [`Element`] tree to indented markup text.

use super::Element;

/// The prolog line emitted ahead of the root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;

/// Layout options for [`write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Emit the `<?xml version="1.0"?>` prolog line.
    pub declaration: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
        }
    }
}

/// Writes `root` as text: one element per line, childless elements
/// self-closed, no trailing newline.
pub fn write(root: &Element, options: &WriterOptions) -> String {
    let mut lines = Vec::new();
    if options.declaration {
        lines.push(XML_DECLARATION.to_string());
    }
    write_element(root, 0, options, &mut lines);
    lines.join("\n")
}

fn write_element(element: &Element, depth: usize, options: &WriterOptions, lines: &mut Vec<String>) {
    let indent = " ".repeat(depth * options.indent);
    let mut open = format!("{indent}<{}", element.name);
    for (key, value) in &element.attributes {
        open.push(' ');
        open.push_str(key);
        open.push_str("=\"");
        open.push_str(&escape_attribute(value));
        open.push('"');
    }

    if element.children.is_empty() {
        open.push_str("/>");
        lines.push(open);
        return;
    }

    open.push('>');
    lines.push(open);
    for child in &element.children {
        write_element(child, depth + 1, options, lines);
    }
    lines.push(format!("{indent}</{}>", element.name));
}

/// Escapes an attribute value for a double-quoted attribute. Line breaks and
/// tabs become character references so readers don't normalise them away.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            other => escaped.push(other),
        }
    }
    escaped
}
