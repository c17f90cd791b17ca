use std::fmt;

use super::{Element, Node};

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write_escaped(f, text, false),
            Node::Element(element) => fmt::Display::fmt(element, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(f, " {}", name)?;
            } else {
                write!(f, " {}=\"", name)?;
                write_escaped(f, value, true)?;
                f.write_str("\"")?;
            }
        }
        f.write_str(">")?;

        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, raw: &str, attribute: bool) -> fmt::Result {
    for ch in raw.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if attribute => f.write_str("&quot;")?,
            _ => write!(f, "{}", ch)?,
        }
    }
    Ok(())
}
