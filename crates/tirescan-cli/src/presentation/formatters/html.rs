use std::fmt;

/// Escape text for use inside HTML element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps any text rendering in an escaped `<pre>` block
pub struct Preformatted<D: fmt::Display> {
    inner: D,
}

impl<D: fmt::Display> Preformatted<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: fmt::Display> fmt::Display for Preformatted<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<pre>{}</pre>", escape(&self.inner.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("205/55 R16"), "205/55 R16");
    }

    #[test]
    fn test_preformatted() {
        assert_eq!(Preformatted::new("1 < 2").to_string(), "<pre>1 &lt; 2</pre>");
    }
}
