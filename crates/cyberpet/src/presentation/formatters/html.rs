use std::fmt;

/// Writes the wrapped text with HTML special characters escaped.
///
/// Every caller-supplied string goes through this before it lands in markup.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(idx) = rest.find(['<', '>', '&', '"', '\'']) {
            f.write_str(&rest[..idx])?;
            let entity = match rest.as_bytes()[idx] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                _ => "&#x27;",
            };
            f.write_str(entity)?;
            rest = &rest[idx + 1..];
        }
        f.write_str(rest)
    }
}

pub fn escape(text: &str) -> String {
    Escaped(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_special_chars() {
        assert_eq!(
            escape(r#"<script>alert("hi") & 'bye'</script>"#),
            "&lt;script&gt;alert(&quot;hi&quot;) &amp; &#x27;bye&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_and_unicode_text_untouched() {
        assert_eq!(escape("Fluffy 🐣 吃飽了"), "Fluffy 🐣 吃飽了");
        assert_eq!(escape(""), "");
    }
}
