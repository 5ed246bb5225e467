//! Assertions over what a stage emitted.
//!
//! Provides high-level checks that keep presenter tests readable:
//! - Exactly one fragment / plain text only
//! - Ordering of log entries inside a fragment
//! - Stat bar classification markers

use anyhow::{Context, Result};

use cyberpet::{Emission, RecordingSurface};

/// Assert that exactly one markup fragment was emitted and return it.
pub fn single_fragment(output: &RecordingSurface) -> Result<String> {
    let fragments = output.fragments();
    if fragments.len() != 1 {
        anyhow::bail!("Expected 1 fragment, got {}: {:?}", fragments.len(), fragments);
    }
    fragments
        .into_iter()
        .next()
        .context("fragment list emptied while reading")
}

/// Assert that nothing but text lines were emitted.
pub fn assert_text_only(output: &RecordingSurface) -> Result<()> {
    for emission in output.emissions() {
        if !matches!(emission, Emission::Text(..)) {
            anyhow::bail!("Expected text only, found {:?}", emission);
        }
    }
    Ok(())
}

/// Assert the text lines match exactly, in order.
pub fn assert_lines(output: &RecordingSurface, expected: &[&str]) -> Result<()> {
    let lines = output.lines();
    if lines != expected {
        anyhow::bail!("Expected lines {:?}, got {:?}", expected, lines);
    }
    Ok(())
}

/// Assert that every needle occurs in `html`, in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) -> Result<()> {
    let mut from = 0;
    for needle in needles {
        let offset = html[from..]
            .find(needle)
            .with_context(|| format!("'{}' not found after byte {}", needle, from))?;
        from += offset + needle.len();
    }
    Ok(())
}

/// Number of `<div class="log-entry"` rows in a fragment.
pub fn log_entry_count(html: &str) -> usize {
    html.matches(r#"class="log-entry""#).count()
}

/// `data-level` values of the stat bars in a fragment, in order.
pub fn stat_levels(html: &str) -> Vec<String> {
    const MARKER: &str = r#"data-level=""#;
    html.match_indices(MARKER)
        .filter_map(|(idx, _)| {
            let rest = &html[idx + MARKER.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

/// Assert the fragment keeps an empty enemy slot.
pub fn assert_empty_enemy_slot(html: &str) -> Result<()> {
    if !html.contains(r#"<div class="card empty" style="width: 45%;"></div>"#) {
        anyhow::bail!("Empty enemy slot not found in {}", html);
    }
    if html.contains(r#"class="card enemy""#) {
        anyhow::bail!("Unexpected enemy card in {}", html);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order() {
        assert!(assert_in_order("a b c", &["a", "c"]).is_ok());
        assert!(assert_in_order("a b c", &["c", "a"]).is_err());
    }

    #[test]
    fn test_stat_levels() {
        let html = r#"<div data-level="critical"></div><div data-level="nominal"></div>"#;
        assert_eq!(stat_levels(html), ["critical", "nominal"]);
    }
}
