/// The first `max_chars` characters of `text`.
pub fn head(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_counts_chars_not_bytes() {
        assert_eq!(head("You are a helpful pet", 7), "You are");
        assert_eq!(head("小雞小雞", 2), "小雞");
        assert_eq!(head("hi", 20), "hi");
    }
}
