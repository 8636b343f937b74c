//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else if word.ends_with("ch") || word.ends_with("sh") || word.ends_with('s') {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}
