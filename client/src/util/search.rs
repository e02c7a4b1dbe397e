//! Case-insensitive substring matching for list filters.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// True when any haystack contains the trimmed term, ignoring case.
/// A blank term matches everything.
#[must_use]
pub fn matches_term(term: &str, haystacks: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}
