//! Name search helpers.

use serde::Serialize;

/// Escape character used in every `ILIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching `term` anywhere in the column.
///
/// `%`, `_` and the escape character are escaped so the term is matched
/// literally. An empty term yields `%%`, which matches every row.
///
/// # Examples
///
/// ```
/// use encore_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop"), "%Hop%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// assert_eq!(contains_pattern(""), "%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Search results as handed to the search page.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_terms() {
        assert_eq!(contains_pattern("Music"), "%Music%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn count_matches_data_len() {
        let results = SearchResults::from(vec!["a", "b"]);
        assert_eq!(results.count, 2);
    }
}
