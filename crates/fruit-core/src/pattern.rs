//! `LIKE` pattern building for the name search.
//!
//! The search term is bound as a parameter, never spliced into SQL text.
//! Wildcards inside the term are escaped so that "50%" looks for a literal
//! percent sign instead of matching everything that starts with "50".
//!
//! The query names the escape character in an explicit `ESCAPE` clause. The
//! server default (backslash) disappears under `NO_BACKSLASH_ESCAPES`.

/// Escape character passed in the `ESCAPE` clause of the name search.
pub const LIKE_ESCAPE: char = '!';

/// Escapes `%`, `_` and the escape character itself.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Pattern matching any value that contains `term`.
///
/// ## Example
/// ```rust
/// use fruit_core::pattern::contains_pattern;
///
/// assert_eq!(contains_pattern("ppl"), "%ppl%");
/// assert_eq!(contains_pattern("100%"), "%100!%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_term() {
        assert_eq!(contains_pattern("Apple"), "%Apple%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_wildcards_are_literal() {
        assert_eq!(escape_like("a_b"), "a!_b");
        assert_eq!(escape_like("x%"), "x!%");
        assert_eq!(escape_like("Wow!"), "Wow!!");
        assert_eq!(escape_like("c:\\d"), "c:\\d");
    }

    #[test]
    fn test_quotes_pass_through_untouched() {
        // Quotes are harmless once bound as a parameter.
        assert_eq!(contains_pattern("' OR 1=1 --"), "%' OR 1=1 --%");
    }
}
