/// Find the first token (in list order) that occurs anywhere in `text`.
///
/// Comparison is case-insensitive. Blank tokens never match.
pub fn scan_tokens<'t>(text: &str, tokens: &'t [String]) -> Option<&'t str> {
    let haystack = text.to_uppercase();
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .find(|t| haystack.contains(&t.to_uppercase()))
}
