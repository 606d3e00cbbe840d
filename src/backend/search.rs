//! Client-side product search: token-based prefix matching.
//!
//! Queries and documents are broken into lowercase alphanumeric tokens;
//! a product matches when every query token is a prefix of at least one
//! token of its title or description. "mech key" therefore matches
//! "Mechanical Keyboard" but "board" does not.

use crate::domain::Product;

/// Lowercased alphanumeric tokens of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// True when every query token prefix-matches some document token.
///
/// An empty query matches nothing; callers clear results instead of
/// searching for everything.
pub fn matches(query_tokens: &[String], product: &Product) -> bool {
    if query_tokens.is_empty() {
        return false;
    }
    let mut doc_tokens = tokenize(&product.title);
    doc_tokens.extend(tokenize(&product.description));
    query_tokens
        .iter()
        .all(|q| doc_tokens.iter().any(|d| d.starts_with(q.as_str())))
}

/// Filter `candidates` by `query`, keeping backend iteration order,
/// truncated to `limit`.
pub fn run<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }
    candidates
        .into_iter()
        .filter(|p| matches(&query_tokens, p))
        .take(limit)
        .cloned()
        .collect()
}
