//! Catalogue query normalisation and product id parsing.

use crate::error::CoreError;
use crate::types::DbId;

/// Category value the frontend sends to mean "every category".
pub const CATEGORY_ALL: &str = "all";

pub const MSG_INVALID_PRODUCT_ID: &str = "Invalid product ID";

/// Normalised filters for the product listing.
///
/// `None` means the filter is not applied. Both filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring matched against name OR category.
    pub search: Option<String>,
}

impl ProductFilter {
    /// Build a filter from raw query-string values.
    ///
    /// An empty category or [`CATEGORY_ALL`] (any case) disables the
    /// category filter. The search term is trimmed; empty disables it.
    pub fn from_query(category: Option<&str>, search: Option<&str>) -> Self {
        let category = category
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(CATEGORY_ALL))
            .map(str::to_string);
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { category, search }
    }

    /// `ILIKE` pattern for the search term, with wildcards in the term escaped.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|term| format!("%{}%", escape_like(term)))
    }
}

/// Escape `\`, `%` and `_` so they match literally inside a `LIKE` pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Parse a product id from a path segment.
///
/// Only plain ASCII digits forming a positive `i64` are accepted; signs,
/// whitespace and zero are rejected.
pub fn parse_product_id(raw: &str) -> Result<DbId, CoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::validation(MSG_INVALID_PRODUCT_ID));
    }
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::validation(MSG_INVALID_PRODUCT_ID)),
    }
}
