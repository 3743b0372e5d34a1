use serde::Serialize;

use crate::domain::category::{CategoryCatalog, CategoryKey};
use crate::domain::types::NatureId;
use crate::repository::ProductSearchQuery;

/// Returns `true` when the term contains at least one ASCII letter or digit.
pub fn is_meaningful_search(term: &str) -> bool {
    term.bytes().any(|b| b.is_ascii_alphanumeric())
}

/// Current shape of a catalog query. Compared by value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub category_key: Option<CategoryKey>,
    pub nature_id: Option<NatureId>,
    /// Raw text as typed; see [`FilterCriteria::effective_search`].
    pub search_text: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, key: CategoryKey) -> Self {
        self.category_key = Some(key);
        self
    }

    pub fn nature(mut self, nature_id: NatureId) -> Self {
        self.nature_id = Some(nature_id);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Builds criteria from raw query-string values, dropping values that do
    /// not parse (unknown category keys, blank ids).
    pub fn from_query(category: Option<&str>, nature: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category_key: category.and_then(|raw| raw.parse().ok()),
            nature_id: nature.and_then(|raw| NatureId::new(raw).ok()),
            search_text: search.unwrap_or_default().to_string(),
        }
    }

    /// The search term forwarded upstream, if any.
    pub fn effective_search(&self) -> Option<&str> {
        let trimmed = self.search_text.trim();
        is_meaningful_search(trimmed).then_some(trimmed)
    }

    /// Resolves the category to its plant and builds the unpaginated query.
    ///
    /// Returns `None` when no plant can be derived; no fetch may be issued then.
    pub fn to_query(&self, categories: &CategoryCatalog) -> Option<ProductSearchQuery> {
        let plant_id = categories.plant_id(self.category_key?)?.clone();
        let mut query = ProductSearchQuery::new(plant_id);
        if let Some(nature_id) = &self.nature_id {
            query = query.nature(nature_id.clone());
        }
        if let Some(term) = self.effective_search() {
            query = query.search(term);
        }
        Some(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::fixtures::catalog;

    #[test]
    fn blank_and_punctuation_searches_are_dropped() {
        let catalog = catalog();
        let base = FilterCriteria::new().category(CategoryKey::Bitumen);

        let empty = base.clone().search("").to_query(&catalog).unwrap();
        let spaces = base.clone().search("   ").to_query(&catalog).unwrap();
        let dashes = base.clone().search(" -- !? ").to_query(&catalog).unwrap();

        assert_eq!(empty, spaces);
        assert_eq!(empty, dashes);
        assert!(empty.search.is_none());
    }

    #[test]
    fn meaningful_search_is_trimmed() {
        let criteria = FilterCriteria::new().search("  VG-30 ");
        assert_eq!(criteria.effective_search(), Some("VG-30"));
    }

    #[test]
    fn query_requires_known_category() {
        let catalog = catalog();
        assert!(FilterCriteria::new().to_query(&catalog).is_none());

        let criteria = FilterCriteria::from_query(Some("gabion"), Some("n7"), None);
        let query = criteria.to_query(&catalog).unwrap();
        assert_eq!(query.plant_id.as_str(), "plant-gabion");
        assert_eq!(query.nature_id.unwrap().as_str(), "n7");
    }

    #[test]
    fn unknown_query_values_are_ignored() {
        let criteria = FilterCriteria::from_query(Some("asphalt"), Some("  "), Some("x"));
        assert_eq!(criteria.category_key, None);
        assert_eq!(criteria.nature_id, None);
        assert_eq!(criteria.search_text, "x");
    }
}
