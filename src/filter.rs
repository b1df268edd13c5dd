use crate::models::category::ALL;
use crate::models::project::Project;
use crate::store::Store;

/// Trim and lowercase a raw search box value.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Active category and query. The query always narrows the category's
/// subset, it never widens past it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    category: String,
    query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            category: ALL.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(category: &str, query: &str) -> Self {
        let mut state = FilterState::default();
        state.set_category(category);
        state.set_query(query);
        state
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Normalised query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// An empty token means "all".
    pub fn set_category(&mut self, category: &str) {
        let category = category.trim();
        self.category = if category.is_empty() {
            ALL.to_string()
        } else {
            category.to_string()
        };
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
    }

    /// Projects passing both filters, in store order.
    pub fn select<'a>(&self, store: &'a dyn Store) -> Vec<&'a Project> {
        let base: Vec<&Project> = if self.category == ALL {
            store.projects().iter().collect()
        } else {
            store.projects_by_category(&self.category)
        };
        if self.query.is_empty() {
            return base;
        }
        base.into_iter().filter(|p| p.matches(&self.query)).collect()
    }
}
