//! Composed listing queries: category filter, then search, then sort.

use serde::{Deserialize, Serialize};

use super::{
    filter_by_category, filter_by_search_term, sort_posts_by_date, sort_works, unique_categories,
    ALL_CATEGORIES,
};
use crate::catalog::models::{BlogPost, PortfolioEntry};

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_sort() -> String {
    "recientes".to_string()
}

/// Criteria a listing page keeps in its own transient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCriteria {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub search: String,
    /// Only used by the portfolio listing; posts are always newest first.
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for ListingCriteria {
    fn default() -> Self {
        Self {
            category: default_category(),
            search: String::new(),
            sort: default_sort(),
        }
    }
}

impl ListingCriteria {
    pub fn has_active_filters(&self) -> bool {
        self.category != ALL_CATEGORIES || !self.search.trim().is_empty()
    }

    /// Reset category and search, keeping the chosen ordering.
    pub fn clear_filters(&mut self) {
        self.category = default_category();
        self.search.clear();
    }
}

/// Result of a composed query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Categories offered by the filter control, `"todos"` first.
    pub categories: Vec<String>,
    /// Size of the unfiltered collection.
    pub total: usize,
}

impl<T> Listing<T> {
    /// Number of items left after both filters.
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

pub fn portfolio_listing(
    works: &[PortfolioEntry],
    criteria: &ListingCriteria,
) -> Listing<PortfolioEntry> {
    let filtered = filter_by_category(works, &criteria.category);
    let filtered = filter_by_search_term(&filtered, &criteria.search);
    let items = sort_works(&filtered, &criteria.sort);

    tracing::debug!(
        category = %criteria.category,
        search = %criteria.search,
        sort = %criteria.sort,
        shown = items.len(),
        total = works.len(),
        "derived portfolio listing"
    );

    Listing {
        items,
        categories: unique_categories(works),
        total: works.len(),
    }
}

pub fn blog_listing(posts: &[BlogPost], criteria: &ListingCriteria) -> Listing<BlogPost> {
    let filtered = filter_by_category(posts, &criteria.category);
    let filtered = filter_by_search_term(&filtered, &criteria.search);
    let items = sort_posts_by_date(&filtered);

    tracing::debug!(
        category = %criteria.category,
        search = %criteria.search,
        shown = items.len(),
        total = posts.len(),
        "derived blog listing"
    );

    Listing {
        items,
        categories: unique_categories(posts),
        total: posts.len(),
    }
}
