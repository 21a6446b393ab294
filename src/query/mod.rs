//! Query engine: pure derivations over catalog collections.
//!
//! Nothing here touches the store. Every function takes a slice and returns a
//! fresh `Vec`, so calling it twice with the same input yields equal output.

pub mod listing;

use std::collections::BTreeSet;

use crate::catalog::models::{BlogPost, PortfolioEntry};

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "todos";

/// Shape shared by the collections the listing pages derive from.
pub trait Listable: Clone {
    fn title(&self) -> &str;

    /// Description for works, excerpt for posts.
    fn summary(&self) -> &str;

    /// Category labels: the single category of a work, the tags of a post.
    fn labels(&self) -> Vec<&str>;
}

impl Listable for PortfolioEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn labels(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }
}

impl Listable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn labels(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

/// Exact, case-sensitive category (or tag membership) filter.
pub fn filter_by_category<T: Listable>(items: &[T], category: &str) -> Vec<T> {
    if category == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.labels().contains(&category))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over title, summary and labels.
/// A blank term leaves the input as is; any other term is matched verbatim,
/// surrounding whitespace included.
pub fn filter_by_search_term<T: Listable>(items: &[T], term: &str) -> Vec<T> {
    if term.trim().is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    items
        .iter()
        .filter(|item| {
            hit(item.title()) || hit(item.summary()) || item.labels().into_iter().any(hit)
        })
        .cloned()
        .collect()
}

/// Portfolio ordering offered by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest year first
    Recientes,
    /// Oldest year first
    Antiguos,
    /// Featured works first
    Destacados,
}

impl SortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "recientes" => Some(SortKey::Recientes),
            "antiguos" => Some(SortKey::Antiguos),
            "destacados" => Some(SortKey::Destacados),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recientes => "recientes",
            SortKey::Antiguos => "antiguos",
            SortKey::Destacados => "destacados",
        }
    }
}

/// Stable sort of works by `key`. Unknown keys return the input order.
pub fn sort_works(items: &[PortfolioEntry], key: &str) -> Vec<PortfolioEntry> {
    match SortKey::parse(key) {
        Some(key) => sort_works_by(items, key),
        None => {
            tracing::debug!(sort_key = %key, "unknown sort key, keeping order");
            items.to_vec()
        }
    }
}

pub fn sort_works_by(items: &[PortfolioEntry], key: SortKey) -> Vec<PortfolioEntry> {
    let mut sorted = items.to_vec();
    // `sort_by` is stable, ties keep their relative order.
    match key {
        SortKey::Recientes => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Antiguos => sorted.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::Destacados => sorted.sort_by(|a, b| b.featured.cmp(&a.featured)),
    }
    sorted
}

/// Newest posts first; equal dates keep their relative order.
pub fn sort_posts_by_date(items: &[BlogPost]) -> Vec<BlogPost> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// `"todos"` followed by each distinct label in first-seen order.
pub fn unique_categories<T: Listable>(items: &[T]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        for label in item.labels() {
            if !categories.iter().any(|c| c == label) {
                categories.push(label.to_string());
            }
        }
    }
    categories
}

pub fn unique_tags(items: &[BlogPost]) -> BTreeSet<String> {
    items
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect()
}

/// First `limit` posts by date, newest first.
pub fn recent_posts(items: &[BlogPost], limit: usize) -> Vec<BlogPost> {
    let mut sorted = sort_posts_by_date(items);
    sorted.truncate(limit);
    sorted
}

/// First `limit` featured works in collection order.
pub fn featured_works(items: &[PortfolioEntry], limit: usize) -> Vec<PortfolioEntry> {
    items
        .iter()
        .filter(|work| work.featured)
        .take(limit)
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{post, work};
    use super::*;
    use crate::catalog::models::Category;
    use crate::catalog::seed::sample_catalog;

    fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_filter_todos_returns_everything_in_order() {
        let works = sample_catalog().unwrap().works;
        assert_eq!(filter_by_category(&works, ALL_CATEGORIES), works);
    }

    #[test]
    fn test_filter_by_category_is_exact() {
        let works = vec![
            work(1, 2020, false, Category::Cine),
            work(2, 2021, false, Category::Television),
            work(3, 2022, false, Category::Cine),
        ];
        let cine = filter_by_category(&works, "cine");
        assert_eq!(ids(&cine, |w| w.id), vec![1, 3]);
        assert!(filter_by_category(&works, "Cine").is_empty());
        assert!(filter_by_category(&works, "cin").is_empty());
    }

    #[test]
    fn test_filter_posts_by_tag_membership() {
        let posts = vec![
            post(1, 1, &["experiencia", "televisión"]),
            post(2, 2, &["teatro"]),
            post(3, 3, &[]),
        ];
        let tv = filter_by_category(&posts, "televisión");
        assert_eq!(ids(&tv, |p| p.id), vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let works = sample_catalog().unwrap().works;
        let found = filter_by_search_term(&works, "ACA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Serie 'La Academia'");
    }

    #[test]
    fn test_search_matches_description_and_labels() {
        let works = sample_catalog().unwrap().works;
        assert_eq!(ids(&filter_by_search_term(&works, "juguetón"), |w| w.id), vec![3]);
        assert_eq!(ids(&filter_by_search_term(&works, "PUBLI"), |w| w.id), vec![3]);

        let posts = vec![post(1, 1, &["Aprendizaje"]), post(2, 2, &["otros"])];
        assert_eq!(ids(&filter_by_search_term(&posts, "aprend"), |p| p.id), vec![1]);
        assert_eq!(ids(&filter_by_search_term(&posts, "extracto 2"), |p| p.id), vec![2]);
    }

    #[test]
    fn test_blank_search_is_noop() {
        let works = sample_catalog().unwrap().works;
        assert_eq!(filter_by_search_term(&works, ""), works);
        assert_eq!(filter_by_search_term(&works, "   \t"), works);
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let mut academia = work(1, 2022, false, Category::Television);
        academia.title = "Academia".to_string();
        let works = vec![academia];

        assert!(filter_by_search_term(&works, "aca ").is_empty());
        assert!(filter_by_search_term(&works, " aca").is_empty());
        assert_eq!(ids(&filter_by_search_term(&works, "ACA"), |w| w.id), vec![1]);

        let mut spaced = work(2, 2022, false, Category::Teatro);
        spaced.title = "La Academia".to_string();
        assert_eq!(ids(&filter_by_search_term(&[spaced], " aca"), |w| w.id), vec![2]);
    }

    #[test]
    fn test_sort_destacados_is_stable() {
        let works = vec![
            work(1, 2020, false, Category::Cine),
            work(2, 2020, true, Category::Cine),
            work(3, 2020, false, Category::Cine),
            work(4, 2020, true, Category::Cine),
        ];
        let sorted = sort_works(&works, "destacados");
        assert_eq!(ids(&sorted, |w| w.id), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_by_year_is_stable() {
        let works = sample_catalog().unwrap().works;
        assert_eq!(ids(&sort_works(&works, "recientes"), |w| w.id), vec![1, 3, 2]);
        assert_eq!(ids(&sort_works(&works, "antiguos"), |w| w.id), vec![2, 1, 3]);
    }

    #[test]
    fn test_unknown_sort_key_is_noop() {
        let works = vec![
            work(1, 2019, false, Category::Cine),
            work(2, 2024, true, Category::Otros),
        ];
        assert_eq!(sort_works(&works, "popularidad"), works);
    }

    #[test]
    fn test_sort_key_round_trips_names() {
        for key in [SortKey::Recientes, SortKey::Antiguos, SortKey::Destacados] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("Recientes"), None);
    }

    #[test]
    fn test_sort_posts_by_date_desc_and_stable() {
        let posts = vec![post(1, 1, &[]), post(2, 5, &[]), post(3, 1, &[]), post(4, 3, &[])];
        assert_eq!(ids(&sort_posts_by_date(&posts), |p| p.id), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_unique_categories_from_tags() {
        let posts = vec![post(1, 1, &["experiencia", "televisión", "aprendizaje"])];
        assert_eq!(
            unique_categories(&posts),
            vec!["todos", "experiencia", "televisión", "aprendizaje"]
        );
    }

    #[test]
    fn test_unique_categories_first_seen_order() {
        let works = vec![
            work(1, 2020, false, Category::Teatro),
            work(2, 2020, false, Category::Cine),
            work(3, 2020, false, Category::Teatro),
        ];
        assert_eq!(unique_categories(&works), vec!["todos", "teatro", "cine"]);
        assert_eq!(unique_categories::<PortfolioEntry>(&[]), vec!["todos"]);
    }

    #[test]
    fn test_unique_tags_deduplicates() {
        let posts = vec![post(1, 1, &["a", "b"]), post(2, 2, &["b", "c"]), post(3, 3, &[])];
        let tags = unique_tags(&posts);
        assert_eq!(tags.len(), 3);
        assert!(tags.contains("c"));
    }

    #[test]
    fn test_recent_posts_and_featured_works() {
        let posts = vec![post(1, 1, &[]), post(2, 9, &[]), post(3, 4, &[]), post(4, 2, &[])];
        assert_eq!(ids(&recent_posts(&posts, 3), |p| p.id), vec![2, 3, 4]);

        let works = vec![
            work(1, 2020, true, Category::Cine),
            work(2, 2020, false, Category::Cine),
            work(3, 2020, true, Category::Cine),
            work(4, 2020, true, Category::Cine),
            work(5, 2020, true, Category::Cine),
        ];
        assert_eq!(ids(&featured_works(&works, 3), |w| w.id), vec![1, 3, 4]);
    }
}
