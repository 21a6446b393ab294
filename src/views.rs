/**
 * View Models
 * Data the site's pages render, derived from a catalog snapshot
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::models::{BlogPost, Category, EntityId, PortfolioEntry};
use crate::catalog::CatalogSnapshot;
use crate::config::CatalogConfig;
use crate::content::{preview, sanitize_content};
use crate::query::listing::{blog_listing, portfolio_listing, Listing, ListingCriteria};
use crate::query::{featured_works, recent_posts};

// ============================================================================
// Portfolio
// ============================================================================

/// Figures shown above the portfolio gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total: usize,
    pub featured: usize,
    pub distinct_years: usize,
    pub distinct_categories: usize,
}

impl PortfolioStats {
    pub fn from_works(works: &[PortfolioEntry]) -> Self {
        Self {
            total: works.len(),
            featured: works.iter().filter(|w| w.featured).count(),
            distinct_years: works.iter().map(|w| w.year).collect::<HashSet<_>>().len(),
            distinct_categories: works
                .iter()
                .map(|w| w.category)
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPage {
    pub loading: bool,
    pub stats: PortfolioStats,
    pub listing: Listing<PortfolioEntry>,
}

pub fn portfolio_page(snapshot: &CatalogSnapshot, criteria: &ListingCriteria) -> PortfolioPage {
    PortfolioPage {
        loading: snapshot.is_loading(),
        stats: PortfolioStats::from_works(&snapshot.works),
        listing: portfolio_listing(&snapshot.works, criteria),
    }
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub loading: bool,
    pub listing: Listing<BlogPost>,
    pub recent_posts: Vec<BlogPost>,
    pub total_posts: usize,
    /// Distinct tags, not counting the `"todos"` sentinel.
    pub category_count: usize,
}

pub fn blog_page(
    snapshot: &CatalogSnapshot,
    criteria: &ListingCriteria,
    config: &CatalogConfig,
) -> BlogPage {
    let listing = blog_listing(&snapshot.posts, criteria);
    let category_count = listing.categories.len().saturating_sub(1);
    BlogPage {
        loading: snapshot.is_loading(),
        recent_posts: recent_posts(&snapshot.posts, config.recent_posts),
        total_posts: snapshot.posts.len(),
        category_count,
        listing,
    }
}

// ============================================================================
// Home
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub featured_works: Vec<PortfolioEntry>,
}

pub fn home_page(snapshot: &CatalogSnapshot, config: &CatalogConfig) -> HomePage {
    HomePage {
        loading: snapshot.is_loading(),
        error: snapshot.error().map(str::to_string),
        featured_works: featured_works(&snapshot.works, config.featured_works),
    }
}

// ============================================================================
// Admin dashboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Work,
    Post,
    Media,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub id: EntityId,
    pub title: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_works: usize,
    pub total_posts: usize,
    pub total_media: usize,
    pub recent_activity: Vec<Activity>,
}

fn media_title(metadata: &serde_json::Map<String, serde_json::Value>) -> String {
    ["title", "name", "filename"]
        .iter()
        .find_map(|key| metadata.get(*key).and_then(|v| v.as_str()))
        .unwrap_or("Archivo multimedia")
        .to_string()
}

/// Totals and the latest events across all collections, newest first.
/// Seed works and posts carry no creation time and never show up as activity.
pub fn dashboard(snapshot: &CatalogSnapshot, activity_limit: usize) -> DashboardStats {
    let works = snapshot.works.iter().filter_map(|w| {
        w.created_at.map(|at| Activity {
            kind: ActivityKind::Work,
            id: w.id,
            title: w.title.clone(),
            at,
        })
    });
    let posts = snapshot.posts.iter().filter_map(|p| {
        p.created_at.map(|at| Activity {
            kind: ActivityKind::Post,
            id: p.id,
            title: p.title.clone(),
            at,
        })
    });
    let media = snapshot.media.iter().map(|m| Activity {
        kind: ActivityKind::Media,
        id: m.id,
        title: media_title(&m.metadata),
        at: m.uploaded_at,
    });

    let mut recent_activity: Vec<Activity> = works.chain(posts).chain(media).collect();
    // Ids grow with creation order, so they settle same-instant ties.
    recent_activity.sort_by(|a, b| b.at.cmp(&a.at).then(b.id.cmp(&a.id)));
    recent_activity.truncate(activity_limit);

    DashboardStats {
        total_works: snapshot.works.len(),
        total_posts: snapshot.posts.len(),
        total_media: snapshot.media.len(),
        recent_activity,
    }
}

// ============================================================================
// Admin lists
// ============================================================================

/// Characters of description shown per row of the admin work list.
pub const ADMIN_PREVIEW_CHARS: usize = 100;

/// One row of the admin portfolio table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRow {
    pub id: EntityId,
    pub title: String,
    pub role: String,
    pub year: i32,
    pub category: Category,
    pub featured: bool,
    pub description_preview: String,
}

/// Every work in store order with a shortened description.
pub fn admin_work_list(snapshot: &CatalogSnapshot) -> Vec<WorkRow> {
    snapshot
        .works
        .iter()
        .map(|w| WorkRow {
            id: w.id,
            title: w.title.clone(),
            role: w.role.clone(),
            year: w.year,
            category: w.category,
            featured: w.featured,
            description_preview: preview(&w.description, ADMIN_PREVIEW_CHARS),
        })
        .collect()
}

/// Single post ready for display, markup sanitized
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: EntityId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub content_html: String,
}

pub fn post_detail(snapshot: &CatalogSnapshot, id: EntityId) -> Option<PostDetail> {
    snapshot.posts.iter().find(|p| p.id == id).map(|p| PostDetail {
        id: p.id,
        title: p.title.clone(),
        date: p.date,
        tags: p.tags.clone(),
        image: p.image.clone(),
        content_html: sanitize_content(&p.content),
    })
}
