//! Catalog Models - portfolio entries, blog posts and media assets held by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier shared by every catalog collection.
pub type EntityId = i64;

/// Portfolio work category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cine,
    Television,
    Publicidad,
    Teatro,
    Otros,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Cine,
        Category::Television,
        Category::Publicidad,
        Category::Teatro,
        Category::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cine => "cine",
            Category::Television => "television",
            Category::Publicidad => "publicidad",
            Category::Teatro => "teatro",
            Category::Otros => "otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio entry (a work the performer took part in)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub id: EntityId,
    pub title: String,
    pub role: String,
    pub year: i32,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// New portfolio entry as submitted by the admin form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDraft {
    pub title: String,
    pub role: String,
    pub year: i32,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl PortfolioDraft {
    pub(crate) fn finalize(self, id: EntityId, created_at: DateTime<Utc>) -> PortfolioEntry {
        PortfolioEntry {
            id,
            title: self.title,
            role: self.role,
            year: self.year,
            description: self.description,
            category: self.category,
            featured: self.featured,
            image: self.image.filter(|url| !url.trim().is_empty()),
            video_url: self.video_url.filter(|url| !url.trim().is_empty()),
            created_at: Some(created_at),
        }
    }
}

/// Blog post model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    pub excerpt: String,
    /// Markup stored verbatim; see `content::sanitize_content` before rendering.
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// New blog post for creation.
///
/// `date` and `published` are not part of the draft: the store always stamps
/// them, so any such keys in incoming JSON are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl BlogDraft {
    pub(crate) fn finalize(self, id: EntityId, date: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            image: self.image.filter(|url| !url.trim().is_empty()),
            date,
            tags: self.tags,
            published: true,
            created_at: Some(date),
        }
    }
}

/// Uploaded media asset. Everything besides `id` and `uploadedAt` is carried
/// over from the draft untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: EntityId,
    pub uploaded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// New media asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDraft {
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl MediaDraft {
    pub(crate) fn finalize(mut self, id: EntityId, uploaded_at: DateTime<Utc>) -> MediaAsset {
        // Store-owned keys win over anything the draft carried.
        self.metadata.remove("id");
        self.metadata.remove("uploadedAt");
        MediaAsset {
            id,
            uploaded_at,
            metadata: self.metadata,
        }
    }
}
