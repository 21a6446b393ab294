//! Draft checks the admin forms run before handing a draft to the store.
//!
//! The store itself never calls these; it accepts whatever it is given. The
//! `submit_*` helpers are the form path: validate, then add.

use chrono::{Datelike, Utc};

use crate::catalog::models::{BlogDraft, BlogPost, PortfolioDraft, PortfolioEntry};
use crate::catalog::CatalogStore;
use crate::error::{CatalogError, ValidationError};

pub const MIN_YEAR: i32 = 2000;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

impl PortfolioDraft {
    /// First failing rule, checked in the order the form reports them.
    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.role.trim().is_empty() {
            return Err(ValidationError::MissingRole);
        }
        let max = current_year + 1;
        if self.year < MIN_YEAR || self.year > max {
            return Err(ValidationError::InvalidYear {
                year: self.year,
                max,
            });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooShort {
                min: MIN_DESCRIPTION_CHARS,
            });
        }
        Ok(())
    }

    pub fn validate_now(&self) -> Result<(), ValidationError> {
        self.validate(Utc::now().year())
    }
}

impl BlogDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.excerpt.trim().is_empty() {
            return Err(ValidationError::MissingExcerpt);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }
}

/// Validate against the current year, then add the entry to the store.
pub async fn submit_portfolio_entry(
    store: &CatalogStore,
    draft: PortfolioDraft,
) -> Result<PortfolioEntry, CatalogError> {
    if let Err(e) = draft.validate_now() {
        tracing::debug!(error = %e, "portfolio draft rejected");
        return Err(e.into());
    }
    store.add_portfolio_entry(draft).await
}

pub async fn submit_blog_post(
    store: &CatalogStore,
    draft: BlogDraft,
) -> Result<BlogPost, CatalogError> {
    if let Err(e) = draft.validate() {
        tracing::debug!(error = %e, "blog draft rejected");
        return Err(e.into());
    }
    store.add_blog_post(draft).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::backend::SampleBackend;
    use crate::catalog::models::Category;
    use std::sync::Arc;
    use std::time::Duration;

    fn draft() -> PortfolioDraft {
        PortfolioDraft {
            title: "Cortometraje".to_string(),
            role: "Protagonista".to_string(),
            year: 2025,
            description: "Un cortometraje escolar".to_string(),
            category: Category::Cine,
            featured: false,
            image: None,
            video_url: None,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(draft().validate(2025), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_rejected_in_order() {
        let mut d = draft();
        d.title = "   ".to_string();
        d.role = String::new();
        assert_eq!(d.validate(2025), Err(ValidationError::MissingTitle));
        d.title = "Obra".to_string();
        assert_eq!(d.validate(2025), Err(ValidationError::MissingRole));
    }

    #[test]
    fn test_year_bounds() {
        let mut d = draft();
        d.year = 2026;
        assert!(d.validate(2025).is_ok());
        d.year = 2027;
        assert_eq!(
            d.validate(2025),
            Err(ValidationError::InvalidYear { year: 2027, max: 2026 })
        );
        d.year = 1999;
        assert!(matches!(d.validate(2025), Err(ValidationError::InvalidYear { .. })));
        d.year = MIN_YEAR;
        assert!(d.validate(2025).is_ok());
    }

    #[test]
    fn test_description_length_counts_chars() {
        let mut d = draft();
        d.description = "corto".to_string();
        assert_eq!(
            d.validate(2025),
            Err(ValidationError::DescriptionTooShort { min: 10 })
        );
        d.description = "áéíóúñáéíó".to_string();
        assert!(d.validate(2025).is_ok());
    }

    #[test]
    fn test_blog_draft_requires_text() {
        let mut post = BlogDraft {
            title: "Título".to_string(),
            excerpt: "Extracto".to_string(),
            content: "<p>Hola</p>".to_string(),
            tags: vec![],
            image: None,
        };
        assert!(post.validate().is_ok());
        post.content = " ".to_string();
        assert_eq!(post.validate(), Err(ValidationError::MissingContent));
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_draft_without_touching_store() {
        let store = CatalogStore::open(Arc::new(SampleBackend::new(Duration::ZERO))).await;
        let before = store.snapshot();

        let mut d = draft();
        d.year = Utc::now().year() + 2;
        let err = submit_portfolio_entry(&store, d).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::InvalidYear { .. })
        ));

        let err = submit_blog_post(
            &store,
            BlogDraft {
                title: "Sin extracto".to_string(),
                excerpt: String::new(),
                content: "<p>Hola</p>".to_string(),
                tags: vec![],
                image: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::MissingExcerpt)
        ));

        let after = store.snapshot();
        assert!(Arc::ptr_eq(&before.works, &after.works));
        assert!(Arc::ptr_eq(&before.posts, &after.posts));
    }

    #[tokio::test]
    async fn test_submit_adds_valid_draft() {
        let store = CatalogStore::open(Arc::new(SampleBackend::new(Duration::ZERO))).await;
        let mut d = draft();
        d.year = Utc::now().year();
        let entry = submit_portfolio_entry(&store, d).await.unwrap();
        assert_eq!(store.snapshot().works[0].id, entry.id);
    }
}
