//! Error types shared by the catalog store and the draft validators.

use thiserror::Error;

/// Which collection a failed write was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Portfolio,
    Blog,
    Media,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Portfolio => write!(f, "portfolio"),
            Collection::Blog => write!(f, "blog"),
            Collection::Media => write!(f, "media"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The initial population could not complete.
    #[error("failed to load catalog: {0}")]
    LoadFailure(String),

    /// An add operation was refused by the backend; nothing was stored.
    #[error("failed to write {collection} entry: {reason}")]
    RemoteWrite {
        collection: Collection,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Draft rejected before it reaches the store. Messages are the ones shown by
/// the admin forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El título es obligatorio")]
    MissingTitle,
    #[error("El rol es obligatorio")]
    MissingRole,
    #[error("El año debe ser válido")]
    InvalidYear { year: i32, max: i32 },
    #[error("La descripción es obligatoria")]
    MissingDescription,
    #[error("La descripción debe tener al menos {min} caracteres")]
    DescriptionTooShort { min: usize },
    #[error("El extracto es obligatorio")]
    MissingExcerpt,
    #[error("El contenido es obligatorio")]
    MissingContent,
}
