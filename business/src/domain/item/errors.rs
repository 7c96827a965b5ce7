use crate::domain::errors::{QueryError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.price_invalid")]
    InvalidPrice,
    #[error("item.not_found")]
    NotFound,
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ItemError {
    /// Folds a repository miss into the item's own `NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ItemError::NotFound,
        }
    }
}
