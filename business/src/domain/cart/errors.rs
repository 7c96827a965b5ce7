use crate::domain::errors::{QueryError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("item.not_found")]
    ItemNotFound,
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    /// Folds a repository miss into the cart's own `NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => CartError::NotFound,
        }
    }
}
