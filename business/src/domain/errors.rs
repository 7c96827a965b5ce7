/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
}

/// Rejections raised while building a listing query from raw request values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("query.offset_negative")]
    NegativeOffset,
    #[error("query.limit_not_positive")]
    LimitNotPositive,
    #[error("query.price_not_positive")]
    PriceNotPositive,
    #[error("query.quantity_negative")]
    NegativeQuantity,
}
