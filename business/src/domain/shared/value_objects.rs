use crate::domain::errors::QueryError;

pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_LIMIT: usize = 10;

/// Offset/limit window over an insertion-ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: usize,
    limit: usize,
}

impl Page {
    pub fn new(offset: usize, limit: usize) -> Result<Self, QueryError> {
        if limit == 0 {
            return Err(QueryError::LimitNotPositive);
        }
        Ok(Self { offset, limit })
    }

    /// Builds a page from raw request values, applying the defaults for
    /// missing ones.
    pub fn from_raw(offset: Option<i64>, limit: Option<i64>) -> Result<Self, QueryError> {
        let offset = match offset {
            Some(o) if o < 0 => return Err(QueryError::NegativeOffset),
            Some(o) => usize::try_from(o).unwrap_or(usize::MAX),
            None => DEFAULT_OFFSET,
        };
        let limit = match limit {
            Some(l) if l <= 0 => return Err(QueryError::LimitNotPositive),
            Some(l) => usize::try_from(l).unwrap_or(usize::MAX),
            None => DEFAULT_LIMIT,
        };
        Self::new(offset, limit)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Inclusive price bounds. Each bound, when present, must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, QueryError> {
        for bound in [min, max].into_iter().flatten() {
            if bound.is_nan() || bound <= 0.0 {
                return Err(QueryError::PriceNotPositive);
            }
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// Exclusive bounds on the total number of units in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantityRange {
    min: Option<u64>,
    max: Option<u64>,
}

impl QuantityRange {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    pub fn from_raw(min: Option<i64>, max: Option<i64>) -> Result<Self, QueryError> {
        let convert = |bound: Option<i64>| -> Result<Option<u64>, QueryError> {
            bound
                .map(|b| u64::try_from(b).map_err(|_| QueryError::NegativeQuantity))
                .transpose()
        };
        Ok(Self::new(convert(min)?, convert(max)?))
    }

    pub fn contains(&self, quantity: u64) -> bool {
        self.min.is_none_or(|min| quantity > min) && self.max.is_none_or(|max| quantity < max)
    }
}
