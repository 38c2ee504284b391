use serde::Serialize;

use super::error::FilterError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Clamped page/limit pair. `page` below 1 clamps to 1; `limit` outside
/// 1..=100 falls back to the default of 10 rather than saturating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page };
        let limit = if limit < 1 || limit > MAX_LIMIT {
            DEFAULT_LIMIT
        } else {
            limit
        };
        Self { page, limit }
    }

    /// Parse raw query-string values. Absent values take defaults; a value
    /// that is not an integer is a client error, not a silent default.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Result<Self, FilterError> {
        let page = match page {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| FilterError::InvalidPage(raw.to_string()))?,
            None => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| FilterError::InvalidLimit(raw.to_string()))?,
            None => DEFAULT_LIMIT,
        };
        Ok(Self::new(page, limit))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }

    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: self.total_pages(total),
        }
    }
}

/// Pagination block returned alongside every todo listing
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}
