//! Table query request and normalized result

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::EntityRecord;

/// Soft error marker returned when a query succeeds with no rows
pub const EMPTY_RESULT_ERROR: &str = "Error fetching data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
}

/// Paging, sorting and search state of one table refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub page: usize,
    pub page_size: usize,
    pub order_by: Option<OrderBy>,
    pub order_direction: Option<SortDirection>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

impl QueryRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            order_by: None,
            order_direction: None,
            search: None,
        }
    }

    pub fn with_order(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
        });
        self.order_direction = Some(direction);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(())
    }

    /// Search term, if one is set and non-empty
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Number of rows to skip; zero on the first page
    pub fn skip(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

/// Normalized outcome of a table query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub data: Vec<EntityRecord>,
    pub page: usize,
    pub total_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    /// A successful page. `total_count` is the server count for the whole filter.
    pub fn page(mut data: Vec<EntityRecord>, page: usize, page_size: usize, total_count: u64) -> Self {
        data.truncate(page_size);
        Self {
            data,
            page,
            total_count,
            error: None,
        }
    }

    /// The query succeeded but matched nothing
    pub fn empty(page: usize) -> Self {
        Self {
            data: Vec::new(),
            page,
            total_count: 0,
            error: Some(EMPTY_RESULT_ERROR.to_string()),
        }
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        (self.total_count as usize).div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_is_page_times_size() {
        assert_eq!(QueryRequest::new(0, 5).skip(), 0);
        assert_eq!(QueryRequest::new(3, 5).skip(), 15);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(QueryRequest::new(0, 0).validate(), Err(QueryError::ZeroPageSize));
        assert!(QueryRequest::new(0, 1).validate().is_ok());
    }

    #[test]
    fn test_empty_search_is_no_search() {
        assert_eq!(QueryRequest::new(0, 5).with_search("").search_term(), None);
        assert_eq!(QueryRequest::new(0, 5).with_search("ab").search_term(), Some("ab"));
    }

    #[test]
    fn test_page_truncates_and_keeps_total() {
        let rows = vec![EntityRecord::new(); 7];
        let result = QueryResult::page(rows, 0, 5, 12);
        assert_eq!(result.data.len(), 5);
        assert_eq!(result.total_count, 12);
        assert_eq!(result.total_pages(5), 3);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_empty_marker() {
        let result = QueryResult::empty(2);
        assert_eq!(result.page, 2);
        assert_eq!(result.total_count, 0);
        assert_eq!(result.error.as_deref(), Some(EMPTY_RESULT_ERROR));
    }
}
