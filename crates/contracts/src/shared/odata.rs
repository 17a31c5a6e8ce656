//! OData query-string construction
//!
//! URLs are assembled from an ordered list of `$option=value` clauses rather
//! than by string concatenation, so any combination of sort, filter and skip
//! yields a well-formed query.

use super::query::{QueryError, QueryRequest};

/// Ordered `$option=value` clauses of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ODataQuery {
    clauses: Vec<(&'static str, String)>,
}

impl ODataQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause. The value is percent-encoded on output.
    pub fn push(&mut self, option: &'static str, value: impl Into<String>) -> &mut Self {
        self.clauses.push((option, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn get(&self, option: &str) -> Option<&str> {
        self.clauses
            .iter()
            .find(|(o, _)| *o == option)
            .map(|(_, v)| v.as_str())
    }

    /// `a=1&b=2`, in insertion order
    pub fn to_query_string(&self) -> String {
        self.clauses
            .iter()
            .map(|(option, value)| format!("{}={}", option, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Attach the clauses to a URL: the first with `?`, the rest with `&`
    pub fn apply_to(&self, url: &str) -> String {
        if self.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, self.to_query_string())
        }
    }
}

/// URLs of one entity collection on the remote API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionUrl {
    base: String,
}

impl CollectionUrl {
    /// `api_base` without trailing slash, `collection_path` like `/Vendors`
    pub fn new(api_base: &str, collection_path: &str) -> Self {
        Self {
            base: format!("{}{}", api_base.trim_end_matches('/'), collection_path),
        }
    }

    pub fn collection(&self) -> &str {
        &self.base
    }

    pub fn count(&self) -> String {
        format!("{}/$count", self.base)
    }

    /// `{base}({id})`
    pub fn item(&self, id: &str) -> String {
        format!("{}({})", self.base, urlencoding::encode(id))
    }
}

/// Count and data URLs for one table refresh, sharing one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrls {
    pub count: String,
    pub data: String,
}

/// `contains(field,'term')` with the term quoted as an OData string literal
pub fn contains_filter(field: &str, term: &str) -> String {
    format!("contains({},'{}')", field, term.replace('\'', "''"))
}

/// Build the count and data URLs for a query.
///
/// Data clauses, in order: `$orderby` if sorted, `$filter` if searching,
/// `$skip` past the first page. The count URL carries the same `$filter`.
pub fn build_query_urls(
    collection: &CollectionUrl,
    search_field: &str,
    request: &QueryRequest,
) -> Result<QueryUrls, QueryError> {
    request.validate()?;

    let filter = request
        .search_term()
        .map(|term| contains_filter(search_field, term));

    let mut data = ODataQuery::new();
    if let Some(order_by) = &request.order_by {
        let clause = match request.order_direction {
            Some(direction) => format!("{} {}", order_by.field, direction.as_str()),
            None => order_by.field.clone(),
        };
        data.push("$orderby", clause);
    }
    if let Some(filter) = &filter {
        data.push("$filter", filter.clone());
    }
    if request.page > 0 {
        data.push("$skip", request.skip().to_string());
    }

    let mut count = ODataQuery::new();
    if let Some(filter) = filter {
        count.push("$filter", filter);
    }

    Ok(QueryUrls {
        count: count.apply_to(&collection.count()),
        data: data.apply_to(collection.collection()),
    })
}
