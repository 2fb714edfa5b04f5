use serde::{Deserialize, Serialize};

/// One page of a collection plus the size of the whole collection.
///
/// Missing `items` or `totalCount` fields decode as empty/zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> PagedResult<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Paging and sorting fields shared by every list query.
///
/// All fields are optional; absent fields are not sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedAndSortedQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_result_count: Option<u32>,
}

impl PagedAndSortedQuery {
    /// Query for the page with the given zero-based index.
    #[must_use]
    pub fn page(index: u32, size: u32) -> Self {
        Self {
            sorting: None,
            skip_count: Some(index.saturating_mul(size)),
            max_result_count: Some(size),
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, sorting: impl Into<String>) -> Self {
        self.sorting = Some(sorting.into());
        self
    }
}
