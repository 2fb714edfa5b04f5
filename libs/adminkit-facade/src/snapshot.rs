use adminkit_dto::PagedResult;

/// In-memory view of one entity kind.
///
/// `S` holds the kind's side-channel data (statistics, template content,
/// connection strings). Fetched values replace slots wholesale; fields are
/// never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T, S = ()> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub selected: Option<T>,
    pub side: S,
}

impl<T, S: Default> Default for Snapshot<T, S> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            selected: None,
            side: S::default(),
        }
    }
}

impl<T: Clone, S> Snapshot<T, S> {
    /// Replace the current page with `page`.
    pub fn replace_page(&mut self, page: &PagedResult<T>) {
        self.items.clone_from(&page.items);
        self.total_count = page.total_count;
    }
}

/// Snapshot plus the loading and error flags observed by consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct FacadeState<T, S = ()> {
    pub snapshot: Snapshot<T, S>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T, S: Default> Default for FacadeState<T, S> {
    fn default() -> Self {
        Self {
            snapshot: Snapshot::default(),
            is_loading: false,
            error: None,
        }
    }
}
