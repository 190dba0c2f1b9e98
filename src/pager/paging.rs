use serde::{Deserialize, Serialize};

use super::PagerError;

/// Paging state of a list already split into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagingState")]
pub struct PagingState {
    total_item_count: i64,
    page_size: i64,
    current_page_index: i64,
}

/// Unvalidated shape accepted from templates and query strings.
#[derive(Deserialize)]
struct RawPagingState {
    total_item_count: i64,
    page_size: i64,
    #[serde(default = "first_page")]
    current_page_index: i64,
}

fn first_page() -> i64 {
    1
}

impl TryFrom<RawPagingState> for PagingState {
    type Error = PagerError;

    fn try_from(raw: RawPagingState) -> Result<Self, Self::Error> {
        Self::new(raw.total_item_count, raw.page_size, raw.current_page_index)
    }
}

impl PagingState {
    /// Validate a paging model. A page index below 1 is treated as page 1.
    pub fn new(
        total_item_count: i64,
        page_size: i64,
        current_page_index: i64,
    ) -> Result<Self, PagerError> {
        if total_item_count < 0 {
            return Err(PagerError::NegativeItemCount(total_item_count));
        }
        if page_size <= 0 {
            return Err(PagerError::InvalidPageSize(page_size));
        }
        Ok(Self {
            total_item_count,
            page_size,
            current_page_index: current_page_index.max(1),
        })
    }

    pub fn total_item_count(&self) -> i64 {
        self.total_item_count
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn current_page_index(&self) -> i64 {
        self.current_page_index
    }

    /// `ceil(total_item_count / page_size)`, never less than 1.
    pub fn total_pages(&self) -> i64 {
        let full = self.total_item_count / self.page_size;
        let partial = i64::from(self.total_item_count % self.page_size != 0);
        (full + partial).max(1)
    }
}

/// One page of items together with its paging state.
#[derive(Debug, Clone, Serialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub paging: PagingState,
}

impl<T> PagedList<T> {
    /// Slice `items` to page `page_index` (1-based) of `page_size` entries.
    /// An index past the end yields an empty page; the pager clamps it when rendering.
    pub fn from_items(items: Vec<T>, page_index: i64, page_size: i64) -> Result<Self, PagerError> {
        let paging = PagingState::new(items.len() as i64, page_size, page_index)?;
        let skip = (paging.current_page_index() - 1).saturating_mul(page_size);
        let items = items
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(page_size as usize)
            .collect();
        Ok(Self { items, paging })
    }

    pub fn paging(&self) -> &PagingState {
        &self.paging
    }
}
