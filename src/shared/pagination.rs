use serde::Serialize;

pub const DEFAULT_PAGE_INDEX: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_size: u64,
    pub total_item: u64,
    pub current_page: u64,
    pub max_page_size: u64,
    pub total_page: u64,
}

/// Page metadata for `count` rows. The page size is clamped to
/// [`MAX_PAGE_SIZE`] before the page count is derived.
pub fn calculate_pagination(count: u64, page_size: u64, page_index: u64) -> Pagination {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

    Pagination {
        page_size,
        total_item: count,
        current_page: page_index,
        max_page_size: MAX_PAGE_SIZE,
        total_page: count.div_ceil(page_size),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("Page index must be a positive integer")]
    InvalidPageIndex,

    #[error("Page size must be a positive integer")]
    InvalidPageSize,
}

/// Validated `page_index` / `page_size` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u64,
    page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: DEFAULT_PAGE_INDEX,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_index: u64, page_size: u64) -> Result<Self, PageRequestError> {
        if page_index == 0 {
            return Err(PageRequestError::InvalidPageIndex);
        }
        if page_size == 0 {
            return Err(PageRequestError::InvalidPageSize);
        }
        let page_size = page_size.min(MAX_PAGE_SIZE);

        // The row offset has to fit a signed 64-bit OFFSET.
        match (page_index - 1).checked_mul(page_size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(PageRequestError::InvalidPageIndex),
        }

        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// Parses raw query-string values, applying defaults for absent ones.
    pub fn parse(
        page_index: Option<&str>,
        page_size: Option<&str>,
    ) -> Result<Self, PageRequestError> {
        let page_index = match page_index {
            Some(raw) => parse_positive(raw).ok_or(PageRequestError::InvalidPageIndex)?,
            None => DEFAULT_PAGE_INDEX,
        };
        let page_size = match page_size {
            Some(raw) => parse_positive(raw).ok_or(PageRequestError::InvalidPageSize)?,
            None => DEFAULT_PAGE_SIZE,
        };

        Self::new(page_index, page_size)
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page_index - 1).saturating_mul(self.page_size)
    }

    pub fn pagination(&self, count: u64) -> Pagination {
        calculate_pagination(count, self.page_size, self.page_index)
    }
}

fn parse_positive(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|v| *v > 0)
}

/// Page of rows plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
