//! Offset/limit page windowing shared by every list-returning service.
//!
//! Services fetch the full ordered collection, map it to response items and
//! hand the result to [`paginate`], which cuts out one contiguous window and
//! reports the pre-slice total. A window starting past the end of the data is
//! rejected with [`DomainError::PageExceeded`].

use super::errors::{DomainError, DomainResult};

/// Requested page window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Clamps the inputs to sane bounds: page >= 1, size in 1..=100.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, 100),
        }
    }

    pub fn offset(&self) -> usize {
        // usize arithmetic; u32 would overflow for large page numbers
        (self.page.saturating_sub(1) as usize) * self.size as usize
    }

    pub fn limit(&self) -> usize {
        self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: 20 }
    }
}

/// One page slice plus the size of the full collection it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

/// Cut one page window out of an already-ordered collection.
///
/// `start = offset`, `end = min(offset + limit, len)`. An offset strictly
/// beyond the collection length fails with `PageExceeded` before any slicing
/// happens; `offset == len` (including the empty collection with page 1) is a
/// valid empty page. Pure function of its inputs.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> DomainResult<PageResult<T>> {
    let total = items.len();
    let start = request.offset();
    let end = (start + request.limit()).min(total);

    if start > end {
        return Err(DomainError::PageExceeded {
            offset: start,
            total,
        });
    }

    let items = items
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    Ok(PageResult {
        items,
        total_count: total,
    })
}

// ── Tests ──────────────────────────────────────────────────────
