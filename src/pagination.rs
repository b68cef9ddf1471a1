//! Page requests and assembled pages of query results.
//!
//! [`Page::assemble`] decides whether the total row count can be derived from
//! the page that was just loaded or whether a count query has to run.

use log::debug;
use serde::Serialize;

/// Zero-based page request; `Unpaged` loads every matching row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageRequest {
    Paged { page: usize, size: usize },
    Unpaged,
}

impl PageRequest {
    /// Request page `page` (zero-based) holding at most `size` rows.
    pub fn of(page: usize, size: usize) -> Self {
        Self::Paged { page, size }
    }

    pub fn unpaged() -> Self {
        Self::Unpaged
    }

    pub fn is_paged(&self) -> bool {
        matches!(self, Self::Paged { .. })
    }

    /// Number of rows skipped before this page starts.
    pub fn offset(&self) -> usize {
        match *self {
            Self::Paged { page, size } => page.saturating_mul(size),
            Self::Unpaged => 0,
        }
    }

    /// Page size, `None` when unpaged.
    pub fn size(&self) -> Option<usize> {
        match *self {
            Self::Paged { size, .. } => Some(size),
            Self::Unpaged => None,
        }
    }

    pub fn page_number(&self) -> usize {
        match *self {
            Self::Paged { page, .. } => page,
            Self::Unpaged => 0,
        }
    }

    /// `(offset, limit)` pair ready for the query builder.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match *self {
            Self::Paged { size, .. } => Some((to_i64(self.offset()), to_i64(size))),
            Self::Unpaged => None,
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// One page of rows plus the total number of rows matching the unbounded query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total: usize) -> Self {
        Self {
            content,
            request,
            total,
        }
    }

    /// Builds a page, calling `count` only when the total cannot be inferred.
    ///
    /// The total is taken from the content when the request is unpaged, when
    /// the first page is under-full, or when a later page is non-empty and
    /// under-full. Every other case runs `count`; its error is returned as is.
    pub fn assemble<E, F>(content: Vec<T>, request: PageRequest, count: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<usize, E>,
    {
        let len = content.len();
        let total = match request {
            PageRequest::Unpaged => {
                debug!("unpaged request, total taken from {len} rows");
                len
            }
            PageRequest::Paged { size, .. } if request.offset() == 0 && len < size => {
                debug!("first page under-full, total is {len}");
                len
            }
            PageRequest::Paged { size, .. } if request.offset() > 0 && len > 0 && len < size => {
                let total = request.offset() + len;
                debug!("last page under-full, total is {total}");
                total
            }
            PageRequest::Paged { .. } => {
                debug!("total cannot be inferred, running count query");
                count()?
            }
        };
        Ok(Self::new(content, request, total))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of pages needed for `total`; a zero-sized or unpaged request is one page.
    pub fn total_pages(&self) -> usize {
        match self.request.size() {
            Some(size) if size > 0 => self.total.div_ceil(size),
            _ => 1,
        }
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.request.page_number() > 0
    }

    pub fn has_next(&self) -> bool {
        self.request.page_number().saturating_add(1) < self.total_pages()
    }

    /// Converts the rows while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total: self.total,
        }
    }
}
