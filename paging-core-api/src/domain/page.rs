use tracing::debug;

use super::pagination::Pagination;
use super::slice::Slice;
use super::sort::Sort;
use crate::error::{PagingError, PagingResult};

/// Total element count implied by the shape of a fetched page, if any.
///
/// Returns `Some` when no count query is needed:
/// - the request was unpaginated, so the content is the whole collection;
/// - the first page came back shorter than the page size, so nothing follows it.
///
/// Returns `None` otherwise, including for a short page past the first one.
pub fn infer_total_elements(pagination: &Pagination, content_len: usize) -> Option<i64> {
    let content_len = content_len as i64;
    let Some(request) = pagination.page_request() else {
        return Some(content_len);
    };
    if i64::from(request.size()) > content_len && request.offset() == 0 {
        return Some(content_len);
    }
    None
}

/// A slice that also knows how many elements the whole collection holds.
///
/// # Example
/// ```
/// use paging_core_api::{Page, Pagination};
///
/// let page = Page::new(vec!["a", "b", "c"], Some(Pagination::of(0, 3).unwrap()), None, 10).unwrap();
/// assert_eq!(page.total_pages(), 4);
/// assert!(page.has_next());
/// assert!(page.is_first());
///
/// // a total smaller than the content is rejected
/// assert!(Page::with_total(vec![1, 2, 3], 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Page<T> {
    slice: Slice<T>,
    total_elements: i64,
}

impl<T> Page<T> {
    /// Create a new page
    ///
    /// # Arguments
    /// * `content` - The items in this page
    /// * `pagination` - The pagination used to fetch them, `None` for unpaginated
    /// * `sort` - The sort applied to them, `None` for unsorted
    /// * `total_elements` - Total number of items across all pages
    ///
    /// # Errors
    /// * `PagingError::InvalidArgument` - if `total_elements` is smaller than the content
    pub fn new(
        content: Vec<T>,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
        total_elements: i64,
    ) -> PagingResult<Self> {
        if total_elements < content.len() as i64 {
            return Err(PagingError::invalid(format!(
                "Total elements ({total_elements}) must not be less than the content size ({})",
                content.len()
            )));
        }
        Ok(Self {
            slice: Slice::new(content, pagination, sort),
            total_elements,
        })
    }

    /// Unpaginated, unsorted page with an explicit total
    pub fn with_total(content: Vec<T>, total_elements: i64) -> PagingResult<Self> {
        Self::new(content, None, None, total_elements)
    }

    /// Page holding the entire result set
    pub fn of(content: Vec<T>) -> Self {
        let total_elements = content.len() as i64;
        Self {
            slice: Slice::of(content),
            total_elements,
        }
    }

    /// Build a page, asking `total_elements` for the count only when it
    /// cannot be inferred from `content` and `pagination`.
    ///
    /// The supplier runs at most once. See [`infer_total_elements`] for the
    /// cases where it is skipped.
    ///
    /// # Example
    /// ```
    /// use paging_core_api::{Page, Pagination};
    ///
    /// let first = Pagination::of(0, 10).unwrap();
    /// let page = Page::deferred(vec!["a", "b"], Some(first), None, || unreachable!()).unwrap();
    /// assert_eq!(page.total_elements(), 2);
    ///
    /// let second = Pagination::of(1, 10).unwrap();
    /// let page = Page::deferred(vec!["k"], Some(second), None, || 11).unwrap();
    /// assert_eq!(page.total_elements(), 11);
    /// ```
    pub fn deferred<F>(
        content: Vec<T>,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
        total_elements: F,
    ) -> PagingResult<Self>
    where
        F: FnOnce() -> i64,
    {
        let pagination = pagination.unwrap_or_default();
        let total = match infer_total_elements(&pagination, content.len()) {
            Some(total) => {
                debug!(total, %pagination, "total elements inferred from page shape");
                total
            }
            None => {
                let total = total_elements();
                debug!(total, %pagination, "total elements supplied by count");
                total
            }
        };
        Self::new(content, Some(pagination), sort, total)
    }

    pub fn content(&self) -> &[T] {
        self.slice.content()
    }

    pub fn pagination(&self) -> &Pagination {
        self.slice.pagination()
    }

    pub fn sort(&self) -> &Sort {
        self.slice.sort()
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slice.iter()
    }

    /// Total number of items across all pages
    pub fn total_elements(&self) -> i64 {
        self.total_elements
    }

    /// Total number of pages, 1 when unpaginated
    pub fn total_pages(&self) -> i64 {
        match self.pagination().page_request() {
            Some(request) if request.size() > 0 => {
                let size = i64::from(request.size());
                self.total_elements / size + i64::from(self.total_elements % size != 0)
            }
            _ => 1,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_next(&self) -> bool {
        self.pagination()
            .page_request()
            .is_some_and(|request| i64::from(request.number()) + 1 < self.total_pages())
    }

    /// Check if there are pages before this one
    pub fn has_previous(&self) -> bool {
        self.pagination()
            .page_request()
            .is_some_and(|request| request.has_previous())
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn as_slice(&self) -> &Slice<T> {
        &self.slice
    }

    pub fn into_slice(self) -> Slice<T> {
        self.slice
    }

    pub fn into_content(self) -> Vec<T> {
        self.slice.into_content()
    }

    /// Transform every item, keeping order, length, pagination, sort and total.
    pub fn map<R, F>(&self, transform: F) -> Page<R>
    where
        F: FnMut(&T) -> R,
    {
        Page {
            slice: self.slice.map(transform),
            total_elements: self.total_elements,
        }
    }
}

impl<T> From<Page<T>> for Slice<T> {
    fn from(page: Page<T>) -> Self {
        page.slice
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Page;
    use crate::domain::pagination::Pagination;
    use crate::domain::sort::Sort;

    #[derive(Deserialize)]
    struct RawPage<T> {
        content: Vec<T>,
        #[serde(default)]
        pagination: Pagination,
        #[serde(default)]
        sort: Sort,
        total_elements: i64,
    }

    impl<T: Serialize> Serialize for Page<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Page", 5)?;
            state.serialize_field("content", self.content())?;
            state.serialize_field("pagination", self.pagination())?;
            state.serialize_field("sort", self.sort())?;
            state.serialize_field("total_elements", &self.total_elements)?;
            state.serialize_field("total_pages", &self.total_pages())?;
            state.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawPage::<T>::deserialize(deserializer)?;
            Page::new(raw.content, Some(raw.pagination), Some(raw.sort), raw.total_elements)
                .map_err(D::Error::custom)
        }
    }
}
