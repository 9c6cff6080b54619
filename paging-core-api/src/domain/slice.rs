use super::pagination::Pagination;
use super::sort::Sort;

/// A materialized subset of a collection together with the pagination and
/// sort that produced it.
///
/// A slice does not know how large the whole collection is; see
/// [`Page`](super::page::Page) for that.
///
/// The content vector is moved in on construction and only handed out as
/// `&[T]` (or given back by [`Slice::into_content`]), so the slice can never
/// be observed changing.
///
/// # Example
/// ```
/// use paging_core_api::{Pagination, Slice};
///
/// let slice = Slice::new(vec![1, 2, 3], Some(Pagination::of(0, 3).unwrap()), None);
/// let doubled = slice.map(|n| n * 2);
/// assert_eq!(doubled.content(), [2, 4, 6]);
/// assert_eq!(doubled.pagination(), slice.pagination());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice<T> {
    content: Vec<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    pagination: Pagination,
    #[cfg_attr(feature = "serde", serde(default))]
    sort: Sort,
}

impl<T> Slice<T> {
    /// Create a new slice
    ///
    /// # Arguments
    /// * `content` - The items in this slice
    /// * `pagination` - The pagination used to fetch them, `None` for unpaginated
    /// * `sort` - The sort applied to them, `None` for unsorted
    pub fn new(content: Vec<T>, pagination: Option<Pagination>, sort: Option<Sort>) -> Self {
        Self {
            content,
            pagination: pagination.unwrap_or_default(),
            sort: sort.unwrap_or_default(),
        }
    }

    /// Unpaginated, unsorted slice over `content`
    pub fn of(content: Vec<T>) -> Self {
        Self::new(content, None, None)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Transform every item, keeping order, length, pagination and sort.
    ///
    /// The transform runs eagerly, once per item, in content order.
    pub fn map<R, F>(&self, transform: F) -> Slice<R>
    where
        F: FnMut(&T) -> R,
    {
        Slice {
            content: self.content.iter().map(transform).collect(),
            pagination: self.pagination,
            sort: self.sort.clone(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}
