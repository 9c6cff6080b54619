use std::fmt;

use crate::error::{PagingError, PagingResult};

/// A validated page number and page size.
///
/// The page number is zero-based and never negative; the size is at least 1.
///
/// # Example
/// ```
/// use paging_core_api::PageRequest;
///
/// let page = PageRequest::new(2, 20).unwrap(); // third page of 20
/// assert_eq!(page.offset(), 40);
/// assert_eq!(page.next().unwrap().number(), 3);
/// assert!(PageRequest::new(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    number: i32,
    size: i32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: i32 = 20;

    /// Create a new page request
    ///
    /// # Arguments
    /// * `number` - Zero-based page number, must be >= 0
    /// * `size` - Number of items per page, must be >= 1
    pub fn new(number: i32, size: i32) -> PagingResult<Self> {
        if number < 0 {
            return Err(PagingError::invalid("Page number must not be negative"));
        }
        if size < 1 {
            return Err(PagingError::invalid("Page size must be at least 1"));
        }
        Ok(Self { number, size })
    }

    pub fn first_page(size: i32) -> PagingResult<Self> {
        Self::new(0, size)
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of items to skip before this page begins
    pub fn offset(&self) -> i64 {
        (i64::from(self.number) * i64::from(self.size)).max(0)
    }

    pub fn next(&self) -> PagingResult<Self> {
        let number = self
            .number
            .checked_add(1)
            .ok_or_else(|| PagingError::invalid("Page number overflow"))?;
        Ok(Self { number, size: self.size })
    }

    pub fn previous(&self) -> PagingResult<Self> {
        if self.number <= 0 {
            return Err(PagingError::unsupported(
                "Cannot go to previous page from the first page",
            ));
        }
        Ok(Self {
            number: self.number - 1,
            size: self.size,
        })
    }

    pub fn first(&self) -> Self {
        Self { number: 0, size: self.size }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Pagination of a data request: either a concrete page or "everything".
///
/// Navigation is only defined for the paginated variant; calling it on
/// [`Pagination::Unpaginated`] fails with [`PagingError::UnsupportedOperation`].
///
/// # Example
/// ```
/// use paging_core_api::Pagination;
///
/// let page = Pagination::of(1, 10).unwrap();
/// assert_eq!(page.offset().unwrap(), 10);
/// assert_eq!(page.previous().unwrap(), Pagination::of(0, 10).unwrap());
///
/// let all = Pagination::unpaginated();
/// assert!(!all.is_paginated());
/// assert!(all.next().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Pagination {
    #[default]
    Unpaginated,
    Paginated(PageRequest),
}

impl Pagination {
    pub const UNPAGINATED: Pagination = Pagination::Unpaginated;

    pub const fn unpaginated() -> Self {
        Self::UNPAGINATED
    }

    /// Create a paginated instance
    ///
    /// # Errors
    /// * `PagingError::InvalidArgument` - if `number < 0` or `size < 1`
    pub fn of(number: i32, size: i32) -> PagingResult<Self> {
        PageRequest::new(number, size).map(Pagination::Paginated)
    }

    pub fn is_paginated(&self) -> bool {
        matches!(self, Pagination::Paginated(_))
    }

    pub fn page_request(&self) -> Option<&PageRequest> {
        match self {
            Pagination::Paginated(request) => Some(request),
            Pagination::Unpaginated => None,
        }
    }

    /// Zero-based page number, 0 when unpaginated
    pub fn number(&self) -> i32 {
        self.page_request().map_or(0, PageRequest::number)
    }

    /// Page size, 0 when unpaginated
    pub fn size(&self) -> i32 {
        self.page_request().map_or(0, PageRequest::size)
    }

    pub fn offset(&self) -> PagingResult<i64> {
        Ok(self.require_paginated("Unpaginated instance has no offset")?.offset())
    }

    pub fn next(&self) -> PagingResult<Self> {
        self.require_paginated("Unpaginated instance cannot go to next page")?
            .next()
            .map(Pagination::Paginated)
    }

    pub fn previous(&self) -> PagingResult<Self> {
        self.require_paginated("Unpaginated instance cannot go to previous page")?
            .previous()
            .map(Pagination::Paginated)
    }

    pub fn first(&self) -> PagingResult<Self> {
        let request = self.require_paginated("Unpaginated instance cannot go to first page")?;
        Ok(Pagination::Paginated(request.first()))
    }

    pub fn has_previous(&self) -> PagingResult<bool> {
        Ok(self
            .require_paginated("Unpaginated instance has no previous page")?
            .has_previous())
    }

    fn require_paginated(&self, message: &str) -> PagingResult<&PageRequest> {
        self.page_request()
            .ok_or_else(|| PagingError::unsupported(message))
    }
}

impl From<PageRequest> for Pagination {
    fn from(request: PageRequest) -> Self {
        Pagination::Paginated(request)
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pagination::Paginated(request) => {
                write!(f, "page {} (size {})", request.number, request.size)
            }
            Pagination::Unpaginated => f.write_str("unpaginated"),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{PageRequest, Pagination};

    #[derive(Deserialize)]
    struct RawPagination {
        #[serde(default)]
        paginated: Option<bool>,
        #[serde(default)]
        number: Option<i32>,
        #[serde(default)]
        size: Option<i32>,
    }

    impl Serialize for Pagination {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Pagination", 3)?;
            state.serialize_field("paginated", &self.is_paginated())?;
            state.serialize_field("number", &self.number())?;
            state.serialize_field("size", &self.size())?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for Pagination {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawPagination::deserialize(deserializer)?;
            match (raw.paginated, raw.number, raw.size) {
                (Some(false), _, _) | (None, None, None) => Ok(Pagination::Unpaginated),
                (_, Some(number), Some(size)) => {
                    Pagination::of(number, size).map_err(D::Error::custom)
                }
                (Some(true), None, None) => Ok(Pagination::Paginated(PageRequest::default())),
                _ => Err(D::Error::custom(
                    "page number and page size must be supplied together",
                )),
            }
        }
    }
}
