use async_trait::async_trait;
use paging_core_api::{Pagination, Sort};

/// Generic repository trait for fetching the items of one page
///
/// Implementors translate the pagination into their own skip/limit
/// (for example `LIMIT size OFFSET offset`) and the sort into their own
/// ordering clause. An unpaginated request asks for every item.
///
/// # Type Parameters
/// * `T` - The item type returned by the data store
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl FindContent<PersonModel> for PersonRepositoryImpl {
///     async fn find_content(&self, pagination: &Pagination, sort: &Sort) -> Result<Vec<PersonModel>, Box<dyn Error + Send + Sync>> {
///         // SELECT ... ORDER BY <sort> LIMIT <size> OFFSET <offset>
///     }
/// }
/// ```
#[async_trait]
pub trait FindContent<T>: Send + Sync {
    /// Fetch the items selected by `pagination`, ordered by `sort`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The items of the requested page, at most `pagination.size()` when paginated
    /// * `Err` - An error if the items could not be fetched
    async fn find_content(
        &self,
        pagination: &Pagination,
        sort: &Sort,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
