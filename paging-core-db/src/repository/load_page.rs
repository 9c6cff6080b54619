use async_trait::async_trait;
use paging_core_api::{infer_total_elements, Page, Pagination, Slice, Sort};
use tracing::debug;

use super::count_all::CountAll;
use super::find_content::FindContent;

/// Repository trait for loading paginated results as [`Slice`] or [`Page`]
///
/// Implemented for every repository that provides [`FindContent`] and
/// [`CountAll`]. `None` pagination or sort mean unpaginated and unsorted.
///
/// # Example
/// ```ignore
/// use paging_core_api::Pagination;
///
/// let page = repo.load_page(Some(Pagination::of(0, 20)?), None).await?;
/// println!("Page {} of {}", page.pagination().number() + 1, page.total_pages());
/// ```
#[async_trait]
pub trait LoadPage<T>: Send + Sync {
    /// Load one page of items without counting the collection
    async fn load_slice(
        &self,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
    ) -> Result<Slice<T>, Box<dyn std::error::Error + Send + Sync>>;

    /// Load one page of items together with the collection total
    ///
    /// The count query runs only when the total cannot be inferred from the
    /// fetched page, following the same rule as [`Page::deferred`].
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested page
    /// * `Err` - An error if fetching or counting failed, or the count is smaller than the page
    async fn load_page(
        &self,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl<T, R> LoadPage<T> for R
where
    T: Send + 'static,
    R: FindContent<T> + CountAll,
{
    async fn load_slice(
        &self,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
    ) -> Result<Slice<T>, Box<dyn std::error::Error + Send + Sync>> {
        let pagination = pagination.unwrap_or_default();
        let sort = sort.unwrap_or_default();

        let content = self.find_content(&pagination, &sort).await?;
        debug!(len = content.len(), %pagination, "loaded slice");

        Ok(Slice::new(content, Some(pagination), Some(sort)))
    }

    async fn load_page(
        &self,
        pagination: Option<Pagination>,
        sort: Option<Sort>,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>> {
        let pagination = pagination.unwrap_or_default();
        let sort = sort.unwrap_or_default();

        let content = self.find_content(&pagination, &sort).await?;
        let total = match infer_total_elements(&pagination, content.len()) {
            Some(total) => {
                debug!(len = content.len(), total, %pagination, "loaded page, count skipped");
                total
            }
            None => {
                let total = self.count_all().await?;
                debug!(len = content.len(), total, %pagination, "loaded page, counted");
                total
            }
        };

        Ok(Page::new(content, Some(pagination), Some(sort), total)?)
    }
}

#[cfg(test)]
mod tests {
    use paging_core_api::{Order, Pagination, PagingError, Sort};
    use tokio_test::{assert_err, assert_ok};

    use super::LoadPage;
    use crate::repository::test_utils::{create_test_items, InMemoryRepository};

    #[tokio::test]
    async fn test_load_page_full_pages_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryRepository::new(create_test_items(10));

        let page = repo.load_page(Some(Pagination::of(0, 3)?), None).await?;

        assert_eq!(page.content(), ["item1", "item2", "item3"]);
        assert_eq!(page.total_elements(), 10);
        assert_eq!(page.total_pages(), 4);
        assert!(page.has_next());
        assert_eq!(repo.count_calls(), 1);

        let last = repo.load_page(Some(Pagination::of(3, 3)?), None).await?;
        assert_eq!(last.content(), ["item10"]);
        assert_eq!(last.total_elements(), 10);
        assert!(last.is_last());
        assert_eq!(repo.count_calls(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_page_short_first_page_skips_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryRepository::new(create_test_items(3));

        let page = repo.load_page(Some(Pagination::of(0, 10)?), None).await?;

        assert_eq!(page.len(), 3);
        assert_eq!(page.total_elements(), 3);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(repo.find_calls(), 1);
        assert_eq!(repo.count_calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_page_unpaginated_skips_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryRepository::new(create_test_items(25));

        let page = repo.load_page(None, None).await?;

        assert_eq!(page.len(), 25);
        assert_eq!(page.total_elements(), 25);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(repo.count_calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_page_past_the_end_counts() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryRepository::new(create_test_items(4));

        let page = repo.load_page(Some(Pagination::of(1, 10)?), None).await?;

        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 4);
        assert_eq!(repo.count_calls(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_slice_never_counts() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemoryRepository::new(create_test_items(10));
        let sort = Sort::from(Order::descending("name")?);

        let slice = repo
            .load_slice(Some(Pagination::of(1, 4)?), Some(sort.clone()))
            .await?;

        assert_eq!(slice.content(), ["item5", "item6", "item7", "item8"]);
        assert_eq!(*slice.sort(), sort);
        assert_eq!(repo.last_sort(), Some(sort));
        assert_eq!(repo.count_calls(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_page_defaults_missing_sort() {
        let repo = InMemoryRepository::new(create_test_items(2));

        let page = assert_ok!(repo.load_page(None, None).await);

        assert_eq!(*page.sort(), Sort::UNSORTED);
        assert_eq!(repo.last_sort(), Some(Sort::UNSORTED));
    }

    #[tokio::test]
    async fn test_load_page_propagates_count_failure() {
        let repo = InMemoryRepository::new(create_test_items(10)).with_failing_count("count failed");

        let err = assert_err!(repo.load_page(Some(Pagination::of(0, 5).unwrap()), None).await);

        assert!(err.to_string().contains("count failed"));
    }

    #[tokio::test]
    async fn test_load_page_rejects_count_smaller_than_page() {
        let repo = InMemoryRepository::new(create_test_items(10)).with_count(2);

        let err = assert_err!(repo.load_page(Some(Pagination::of(0, 5).unwrap()), None).await);

        let paging_err = err.downcast_ref::<PagingError>();
        assert!(matches!(paging_err, Some(PagingError::InvalidArgument(_))));
    }
}
