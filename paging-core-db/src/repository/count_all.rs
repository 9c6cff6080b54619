use async_trait::async_trait;

/// Generic repository trait for counting every item a query can return
///
/// This is typically the expensive `SELECT COUNT(*)` that
/// [`LoadPage::load_page`](super::LoadPage::load_page) tries to avoid.
#[async_trait]
pub trait CountAll: Send + Sync {
    /// Count all items, ignoring pagination
    ///
    /// # Returns
    /// * `Ok(i64)` - The total number of items
    /// * `Err` - An error if the count could not be computed
    async fn count_all(&self) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;
}
