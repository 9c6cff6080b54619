use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use paging_core_api::{Pagination, Sort};
use parking_lot::Mutex;

use super::{CountAll, FindContent};

/// In-memory stand-in for a data store that records how it was queried
pub struct InMemoryRepository<T> {
    items: Vec<T>,
    count_result: Option<Result<i64, String>>,
    find_calls: AtomicUsize,
    count_calls: AtomicUsize,
    last_sort: Mutex<Option<Sort>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            count_result: None,
            find_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
            last_sort: Mutex::new(None),
        }
    }

    /// Make `count_all` report `total` instead of the real item count
    pub fn with_count(mut self, total: i64) -> Self {
        self.count_result = Some(Ok(total));
        self
    }

    /// Make `count_all` fail with `message`
    pub fn with_failing_count(mut self, message: &str) -> Self {
        self.count_result = Some(Err(message.to_string()));
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn last_sort(&self) -> Option<Sort> {
        self.last_sort.lock().clone()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> FindContent<T> for InMemoryRepository<T> {
    async fn find_content(
        &self,
        pagination: &Pagination,
        sort: &Sort,
    ) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sort.lock() = Some(sort.clone());

        let items = match pagination.page_request() {
            Some(request) => {
                let offset = usize::try_from(request.offset())?;
                let size = usize::try_from(request.size())?;
                self.items.iter().skip(offset).take(size).cloned().collect()
            }
            None => self.items.clone(),
        };
        Ok(items)
    }
}

#[async_trait]
impl<T: Send + Sync> CountAll for InMemoryRepository<T> {
    async fn count_all(&self) -> Result<i64, Box<dyn Error + Send + Sync>> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        match &self.count_result {
            Some(Ok(total)) => Ok(*total),
            Some(Err(message)) => Err(message.clone().into()),
            None => Ok(self.items.len() as i64),
        }
    }
}

pub fn create_test_items(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("item{i}")).collect()
}
