use std::fmt;

use super::order::{Direction, Order};
use crate::error::PagingResult;

/// Ordered list of sort criteria: primary key first, then tie-breakers.
///
/// An empty list means "unsorted". Duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub const UNSORTED: Sort = Sort { orders: Vec::new() };

    pub const fn unsorted() -> Self {
        Self::UNSORTED
    }

    /// Build a sort from the given criteria, keeping their order.
    ///
    /// # Example
    /// ```
    /// use paging_core_api::{Order, Sort};
    ///
    /// let sort = Sort::by([
    ///     Order::descending("created_at").unwrap(),
    ///     Order::ascending("id").unwrap(),
    /// ]);
    /// assert!(sort.is_sorted());
    /// assert_eq!(sort.to_string(), "created_at DESC, id ASC");
    /// ```
    pub fn by(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    /// Single-criterion shortcut; fails like [`Order::new`].
    pub fn by_property(property: impl Into<String>, direction: Direction) -> PagingResult<Self> {
        Ok(Self::by([Order::new(property, direction)?]))
    }

    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }
}

impl FromIterator<Order> for Sort {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self::by(iter)
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

impl From<Order> for Sort {
    fn from(order: Order) -> Self {
        Self { orders: vec![order] }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unsorted() {
            return f.write_str("UNSORTED");
        }
        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{order}")?;
        }
        Ok(())
    }
}
