//! Immutable value types for pagination, sorting and paged query results.
//!
//! - [`Order`] / [`Sort`] describe how results are ordered.
//! - [`Pagination`] is either unpaginated or a validated [`PageRequest`].
//! - [`Slice`] wraps a materialized list with its pagination and sort.
//! - [`Page`] is a slice that also knows the size of the whole collection.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::*;
