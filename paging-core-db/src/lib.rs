//! Repository ports for loading [`Slice`](paging_core_api::Slice) and
//! [`Page`](paging_core_api::Page) results from a data-fetching collaborator.
//!
//! A collaborator implements [`repository::FindContent`] and
//! [`repository::CountAll`]; [`repository::LoadPage`] is then available for
//! free and only runs the count when the total cannot be inferred.

pub mod repository;

pub use repository::*;
