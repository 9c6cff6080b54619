pub mod order;
pub mod page;
pub mod pagination;
pub mod slice;
pub mod sort;

// Re-exports
pub use order::*;
pub use page::*;
pub use pagination::*;
pub use slice::*;
pub use sort::*;
