pub mod count_all;
pub mod find_content;
pub mod load_page;

#[cfg(test)]
pub mod test_utils;

// Re-exports
pub use count_all::*;
pub use find_content::*;
pub use load_page::*;
