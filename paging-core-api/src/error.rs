use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// A value violated its construction invariant (negative page number,
    /// blank sort property, total smaller than the content, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A navigation method was called on a pagination that cannot honour it.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl PagingError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PagingError::InvalidArgument(message.into())
    }

    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        PagingError::UnsupportedOperation(message.into())
    }
}

pub type PagingResult<T> = Result<T, PagingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_detail() {
        let err = PagingError::invalid("Page size must be at least 1");
        assert_eq!(err.to_string(), "Invalid argument: Page size must be at least 1");

        let err = PagingError::unsupported("Pagination is not enabled");
        assert_eq!(err.to_string(), "Unsupported operation: Pagination is not enabled");
    }

    #[test]
    fn test_error_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            PagingError::invalid("blank").into();
        assert!(boxed.to_string().contains("blank"));
    }
}
