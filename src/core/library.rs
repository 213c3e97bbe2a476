use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum InventoryError {
    Storage {
        message: String,
    },
    Serialization {
        message: String,
    },
    NotFound {
        message: String,
    },
    // A guarded state transition was refused, e.g. issuing a book that is
    // already issued. The record is left unchanged.
    InvalidState {
        message: String,
    },
}

impl InventoryError {
    pub fn storage(message: &str) -> InventoryError {
        InventoryError::Storage { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> InventoryError {
        InventoryError::Serialization { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> InventoryError {
        InventoryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_state(message: &str) -> InventoryError {
        InventoryError::InvalidState { message: message.to_string() }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::storage(
            format!("storage io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Storage { message } => {
                write!(f, "{}", message)
            }
            InventoryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            InventoryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            InventoryError::InvalidState { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for the catalog store.
pub type InventoryResult<T> = Result<T, InventoryError>;

// Status values are persisted as lowercase strings; anything the store does
// not recognize is coerced to Available rather than rejected.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => BookStatus::Available,
            "issued" => BookStatus::Issued,
            _ => BookStatus::Available,
        }
    }
}

impl From<BookStatus> for String {
    fn from(status: BookStatus) -> Self {
        status.to_string()
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Issued => write!(f, "issued"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, InventoryError};

    #[test]
    fn test_should_create_storage_error() {
        assert!(matches!(InventoryError::storage("test"), InventoryError::Storage{ message: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(InventoryError::serialization("test"), InventoryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(InventoryError::not_found("test"), InventoryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_invalid_state_error() {
        assert!(matches!(InventoryError::invalid_state("test"), InventoryError::InvalidState{ message: _ }));
    }

    #[test]
    fn test_should_convert_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        assert!(matches!(InventoryError::from(err), InventoryError::Storage{ message: _ }));
    }

    #[test]
    fn test_should_format_book_status() {
        let statuses = vec![
            BookStatus::Available,
            BookStatus::Issued,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = BookStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[test]
    fn test_should_coerce_unknown_book_status() {
        assert_eq!(BookStatus::Available, BookStatus::from("lost".to_string()));
        assert_eq!(BookStatus::Available, BookStatus::default());
    }
}
