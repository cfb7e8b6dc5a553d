//! Error types for ServiceDock

use thiserror::Error;

use crate::types::BookingStatus;

/// Main error type for ServiceDock operations
#[derive(Error, Debug)]
pub enum DockError {
    /// No `user` entry in the shared store
    #[error("User not logged in")]
    UserNotLoggedIn,

    /// The `user` entry exists but carries no recognisable id
    #[error("Could not find user ID in stored data")]
    MissingUserId,

    /// Booking was not found in the current list
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    /// Status change outside the allowed edges
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Review submitted without a star rating
    #[error("A rating between 1 and 5 is required")]
    ReviewRatingRequired,

    /// Bookings endpoint answered with a non-2xx status
    #[error("Failed to fetch bookings: {0}")]
    HttpStatus(String),

    /// Transport-level failure talking to the bookings endpoint
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed base URL or deep link
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DockError
pub type DockResult<T> = Result<T, DockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DockError::BookingNotFound("sample3".to_string());
        assert_eq!(format!("{}", err), "Booking not found: sample3");
    }

    #[test]
    fn test_transition_display() {
        let err = DockError::InvalidTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Pending,
        };
        assert_eq!(err.to_string(), "Invalid transition: completed -> pending");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dock_err: DockError = io_err.into();
        assert!(matches!(dock_err, DockError::Io(_)));
    }
}
