/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, History, badges) and the
/// pure streak computation over them. Nothing in here touches storage.

pub mod habit;
pub mod history;
pub mod streak;
pub mod badge;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use history::*;
pub use streak::*;
pub use badge::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid badge catalog: {0}")]
    InvalidCatalog(String),
}
