/// Storage layer for persisting habit data
///
/// The streak engine never touches storage. This module is the collaborator
/// that loads a habit, hands it to the engine, and saves the result.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use crate::domain::{Habit, HabitId, UserId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Corrupt record for habit {habit_id}: {message}")]
    Corrupt { habit_id: String, message: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// Each habit is stored and replaced as a whole document. Implementations
/// assume a single writer per habit; they do not guard read-modify-write
/// cycles.
pub trait HabitStorage {
    /// Create a new habit
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Replace an existing habit
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete a habit permanently
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List a user's habits in creation order
    fn list_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, StorageError>;
}
