/// Public library interface for the habit streak tracker
///
/// This module exports the domain types, the pure streak engine, the storage
/// layer and the `HabitTracker` facade that ties them together for the CLI
/// and for tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod engine;
mod storage;
pub mod commands;

// Re-export public modules and types
pub use domain::*;
pub use engine::*;
pub use storage::{HabitStorage, SqliteStorage, StorageError};

/// Errors that can occur while running tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// Whether this error means the requested habit does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::Storage(StorageError::HabitNotFound { .. }))
    }
}

/// Habit tracker backed by SQLite
///
/// Owns the storage connection and the streak engine (with its badge
/// catalog). Every operation loads whole habits, hands them to the engine
/// and saves whatever the engine returns.
pub struct HabitTracker {
    storage: SqliteStorage,
    engine: StreakEngine,
}

impl HabitTracker {
    /// Open (or create) the database at `db_path` using the standard badges
    pub fn new(db_path: PathBuf) -> Result<Self, TrackerError> {
        Self::with_catalog(db_path, BadgeCatalog::standard())
    }

    /// Open the database at `db_path` evaluating badges against `catalog`
    pub fn with_catalog(db_path: PathBuf, catalog: BadgeCatalog) -> Result<Self, TrackerError> {
        tracing::info!("Initializing habit tracker with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;
        tracing::info!("Loaded badge catalog with {} badges", catalog.len());

        Ok(Self {
            storage,
            engine: StreakEngine::new(catalog),
        })
    }

    /// Tracker over a throwaway in-memory database
    pub fn in_memory(catalog: BadgeCatalog) -> Result<Self, TrackerError> {
        Ok(Self {
            storage: SqliteStorage::in_memory()?,
            engine: StreakEngine::new(catalog),
        })
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Get a reference to the streak engine
    pub fn engine(&self) -> &StreakEngine {
        &self.engine
    }
}
