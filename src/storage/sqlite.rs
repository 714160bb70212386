/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habits. It handles all SQL queries and data conversion.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};

use crate::domain::{Habit, HabitId, History, Schedule, UserId};
use crate::storage::{migrations, HabitStorage, StorageError};

const HABIT_COLUMNS: &str = "id, user_id, name, target_days, start_date, history, \
                             current_streak, longest_streak, badges, created_at";

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create a storage instance backed by a private in-memory database
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }
}

/// Raw column values of one `habits` row, before JSON and date parsing
struct HabitRow {
    id: String,
    user_id: String,
    name: String,
    target_days: String,
    start_date: String,
    history: String,
    current_streak: u32,
    longest_streak: u32,
    badges: String,
    created_at: String,
}

impl HabitRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            target_days: row.get(3)?,
            start_date: row.get(4)?,
            history: row.get(5)?,
            current_streak: row.get(6)?,
            longest_streak: row.get(7)?,
            badges: row.get(8)?,
            created_at: row.get(9)?,
        })
    }

    fn into_habit(self) -> Result<Habit, StorageError> {
        let corrupt = |message: String| StorageError::Corrupt {
            habit_id: self.id.clone(),
            message,
        };

        let id = HabitId::from_string(&self.id).map_err(|e| corrupt(format!("invalid id: {}", e)))?;
        let schedule: Schedule = serde_json::from_str(&self.target_days)
            .map_err(|e| corrupt(format!("invalid target days: {}", e)))?;
        let start_date = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .map_err(|e| corrupt(format!("invalid start date: {}", e)))?;
        let history: History = serde_json::from_str(&self.history)
            .map_err(|e| corrupt(format!("invalid history: {}", e)))?;
        let badges: Vec<String> = serde_json::from_str(&self.badges)
            .map_err(|e| corrupt(format!("invalid badges: {}", e)))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| corrupt(format!("invalid created_at: {}", e)))?
            .with_timezone(&Utc);

        Ok(Habit {
            id,
            user_id: UserId::new(self.user_id),
            name: self.name,
            schedule,
            start_date,
            history,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            badges,
            created_at,
        })
    }
}

impl HabitStorage for SqliteStorage {
    /// Create a new habit in the database
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO habits (
                id, user_id, name, target_days, start_date, history,
                current_streak, longest_streak, badges, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                habit.id.to_string(),
                habit.user_id.as_str(),
                habit.name,
                serde_json::to_string(&habit.schedule)?,
                habit.start_date.to_string(),
                serde_json::to_string(&habit.history)?,
                habit.current_streak,
                habit.longest_streak,
                serde_json::to_string(&habit.badges)?,
                habit.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            ],
        )?;

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Get a habit by its ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let sql = format!("SELECT {} FROM habits WHERE id = ?1", HABIT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;

        let result = stmt.query_row(params![habit_id.to_string()], HabitRow::from_row);

        match result {
            Ok(row) => row.into_habit(),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Replace an existing habit document
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE habits SET
                name = ?2,
                target_days = ?3,
                start_date = ?4,
                history = ?5,
                current_streak = ?6,
                longest_streak = ?7,
                badges = ?8
             WHERE id = ?1",
            params![
                habit.id.to_string(),
                habit.name,
                serde_json::to_string(&habit.schedule)?,
                habit.start_date.to_string(),
                serde_json::to_string(&habit.history)?,
                habit.current_streak,
                habit.longest_streak,
                serde_json::to_string(&habit.badges)?,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit.id.to_string(),
            });
        }

        tracing::debug!("Updated habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Permanently delete a habit
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }

    /// List a user's habits, oldest first
    fn list_habits(&self, user_id: &UserId) -> Result<Vec<Habit>, StorageError> {
        let sql = format!(
            "SELECT {} FROM habits WHERE user_id = ?1 ORDER BY created_at ASC, rowid ASC",
            HABIT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![user_id.as_str()], HabitRow::from_row)?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row?.into_habit()?);
        }

        Ok(habits)
    }
}
