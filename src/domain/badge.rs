/// Achievement badges unlocked by streak length
///
/// The catalog is plain configuration passed to whoever evaluates badges,
/// so tests and deployments can swap in their own table.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One achievement in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefinition {
    /// Stable identifier stored on habits (e.g., "weekly-warrior")
    pub id: String,
    /// Display name
    pub name: String,
    /// Emoji or short glyph shown next to the name
    pub icon: String,
    pub description: String,
    /// Current streak needed to unlock
    pub required_streak: u32,
}

impl BadgeDefinition {
    pub fn new(id: &str, name: &str, icon: &str, description: &str, required_streak: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            required_streak,
        }
    }

    /// Notification text shown when this badge is unlocked
    pub fn unlock_message(&self) -> String {
        format!("🎉 Badge Unlocked: {} {}", self.icon, self.name)
    }

    /// Unlock line followed by the indented description
    pub fn notification(&self) -> String {
        format!("{}\n   {}", self.unlock_message(), self.description)
    }
}

/// Ordered, immutable table of badge definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    /// Build a catalog, rejecting duplicate ids and zero thresholds
    pub fn new(badges: Vec<BadgeDefinition>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();

        for badge in &badges {
            if badge.id.trim().is_empty() {
                return Err(DomainError::InvalidCatalog("Badge id cannot be empty".to_string()));
            }
            if !seen.insert(badge.id.as_str()) {
                return Err(DomainError::InvalidCatalog(format!("Duplicate badge id '{}'", badge.id)));
            }
            if badge.required_streak == 0 {
                return Err(DomainError::InvalidCatalog(format!(
                    "Badge '{}' must require a streak of at least 1",
                    badge.id
                )));
            }
        }

        Ok(Self { badges })
    }

    /// The default four-tier table
    pub fn standard() -> Self {
        Self {
            badges: vec![
                BadgeDefinition::new("getting-started", "Getting Started", "🥉", "First successful streak!", 3),
                BadgeDefinition::new("weekly-warrior", "Weekly Warrior", "🥈", "A full week of consistency!", 7),
                BadgeDefinition::new("fortnight-focus", "Fortnight Focus", "🥇", "Two strong weeks!", 14),
                BadgeDefinition::new("monthly-master", "Monthly Master", "🏆", "A habit formed for real!", 30),
            ],
        }
    }

    /// Parse a catalog from a JSON array of definitions
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let badges: Vec<BadgeDefinition> = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidCatalog(format!("Malformed badge catalog: {}", e)))?;
        Self::new(badges)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidCatalog(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Get badge details by ID
    pub fn get(&self, id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.id == id)
    }

    /// All definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Badge ids earned by `current_streak` that are not yet unlocked
    ///
    /// Returned in catalog order. Already unlocked ids are never returned
    /// again, and nothing here can take a badge away.
    pub fn newly_unlocked<S: AsRef<str>>(&self, current_streak: u32, already_unlocked: &[S]) -> Vec<String> {
        self.badges
            .iter()
            .filter(|badge| {
                badge.required_streak <= current_streak
                    && !already_unlocked.iter().any(|id| id.as_ref() == badge.id)
            })
            .map(|badge| badge.id.clone())
            .collect()
    }

    /// The most prestigious badge among those unlocked
    ///
    /// Highest required streak wins; ties go to the earlier catalog entry.
    /// Ids missing from the catalog are ignored.
    pub fn top_badge<S: AsRef<str>>(&self, unlocked: &[S]) -> Option<&BadgeDefinition> {
        let mut top: Option<&BadgeDefinition> = None;

        for badge in &self.badges {
            if !unlocked.iter().any(|id| id.as_ref() == badge.id) {
                continue;
            }
            match top {
                Some(current) if current.required_streak >= badge.required_streak => {}
                _ => top = Some(badge),
            }
        }

        top
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
