//! Activity catalog and schedule slots
use serde::{Deserialize, Serialize};

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../confreg-web/static/assets/data/activities.json");

/// A day-and-time window an activity occupies. Two activities conflict
/// when their slots resolve to the same [`TimeSlot::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub time: String,
}

impl TimeSlot {
    /// Conflict key: case- and whitespace-insensitive combination of day and time.
    #[must_use]
    pub fn key(&self) -> String {
        format!(
            "{} {}",
            self.day.trim().to_ascii_lowercase(),
            self.time.trim().to_ascii_lowercase()
        )
    }

    /// Human-readable schedule label, e.g. "Tuesday 9am-12pm".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub cost_cents: u32,
    /// Activities without a slot (the all-day conference) never conflict.
    #[serde(default)]
    pub slot: Option<TimeSlot>,
}

impl Activity {
    #[must_use]
    pub fn slot_key(&self) -> Option<String> {
        self.slot.as_ref().map(TimeSlot::key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActivityCatalog {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Load the catalog embedded from the web crate's static assets.
    /// A malformed asset yields an empty catalog rather than a panic.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_else(|err| {
            log::error!("Failed to parse embedded activity catalog: {err}");
            Self::default()
        })
    }

    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not a valid catalog.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Ids of every activity sharing `id`'s slot key, excluding `id` itself.
    #[must_use]
    pub fn conflicting_ids(&self, id: &str) -> Vec<&str> {
        let Some(key) = self.get(id).and_then(Activity::slot_key) else {
            return Vec::new();
        };
        self.activities
            .iter()
            .filter(|a| a.id != id && a.slot_key().as_deref() == Some(key.as_str()))
            .map(|a| a.id.as_str())
            .collect()
    }
}
