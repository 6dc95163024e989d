//! Community activity models.

use serde::{Deserialize, Serialize};

/// Preview length for activity descriptions.
const SUMMARY_LEN: usize = 150;

/// A community activity with booking state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub max_participants: Option<i64>,
    #[serde(default)]
    pub current_participants: Option<i64>,
    #[serde(default)]
    pub organizer_display: Option<String>,
    #[serde(default)]
    pub activity_status: Option<String>,
    #[serde(default)]
    pub status_info: Option<String>,
    #[serde(default)]
    pub can_book: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Activity {
    /// Tag-stripped preview of the description.
    pub fn preview(&self) -> String {
        crate::utils::extract_summary(self.description.as_deref().unwrap_or(""), SUMMARY_LEN)
    }
}

/// Aggregate statistics for activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityStatistics {
    #[serde(default)]
    pub total_published: i64,
    #[serde(default)]
    pub upcoming_count: i64,
    #[serde(default)]
    pub ongoing_count: i64,
    #[serde(default)]
    pub completed_count: i64,
    #[serde(default)]
    pub recent_published_30days: i64,
    #[serde(default)]
    pub total_bookings: i64,
    #[serde(default)]
    pub unique_participants: i64,
}
