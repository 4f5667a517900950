#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An achievement earned by finishing a level.
///
/// `earnedAt` is a display string supplied by the client alongside the
/// completion request, not a server-side timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Stable identifier used to deduplicate repeated awards.
    pub id:          String,
    /// Title shown on the achievement card and appended to badges.
    pub title:       String,
    /// Longer description shown on the achievement card.
    pub description: String,
    /// Icon name the client renders.
    pub icon:        String,
    /// Client-formatted award time.
    pub earned_at:   String,
    /// Level the achievement belongs to.
    pub level:       i32,
}

/// Aggregate view of a player's progress returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Highest level currently unlocked.
    pub current_level:    i32,
    /// Levels the player has finished, in completion order.
    pub completed_levels: Vec<i32>,
    /// Stars accumulated across all completions.
    pub total_stars:      i32,
    /// Badge titles, one per awarded achievement.
    pub badges:           Vec<String>,
    /// Achievements earned so far.
    pub achievements:     Vec<Achievement>,
    /// Whether game audio is enabled. Presentation state; always `true`
    /// in server responses.
    pub audio_enabled:    bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_level:    1,
            completed_levels: Vec::new(),
            total_stars:      0,
            badges:           Vec::new(),
            achievements:     Vec::new(),
            audio_enabled:    true,
        }
    }
}

/// Partial game-state update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatePatch {
    /// Replacement for the current level, if present.
    pub current_level:    Option<i32>,
    /// Replacement for the completed-levels list, if present.
    pub completed_levels: Option<Vec<i32>>,
    /// Replacement for the star total, if present.
    pub total_stars:      Option<i32>,
    /// Replacement for the badge list, if present.
    pub badges:           Option<Vec<String>>,
    /// Replacement for the achievement list, if present.
    pub achievements:     Option<Vec<Achievement>>,
}

/// Stored per-player progress record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Record identifier.
    pub id:               i64,
    /// Player this record belongs to.
    pub player:           i64,
    /// Highest level currently unlocked.
    pub current_level:    i32,
    /// Levels the player has finished.
    pub completed_levels: Vec<i32>,
    /// Stars accumulated across all completions.
    pub total_stars:      i32,
    /// Badge titles, one per awarded achievement.
    pub badges:           Vec<String>,
    /// Achievements earned so far.
    pub achievements:     Vec<Achievement>,
    /// When the record was created.
    pub created_at:       DateTime<Utc>,
    /// When the record was last written.
    pub updated_at:       DateTime<Utc>,
}

/// Stored per-(player, level) completion record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    /// Record identifier.
    pub id:           i64,
    /// Player this record belongs to.
    pub player:       i64,
    /// One-based level number.
    pub level:        i32,
    /// Whether the level has been finished.
    pub completed:    bool,
    /// Stars awarded for the level.
    pub stars:        i32,
    /// When the level was first completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Partial level-progress update; absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct LevelProgressPatch {
    /// Replacement for the completion flag, if present.
    pub completed: Option<bool>,
    /// Replacement for the star count, if present.
    pub stars:     Option<i32>,
}

/// One row of a certificate's level summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResult {
    /// One-based level number.
    pub level:     i32,
    /// Level title as printed on the certificate.
    pub title:     String,
    /// Whether the level was finished.
    pub completed: bool,
    /// Stars awarded for the level.
    pub stars:     i32,
}

/// Payload embedded in an issued certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateData {
    /// Name printed on the certificate.
    pub student_name:    String,
    /// RFC 3339 completion date.
    pub completion_date: String,
    /// Per-level summary rows.
    pub levels:          Vec<LevelResult>,
    /// Stars accumulated across all completions.
    pub total_stars:     i32,
    /// Badge titles at issue time.
    pub badges:          Vec<String>,
}

/// Stored certificate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Record identifier.
    pub id:               i64,
    /// Player the certificate was issued to.
    pub player:           i64,
    /// Name printed on the certificate.
    pub student_name:     String,
    /// When the certificate was issued.
    pub issued_at:        DateTime<Utc>,
    /// Embedded summary payload.
    pub certificate_data: CertificateData,
}
