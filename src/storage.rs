//! In-memory storage of players' progress, per-level results, and issued
//! certificates. Every operation takes an explicit player id; nothing here
//! assumes a single ambient user.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use chrono::Utc;

use crate::types::{
    Certificate, CertificateData, GameState, GameStatePatch, LevelProgress, LevelProgressPatch,
    Progress,
};

/// In-memory store behind a single mutex. Lock scopes are short; every
/// method acquires and releases within one call.
pub struct Storage {
    /// All mutable state, guarded together so composite updates stay
    /// consistent.
    inner: Mutex<Inner>,
}

/// The mutable tables of the store.
struct Inner {
    /// Progress records keyed by player.
    progress:            HashMap<i64, Progress>,
    /// Level records keyed by (player, level).
    levels:              HashMap<(i64, i32), LevelProgress>,
    /// Issued certificates, in issue order.
    certificates:        Vec<Certificate>,
    /// Next progress record id.
    next_progress_id:    i64,
    /// Next level record id.
    next_level_id:       i64,
    /// Next certificate id.
    next_certificate_id: i64,
}

impl Storage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                progress:            HashMap::new(),
                levels:              HashMap::new(),
                certificates:        Vec::new(),
                next_progress_id:    1,
                next_level_id:       1,
                next_certificate_id: 1,
            }),
        }
    }

    /// Acquires the store lock.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("storage poisoned")
    }

    /// Returns the player's aggregate game state, or the default state for
    /// players with no recorded progress.
    pub fn game_state(&self, player: i64) -> GameState {
        let inner = self.lock();
        match inner.progress.get(&player) {
            Some(progress) => GameState {
                current_level:    progress.current_level,
                completed_levels: progress.completed_levels.clone(),
                total_stars:      progress.total_stars,
                badges:           progress.badges.clone(),
                achievements:     progress.achievements.clone(),
                audio_enabled:    true,
            },
            None => GameState::default(),
        }
    }

    /// Applies a partial game-state update, creating the progress record on
    /// first write. Absent patch fields keep their stored values.
    pub fn save_game_state(&self, player: i64, patch: GameStatePatch) {
        let mut inner = self.lock();
        let now = Utc::now();

        match inner.progress.get_mut(&player) {
            Some(existing) => {
                if let Some(current_level) = patch.current_level {
                    existing.current_level = current_level;
                }
                if let Some(completed_levels) = patch.completed_levels {
                    existing.completed_levels = completed_levels;
                }
                if let Some(total_stars) = patch.total_stars {
                    existing.total_stars = total_stars;
                }
                if let Some(badges) = patch.badges {
                    existing.badges = badges;
                }
                if let Some(achievements) = patch.achievements {
                    existing.achievements = achievements;
                }
                existing.updated_at = now;
            }
            None => {
                let id = inner.next_progress_id;
                inner.next_progress_id += 1;
                inner.progress.insert(player, Progress {
                    id,
                    player,
                    current_level: patch.current_level.unwrap_or(1),
                    completed_levels: patch.completed_levels.unwrap_or_default(),
                    total_stars: patch.total_stars.unwrap_or(0),
                    badges: patch.badges.unwrap_or_default(),
                    achievements: patch.achievements.unwrap_or_default(),
                    created_at: now,
                    updated_at: now,
                });
            }
        }
    }

    /// Returns the player's level records, ordered by level.
    pub fn level_progress(&self, player: i64) -> Vec<LevelProgress> {
        let inner = self.lock();
        let mut records: Vec<LevelProgress> = inner
            .levels
            .values()
            .filter(|record| record.player == player)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.level);
        records
    }

    /// Applies a partial update to one level record, creating it on first
    /// write. The completion timestamp is set the first time the level
    /// transitions to completed.
    pub fn update_level_progress(
        &self,
        player: i64,
        level: i32,
        patch: LevelProgressPatch,
    ) -> LevelProgress {
        let mut inner = self.lock();

        match inner.levels.get_mut(&(player, level)) {
            Some(existing) => {
                if let Some(completed) = patch.completed {
                    if completed && existing.completed_at.is_none() {
                        existing.completed_at = Some(Utc::now());
                    }
                    existing.completed = completed;
                }
                if let Some(stars) = patch.stars {
                    existing.stars = stars;
                }
                existing.clone()
            }
            None => {
                let id = inner.next_level_id;
                inner.next_level_id += 1;
                let completed = patch.completed.unwrap_or(false);
                let record = LevelProgress {
                    id,
                    player,
                    level,
                    completed,
                    stars: patch.stars.unwrap_or(0),
                    completed_at: completed.then(Utc::now),
                };
                inner.levels.insert((player, level), record.clone());
                record
            }
        }
    }

    /// Returns the player's certificate, if one has been issued.
    pub fn certificate(&self, player: i64) -> Option<Certificate> {
        let inner = self.lock();
        inner
            .certificates
            .iter()
            .find(|certificate| certificate.player == player)
            .cloned()
    }

    /// Stores and returns a new certificate for the player.
    pub fn create_certificate(
        &self,
        player: i64,
        student_name: String,
        certificate_data: CertificateData,
    ) -> Certificate {
        let mut inner = self.lock();
        let id = inner.next_certificate_id;
        inner.next_certificate_id += 1;

        let certificate = Certificate {
            id,
            player,
            student_name,
            issued_at: Utc::now(),
            certificate_data,
        };
        inner.certificates.push(certificate.clone());
        certificate
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
