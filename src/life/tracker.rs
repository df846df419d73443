//! Life-point tracker.
//!
//! Totals never drop below zero. Every change is recorded so the last one
//! can be undone, which is how the counter UI recovers from mis-taps.

use serde::{Deserialize, Serialize};

use crate::core::LifeConfig;

/// Player identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(255) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One recorded change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeChange {
    pub player: PlayerId,
    pub before: i64,
    pub after: i64,
}

impl LifeChange {
    /// Signed difference.
    #[must_use]
    pub const fn delta(self) -> i64 {
        self.after - self.before
    }
}

/// Per-player life totals with undo history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeTracker {
    starting_life: i64,
    totals: Vec<i64>,
    history: Vec<LifeChange>,
}

impl LifeTracker {
    /// Create a tracker.
    ///
    /// Panics if `players` is zero or above 255.
    #[must_use]
    pub fn new(players: usize, starting_life: i64) -> Self {
        assert!(players > 0, "Must have at least 1 player");
        assert!(players <= 255, "At most 255 players supported");

        Self {
            starting_life: starting_life.max(0),
            totals: vec![starting_life.max(0); players],
            history: Vec::new(),
        }
    }

    /// Create a tracker from configuration. The player count is clamped to
    /// 1..=255.
    #[must_use]
    pub fn from_config(config: &LifeConfig) -> Self {
        Self::new(config.players.clamp(1, 255), config.starting_life)
    }

    /// Number of tracked players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.totals.len()
    }

    /// Current life of a player. Unknown players read as zero.
    #[must_use]
    pub fn life(&self, player: PlayerId) -> i64 {
        self.totals.get(player.index()).copied().unwrap_or(0)
    }

    /// Add `delta` (negative for damage). Returns the recorded change, or
    /// `None` for an unknown player.
    pub fn adjust(&mut self, player: PlayerId, delta: i64) -> Option<LifeChange> {
        let current = *self.totals.get(player.index())?;
        self.set(player, current.saturating_add(delta))
    }

    /// Set a total directly (floored at zero).
    pub fn set(&mut self, player: PlayerId, value: i64) -> Option<LifeChange> {
        let slot = self.totals.get_mut(player.index())?;
        let change = LifeChange {
            player,
            before: *slot,
            after: value.max(0),
        };
        *slot = change.after;
        self.history.push(change);
        log::debug!("{player}: {} -> {}", change.before, change.after);
        Some(change)
    }

    /// Halve a total; odd totals lose the larger half.
    pub fn halve(&mut self, player: PlayerId) -> Option<LifeChange> {
        let current = *self.totals.get(player.index())?;
        self.set(player, current / 2)
    }

    /// Revert the most recent change.
    pub fn undo(&mut self) -> Option<LifeChange> {
        let change = self.history.pop()?;
        self.totals[change.player.index()] = change.before;
        Some(change)
    }

    /// Restore starting life for everyone and forget history.
    pub fn reset(&mut self) {
        self.totals.fill(self.starting_life);
        self.history.clear();
    }

    /// Whether a player is at zero.
    #[must_use]
    pub fn is_defeated(&self, player: PlayerId) -> bool {
        self.totals.get(player.index()) == Some(&0)
    }

    /// Recorded changes, oldest first.
    #[must_use]
    pub fn history(&self) -> &[LifeChange] {
        &self.history
    }

    /// Iterate over (PlayerId, life) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        PlayerId::all(self.totals.len()).zip(self.totals.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_new_from_config() {
        let tracker = LifeTracker::from_config(&LifeConfig::default());
        assert_eq!(tracker.player_count(), 2);
        assert_eq!(tracker.life(P0), 8000);
        assert_eq!(format!("{}", P1), "Player 2");
    }

    #[test]
    fn test_adjust_and_floor() {
        let mut tracker = LifeTracker::new(2, 8000);

        let change = tracker.adjust(P0, -1500).unwrap();
        assert_eq!(change.delta(), -1500);
        assert_eq!(tracker.life(P0), 6500);

        tracker.adjust(P0, -9000);
        assert_eq!(tracker.life(P0), 0);
        assert!(tracker.is_defeated(P0));
        assert!(!tracker.is_defeated(P1));
    }

    #[test]
    fn test_halve_and_set() {
        let mut tracker = LifeTracker::new(2, 8001);
        tracker.halve(P1);
        assert_eq!(tracker.life(P1), 4000);

        tracker.set(P1, -5);
        assert_eq!(tracker.life(P1), 0);
    }

    #[test]
    fn test_undo() {
        let mut tracker = LifeTracker::new(2, 8000);
        tracker.adjust(P0, -1000);
        tracker.adjust(P1, 500);

        assert_eq!(tracker.undo().unwrap().player, P1);
        assert_eq!(tracker.life(P1), 8000);
        assert_eq!(tracker.life(P0), 7000);

        tracker.undo();
        assert_eq!(tracker.life(P0), 8000);
        assert!(tracker.undo().is_none());
    }

    #[test]
    fn test_undo_after_floor_restores_exact_total() {
        let mut tracker = LifeTracker::new(1, 300);
        tracker.adjust(P0, -1000);
        tracker.undo();
        assert_eq!(tracker.life(P0), 300);
    }

    #[test]
    fn test_reset() {
        let mut tracker = LifeTracker::new(3, 4000);
        tracker.adjust(PlayerId::new(2), -100);
        tracker.reset();

        assert!(tracker.history().is_empty());
        assert!(tracker.iter().all(|(_, life)| life == 4000));
    }

    #[test]
    fn test_unknown_player() {
        let mut tracker = LifeTracker::new(2, 8000);
        assert!(tracker.adjust(PlayerId::new(7), -100).is_none());
        assert_eq!(tracker.life(PlayerId::new(7)), 0);
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn test_from_config_clamps_players() {
        let config = LifeConfig {
            players: 0,
            starting_life: 8000,
        };
        assert_eq!(LifeTracker::from_config(&config).player_count(), 1);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players() {
        let _ = LifeTracker::new(0, 8000);
    }
}
