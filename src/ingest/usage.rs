//! Usage ("snaps") extraction and aggregation.
//!
//! Usage is a participation proxy, not a true snap count: pass attempts for
//! passers and rush attempts for runners.

use std::collections::BTreeMap;

use crate::espn::types::StatCategory;
use crate::ingest::resolver::ResolvedPlayer;
use crate::storage::UsageRecord;
use crate::{PlayerId, TeamId};

/// Usage carried by one raw stat string, or `None` when the observation
/// should be dropped.
///
/// - passing: attempts, the second `/`-separated field of `"C/A"`
/// - rushing: the value itself (attempts)
/// - anything else: dropped
///
/// ```rust
/// use cfb_fantasy::{espn::types::StatCategory, ingest::usage::extract_usage};
///
/// assert_eq!(extract_usage(&StatCategory::Passing, "18/27"), Some(27));
/// assert_eq!(extract_usage(&StatCategory::Rushing, "14"), Some(14));
/// assert_eq!(extract_usage(&StatCategory::Passing, "18-27"), None);
/// ```
pub fn extract_usage(category: &StatCategory, raw_value: &str) -> Option<u32> {
    match category {
        StatCategory::Passing => raw_value.split('/').nth(1)?.trim().parse().ok(),
        StatCategory::Rushing => raw_value.trim().parse().ok(),
        _ => None,
    }
}

/// Usage summed per `(player_id, team_id)`.
///
/// Sums saturate at `u32::MAX`.
/// Summation is order independent, so per-game results can be merged in
/// any order. Lookups for players without observations return 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageTable {
    totals: BTreeMap<(PlayerId, TeamId), u32>,
}

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, player: ResolvedPlayer, snaps: u32) {
        let total = self
            .totals
            .entry((player.player_id, player.team_id))
            .or_insert(0);
        *total = total.saturating_add(snaps);
    }

    /// Fold another table into this one.
    pub fn merge(&mut self, other: &UsageTable) {
        for (&key, &snaps) in &other.totals {
            let total = self.totals.entry(key).or_insert(0);
            *total = total.saturating_add(snaps);
        }
    }

    /// Aggregated usage, defaulting to 0 for players never observed.
    pub fn usage_for(&self, player_id: PlayerId, team_id: TeamId) -> u32 {
        self.totals
            .get(&(player_id, team_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// One record per group, ordered by `(player_id, team_id)`.
    pub fn records(&self) -> Vec<UsageRecord> {
        self.totals
            .iter()
            .map(|(&(player_id, team_id), &snaps)| UsageRecord {
                player_id,
                team_id,
                snaps,
            })
            .collect()
    }
}

impl FromIterator<(ResolvedPlayer, u32)> for UsageTable {
    fn from_iter<I: IntoIterator<Item = (ResolvedPlayer, u32)>>(iter: I) -> Self {
        let mut table = UsageTable::new();
        for (player, snaps) in iter {
            table.add(player, snaps);
        }
        table
    }
}
