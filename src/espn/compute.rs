use std::collections::HashMap;

use crate::{storage::PerformanceStats, PlayerId};


/// Rushing yards per fantasy point
pub const RUSHING_YARDS_PER_POINT: f64 = 10.0;
/// Receiving yards per fantasy point
pub const RECEIVING_YARDS_PER_POINT: f64 = 10.0;
/// Passing yards per fantasy point
pub const PASSING_YARDS_PER_POINT: f64 = 25.0;
pub const POINTS_PER_TOUCHDOWN: f64 = 6.0;
pub const POINTS_PER_INTERCEPTION: f64 = -2.0;

/// Round to one decimal place, ties to even.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Fantasy points for one player's performance, rounded to one decimal.
///
/// ```rust
/// use cfb_fantasy::{espn::compute::compute_fantasy_points, storage::PerformanceStats};
///
/// let stats = PerformanceStats {
///     rushing_yards: 26,
///     receiving_yards: 5,
///     passing_yards: 254,
///     touchdowns: 2,
///     interceptions: 0,
/// };
/// assert_eq!(compute_fantasy_points(&stats), 25.3);
/// ```
pub fn compute_fantasy_points(stats: &PerformanceStats) -> f64 {
    let points = f64::from(stats.rushing_yards) / RUSHING_YARDS_PER_POINT
        + f64::from(stats.receiving_yards) / RECEIVING_YARDS_PER_POINT
        + f64::from(stats.passing_yards) / PASSING_YARDS_PER_POINT
        + f64::from(stats.touchdowns) * POINTS_PER_TOUCHDOWN
        + f64::from(stats.interceptions) * POINTS_PER_INTERCEPTION;
    round_to_tenth(points)
}

/// Score every player that has performance stats. Players absent from the
/// result score 0.0.
pub fn score_players(stats: &HashMap<PlayerId, PerformanceStats>) -> HashMap<PlayerId, f64> {
    stats
        .iter()
        .map(|(id, s)| (*id, compute_fantasy_points(s)))
        .collect()
}
