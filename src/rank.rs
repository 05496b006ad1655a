//! Leaderboard projection and display ordering.
//!
//! The ranked list is stored unsorted; only the player-flagged row is ever
//! rewritten, and ordering is computed at render time.

use crate::model::PlayerRank;

/// Fold the player's latest totals into the roster. Every other entry is
/// returned untouched.
pub fn project_player(ranks: &[PlayerRank], score: u32, loops: u32) -> Vec<PlayerRank> {
    ranks
        .iter()
        .map(|rank| {
            if rank.is_player {
                PlayerRank {
                    score,
                    loops,
                    ..rank.clone()
                }
            } else {
                rank.clone()
            }
        })
        .collect()
}

/// Descending by score; ties keep their original relative order.
pub fn sorted_for_display(ranks: &[PlayerRank]) -> Vec<PlayerRank> {
    let mut sorted = ranks.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}
