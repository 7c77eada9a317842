use super::captaincy::Captaincy;
use super::{observed_points, StatsByPlayer};

/// Saturates at the `i32` bounds instead of overflowing.
pub fn total_points(scoring_set: &[String], stats: &StatsByPlayer, captaincy: &Captaincy) -> i32 {
    scoring_set
        .iter()
        .map(|player_id| {
            let multiplier = if captaincy.player_id.as_deref() == Some(player_id.as_str()) {
                captaincy.multiplier
            } else {
                1
            };
            observed_points(stats, player_id).saturating_mul(multiplier)
        })
        .fold(0i32, i32::saturating_add)
}
