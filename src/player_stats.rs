use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use crate::dataset::{ShotEvent, team_shots};
use crate::shooting::calculate_shooting_percentages;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub player: String,
    pub total_points: u32,
    pub ppg: f64,
    pub games_played: u32,
    pub fg_percentage: f64,
    pub three_percentage: f64,
}

/// One record per distinct shooter in the team's shot subset, in
/// first-appearance order. Rows without a shooter are skipped entirely.
pub fn get_player_stats(events: &[ShotEvent], team: &str) -> Vec<PlayerStats> {
    let shots = team_shots(events, team);

    let mut order: Vec<&str> = Vec::new();
    let mut by_shooter: HashMap<&str, Vec<&ShotEvent>> = HashMap::new();
    for shot in shots.iter().copied() {
        let Some(shooter) = shot.shooter.as_deref() else {
            continue;
        };
        match by_shooter.entry(shooter) {
            Entry::Occupied(mut slot) => slot.get_mut().push(shot),
            Entry::Vacant(slot) => {
                order.push(shooter);
                slot.insert(vec![shot]);
            }
        }
    }

    order
        .into_iter()
        .map(|shooter| {
            let rows = &by_shooter[shooter];
            let games: HashSet<&str> = rows.iter().map(|r| r.game_id.as_str()).collect();
            let games_played = games.len() as u32;

            let total_points: u32 = rows
                .iter()
                .filter(|r| r.is_made())
                .map(|r| shot_points(r))
                .sum();
            let ppg = if games_played > 0 {
                f64::from(total_points) / f64::from(games_played)
            } else {
                0.0
            };

            let (fg_percentage, three_percentage) = calculate_shooting_percentages(rows);

            PlayerStats {
                player: shooter.to_string(),
                total_points,
                ppg,
                games_played,
                fg_percentage,
                three_percentage,
            }
        })
        .collect()
}

// Three-point precedence: a row flagged both three and free throw scores 3.
fn shot_points(shot: &ShotEvent) -> u32 {
    if shot.three_pt {
        3
    } else if shot.free_throw {
        1
    } else {
        2
    }
}

/// Top `count` scorers by points per game, descending.
pub fn top_scorers(stats: &[PlayerStats], count: usize) -> Vec<&PlayerStats> {
    let mut sorted: Vec<&PlayerStats> = stats.iter().collect();
    sorted.sort_by(|a, b| {
        b.ppg
            .partial_cmp(&a.ppg)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(count);
    sorted
}
