use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_map::Entry;

use crate::dataset::{ShotEvent, team_shots};
use crate::shooting::calculate_shooting_percentages;

/// Final score of one game, reduced from its per-event rows: first home/away
/// names, last non-missing running scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore {
    pub game_id: String,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: i64,
    pub fg_percentage: f64,
    pub three_percentage: f64,
}

impl TeamStats {
    pub fn win_percentage(&self) -> f64 {
        if self.games_played > 0 {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        } else {
            0.0
        }
    }
}

pub const COMPARISON_CATEGORIES: [&str; 3] = ["Win %", "FG%", "3PT%"];

pub fn comparison_values(stats: &TeamStats) -> [f64; 3] {
    [
        stats.win_percentage(),
        stats.fg_percentage,
        stats.three_percentage,
    ]
}

struct GameAcc<'a> {
    home: &'a str,
    away: &'a str,
    home_score: Option<u32>,
    away_score: Option<u32>,
}

/// Reduce the event table to one final score per game, in first-appearance
/// order. Games that never record both running scores are dropped.
pub fn final_scores(events: &[ShotEvent]) -> Vec<FinalScore> {
    let mut order: Vec<&str> = Vec::new();
    let mut games: HashMap<&str, GameAcc<'_>> = HashMap::new();

    for event in events {
        let acc = match games.entry(event.game_id.as_str()) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                order.push(event.game_id.as_str());
                slot.insert(GameAcc {
                    home: &event.home,
                    away: &event.away,
                    home_score: None,
                    away_score: None,
                })
            }
        };
        if let Some(score) = event.home_score {
            acc.home_score = Some(score);
        }
        if let Some(score) = event.away_score {
            acc.away_score = Some(score);
        }
    }

    order
        .into_iter()
        .filter_map(|game_id| {
            let acc = games.get(game_id)?;
            let (Some(home_score), Some(away_score)) = (acc.home_score, acc.away_score) else {
                return None;
            };
            Some(FinalScore {
                game_id: game_id.to_string(),
                home: acc.home.to_string(),
                away: acc.away.to_string(),
                home_score,
                away_score,
            })
        })
        .collect()
}

pub fn count_wins(finals: &[FinalScore], team: &str) -> u32 {
    finals
        .iter()
        .filter(|fs| {
            (fs.home == team && fs.home_score > fs.away_score)
                || (fs.away == team && fs.away_score > fs.home_score)
        })
        .count() as u32
}

/// Wins, losses, and games played for a team.
///
/// Wins come from final scores over every tracked game; games played counts
/// the distinct games where the team took at least one shot. The two
/// definitions disagree on purpose (they disagree in the source data too), so
/// `losses = games_played - wins` is signed and can go negative when a team
/// has shot rows in games it is never listed as home/away for.
pub fn calculate_wins_losses(events: &[ShotEvent], team: &str) -> (u32, i64, u32) {
    let wins = count_wins(&final_scores(events), team);

    let shot_games: HashSet<&str> = events
        .iter()
        .filter(|e| e.shot_team.as_deref() == Some(team))
        .map(|e| e.game_id.as_str())
        .collect();
    let games_played = shot_games.len() as u32;

    let losses = i64::from(games_played) - i64::from(wins);
    (wins, losses, games_played)
}

pub fn get_team_stats(events: &[ShotEvent], team: &str) -> TeamStats {
    let shots = team_shots(events, team);
    let (wins, losses, games_played) = calculate_wins_losses(events, team);
    let (fg_percentage, three_percentage) = calculate_shooting_percentages(&shots);

    TeamStats {
        games_played,
        wins,
        losses,
        fg_percentage,
        three_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_events;

    const RUNNING: &str = "\
game_id,home,away,home_score,away_score,shot_team,shooter,shot_outcome,three_pt,free_throw,description
g1,A,B,2,0,A,P1,made,false,false,P1 made Layup
g1,A,B,2,3,B,P2,made,true,false,P2 made Three Point Jumper
g1,A,B,4,3,A,P1,made,false,false,P1 made Jump Shot
g2,C,D,,,C,P3,missed,false,false,P3 missed Layup
";

    #[test]
    fn final_score_is_last_recorded_running_total() {
        let events = parse_events(RUNNING.as_bytes()).unwrap();
        let finals = final_scores(&events);
        assert_eq!(finals.len(), 1);
        assert_eq!(finals[0].game_id, "g1");
        assert_eq!(finals[0].home_score, 4);
        assert_eq!(finals[0].away_score, 3);
    }

    #[test]
    fn games_without_final_scores_are_dropped() {
        let events = parse_events(RUNNING.as_bytes()).unwrap();
        let finals = final_scores(&events);
        assert!(finals.iter().all(|fs| fs.game_id != "g2"));
        // The dropped game still counts toward games played for team C.
        let (wins, losses, games) = calculate_wins_losses(&events, "C");
        assert_eq!((wins, losses, games), (0, 1, 1));
    }

    #[test]
    fn win_percentage_handles_no_games() {
        let stats = TeamStats {
            games_played: 0,
            wins: 0,
            losses: 0,
            fg_percentage: 0.0,
            three_percentage: 0.0,
        };
        assert_eq!(stats.win_percentage(), 0.0);
    }
}
