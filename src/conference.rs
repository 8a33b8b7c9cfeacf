use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::dataset::ShotEvent;
use crate::shooting::percentage;
use crate::team_stats::{count_wins, final_scores};

/// Conference rosters for the season covered by the dataset. Static
/// configuration data, indexed once at startup.
pub const CONFERENCE_TEAMS: &[(&str, &[&str])] = &[
    (
        "SEC",
        &[
            "Alabama",
            "Arkansas",
            "Auburn",
            "Florida",
            "Georgia",
            "Kentucky",
            "LSU",
            "Mississippi State",
            "Missouri",
            "Ole Miss",
            "South Carolina",
            "Tennessee",
            "Texas A&M",
            "Vanderbilt",
        ],
    ),
    (
        "Big Ten",
        &[
            "Illinois",
            "Indiana",
            "Iowa",
            "Maryland",
            "Michigan",
            "Michigan State",
            "Minnesota",
            "Nebraska",
            "Northwestern",
            "Ohio State",
            "Penn State",
            "Purdue",
            "Rutgers",
            "Wisconsin",
        ],
    ),
    (
        "Big 12",
        &[
            "BYU",
            "Cincinnati",
            "Baylor",
            "Houston",
            "Iowa State",
            "Kansas",
            "Kansas State",
            "Oklahoma",
            "Oklahoma State",
            "TCU",
            "Texas",
            "Texas Tech",
            "UCF",
            "West Virginia",
        ],
    ),
    (
        "ACC",
        &[
            "Boston College",
            "Clemson",
            "Duke",
            "Florida State",
            "Georgia Tech",
            "Louisville",
            "Miami FL",
            "NC State",
            "North Carolina",
            "Pittsburgh",
            "Syracuse",
            "Virginia",
            "Virginia Tech",
            "Wake Forest",
            "Notre Dame",
        ],
    ),
];

static CONFERENCE_INDEX: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| CONFERENCE_TEAMS.iter().copied().collect());

pub fn conferences() -> Vec<&'static str> {
    CONFERENCE_TEAMS.iter().map(|(name, _)| *name).collect()
}

pub fn conference_teams(name: &str) -> Option<&'static [&'static str]> {
    CONFERENCE_INDEX.get(name).copied()
}

pub fn all_teams() -> Vec<&'static str> {
    let mut teams: Vec<&'static str> = CONFERENCE_TEAMS
        .iter()
        .flat_map(|(_, teams)| teams.iter().copied())
        .collect();
    teams.sort_unstable();
    teams
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    pub team: String,
    pub win_percentage: f64,
    pub fg_percentage: f64,
    pub wins: u32,
    pub total_games: u32,
}

/// Conference overview: win percentage over every tracked appearance and a
/// raw make rate over every shot row (free throws included here, unlike the
/// field-goal split). Teams with no tracked games are skipped; sorted by win
/// percentage descending.
pub fn conference_standings(events: &[ShotEvent], teams: &[&str]) -> Vec<StandingsRow> {
    let finals = final_scores(events);
    let mut rows = Vec::new();

    for &team in teams {
        let mut tracked: HashSet<&str> = HashSet::new();
        for event in events {
            if event.home == team || event.away == team {
                tracked.insert(event.game_id.as_str());
            }
        }
        if tracked.is_empty() {
            continue;
        }

        let wins = count_wins(&finals, team);
        let total_games = tracked.len() as u32;

        let (made, total) = events
            .iter()
            .filter(|e| e.shot_team.as_deref() == Some(team))
            .fold((0usize, 0usize), |(made, total), e| {
                (made + usize::from(e.is_made()), total + 1)
            });

        rows.push(StandingsRow {
            team: team.to_string(),
            win_percentage: percentage(wins as usize, total_games as usize),
            fg_percentage: percentage(made, total),
            wins,
            total_games,
        });
    }

    rows.sort_by(|a, b| {
        b.win_percentage
            .partial_cmp(&a.win_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table() {
        assert_eq!(conferences(), vec!["SEC", "Big Ten", "Big 12", "ACC"]);
        let sec = conference_teams("SEC").unwrap();
        assert_eq!(sec.len(), 14);
        assert!(sec.contains(&"Kentucky"));
        assert!(conference_teams("WCC").is_none());
    }

    #[test]
    fn all_teams_is_sorted_and_complete() {
        let teams = all_teams();
        assert_eq!(teams.len(), 57);
        assert!(teams.windows(2).all(|w| w[0] <= w[1]));
    }
}
