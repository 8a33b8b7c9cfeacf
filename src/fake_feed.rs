use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::conference::CONFERENCE_TEAMS;
use crate::dataset::{ShotEvent, ShotOutcome};

const DEMO_GAMES: usize = 32;
const ROSTER_SIZE: usize = 8;

const FIRST_INITIALS: &[&str] = &["A", "B", "C", "D", "E", "J", "K", "L", "M", "R", "S", "T"];
const LAST_NAMES: &[&str] = &[
    "Stone", "Vega", "Holt", "Nox", "Vale", "Rook", "Park", "Moss", "Noor", "Hale", "Ash",
    "Quinn", "Reyes", "Cole", "Drake", "Finch",
];

/// Row with every optional column empty; demo games and tests fill in what
/// they need.
pub fn blank_event(game_id: &str, home: &str, away: &str) -> ShotEvent {
    ShotEvent {
        game_id: game_id.to_string(),
        home: home.to_string(),
        away: away.to_string(),
        home_score: None,
        away_score: None,
        shot_team: None,
        shooter: None,
        shot_outcome: None,
        three_pt: false,
        free_throw: false,
        description: None,
    }
}

/// Deterministic synthetic season slice across the conference teams, for
/// offline runs. Running scores are monotonic within a game and the last row
/// carries the final score, matching the shape of the real export.
pub fn generate_sample_events(seed: u64) -> Vec<ShotEvent> {
    let mut rng = StdRng::seed_from_u64(seed);
    let teams: Vec<&str> = CONFERENCE_TEAMS
        .iter()
        .flat_map(|(_, teams)| teams.iter().copied())
        .collect();

    let mut events = Vec::new();
    for game_idx in 0..DEMO_GAMES {
        let home_idx = rng.gen_range(0..teams.len());
        let mut away_idx = rng.gen_range(0..teams.len());
        while away_idx == home_idx {
            away_idx = rng.gen_range(0..teams.len());
        }
        let game_id = format!("demo-{:04}", game_idx + 1);
        append_game(&mut events, &mut rng, &game_id, teams[home_idx], teams[away_idx]);
    }
    events
}

fn append_game(
    events: &mut Vec<ShotEvent>,
    rng: &mut StdRng,
    game_id: &str,
    home: &str,
    away: &str,
) {
    let home_roster = roster(rng);
    let away_roster = roster(rng);
    let mut home_score = 0u32;
    let mut away_score = 0u32;

    let plays = rng.gen_range(90..140);
    for _ in 0..plays {
        // The real feed carries the odd non-shot row (timeouts, fouls).
        if rng.gen_bool(0.04) {
            let mut row = blank_event(game_id, home, away);
            row.home_score = Some(home_score);
            row.away_score = Some(away_score);
            row.description = Some(format!("Timeout {home}"));
            events.push(row);
            continue;
        }

        let home_ball = rng.gen_bool(0.5);
        let (shot_team, shot_roster) = if home_ball {
            (home, &home_roster)
        } else {
            (away, &away_roster)
        };
        let shooter = shot_roster[rng.gen_range(0..shot_roster.len())].clone();

        let roll: f64 = rng.gen_range(0.0..1.0);
        let (three_pt, free_throw, verb_target, make_odds, points) = if roll < 0.16 {
            (false, true, "Free Throw", 0.72, 1)
        } else if roll < 0.48 {
            (true, false, "Three Point Jumper", 0.34, 3)
        } else if roll < 0.74 {
            (false, false, "Layup", 0.58, 2)
        } else {
            (false, false, "Jump Shot", 0.42, 2)
        };

        let made = rng.gen_bool(make_odds);
        if made {
            if home_ball {
                home_score += points;
            } else {
                away_score += points;
            }
        }

        let verb = if made { "made" } else { "missed" };
        let mut row = blank_event(game_id, home, away);
        row.home_score = Some(home_score);
        row.away_score = Some(away_score);
        row.shot_team = Some(shot_team.to_string());
        row.shooter = Some(shooter.clone());
        row.shot_outcome = Some(if made {
            ShotOutcome::Made
        } else {
            ShotOutcome::Missed
        });
        row.three_pt = three_pt;
        row.free_throw = free_throw;
        row.description = Some(format!("{shooter} {verb} {verb_target}"));
        events.push(row);
    }
}

fn roster(rng: &mut StdRng) -> Vec<String> {
    let mut names = Vec::with_capacity(ROSTER_SIZE);
    while names.len() < ROSTER_SIZE {
        let first = FIRST_INITIALS[rng.gen_range(0..FIRST_INITIALS.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let name = format!("{first}. {last}");
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
