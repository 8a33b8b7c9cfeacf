use hoops_terminal::conference::conference_standings;
use hoops_terminal::dataset::{ShotEvent, ShotOutcome};
use hoops_terminal::fake_feed::blank_event;
use hoops_terminal::team_stats::get_team_stats;

fn game(
    game_id: &str,
    home: &str,
    away: &str,
    home_score: u32,
    away_score: u32,
) -> Vec<ShotEvent> {
    // Two rows per game: one early shot by each side, final score on the last.
    let mut first = blank_event(game_id, home, away);
    first.home_score = Some(2);
    first.away_score = Some(0);
    first.shot_team = Some(home.to_string());
    first.shooter = Some(format!("{home} Guard"));
    first.shot_outcome = Some(ShotOutcome::Made);
    first.description = Some("made Layup".to_string());

    let mut last = blank_event(game_id, home, away);
    last.home_score = Some(home_score);
    last.away_score = Some(away_score);
    last.shot_team = Some(away.to_string());
    last.shooter = Some(format!("{away} Guard"));
    last.shot_outcome = Some(ShotOutcome::Missed);
    last.description = Some("missed Jump Shot".to_string());

    vec![first, last]
}

#[test]
fn standings_sort_by_win_percentage_and_skip_untracked_teams() {
    let mut events = Vec::new();
    events.extend(game("1", "Kentucky", "Duke", 80, 75));
    events.extend(game("2", "Duke", "Kentucky", 70, 72));
    events.extend(game("3", "Duke", "Tennessee", 68, 60));

    let rows = conference_standings(&events, &["Kentucky", "Duke", "Auburn"]);
    assert_eq!(rows.len(), 2, "Auburn never appears and is skipped");
    assert_eq!(rows[0].team, "Kentucky");
    assert_eq!(rows[0].wins, 2);
    assert_eq!(rows[0].total_games, 2);
    assert_eq!(rows[0].win_percentage, 100.0);
    assert_eq!(rows[1].team, "Duke");
    assert_eq!(rows[1].wins, 1);
    assert_eq!(rows[1].total_games, 3);
}

#[test]
fn standings_make_rate_includes_free_throws() {
    let mut ft = blank_event("1", "Kentucky", "Duke");
    ft.home_score = Some(1);
    ft.away_score = Some(0);
    ft.shot_team = Some("Kentucky".to_string());
    ft.shooter = Some("P".to_string());
    ft.shot_outcome = Some(ShotOutcome::Made);
    ft.free_throw = true;
    ft.description = Some("P made Free Throw".to_string());

    let mut miss = ft.clone();
    miss.shot_outcome = Some(ShotOutcome::Missed);
    miss.free_throw = false;
    miss.description = Some("P missed Jump Shot".to_string());
    miss.home_score = Some(80);
    miss.away_score = Some(75);

    let events = vec![ft, miss];

    // The standings make rate counts the free throw; the field-goal split
    // excludes it, so the same table reports two different numbers.
    let rows = conference_standings(&events, &["Kentucky"]);
    assert_eq!(rows[0].fg_percentage, 50.0);
    let stats = get_team_stats(&events, "Kentucky");
    assert_eq!(stats.fg_percentage, 0.0);
}

#[test]
fn standings_are_stable_across_repeat_calls() {
    let mut events = Vec::new();
    events.extend(game("1", "Kentucky", "Duke", 80, 75));
    events.extend(game("2", "Duke", "Tennessee", 70, 60));

    let teams = ["Kentucky", "Duke", "Tennessee"];
    let first = conference_standings(&events, &teams);
    let second = conference_standings(&events, &teams);
    assert_eq!(first, second);
}
