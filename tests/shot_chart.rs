use hoops_terminal::dataset::{ShotEvent, ShotOutcome};
use hoops_terminal::fake_feed::blank_event;
use hoops_terminal::shot_chart::{
    ShotCategory, ShotZone, ZoneColor, get_zone_color, process_shots_for_chart,
    shot_type_breakdown, zone_summary,
};

fn shot(team: &str, shooter: &str, three_pt: bool, description: &str, made: bool) -> ShotEvent {
    let mut event = blank_event("1", team, "Rival");
    event.shot_team = Some(team.to_string());
    event.shooter = Some(shooter.to_string());
    event.shot_outcome = Some(if made {
        ShotOutcome::Made
    } else {
        ShotOutcome::Missed
    });
    event.three_pt = three_pt;
    event.free_throw = description.contains("Free Throw");
    event.description = Some(description.to_string());
    event
}

#[test]
fn zone_colors_use_inclusive_upper_bounds() {
    assert_eq!(get_zone_color(0.0), ZoneColor::Neutral);
    assert_eq!(get_zone_color(42.0), ZoneColor::Red);
    assert_eq!(get_zone_color(50.0), ZoneColor::Yellow);
    assert_eq!(get_zone_color(60.0), ZoneColor::LightGreen);
    assert_eq!(get_zone_color(80.0), ZoneColor::Green);
    assert_eq!(get_zone_color(81.0), ZoneColor::BrightGreen);
}

#[test]
fn zone_colors_keep_the_dashboard_palette() {
    assert_eq!(get_zone_color(0.0).hex(), "lightgray");
    assert_eq!(get_zone_color(30.0).hex(), "#ff4747");
    assert_eq!(get_zone_color(45.0).hex(), "#f7f36d");
    assert_eq!(get_zone_color(55.0).hex(), "#bff783");
    assert_eq!(get_zone_color(70.0).hex(), "#76f562");
    assert_eq!(get_zone_color(95.0).hex(), "#05fa05");
}

#[test]
fn chart_labels_preserve_row_count() {
    let events = vec![
        shot("Kentucky", "P1", true, "P1 made Three Point Jumper", true),
        shot("Kentucky", "P2", false, "P2 made Jump Shot", true),
        shot("Duke", "P3", false, "P3 made Layup", true),
    ];
    let labeled = process_shots_for_chart(&events, "Kentucky", true);
    assert_eq!(labeled.len(), 2);
    assert_eq!(labeled[0].shot_type, ShotZone::ThreePoint);
    assert_eq!(labeled[1].shot_type, ShotZone::MidRange);
}

#[test]
fn layup_text_beats_the_three_point_flag() {
    let events = vec![shot(
        "Kentucky",
        "P1",
        true,
        "P1 made Layup off the break",
        true,
    )];
    let labeled = process_shots_for_chart(&events, "Kentucky", true);
    assert_eq!(labeled[0].shot_type, ShotZone::Layup);
}

#[test]
fn player_charts_filter_by_shooter() {
    let events = vec![
        shot("Kentucky", "P1", false, "P1 made Layup", true),
        shot("Kentucky", "P2", false, "P2 made Jump Shot", true),
    ];
    let labeled = process_shots_for_chart(&events, "P1", false);
    assert_eq!(labeled.len(), 1);
    assert_eq!(labeled[0].shot_type, ShotZone::Layup);
}

#[test]
fn breakdown_puts_free_throws_ahead_of_the_three_flag() {
    // A free-throw description wins even with three_pt set; the zone labeling
    // would file the same row under Three Point.
    let odd = shot("Kentucky", "P1", true, "P1 made Free Throw", true);
    let three = shot("Kentucky", "P2", true, "P2 made Three Point Jumper", true);
    let two = shot("Kentucky", "P3", false, "P3 made Jump Shot", true);
    let events = vec![odd.clone(), three.clone(), two.clone()];

    let shots: Vec<&ShotEvent> = events.iter().collect();
    let breakdown = shot_type_breakdown(&shots);
    let get = |cat: ShotCategory| {
        breakdown
            .iter()
            .find(|(c, _)| *c == cat)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    };
    assert_eq!(get(ShotCategory::FreeThrow), 1);
    assert_eq!(get(ShotCategory::ThreePoint), 1);
    assert_eq!(get(ShotCategory::TwoPoint), 1);
}

#[test]
fn breakdown_sorts_by_count_and_drops_empty_categories() {
    let events = vec![
        shot("Kentucky", "P1", true, "P1 made Three Point Jumper", true),
        shot("Kentucky", "P1", true, "P1 missed Three Point Jumper", false),
        shot("Kentucky", "P2", false, "P2 made Jump Shot", true),
    ];
    let shots: Vec<&ShotEvent> = events.iter().collect();
    let breakdown = shot_type_breakdown(&shots);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0], (ShotCategory::ThreePoint, 2));
    assert_eq!(breakdown[1], (ShotCategory::TwoPoint, 1));
}

#[test]
fn zone_summary_reports_all_three_zones() {
    let events = vec![
        shot("Kentucky", "P1", false, "P1 made Layup", true),
        shot("Kentucky", "P1", false, "P1 missed Layup", false),
        shot("Kentucky", "P2", true, "P2 made Three Point Jumper", true),
    ];
    let labeled = process_shots_for_chart(&events, "Kentucky", true);
    let summary = zone_summary(&labeled);

    assert_eq!(summary.len(), 3);
    let layup = &summary[0];
    assert_eq!(layup.zone, ShotZone::Layup);
    assert_eq!((layup.made, layup.attempts), (1, 2));
    assert_eq!(layup.percentage, 50.0);

    let mid = &summary[1];
    assert_eq!(mid.zone, ShotZone::MidRange);
    assert_eq!((mid.made, mid.attempts), (0, 0));
    assert_eq!(mid.percentage, 0.0);

    let three = &summary[2];
    assert_eq!(three.zone, ShotZone::ThreePoint);
    assert_eq!((three.made, three.attempts), (1, 1));
}
