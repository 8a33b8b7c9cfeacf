use crate::dataset::{ShotEvent, player_shots, team_shots};
use crate::shooting::percentage;

/// Court zone used by the shot-chart overlay. Layup detection wins over the
/// three-point flag (a putback layup from a tipped three stays a layup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotZone {
    Layup,
    MidRange,
    ThreePoint,
}

impl ShotZone {
    pub const ALL: [ShotZone; 3] = [ShotZone::Layup, ShotZone::MidRange, ShotZone::ThreePoint];

    pub fn label(self) -> &'static str {
        match self {
            ShotZone::Layup => "Layup",
            ShotZone::MidRange => "Mid-Range",
            ShotZone::ThreePoint => "Three Point",
        }
    }
}

/// Scoring category used by the distribution breakdown. Distinct from
/// `ShotZone`: different labels, different precedence (free throws first),
/// and the two are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotCategory {
    FreeThrow,
    ThreePoint,
    TwoPoint,
}

impl ShotCategory {
    pub const ALL: [ShotCategory; 3] = [
        ShotCategory::FreeThrow,
        ShotCategory::ThreePoint,
        ShotCategory::TwoPoint,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShotCategory::FreeThrow => "Free Throw",
            ShotCategory::ThreePoint => "3-Point",
            ShotCategory::TwoPoint => "2-Point",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LabeledShot<'a> {
    pub event: &'a ShotEvent,
    pub shot_type: ShotZone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSummary {
    pub zone: ShotZone,
    pub made: usize,
    pub attempts: usize,
    pub percentage: f64,
}

pub fn classify_zone(event: &ShotEvent) -> ShotZone {
    if event.description_contains("Layup") {
        ShotZone::Layup
    } else if event.three_pt {
        ShotZone::ThreePoint
    } else {
        ShotZone::MidRange
    }
}

pub fn classify_category(event: &ShotEvent) -> ShotCategory {
    if event.description_contains("Free Throw") {
        ShotCategory::FreeThrow
    } else if event.three_pt {
        ShotCategory::ThreePoint
    } else {
        ShotCategory::TwoPoint
    }
}

/// Select a team's (or a single shooter's) rows and attach a zone to each.
/// Row count is preserved: every selected row gets exactly one label.
pub fn process_shots_for_chart<'a>(
    events: &'a [ShotEvent],
    name: &str,
    is_team: bool,
) -> Vec<LabeledShot<'a>> {
    let shots = if is_team {
        team_shots(events, name)
    } else {
        player_shots(events, name)
    };
    shots
        .into_iter()
        .map(|event| LabeledShot {
            event,
            shot_type: classify_zone(event),
        })
        .collect()
}

/// Made/attempted/percentage per zone, in court order (rim outward).
pub fn zone_summary(shots: &[LabeledShot<'_>]) -> Vec<ZoneSummary> {
    ShotZone::ALL
        .into_iter()
        .map(|zone| {
            let attempts = shots.iter().filter(|s| s.shot_type == zone).count();
            let made = shots
                .iter()
                .filter(|s| s.shot_type == zone && s.event.is_made())
                .count();
            ZoneSummary {
                zone,
                made,
                attempts,
                percentage: percentage(made, attempts),
            }
        })
        .collect()
}

/// Category counts for the distribution panel, descending; empty categories
/// are omitted.
pub fn shot_type_breakdown(shots: &[&ShotEvent]) -> Vec<(ShotCategory, usize)> {
    let mut counts = [0usize; 3];
    for shot in shots {
        let idx = ShotCategory::ALL
            .iter()
            .position(|c| *c == classify_category(shot))
            .unwrap_or(2);
        counts[idx] += 1;
    }

    let mut out: Vec<(ShotCategory, usize)> = ShotCategory::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Heat tint for a zone's shooting percentage. Bands are inclusive on their
/// upper bound; exactly zero is the "no data" tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneColor {
    Neutral,
    Red,
    Yellow,
    LightGreen,
    Green,
    BrightGreen,
}

impl ZoneColor {
    pub fn hex(self) -> &'static str {
        match self {
            ZoneColor::Neutral => "lightgray",
            ZoneColor::Red => "#ff4747",
            ZoneColor::Yellow => "#f7f36d",
            ZoneColor::LightGreen => "#bff783",
            ZoneColor::Green => "#76f562",
            ZoneColor::BrightGreen => "#05fa05",
        }
    }
}

pub fn get_zone_color(percentage: f64) -> ZoneColor {
    if percentage == 0.0 {
        ZoneColor::Neutral
    } else if percentage <= 42.0 {
        ZoneColor::Red
    } else if percentage <= 50.0 {
        ZoneColor::Yellow
    } else if percentage <= 60.0 {
        ZoneColor::LightGreen
    } else if percentage <= 80.0 {
        ZoneColor::Green
    } else {
        ZoneColor::BrightGreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_and_category_precedence_differ() {
        let mut event = crate::fake_feed::blank_event("g1", "A", "B");
        event.three_pt = true;
        event.description = Some("P made Layup".to_string());
        // Layup text beats the three flag for the zone...
        assert_eq!(classify_zone(&event), ShotZone::Layup);
        // ...but the category still reads the three flag.
        assert_eq!(classify_category(&event), ShotCategory::ThreePoint);
    }
}
