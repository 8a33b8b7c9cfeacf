use crate::dataset::ShotEvent;

/// Field-goal and three-point percentages for a shot subset.
///
/// Field-goal attempts are every row whose description does not mention
/// "Free Throw"; three-point attempts are every row with the `three_pt` flag.
/// The subsets overlap: a three-pointer counts toward both splits. Empty
/// denominators report 0 rather than an error.
pub fn calculate_shooting_percentages(shots: &[&ShotEvent]) -> (f64, f64) {
    let mut fg_made = 0usize;
    let mut fg_total = 0usize;
    let mut three_made = 0usize;
    let mut three_total = 0usize;

    for shot in shots {
        if !shot.description_contains("Free Throw") {
            fg_total += 1;
            if shot.is_made() {
                fg_made += 1;
            }
        }
        if shot.three_pt {
            three_total += 1;
            if shot.is_made() {
                three_made += 1;
            }
        }
    }

    (percentage(fg_made, fg_total), percentage(three_made, three_total))
}

pub fn percentage(made: usize, attempts: usize) -> f64 {
    if attempts > 0 {
        made as f64 / attempts as f64 * 100.0
    } else {
        0.0
    }
}
