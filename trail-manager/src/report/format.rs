//! Text reports.

use crate::planner::{CandidateMap, DistanceMap, rank_by_distance, rank_by_trail_count};

/// Feet in one mile.
pub const FEET_PER_MILE: u64 = 5280;

const INDENT: &str = "   ";

/// Render a distance in miles with two decimal places, rounding half up.
///
/// Integer arithmetic keeps exact ties (such as 5346 feet, 1.0125 miles)
/// rounding up instead of depending on the float representation.
///
/// # Examples
///
/// ```
/// use trail_manager::report::format_miles;
///
/// assert_eq!(format_miles(5700), "1.08");
/// assert_eq!(format_miles(5346), "1.02");
/// assert_eq!(format_miles(10560), "2.00");
/// ```
pub fn format_miles(feet: u64) -> String {
    let hundredths = (feet * 200 + FEET_PER_MILE) / (2 * FEET_PER_MILE);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Render the distances report for a query made with `origin_id`.
pub fn distances_report(origin_id: &str, distances: &DistanceMap<'_>) -> String {
    let Some(origin) = distances.origin() else {
        return format!("The provided landmark ID ({origin_id}) is invalid for the park.");
    };

    if distances.len() == 1 {
        return format!("No landmarks are reachable from {origin}.");
    }

    let mut out = format!("Landmarks Reachable from {origin} {{\n");

    for entry in rank_by_distance(distances.entries()) {
        if entry.landmark == origin {
            continue;
        }

        out.push_str(&format!("{INDENT}{} feet ", entry.feet));
        if entry.feet > FEET_PER_MILE {
            out.push_str(&format!("({} miles) ", format_miles(entry.feet)));
        }
        out.push_str(&format!("to {}\n", entry.landmark));
    }

    out.push('}');
    out
}

/// Render the first-aid station candidates report.
///
/// A non-positive threshold is reported as an invalid request, distinct from
/// a valid threshold that no landmark meets.
pub fn candidates_report(candidates: &CandidateMap<'_>) -> String {
    let threshold = candidates.threshold();

    if threshold <= 0 {
        return "Number of intersecting trails must be greater than 0.".to_string();
    }

    if candidates.is_empty() {
        return format!("No landmarks have at least {threshold} intersecting trails.");
    }

    let mut out = String::from("Proposed Locations for First Aid Stations {\n");

    for entry in rank_by_trail_count(candidates.entries()) {
        out.push_str(&format!(
            "{INDENT}{} - {} intersecting trails\n",
            entry.landmark,
            entry.trail_count()
        ));
    }

    out.push('}');
    out
}
