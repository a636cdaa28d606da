use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::G50;
use crate::error::DlsError;
use crate::innings::{InningsSnapshot, MatchSettings};
use crate::resource::{resource_percentage, round_half_up, round_to_tenth};

/// Revised target for team 2 after a completed first innings.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DlsResult {
    /// Score that ties the match
    pub par_score: u32,

    /// Runs needed to win (always `par_score + 1`)
    pub revised_target: u32,

    /// Resource percentage team 1 used, to one decimal place
    pub resource_team1_used: f64,

    /// Resource percentage available to team 2, to one decimal place
    pub resource_team2_available: f64,
}

/// Resource percentage team 1 consumed over its innings.
pub(crate) fn team1_resources_used(first_innings: &InningsSnapshot, settings: &MatchSettings) -> f64 {
    let total_overs = settings.total_overs as f64;
    let r1_start = resource_percentage(total_overs, 0.0);
    let overs_remaining = (total_overs - first_innings.decimal_overs()).max(0.0);
    let r1_remaining = resource_percentage(overs_remaining, first_innings.wickets_lost as f64);
    r1_start - r1_remaining
}

fn validate_inputs(first_innings: &InningsSnapshot, settings: &MatchSettings) -> Result<(), DlsError> {
    if !(first_innings.decimal_overs() > 0.0) {
        return Err(DlsError::NoOversBowled {
            overs: first_innings.overs_bowled,
        });
    }
    if settings.total_overs == 0 {
        return Err(DlsError::InvalidTotalOvers {
            overs: settings.total_overs,
        });
    }
    if !(settings.team2_allotted_overs > 0.0) {
        return Err(DlsError::InvalidAllottedOvers {
            overs: settings.team2_allotted_overs,
        });
    }
    Ok(())
}

/// Calculate team 2's revised target.
///
/// When team 2 has fewer resources than team 1 used, the first-innings
/// score is scaled down in proportion. Otherwise the surplus resource is
/// converted to runs at the G50 rate and added on.
///
/// # Arguments
/// * `first_innings` - Team 1's completed innings
/// * `settings` - Match length and team 2's allotted overs
///
/// # Returns
/// The par score, revised target and both sides' resource percentages, or
/// an error if no overs were bowled or either overs count is not positive.
pub fn calculate_target(
    first_innings: &InningsSnapshot,
    settings: &MatchSettings,
) -> Result<DlsResult, DlsError> {
    if let Err(e) = validate_inputs(first_innings, settings) {
        warn!("Rejected target calculation: {}", e);
        return Err(e);
    }

    let r1_used = team1_resources_used(first_innings, settings);
    let r2_available = resource_percentage(settings.team2_allotted_overs, 0.0);
    let runs = first_innings.runs_scored as f64;

    let reduced = r2_available < r1_used;
    let par = if reduced {
        round_half_up(runs * r2_available / r1_used)
    } else {
        let extra = r2_available - r1_used;
        round_half_up(runs + extra / 100.0 * G50)
    };
    // leave room for the winning run
    let par_score = (par.max(0.0) as u32).min(u32::MAX - 1);

    debug!(
        r1_used,
        r2_available,
        reduced,
        par_score,
        "Calculated revised target"
    );

    Ok(DlsResult {
        par_score,
        revised_target: par_score + 1,
        resource_team1_used: round_to_tenth(r1_used),
        resource_team2_available: round_to_tenth(r2_available),
    })
}

/// Revised targets for every whole-over allotment from 1 to `total_overs`.
///
/// Uses parallel processing; results are ordered by allotment.
pub fn target_ladder(
    first_innings: &InningsSnapshot,
    total_overs: u32,
) -> Result<Vec<(u32, DlsResult)>, DlsError> {
    if total_overs == 0 {
        return Err(DlsError::InvalidTotalOvers { overs: total_overs });
    }

    (1..=total_overs)
        .into_par_iter()
        .map(|allotted| {
            let settings = MatchSettings::revised(total_overs, allotted as f64);
            calculate_target(first_innings, &settings).map(|result| (allotted, result))
        })
        .collect()
}
