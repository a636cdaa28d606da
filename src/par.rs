use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::G50;
use crate::innings::{InningsSnapshot, MatchSettings};
use crate::resource::{resource_percentage, round_half_up};
use crate::target::team1_resources_used;

/// Par score for team 2 after `overs_bowled` decimal overs with `wickets_lost` down.
pub(crate) fn par_score_at_decimal(
    first_innings: &InningsSnapshot,
    settings: &MatchSettings,
    overs_bowled: f64,
    wickets_lost: u32,
) -> u32 {
    let r1_used = team1_resources_used(first_innings, settings);
    let r2_total = resource_percentage(settings.team2_allotted_overs, 0.0);
    if r2_total <= 0.0 {
        return 0;
    }

    let overs_left = (settings.team2_allotted_overs - overs_bowled).max(0.0);
    let r2_remaining = resource_percentage(overs_left, wickets_lost as f64);
    let r2_used = r2_total - r2_remaining;
    let runs = first_innings.runs_scored as f64;

    let par = if r2_total < r1_used {
        round_half_up(runs * r2_used / r1_used)
    } else {
        let adjusted = runs + (r2_total - r1_used) / 100.0 * G50;
        // ratio is exactly 1.0 once the allotment is used up, so par meets the target's par
        round_half_up(adjusted * (r2_used / r2_total))
    };
    par.max(0.0) as u32
}

/// Par score at a point in team 2's innings.
///
/// Scales the first-innings score by the share of team 2's resources
/// already consumed, giving the score team 2 must have to be level.
///
/// # Arguments
/// * `first_innings` - Team 1's completed innings
/// * `settings` - Match length and team 2's allotted overs
/// * `progress` - Team 2's current position (overs in cricket notation)
pub fn par_score_at(
    first_innings: &InningsSnapshot,
    settings: &MatchSettings,
    progress: &InningsSnapshot,
) -> u32 {
    par_score_at_decimal(first_innings, settings, progress.decimal_overs(), progress.wickets_lost)
}

/// Where the chasing side stands against par.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParStatus {
    Ahead(u32),
    Behind(u32),
    OnPar,
}

impl ParStatus {
    /// Runs above (positive) or below (negative) par.
    pub fn run_difference(&self) -> i64 {
        match *self {
            ParStatus::Ahead(by) => by as i64,
            ParStatus::Behind(by) => -(by as i64),
            ParStatus::OnPar => 0,
        }
    }
}

impl fmt::Display for ParStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParStatus::Ahead(by) => write!(f, "Ahead of par by {}", by),
            ParStatus::Behind(by) => write!(f, "Behind par by {}", by),
            ParStatus::OnPar => write!(f, "On par"),
        }
    }
}

/// Compare team 2's runs with the par score.
pub fn par_status(team2_runs: u32, par: u32) -> ParStatus {
    if team2_runs > par {
        ParStatus::Ahead(team2_runs - par)
    } else if team2_runs < par {
        ParStatus::Behind(par - team2_runs)
    } else {
        ParStatus::OnPar
    }
}
