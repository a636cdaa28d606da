//! What-if projections of the par score from team 2's current position.

use serde::{Deserialize, Serialize};

use crate::constants::{ALL_OUT_WICKETS, SCENARIO_OVERS_AHEAD};
use crate::innings::{InningsSnapshot, MatchSettings};
use crate::overs::format_overs_display;
use crate::par::par_score_at_decimal;

/// Par score for one projected state of the chase.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhatIfScenario {
    pub label: String,
    pub description: String,
    pub par_score: u32,

    /// Decimal overs of the projected state
    pub projected_overs: f64,

    pub projected_wickets: u32,
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn describe(overs: f64, wickets: u32) -> String {
    let unit = if wickets == 1 { "wkt" } else { "wkts" };
    format!("At {} ov, {} {}", format_overs_display(overs), wickets, unit)
}

/// Project the par score for likely next states of the chase.
///
/// The first entry is always the par at the current position. After it come,
/// where still possible: one more wicket, two more wickets, five more overs
/// (capped at the allotment), and five more overs with one more wicket.
///
/// # Arguments
/// * `first_innings` - Team 1's completed innings
/// * `settings` - Match length and team 2's allotted overs
/// * `progress` - Team 2's current position (overs in cricket notation)
pub fn generate_scenarios(
    first_innings: &InningsSnapshot,
    settings: &MatchSettings,
    progress: &InningsSnapshot,
) -> Vec<WhatIfScenario> {
    let overs = progress.decimal_overs();
    let wickets = progress.wickets_lost.min(ALL_OUT_WICKETS);
    let par_at = |overs: f64, wickets: u32| par_score_at_decimal(first_innings, settings, overs, wickets);

    let mut scenarios = vec![WhatIfScenario {
        label: "Current Par".to_string(),
        description: describe(overs, wickets),
        par_score: par_at(overs, wickets),
        projected_overs: overs,
        projected_wickets: wickets,
    }];

    if wickets < 9 {
        scenarios.push(WhatIfScenario {
            label: format!("If {} Wicket Falls", ordinal(wickets + 1)),
            description: describe(overs, wickets + 1),
            par_score: par_at(overs, wickets + 1),
            projected_overs: overs,
            projected_wickets: wickets + 1,
        });
    }

    if wickets + 2 <= 9 {
        scenarios.push(WhatIfScenario {
            label: format!("If {} Wickets Down", wickets + 2),
            description: describe(overs, wickets + 2),
            par_score: par_at(overs, wickets + 2),
            projected_overs: overs,
            projected_wickets: wickets + 2,
        });
    }

    let future_overs = (overs + SCENARIO_OVERS_AHEAD).min(settings.team2_allotted_overs);
    if future_overs > overs {
        let overs_ahead = format_overs_display(future_overs - overs);

        scenarios.push(WhatIfScenario {
            label: format!("After {} More Overs", overs_ahead),
            description: describe(future_overs, wickets),
            par_score: par_at(future_overs, wickets),
            projected_overs: future_overs,
            projected_wickets: wickets,
        });

        if wickets < 9 {
            scenarios.push(WhatIfScenario {
                label: format!("{} More Overs + Wicket", overs_ahead),
                description: describe(future_overs, wickets + 1),
                par_score: par_at(future_overs, wickets + 1),
                projected_overs: future_overs,
                projected_wickets: wickets + 1,
            });
        }
    }

    scenarios
}
