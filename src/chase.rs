use serde::{Deserialize, Serialize};

use crate::error::DlsError;
use crate::innings::{InningsSnapshot, MatchSettings};
use crate::par::{par_score_at, par_status, ParStatus};
use crate::scenarios::{generate_scenarios, WhatIfScenario};
use crate::target::{calculate_target, DlsResult};

/// A second-innings chase: team 1's completed innings plus the match settings.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChaseState {
    pub first_innings: InningsSnapshot,
    pub settings: MatchSettings,
}

impl ChaseState {
    /// Create a chase from team 1's completed innings and the match settings.
    pub fn new(first_innings: InningsSnapshot, settings: MatchSettings) -> Self {
        ChaseState {
            first_innings,
            settings,
        }
    }

    /// Revised target for team 2.
    pub fn target(&self) -> Result<DlsResult, DlsError> {
        calculate_target(&self.first_innings, &self.settings)
    }

    /// Par score at team 2's current position.
    pub fn par_at(&self, progress: &InningsSnapshot) -> u32 {
        par_score_at(&self.first_innings, &self.settings, progress)
    }

    /// What-if projections from team 2's current position.
    pub fn scenarios(&self, progress: &InningsSnapshot) -> Vec<WhatIfScenario> {
        generate_scenarios(&self.first_innings, &self.settings, progress)
    }

    /// Team 2's runs compared with par at its current position.
    pub fn status(&self, progress: &InningsSnapshot) -> ParStatus {
        par_status(progress.runs_scored, self.par_at(progress))
    }

    /// Create a modified copy after a further interruption changes team 2's overs.
    pub fn with_allotted_overs(&self, team2_allotted_overs: f64) -> Self {
        ChaseState {
            settings: MatchSettings::revised(self.settings.total_overs, team2_allotted_overs),
            ..*self
        }
    }
}
