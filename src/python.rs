//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::chase::ChaseState;
use crate::constants::{G50, MAX_OVERS};
use crate::error::DlsError;
use crate::innings::{InningsSnapshot, MatchFormat, MatchSettings};
use crate::scenarios::WhatIfScenario;
use crate::target::DlsResult;

impl From<DlsError> for PyErr {
    fn from(err: DlsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymethods]
impl InningsSnapshot {
    #[new]
    #[pyo3(signature = (runs_scored, overs_bowled, wickets_lost = 0))]
    fn py_new(runs_scored: u32, overs_bowled: f64, wickets_lost: u32) -> Self {
        InningsSnapshot::new(runs_scored, overs_bowled, wickets_lost)
    }

    #[pyo3(name = "decimal_overs")]
    fn py_decimal_overs(&self) -> f64 {
        self.decimal_overs()
    }

    fn __repr__(&self) -> String {
        format!(
            "InningsSnapshot({}/{} in {} ov)",
            self.runs_scored, self.wickets_lost, self.overs_bowled
        )
    }
}

#[pymethods]
impl MatchSettings {
    /// Create settings; `team2_allotted_overs` defaults to the full match length.
    #[new]
    #[pyo3(signature = (total_overs, team2_allotted_overs = None))]
    fn py_new(total_overs: u32, team2_allotted_overs: Option<f64>) -> Self {
        MatchSettings::revised(total_overs, team2_allotted_overs.unwrap_or(total_overs as f64))
    }

    /// Uninterrupted settings for a format name ("ODI" or "T20").
    #[staticmethod]
    #[pyo3(name = "for_format")]
    fn py_for_format(format: &str) -> PyResult<Self> {
        let format: MatchFormat = format.parse()?;
        Ok(MatchSettings::for_format(format))
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchSettings(total_overs={}, team2_allotted_overs={})",
            self.total_overs, self.team2_allotted_overs
        )
    }
}

#[pymethods]
impl DlsResult {
    fn __repr__(&self) -> String {
        format!(
            "DlsResult(par_score={}, revised_target={}, resource_team1_used={:.1}, resource_team2_available={:.1})",
            self.par_score, self.revised_target, self.resource_team1_used, self.resource_team2_available
        )
    }
}

#[pymethods]
impl WhatIfScenario {
    fn __repr__(&self) -> String {
        format!("WhatIfScenario({:?}, par_score={})", self.label, self.par_score)
    }
}

#[pymethods]
impl ChaseState {
    #[new]
    fn py_new(first_innings: InningsSnapshot, settings: MatchSettings) -> Self {
        ChaseState::new(first_innings, settings)
    }

    #[pyo3(name = "target")]
    fn py_target(&self) -> PyResult<DlsResult> {
        Ok(self.target()?)
    }

    #[pyo3(name = "par_at")]
    fn py_par_at(&self, progress: &InningsSnapshot) -> u32 {
        self.par_at(progress)
    }

    #[pyo3(name = "scenarios")]
    fn py_scenarios(&self, progress: &InningsSnapshot) -> Vec<WhatIfScenario> {
        self.scenarios(progress)
    }

    /// Returns (description, runs above par).
    #[pyo3(name = "status")]
    fn py_status(&self, progress: &InningsSnapshot) -> (String, i64) {
        let status = self.status(progress);
        (status.to_string(), status.run_difference())
    }

    #[pyo3(name = "with_allotted_overs")]
    fn py_with_allotted_overs(&self, team2_allotted_overs: f64) -> Self {
        self.with_allotted_overs(team2_allotted_overs)
    }

    fn __repr__(&self) -> String {
        format!(
            "ChaseState({}/{}, {} of {} overs)",
            self.first_innings.runs_scored,
            self.first_innings.wickets_lost,
            self.settings.team2_allotted_overs,
            self.settings.total_overs
        )
    }
}

#[pyfunction]
fn to_decimal_overs(overs: f64) -> f64 {
    crate::overs::to_decimal_overs(overs)
}

#[pyfunction]
fn format_overs_display(decimal_overs: f64) -> String {
    crate::overs::format_overs_display(decimal_overs)
}

#[pyfunction]
fn resource_percentage(overs_remaining: f64, wickets_lost: f64) -> f64 {
    crate::resource::resource_percentage(overs_remaining, wickets_lost)
}

/// Raises ValueError when no overs were bowled or either overs count is not positive.
#[pyfunction]
fn calculate_target(first_innings: &InningsSnapshot, settings: &MatchSettings) -> PyResult<DlsResult> {
    Ok(crate::target::calculate_target(first_innings, settings)?)
}

#[pyfunction]
fn par_score_at(first_innings: &InningsSnapshot, settings: &MatchSettings, progress: &InningsSnapshot) -> u32 {
    crate::par::par_score_at(first_innings, settings, progress)
}

#[pyfunction]
fn generate_scenarios(
    first_innings: &InningsSnapshot,
    settings: &MatchSettings,
    progress: &InningsSnapshot,
) -> Vec<WhatIfScenario> {
    crate::scenarios::generate_scenarios(first_innings, settings, progress)
}

#[pyfunction]
fn target_ladder(first_innings: &InningsSnapshot, total_overs: u32) -> PyResult<Vec<(u32, DlsResult)>> {
    Ok(crate::target::target_ladder(first_innings, total_overs)?)
}

/// Python module definition
#[pymodule]
fn dls_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<InningsSnapshot>()?;
    m.add_class::<MatchSettings>()?;
    m.add_class::<DlsResult>()?;
    m.add_class::<WhatIfScenario>()?;
    m.add_class::<ChaseState>()?;

    // Engine functions
    m.add_function(wrap_pyfunction!(to_decimal_overs, m)?)?;
    m.add_function(wrap_pyfunction!(format_overs_display, m)?)?;
    m.add_function(wrap_pyfunction!(resource_percentage, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_target, m)?)?;
    m.add_function(wrap_pyfunction!(par_score_at, m)?)?;
    m.add_function(wrap_pyfunction!(generate_scenarios, m)?)?;
    m.add_function(wrap_pyfunction!(target_ladder, m)?)?;

    // Constants
    m.add("G50", G50)?;
    m.add("MAX_OVERS", MAX_OVERS)?;

    Ok(())
}
