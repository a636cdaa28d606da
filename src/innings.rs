use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DlsError;
use crate::overs::to_decimal_overs;

/// One side's innings at a point in time.
///
/// `overs_bowled` is in cricket notation (19.3 = 19 overs and 3 balls).
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InningsSnapshot {
    pub runs_scored: u32,
    pub overs_bowled: f64,
    pub wickets_lost: u32,
}

impl InningsSnapshot {
    /// Create a snapshot; `overs_bowled` is in cricket notation.
    pub fn new(runs_scored: u32, overs_bowled: f64, wickets_lost: u32) -> Self {
        InningsSnapshot {
            runs_scored,
            overs_bowled,
            wickets_lost,
        }
    }

    /// Overs bowled as a decimal value.
    pub fn decimal_overs(&self) -> f64 {
        to_decimal_overs(self.overs_bowled)
    }

    /// Copy of this snapshot with a different wicket count.
    pub fn with_wickets(&self, wickets_lost: u32) -> Self {
        InningsSnapshot {
            wickets_lost,
            ..*self
        }
    }
}

/// Scheduled match length and team 2's allotment after any interruption.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub total_overs: u32,
    pub team2_allotted_overs: f64,
}

impl MatchSettings {
    /// Settings for an interrupted match where team 2 bats a revised number of overs.
    pub fn revised(total_overs: u32, team2_allotted_overs: f64) -> Self {
        MatchSettings {
            total_overs,
            team2_allotted_overs,
        }
    }

    /// Settings for an uninterrupted match of the given format.
    pub fn for_format(format: MatchFormat) -> Self {
        let overs = format.overs();
        MatchSettings::revised(overs, overs as f64)
    }

    /// Whether team 2 lost any overs.
    pub fn is_interrupted(&self) -> bool {
        self.team2_allotted_overs < self.total_overs as f64
    }
}

/// Limited-overs formats the resource model applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    Odi,
    T20,
}

impl MatchFormat {
    /// Overs per side.
    pub fn overs(&self) -> u32 {
        match self {
            MatchFormat::Odi => 50,
            MatchFormat::T20 => 20,
        }
    }
}

impl FromStr for MatchFormat {
    type Err = DlsError;

    /// Parse the format name a scorecard feed reports ("ODI", "T20").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ODI" => Ok(MatchFormat::Odi),
            "T20" | "T20I" => Ok(MatchFormat::T20),
            _ => Err(DlsError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::Odi => write!(f, "ODI"),
            MatchFormat::T20 => write!(f, "T20"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decimal_overs() {
        let snapshot = InningsSnapshot::new(143, 27.4, 3);
        assert!((snapshot.decimal_overs() - (27.0 + 4.0 / 6.0)).abs() < 1e-10);
    }

    #[test]
    fn test_with_wickets_keeps_progress() {
        let snapshot = InningsSnapshot::new(98, 18.2, 2);
        let next = snapshot.with_wickets(3);
        assert_eq!(next.wickets_lost, 3);
        assert_eq!(next.runs_scored, 98);
        assert_eq!(next.overs_bowled, 18.2);
    }

    #[test]
    fn test_settings_for_format() {
        let odi = MatchSettings::for_format(MatchFormat::Odi);
        assert_eq!(odi.total_overs, 50);
        assert_eq!(odi.team2_allotted_overs, 50.0);
        assert!(!odi.is_interrupted());

        let t20 = MatchSettings::for_format(MatchFormat::T20);
        assert_eq!(t20.total_overs, 20);

        assert!(MatchSettings::revised(50, 30.0).is_interrupted());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("ODI".parse::<MatchFormat>(), Ok(MatchFormat::Odi));
        assert_eq!("t20".parse::<MatchFormat>(), Ok(MatchFormat::T20));
        assert_eq!(
            "TEST".parse::<MatchFormat>(),
            Err(DlsError::UnknownFormat("TEST".to_string()))
        );
        assert_eq!(MatchFormat::T20.to_string(), "T20");
    }
}
