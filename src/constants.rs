/// Average score of a full-resource innings, used to convert a resource surplus into runs
pub const G50: f64 = 245.0;

/// Longest innings the resource table covers
pub const MAX_OVERS: u32 = 50;

/// Wickets at which an innings is over
pub const ALL_OUT_WICKETS: u32 = 10;

/// Legal deliveries in one over
pub const BALLS_PER_OVER: u32 = 6;

/// Overs added when projecting the chase forward in what-if scenarios
pub const SCENARIO_OVERS_AHEAD: f64 = 5.0;
