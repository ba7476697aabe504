use serde::Serialize;

/// Advice attached to one staffing scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Minimal,
    Optimal,
    Overloaded,
    Underloaded,
    IdealLoad,
    AheadOfSchedule,
    Acceptable,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Minimal => "minimal staffing, high strain",
            Recommendation::Optimal => "optimal staffing",
            Recommendation::Overloaded => "overloaded",
            Recommendation::Underloaded => "underloaded",
            Recommendation::IdealLoad => "ideal load",
            Recommendation::AheadOfSchedule => "ahead of schedule",
            Recommendation::Acceptable => "acceptable",
        }
    }
}

/// One candidate headcount for the project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingScenario {
    pub rep_count: u32,
    pub weeks_required: f64,
    pub work_days: f64,
    pub calendar_days: f64,
    /// Calendar days required over calendar days granted, as a percentage.
    pub schedule_utilization_percent: f64,
    /// Required hours over hours the team can supply, as a percentage.
    pub rep_utilization_percent: f64,
    pub recommendation: Recommendation,
    pub is_minimal: bool,
    pub is_optimal: bool,
}
