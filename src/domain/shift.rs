use serde::Serialize;

/// Part of the working day a visit falls into, derived from how far through
/// the visit plan the representative is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftPeriod {
    /// Shift for the next visit after `completed` out of `target` visits.
    pub fn from_progress(completed: u32, target: u32) -> Self {
        let progress = completed as f64 / target.max(1) as f64;
        if progress < 0.4 {
            ShiftPeriod::Morning
        } else if progress < 0.7 {
            ShiftPeriod::Afternoon
        } else {
            ShiftPeriod::Evening
        }
    }

    /// Fraction of a clinic's doctors reachable during this shift.
    pub fn utilization_range(&self) -> (f64, f64) {
        match self {
            ShiftPeriod::Morning => (0.3, 0.5),
            ShiftPeriod::Afternoon => (0.4, 0.6),
            ShiftPeriod::Evening => (0.2, 0.4),
        }
    }

    /// Queue waiting time per visit, in minutes.
    pub fn waiting_range_min(&self) -> (f64, f64) {
        match self {
            ShiftPeriod::Morning => (10.0, 25.0),
            ShiftPeriod::Afternoon => (5.0, 15.0),
            ShiftPeriod::Evening => (15.0, 30.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftPeriod::Morning => "morning",
            ShiftPeriod::Afternoon => "afternoon",
            ShiftPeriod::Evening => "evening",
        }
    }
}
