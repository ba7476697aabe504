use serde::Serialize;

use crate::domain::shift::ShiftPeriod;

/// One attempted visit inside a simulated day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitEvent {
    /// Clinic id, unique within its district for the day.
    pub clinic_id: u32,
    pub district_id: u32,
    /// 1-based position in the day's schedule.
    pub sequence_index: u32,
    pub successful: bool,
    /// Time spent at the clinic including queueing, in minutes.
    pub duration_min: f64,
    pub waiting_min: f64,
    /// Distance travelled to reach this clinic; zero for repeat visits in
    /// the same clinic round.
    pub travel_distance_km: f64,
    pub shift_period: ShiftPeriod,
}

/// Aggregated outcome of one simulated working day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySimulationResult {
    pub total_hours: f64,
    pub successful_visits: u32,
    pub attempted_visits: u32,
    /// Successful over attempted, in [0, 1].
    pub success_rate: f64,
    pub total_travel_distance_km: f64,
    pub total_travel_time_min: f64,
    pub total_visit_time_min: f64,
    pub total_waiting_time_min: f64,
    pub districts_visited: u32,
    pub clinics_visited: u32,
    /// Share of the day spent in actual visits, boosted for dense cities.
    pub efficiency_percent: f64,
    pub is_big_city: bool,
    pub events: Vec<VisitEvent>,
}
