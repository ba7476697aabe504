use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

use crate::domain::staffing::{Recommendation, StaffingScenario};
use crate::domain::transport::TransportMode;
use crate::services::day_simulation::{DayRequest, SimulationError, simulate_day_with_rng};
use crate::services::density::resolve_density_factors;
use crate::services::registry::CityProfileRegistry;

#[derive(Error, Debug, PartialEq)]
pub enum WorkforceError {
    #[error("total visits needed must be greater than zero")]
    InvalidTotalVisits,
    #[error("visits per representative per day must be greater than zero")]
    InvalidVisitsPerDay,
    #[error("project calendar days must be greater than zero")]
    InvalidCalendarDays,
    #[error("work days per week must be between 1 and 7, got {0}")]
    InvalidWorkDaysPerWeek(u32),
    #[error("max hours per day must be between 0 and 24, got {0}")]
    InvalidMaxHours(f64),
    #[error("failed to simulate a sample day: {0}")]
    Simulation(#[from] SimulationError),
}

/// Inputs for sizing a field team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforceRequest {
    pub city: String,
    pub specialization: String,
    pub transport: TransportMode,
    pub total_visits_needed: u32,
    pub visits_per_rep_per_day: u32,
    pub project_calendar_days: u32,
    pub work_days_per_week: u32,
    pub max_hours_per_day: f64,
}

/// Derived figures behind the scenario table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingCalculations {
    pub avg_hours_per_day: f64,
    pub avg_success_rate_percent: f64,
    /// Visit attempts needed once failed visits are retried.
    pub effective_visits_needed: f64,
    /// Rep-days of work the attempts translate to.
    pub unique_targets_needed: u32,
    pub total_required_hours: f64,
    pub total_project_hours: f64,
    pub available_hours_per_rep: f64,
    pub efficiency_factor: f64,
    pub min_reps_needed: u32,
    pub optimal_reps_needed: u32,
}

/// Averages over the sampled days, echoed in the report footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStatisticsSummary {
    pub avg_successful_visits: f64,
    pub avg_travel_distance_km: f64,
    pub avg_districts_per_day: f64,
    pub avg_clinics_per_day: f64,
}

/// What one representative's standard day looks like under this plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardDayExample {
    pub visits_per_day: u32,
    pub successful_visits: f64,
    pub work_hours: f64,
    pub distance_km: f64,
    pub success_rate_percent: f64,
}

/// Full output of the workforce sizing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforcePlan {
    pub params: WorkforceRequest,
    pub calculations: SizingCalculations,
    pub daily_statistics: DailyStatisticsSummary,
    pub scenarios: Vec<StaffingScenario>,
    pub standard_day_example: StandardDayExample,
}

/// Days sampled to estimate one representative's averages.
const SAMPLE_DAYS: usize = 30;
/// Target load share behind the optimal headcount.
const OPTIMAL_LOAD_FACTOR: f64 = 0.75;
/// Share of contracted hours actually usable for field work.
const DEFAULT_EFFICIENCY_FACTOR: f64 = 0.85;
/// Dense cities lose less time to overhead between visits.
const DENSE_EFFICIENCY_FACTOR: f64 = 0.90;
/// District count from which the dense factor applies.
const DENSE_DISTRICT_CUTOFF: u32 = 8;

pub fn size_workforce(
    registry: &CityProfileRegistry,
    request: &WorkforceRequest,
    seed: Option<u64>,
) -> Result<WorkforcePlan, WorkforceError> {
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    size_workforce_with_rng(registry, request, &mut rng)
}

/// Sizes the team by sampling representative days and spreading the project
/// workload over candidate headcounts.
pub fn size_workforce_with_rng<R: Rng + ?Sized>(
    registry: &CityProfileRegistry,
    request: &WorkforceRequest,
    rng: &mut R,
) -> Result<WorkforcePlan, WorkforceError> {
    validate(request)?;

    let day_request = DayRequest {
        city: request.city.clone(),
        specialization: request.specialization.clone(),
        visit_target: request.visits_per_rep_per_day,
        transport: request.transport,
    };
    let mut sample_days = Vec::with_capacity(SAMPLE_DAYS);
    for _ in 0..SAMPLE_DAYS {
        sample_days.push(simulate_day_with_rng(registry, &day_request, rng)?);
    }

    let samples = sample_days.len() as f64;
    let avg_hours_per_day = sample_days.iter().map(|d| d.total_hours).sum::<f64>() / samples;
    let avg_success_rate = sample_days.iter().map(|d| d.success_rate).sum::<f64>() / samples;
    let daily_statistics = DailyStatisticsSummary {
        avg_successful_visits: sample_days
            .iter()
            .map(|d| d.successful_visits as f64)
            .sum::<f64>()
            / samples,
        avg_travel_distance_km: sample_days
            .iter()
            .map(|d| d.total_travel_distance_km)
            .sum::<f64>()
            / samples,
        avg_districts_per_day: sample_days
            .iter()
            .map(|d| d.districts_visited as f64)
            .sum::<f64>()
            / samples,
        avg_clinics_per_day: sample_days
            .iter()
            .map(|d| d.clinics_visited as f64)
            .sum::<f64>()
            / samples,
    };

    // Failed visits are retried on later days, so the raw target inflates
    // by the observed success rate.
    let effective_visits_needed = if avg_success_rate > 0.0 {
        request.total_visits_needed as f64 / avg_success_rate
    } else {
        request.total_visits_needed as f64
    };
    let unique_targets_needed =
        (effective_visits_needed / request.visits_per_rep_per_day as f64).ceil() as u32;
    let total_required_hours = unique_targets_needed as f64 * avg_hours_per_day;

    let project_weeks = request.project_calendar_days as f64 / 7.0;
    let total_project_hours =
        project_weeks * request.work_days_per_week as f64 * request.max_hours_per_day;
    let efficiency_factor = efficiency_factor_for(registry, &request.city, &request.specialization);
    let available_hours_per_rep = total_project_hours * efficiency_factor;

    let standard_day_example = StandardDayExample {
        visits_per_day: request.visits_per_rep_per_day,
        successful_visits: daily_statistics.avg_successful_visits,
        work_hours: avg_hours_per_day,
        distance_km: daily_statistics.avg_travel_distance_km,
        success_rate_percent: avg_success_rate * 100.0,
    };

    if available_hours_per_rep <= 0.0 {
        // Degenerate window; no meaningful spread of headcounts exists.
        let calculations = SizingCalculations {
            avg_hours_per_day,
            avg_success_rate_percent: avg_success_rate * 100.0,
            effective_visits_needed,
            unique_targets_needed,
            total_required_hours,
            total_project_hours,
            available_hours_per_rep,
            efficiency_factor,
            min_reps_needed: 1,
            optimal_reps_needed: 2,
        };
        let scenarios = vec![StaffingScenario {
            rep_count: 1,
            weeks_required: 0.0,
            work_days: 0.0,
            calendar_days: 0.0,
            schedule_utilization_percent: 0.0,
            rep_utilization_percent: 0.0,
            recommendation: Recommendation::Minimal,
            is_minimal: true,
            is_optimal: false,
        }];
        return Ok(WorkforcePlan {
            params: request.clone(),
            calculations,
            daily_statistics,
            scenarios,
            standard_day_example,
        });
    }

    let min_reps_needed = (total_required_hours / available_hours_per_rep)
        .ceil()
        .max(1.0) as u32;
    let mut optimal_reps_needed = (total_required_hours
        / (available_hours_per_rep * OPTIMAL_LOAD_FACTOR))
        .ceil()
        .max(1.0) as u32;
    // Keep a visible slack margin over the bare minimum.
    if optimal_reps_needed <= min_reps_needed {
        optimal_reps_needed = min_reps_needed + 1;
    }

    let first_rep_count = min_reps_needed.saturating_sub(2).max(1);
    let last_rep_count = (min_reps_needed + 5).max(optimal_reps_needed + 3);
    let mut scenarios = Vec::with_capacity((last_rep_count - first_rep_count + 1) as usize);
    for rep_count in first_rep_count..=last_rep_count {
        let weekly_team_hours = rep_count as f64
            * request.work_days_per_week as f64
            * request.max_hours_per_day
            * efficiency_factor;
        let weeks_required = total_required_hours / weekly_team_hours;
        let work_days = weeks_required * request.work_days_per_week as f64;
        let calendar_days = weeks_required * 7.0;
        let schedule_utilization_percent =
            calendar_days / request.project_calendar_days as f64 * 100.0;
        let rep_utilization_percent =
            total_required_hours / (rep_count as f64 * available_hours_per_rep) * 100.0;
        scenarios.push(StaffingScenario {
            rep_count,
            weeks_required,
            work_days,
            calendar_days,
            schedule_utilization_percent,
            rep_utilization_percent,
            recommendation: recommend(
                rep_count,
                min_reps_needed,
                optimal_reps_needed,
                rep_utilization_percent,
                schedule_utilization_percent,
            ),
            is_minimal: rep_count == min_reps_needed,
            is_optimal: rep_count == optimal_reps_needed,
        });
    }

    let calculations = SizingCalculations {
        avg_hours_per_day,
        avg_success_rate_percent: avg_success_rate * 100.0,
        effective_visits_needed,
        unique_targets_needed,
        total_required_hours,
        total_project_hours,
        available_hours_per_rep,
        efficiency_factor,
        min_reps_needed,
        optimal_reps_needed,
    };

    Ok(WorkforcePlan {
        params: request.clone(),
        calculations,
        daily_statistics,
        scenarios,
        standard_day_example,
    })
}

fn validate(request: &WorkforceRequest) -> Result<(), WorkforceError> {
    if request.total_visits_needed == 0 {
        return Err(WorkforceError::InvalidTotalVisits);
    }
    if request.visits_per_rep_per_day == 0 {
        return Err(WorkforceError::InvalidVisitsPerDay);
    }
    if request.project_calendar_days == 0 {
        return Err(WorkforceError::InvalidCalendarDays);
    }
    if request.work_days_per_week == 0 || request.work_days_per_week > 7 {
        return Err(WorkforceError::InvalidWorkDaysPerWeek(
            request.work_days_per_week,
        ));
    }
    if request.max_hours_per_day <= 0.0 || request.max_hours_per_day > 24.0 {
        return Err(WorkforceError::InvalidMaxHours(request.max_hours_per_day));
    }
    Ok(())
}

fn recommend(
    rep_count: u32,
    min_reps: u32,
    optimal_reps: u32,
    rep_utilization_percent: f64,
    schedule_utilization_percent: f64,
) -> Recommendation {
    if rep_count == min_reps {
        Recommendation::Minimal
    } else if rep_count == optimal_reps {
        Recommendation::Optimal
    } else if rep_utilization_percent > 90.0 {
        Recommendation::Overloaded
    } else if rep_utilization_percent < 60.0 {
        Recommendation::Underloaded
    } else if (70.0..=85.0).contains(&rep_utilization_percent) {
        Recommendation::IdealLoad
    } else if schedule_utilization_percent < 70.0 {
        Recommendation::AheadOfSchedule
    } else {
        Recommendation::Acceptable
    }
}

/// Cities with many districts let a representative chain visits with less
/// dead time, so more of the contracted hours are usable.
fn efficiency_factor_for(
    registry: &CityProfileRegistry,
    city: &str,
    specialization: &str,
) -> f64 {
    match resolve_density_factors(registry, city, specialization) {
        Some(factors) if factors.district_count >= DENSE_DISTRICT_CUTOFF => {
            DENSE_EFFICIENCY_FACTOR
        }
        _ => DEFAULT_EFFICIENCY_FACTOR,
    }
}
