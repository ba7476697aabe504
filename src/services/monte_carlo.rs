use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;

use crate::domain::transport::TransportMode;
use crate::domain::visit::DaySimulationResult;
use crate::services::day_simulation::{DayRequest, SimulationError, simulate_day_with_rng};
use crate::services::registry::CityProfileRegistry;
use crate::services::statistics::{MetricSummary, summarize};

#[derive(Error, Debug, PartialEq)]
pub enum MonteCarloError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("failed to simulate a day: {0}")]
    Simulation(#[from] SimulationError),
}

/// Inputs for a Monte Carlo batch of simulated days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloRequest {
    pub city: String,
    pub specialization: String,
    pub visit_target: u32,
    pub transport: TransportMode,
    pub iterations: usize,
}

/// Per-iteration values, kept for plotting and post-processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloRawResults {
    pub total_hours: Vec<f64>,
    pub successful_visits: Vec<f64>,
    pub travel_distance_km: Vec<f64>,
    pub waiting_time_min: Vec<f64>,
    pub districts_visited: Vec<f64>,
    pub efficiency_percent: Vec<f64>,
    pub overloaded: Vec<bool>,
    pub optimal: Vec<bool>,
}

/// Share of iterations where a boolean day outcome held, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilitySummary {
    pub percent: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloStatistics {
    pub total_hours: MetricSummary,
    pub successful_visits: MetricSummary,
    pub travel_distance_km: MetricSummary,
    pub waiting_time_min: MetricSummary,
    pub districts_visited: MetricSummary,
    pub efficiency_percent: MetricSummary,
    pub overload_probability: ProbabilitySummary,
    pub optimal_probability: ProbabilitySummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloOutput {
    pub params: MonteCarloRequest,
    /// Seed the batch actually ran with, for reproducing the run.
    pub master_seed: u64,
    pub statistics: MonteCarloStatistics,
    pub raw_results: MonteCarloRawResults,
}

/// A day longer than this counts as overloaded.
const OVERLOAD_HOURS: f64 = 8.0;
/// Working-hours band of an optimal day.
const OPTIMAL_HOURS: (f64, f64) = (6.0, 8.0);
/// Successful-visits band of an optimal day.
const OPTIMAL_VISITS: (u32, u32) = (5, 8);

/// Runs `iterations` independent simulated days and summarizes them.
///
/// Without an explicit seed a random one is drawn; either way the seed that
/// drove the batch is echoed in the output. Each iteration runs on its own
/// stream derived from the master seed, so results do not depend on
/// iteration order.
pub fn run_monte_carlo(
    registry: &CityProfileRegistry,
    request: &MonteCarloRequest,
    seed: Option<u64>,
) -> Result<MonteCarloOutput, MonteCarloError> {
    if request.iterations == 0 {
        return Err(MonteCarloError::InvalidIterations);
    }
    let master_seed = seed.unwrap_or_else(rand::random);

    let day_request = DayRequest {
        city: request.city.clone(),
        specialization: request.specialization.clone(),
        visit_target: request.visit_target,
        transport: request.transport,
    };

    let mut raw = MonteCarloRawResults {
        total_hours: Vec::with_capacity(request.iterations),
        successful_visits: Vec::with_capacity(request.iterations),
        travel_distance_km: Vec::with_capacity(request.iterations),
        waiting_time_min: Vec::with_capacity(request.iterations),
        districts_visited: Vec::with_capacity(request.iterations),
        efficiency_percent: Vec::with_capacity(request.iterations),
        overloaded: Vec::with_capacity(request.iterations),
        optimal: Vec::with_capacity(request.iterations),
    };

    for iteration in 0..request.iterations {
        let mut rng = StdRng::seed_from_u64(master_seed.wrapping_add(iteration as u64));
        let day = simulate_day_with_rng(registry, &day_request, &mut rng)?;
        raw.total_hours.push(day.total_hours);
        raw.successful_visits.push(day.successful_visits as f64);
        raw.travel_distance_km.push(day.total_travel_distance_km);
        raw.waiting_time_min.push(day.total_waiting_time_min);
        raw.districts_visited.push(day.districts_visited as f64);
        raw.efficiency_percent.push(raw_efficiency(&day));
        raw.overloaded.push(day.total_hours > OVERLOAD_HOURS);
        raw.optimal.push(is_optimal_day(&day));
    }

    let statistics = MonteCarloStatistics {
        total_hours: summarize(&raw.total_hours),
        successful_visits: summarize(&raw.successful_visits),
        travel_distance_km: summarize(&raw.travel_distance_km),
        waiting_time_min: summarize(&raw.waiting_time_min),
        districts_visited: summarize(&raw.districts_visited),
        efficiency_percent: summarize(&raw.efficiency_percent),
        overload_probability: probability(&raw.overloaded, "chance of working past 8 hours"),
        optimal_probability: probability(
            &raw.optimal,
            "chance of an optimal day (6-8 hours, 5-8 successful visits)",
        ),
    };

    Ok(MonteCarloOutput {
        params: request.clone(),
        master_seed,
        statistics,
        raw_results: raw,
    })
}

/// Visit share of the day before any density boost, comparable across
/// city classes.
fn raw_efficiency(day: &DaySimulationResult) -> f64 {
    if day.total_hours > 0.0 {
        day.total_visit_time_min / (day.total_hours * 60.0) * 100.0
    } else {
        0.0
    }
}

fn is_optimal_day(day: &DaySimulationResult) -> bool {
    let (hours_lo, hours_hi) = OPTIMAL_HOURS;
    let (visits_lo, visits_hi) = OPTIMAL_VISITS;
    day.total_hours >= hours_lo
        && day.total_hours <= hours_hi
        && day.successful_visits >= visits_lo
        && day.successful_visits <= visits_hi
}

fn probability(outcomes: &[bool], description: &str) -> ProbabilitySummary {
    let percent = if outcomes.is_empty() {
        0.0
    } else {
        outcomes.iter().filter(|held| **held).count() as f64 / outcomes.len() as f64 * 100.0
    };
    ProbabilitySummary {
        percent,
        description: format!("{description}: {percent:.1}%"),
    }
}
