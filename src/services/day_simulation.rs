use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::domain::city::{CityClass, CityProfile};
use crate::domain::density::DensityFactors;
use crate::domain::shift::ShiftPeriod;
use crate::domain::transport::TransportMode;
use crate::domain::visit::{DaySimulationResult, VisitEvent};
use crate::services::density::density_factors_for_profile;
use crate::services::registry::CityProfileRegistry;

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("visit target must be greater than zero")]
    InvalidVisitTarget,
}

/// Inputs for one simulated working day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRequest {
    pub city: String,
    pub specialization: String,
    pub visit_target: u32,
    pub transport: TransportMode,
}

/// Scale on `same_clinic_probability` for offering a return visit.
const SAME_CLINIC_RETURN_FACTOR: f64 = 0.7;
/// Chance that the next new clinic is in the current district.
const STAY_IN_DISTRICT_PROBABILITY: f64 = 0.8;
/// Hard cap on visits inside one clinic before moving on.
const MAX_VISITS_PER_ROUND: u32 = 3;

pub fn simulate_day(
    registry: &CityProfileRegistry,
    request: &DayRequest,
) -> Result<DaySimulationResult, SimulationError> {
    let mut rng = rand::thread_rng();
    simulate_day_with_rng(registry, request, &mut rng)
}

/// Simulates one working day using the provided random source.
///
/// A city missing from the registry does not fail the run; the result is
/// built from fixed per-visit averages instead.
pub fn simulate_day_with_rng<R: Rng + ?Sized>(
    registry: &CityProfileRegistry,
    request: &DayRequest,
    rng: &mut R,
) -> Result<DaySimulationResult, SimulationError> {
    if request.visit_target == 0 {
        return Err(SimulationError::InvalidVisitTarget);
    }
    let Some(profile) = registry.get(&request.city) else {
        return Ok(fallback_day(request.visit_target));
    };
    let factors = density_factors_for_profile(profile, &request.specialization);
    Ok(simulate_profile_day(
        profile,
        &factors,
        request.visit_target,
        request.transport,
        rng,
    ))
}

fn simulate_profile_day<R: Rng + ?Sized>(
    profile: &CityProfile,
    factors: &DensityFactors,
    visit_target: u32,
    transport: TransportMode,
    rng: &mut R,
) -> DaySimulationResult {
    let class = CityClass::classify(&profile.name, factors.district_count);
    let district_budget = class.district_budget().min(factors.district_count).max(1);

    let all_districts: Vec<u32> = (1..=factors.district_count.max(1)).collect();
    let day_districts: Vec<u32> = all_districts
        .choose_multiple(rng, district_budget as usize)
        .copied()
        .collect();
    let mut current_district = day_districts.choose(rng).copied().unwrap_or(1);

    // Clinic ids opened so far, per district.
    let mut opened: BTreeMap<u32, Vec<u32>> =
        day_districts.iter().map(|d| (*d, Vec::new())).collect();
    let mut events: Vec<VisitEvent> = Vec::with_capacity(visit_target as usize);
    let mut remaining = visit_target;

    while remaining > 0 {
        let has_open_clinic = opened
            .get(&current_district)
            .is_some_and(|clinics| !clinics.is_empty());

        // Either return to a clinic already visited today or travel to a new
        // one, possibly in another of the day's districts.
        let (clinic_id, travel_distance_km) = if has_open_clinic
            && rng.gen_bool(factors.same_clinic_probability * SAME_CLINIC_RETURN_FACTOR)
        {
            let clinics = opened
                .get(&current_district)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            (clinics.choose(rng).copied().unwrap_or(1), 0.0)
        } else {
            let travel_km = if !has_open_clinic {
                0.0
            } else if day_districts.len() == 1 || rng.gen_bool(STAY_IN_DISTRICT_PROBABILITY) {
                class.within_district_km() * rng.gen_range(0.5..1.5)
            } else {
                let other_districts: Vec<u32> = day_districts
                    .iter()
                    .copied()
                    .filter(|d| *d != current_district)
                    .collect();
                current_district = other_districts
                    .choose(rng)
                    .copied()
                    .unwrap_or(current_district);
                class.between_district_km() * rng.gen_range(0.8..1.2)
            };
            let clinics = opened.entry(current_district).or_default();
            let clinic_id = clinics.len() as u32 + 1;
            clinics.push(clinic_id);
            (clinic_id, travel_km)
        };

        let shift = ShiftPeriod::from_progress(events.len() as u32, visit_target);
        let (util_lo, util_hi) = shift.utilization_range();
        let reachable_targets = (factors.targets_per_clinic * rng.gen_range(util_lo..util_hi))
            .floor()
            .max(1.0) as u32;

        let round_cap = MAX_VISITS_PER_ROUND.min(reachable_targets);
        let visits_this_round = rng.gen_range(1..=round_cap).min(remaining);

        for visit_index in 0..visits_this_round {
            let (wait_lo, wait_hi) = shift.waiting_range_min();
            let waiting_min = rng.gen_range(wait_lo..wait_hi);
            let absent = rng.gen_bool(factors.doctor_absence_probability);
            let (duration_min, successful) = if absent {
                // The trip still costs the queue time even when nobody is in.
                (waiting_min, false)
            } else if visit_index == 0 {
                (rng.gen_range(20.0..35.0) + waiting_min, true)
            } else {
                (rng.gen_range(15.0..25.0) + waiting_min * 0.5, true)
            };
            events.push(VisitEvent {
                clinic_id,
                district_id: current_district,
                sequence_index: events.len() as u32 + 1,
                successful,
                duration_min,
                waiting_min,
                travel_distance_km: if visit_index == 0 {
                    travel_distance_km
                } else {
                    0.0
                },
                shift_period: shift,
            });
            remaining -= 1;
        }
    }

    let clinics_visited = opened.values().map(Vec::len).sum::<usize>() as u32;
    summarize_day(
        class,
        transport,
        visit_target,
        day_districts.len() as u32,
        clinics_visited,
        events,
    )
}

fn summarize_day(
    class: CityClass,
    transport: TransportMode,
    visit_target: u32,
    districts_visited: u32,
    clinics_visited: u32,
    events: Vec<VisitEvent>,
) -> DaySimulationResult {
    let successful_visits = events.iter().filter(|e| e.successful).count() as u32;
    let total_visit_time_min: f64 = events
        .iter()
        .filter(|e| e.successful)
        .map(|e| e.duration_min)
        .sum();
    let total_waiting_time_min: f64 = events.iter().map(|e| e.waiting_min).sum();
    let total_travel_distance_km: f64 = events.iter().map(|e| e.travel_distance_km).sum();

    let driving_min =
        total_travel_distance_km / transport.speed_kmh() * 60.0 * class.travel_efficiency();
    let total_travel_time_min = driving_min + clinics_visited as f64 * transport.stop_overhead_min();

    let total_min = total_visit_time_min + total_waiting_time_min + total_travel_time_min;
    let base_efficiency = if total_min > 0.0 {
        total_visit_time_min / total_min * 100.0
    } else {
        0.0
    };

    DaySimulationResult {
        total_hours: total_min / 60.0,
        successful_visits,
        attempted_visits: visit_target,
        success_rate: successful_visits as f64 / visit_target.max(1) as f64,
        total_travel_distance_km,
        total_travel_time_min,
        total_visit_time_min,
        total_waiting_time_min,
        districts_visited,
        clinics_visited,
        efficiency_percent: class.boost_efficiency(base_efficiency),
        is_big_city: class.is_metro(),
        events,
    }
}

/// Fixed per-visit averages for cities outside the registry.
fn fallback_day(visit_target: u32) -> DaySimulationResult {
    let visits = visit_target as f64;
    DaySimulationResult {
        total_hours: visits * 0.8,
        successful_visits: (visits * 0.85) as u32,
        attempted_visits: visit_target,
        success_rate: 0.85,
        total_travel_distance_km: visits * 3.5,
        total_travel_time_min: visits * 15.0,
        total_visit_time_min: visits * 25.0,
        total_waiting_time_min: visits * 10.0,
        districts_visited: 1,
        clinics_visited: visit_target / 3,
        efficiency_percent: 65.0,
        is_big_city: false,
        events: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{compact_profile, single_city_registry};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn moscow_request(visit_target: u32) -> DayRequest {
        DayRequest {
            city: "Moscow".to_string(),
            specialization: "Cardiologists".to_string(),
            visit_target,
            transport: TransportMode::Car,
        }
    }

    #[test]
    fn zero_visit_target_is_rejected() {
        let registry = CityProfileRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let result = simulate_day_with_rng(&registry, &moscow_request(0), &mut rng);
        assert_eq!(result, Err(SimulationError::InvalidVisitTarget));
    }

    #[test]
    fn day_attempts_every_planned_visit() {
        let registry = CityProfileRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let day = simulate_day_with_rng(&registry, &moscow_request(8), &mut rng).unwrap();

        assert_eq!(day.attempted_visits, 8);
        assert_eq!(day.events.len(), 8);
        assert!(day.successful_visits <= 8);
        let expected_rate = day.successful_visits as f64 / 8.0;
        assert!((day.success_rate - expected_rate).abs() < 1e-9);
        let sequence: Vec<u32> = day.events.iter().map(|e| e.sequence_index).collect();
        assert_eq!(sequence, (1..=8).collect::<Vec<u32>>());
    }

    #[test]
    fn metro_day_stays_within_two_districts() {
        let registry = CityProfileRegistry::builtin();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let day = simulate_day_with_rng(&registry, &moscow_request(10), &mut rng).unwrap();
            assert!(day.is_big_city);
            assert!(day.districts_visited <= 2);
            let seen: BTreeSet<u32> = day.events.iter().map(|e| e.district_id).collect();
            assert!(seen.len() <= 2, "seed {seed} visited {seen:?}");
        }
    }

    #[test]
    fn regional_day_stays_within_three_districts() {
        let registry = CityProfileRegistry::builtin();
        let request = DayRequest {
            city: "Novosibirsk".to_string(),
            specialization: "therapists".to_string(),
            visit_target: 12,
            transport: TransportMode::PublicTransit,
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let day = simulate_day_with_rng(&registry, &request, &mut rng).unwrap();
            assert!(!day.is_big_city);
            assert!(day.districts_visited <= 3);
            let seen: BTreeSet<u32> = day.events.iter().map(|e| e.district_id).collect();
            assert!(seen.len() <= 3, "seed {seed} visited {seen:?}");
        }
    }

    #[test]
    fn single_district_city_never_switches() {
        let registry = single_city_registry(compact_profile("Mono", 1));
        let request = DayRequest {
            city: "Mono".to_string(),
            specialization: "therapists".to_string(),
            visit_target: 9,
            transport: TransportMode::Walking,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let day = simulate_day_with_rng(&registry, &request, &mut rng).unwrap();

        assert_eq!(day.districts_visited, 1);
        let seen: BTreeSet<u32> = day.events.iter().map(|e| e.district_id).collect();
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn first_clinic_of_the_day_has_no_travel() {
        let registry = CityProfileRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let day = simulate_day_with_rng(&registry, &moscow_request(6), &mut rng).unwrap();
        assert_eq!(day.events[0].travel_distance_km, 0.0);
    }

    #[test]
    fn totals_add_up() {
        let registry = CityProfileRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let day = simulate_day_with_rng(&registry, &moscow_request(8), &mut rng).unwrap();

        let visit_sum: f64 = day
            .events
            .iter()
            .filter(|e| e.successful)
            .map(|e| e.duration_min)
            .sum();
        let waiting_sum: f64 = day.events.iter().map(|e| e.waiting_min).sum();
        let distance_sum: f64 = day.events.iter().map(|e| e.travel_distance_km).sum();
        assert!((day.total_visit_time_min - visit_sum).abs() < 1e-9);
        assert!((day.total_waiting_time_min - waiting_sum).abs() < 1e-9);
        assert!((day.total_travel_distance_km - distance_sum).abs() < 1e-9);

        // Moscow is metro class, reached by car in this request.
        let expected_travel = distance_sum / 40.0 * 60.0 * 0.9 + day.clinics_visited as f64 * 5.0;
        assert!((day.total_travel_time_min - expected_travel).abs() < 1e-9);

        let expected_hours = (visit_sum + waiting_sum + expected_travel) / 60.0;
        assert!((day.total_hours - expected_hours).abs() < 1e-9);
    }

    #[test]
    fn metro_efficiency_keeps_its_cap() {
        let registry = CityProfileRegistry::builtin();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let day = simulate_day_with_rng(&registry, &moscow_request(8), &mut rng).unwrap();
            assert!(day.efficiency_percent > 0.0);
            assert!(day.efficiency_percent <= 95.0);
        }
    }

    #[test]
    fn same_seed_reproduces_the_day() {
        let registry = CityProfileRegistry::builtin();
        let mut first_rng = StdRng::seed_from_u64(1234);
        let mut second_rng = StdRng::seed_from_u64(1234);
        let first = simulate_day_with_rng(&registry, &moscow_request(8), &mut first_rng).unwrap();
        let second = simulate_day_with_rng(&registry, &moscow_request(8), &mut second_rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_city_uses_fixed_day_averages() {
        let registry = CityProfileRegistry::builtin();
        let request = DayRequest {
            city: "Atlantis".to_string(),
            specialization: "therapists".to_string(),
            visit_target: 10,
            transport: TransportMode::Car,
        };
        let mut rng = StdRng::seed_from_u64(42);
        let day = simulate_day_with_rng(&registry, &request, &mut rng).unwrap();

        assert!((day.total_hours - 8.0).abs() < 1e-9);
        assert_eq!(day.successful_visits, 8);
        assert!((day.success_rate - 0.85).abs() < 1e-9);
        assert!((day.total_travel_distance_km - 35.0).abs() < 1e-9);
        assert_eq!(day.districts_visited, 1);
        assert_eq!(day.clinics_visited, 3);
        assert!((day.efficiency_percent - 65.0).abs() < 1e-9);
        assert!(day.events.is_empty());
    }
}
