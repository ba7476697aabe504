use chrono::NaiveTime;

use crate::domain::city::CityClass;
use crate::domain::visit::DaySimulationResult;
use crate::services::day_simulation::DayRequest;
use crate::services::monte_carlo::MonteCarloOutput;
use crate::services::registry::CityProfileRegistry;
use crate::services::statistics::MetricSummary;
use crate::services::workforce::WorkforcePlan;

pub fn format_day_report(request: &DayRequest, result: &DaySimulationResult) -> String {
    let mut lines = Vec::new();
    lines.push("Day Simulation Report".to_string());
    lines.push(format!("City: {}", request.city));
    lines.push(format!("Specialization: {}", request.specialization));
    lines.push(format!("Transport: {}", request.transport.label()));
    lines.push(format!(
        "Successful visits: {} of {} ({:.0}%)",
        result.successful_visits,
        result.attempted_visits,
        result.success_rate * 100.0
    ));
    lines.push(format!(
        "Total working time: {:.2} hours",
        result.total_hours
    ));
    lines.push(format!(
        "Travel: {:.1} km in {:.0} minutes",
        result.total_travel_distance_km, result.total_travel_time_min
    ));
    lines.push(format!(
        "Waiting: {:.0} minutes",
        result.total_waiting_time_min
    ));
    lines.push(format!(
        "Coverage: {} districts, {} clinics",
        result.districts_visited, result.clinics_visited
    ));
    lines.push(format!("Efficiency: {:.1}%", result.efficiency_percent));

    if !result.events.is_empty() {
        lines.push(String::new());
        lines.push("Schedule:".to_string());
        lines.push("Time | Shift | District | Clinic | Outcome | Minutes | Km".to_string());
        lines.push("-----|-------|----------|--------|---------|---------|---".to_string());
        let day_start = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
        let mut elapsed_min = 0.0;
        for event in &result.events {
            let time = day_start + chrono::Duration::minutes(elapsed_min as i64);
            lines.push(format!(
                "{} | {} | D{} | C{} | {} | {:.0} | {:.1}",
                time.format("%H:%M"),
                event.shift_period.label(),
                event.district_id,
                event.clinic_id,
                if event.successful { "visit" } else { "no doctor" },
                event.duration_min,
                event.travel_distance_km
            ));
            elapsed_min += event.duration_min;
        }
    }

    lines.join("\n")
}

pub fn format_monte_carlo_report(output: &MonteCarloOutput) -> String {
    let mut lines = Vec::new();
    lines.push("Monte Carlo Report".to_string());
    lines.push(format!("City: {}", output.params.city));
    lines.push(format!("Specialization: {}", output.params.specialization));
    lines.push(format!("Visit target: {}", output.params.visit_target));
    lines.push(format!("Transport: {}", output.params.transport.label()));
    lines.push(format!("Iterations: {}", output.params.iterations));
    lines.push(format!("Master seed: {}", output.master_seed));
    lines.push(String::new());
    lines.push("Metric | Mean | Median | Std | Min | Max | P5 | P95".to_string());
    lines.push("-------|------|--------|-----|-----|-----|----|----".to_string());
    lines.push(format_metric_row(
        "Total hours",
        &output.statistics.total_hours,
    ));
    lines.push(format_metric_row(
        "Successful visits",
        &output.statistics.successful_visits,
    ));
    lines.push(format_metric_row(
        "Travel km",
        &output.statistics.travel_distance_km,
    ));
    lines.push(format_metric_row(
        "Waiting min",
        &output.statistics.waiting_time_min,
    ));
    lines.push(format_metric_row(
        "Districts",
        &output.statistics.districts_visited,
    ));
    lines.push(format_metric_row(
        "Efficiency %",
        &output.statistics.efficiency_percent,
    ));
    lines.push(String::new());
    lines.push(output.statistics.overload_probability.description.clone());
    lines.push(output.statistics.optimal_probability.description.clone());

    lines.join("\n")
}

fn format_metric_row(label: &str, summary: &MetricSummary) -> String {
    format!(
        "{label} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {} | {}",
        summary.mean,
        summary.median,
        summary.std_dev,
        summary.min,
        summary.max,
        format_tail(summary.p5),
        format_tail(summary.p95)
    )
}

fn format_tail(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

pub fn format_staffing_report(plan: &WorkforcePlan) -> String {
    let calc = &plan.calculations;
    let mut lines = Vec::new();
    lines.push("Workforce Sizing Report".to_string());
    lines.push(format!("City: {}", plan.params.city));
    lines.push(format!("Specialization: {}", plan.params.specialization));
    lines.push(format!("Transport: {}", plan.params.transport.label()));
    lines.push(format!(
        "Project: {} visits in {} calendar days",
        plan.params.total_visits_needed, plan.params.project_calendar_days
    ));
    lines.push(String::new());
    lines.push(format!(
        "Average day: {:.2} hours, {:.1}% success",
        calc.avg_hours_per_day, calc.avg_success_rate_percent
    ));
    lines.push(format!(
        "Effective visits needed: {:.0}",
        calc.effective_visits_needed
    ));
    lines.push(format!("Rep-days of work: {}", calc.unique_targets_needed));
    lines.push(format!("Required hours: {:.1}", calc.total_required_hours));
    lines.push(format!(
        "Available hours per rep: {:.1} (efficiency factor {:.2})",
        calc.available_hours_per_rep, calc.efficiency_factor
    ));
    lines.push(format!("Minimum reps: {}", calc.min_reps_needed));
    lines.push(format!("Optimal reps: {}", calc.optimal_reps_needed));
    lines.push(String::new());
    lines.push(
        "Reps | Weeks | Work days | Calendar days | Schedule % | Load % | Recommendation"
            .to_string(),
    );
    lines.push(
        "-----|-------|-----------|---------------|------------|--------|---------------"
            .to_string(),
    );
    for scenario in &plan.scenarios {
        lines.push(format!(
            "{} | {:.1} | {:.0} | {:.0} | {:.0} | {:.0} | {}",
            scenario.rep_count,
            scenario.weeks_required,
            scenario.work_days,
            scenario.calendar_days,
            scenario.schedule_utilization_percent,
            scenario.rep_utilization_percent,
            scenario.recommendation.label()
        ));
    }
    lines.push(String::new());
    let day = &plan.standard_day_example;
    lines.push(format!(
        "Standard day: {} planned visits, {:.1} successful, {:.2} hours, {:.1} km",
        day.visits_per_day, day.successful_visits, day.work_hours, day.distance_km
    ));
    let daily = &plan.daily_statistics;
    lines.push(format!(
        "Daily averages: {:.1} districts, {:.1} clinics, {:.1} km travelled",
        daily.avg_districts_per_day, daily.avg_clinics_per_day, daily.avg_travel_distance_km
    ));

    lines.join("\n")
}

pub fn format_cities_report(registry: &CityProfileRegistry) -> String {
    let mut lines = Vec::new();
    lines.push("City Profile Registry".to_string());
    lines.push(
        "City | Class | Districts | Polyclinics | Pharmacies | Area km2 | Absence %".to_string(),
    );
    lines.push(
        "-----|-------|-----------|-------------|------------|----------|----------".to_string(),
    );
    for profile in registry.profiles() {
        let class = CityClass::classify(&profile.name, profile.district_count);
        lines.push(format!(
            "{} | {} | {} | {} | {} | {:.1} | {:.0}",
            profile.name,
            class.label(),
            profile.district_count,
            profile.polyclinics,
            profile.pharmacies,
            profile.area_km2,
            profile.doctor_absence_probability * 100.0
        ));
    }

    lines.join("\n")
}
