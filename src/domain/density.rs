use crate::domain::specialization::SpecializationKind;

/// Density parameters for one (city, specialization) pair, derived on demand
/// from the city profile. These drive every random draw inside a simulated
/// day.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityFactors {
    pub kind: SpecializationKind,
    pub targets_per_clinic: f64,
    pub same_clinic_probability: f64,
    pub waiting_time_range: (f64, f64),
    pub doctor_absence_probability: f64,
    pub district_count: u32,
    pub clinic_count: u32,
    pub avg_distance_km: f64,
}
