use crate::domain::city::CityProfile;
use crate::services::registry::CityProfileRegistry;

pub fn compact_profile(name: &str, district_count: u32) -> CityProfile {
    CityProfile {
        name: name.to_string(),
        polyclinics: 40,
        pharmacies: 120,
        cardiology_doctors: 200,
        therapy_doctors: 900,
        pediatrics_doctors: 400,
        on_duty_share: 0.6,
        open_pharmacy_share: 0.8,
        area_km2: 350.0,
        district_count,
        avg_distance_km: 5.0,
        same_clinic_probability: 0.5,
        waiting_time_range: (10.0, 30.0),
        doctor_absence_probability: 0.15,
    }
}

pub fn single_city_registry(profile: CityProfile) -> CityProfileRegistry {
    CityProfileRegistry::new(vec![profile])
}
