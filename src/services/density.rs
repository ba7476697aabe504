use crate::domain::city::CityProfile;
use crate::domain::density::DensityFactors;
use crate::domain::specialization::SpecializationKind;
use crate::services::registry::CityProfileRegistry;

/// Derives the density parameters for a (city, specialization) pair.
///
/// Returns `None` for a city the registry does not know. Callers fall back
/// to fixed day constants instead of failing, so a typo in a city name still
/// produces a usable answer.
pub fn resolve_density_factors(
    registry: &CityProfileRegistry,
    city: &str,
    specialization: &str,
) -> Option<DensityFactors> {
    registry
        .get(city)
        .map(|profile| density_factors_for_profile(profile, specialization))
}

pub(crate) fn density_factors_for_profile(
    profile: &CityProfile,
    specialization: &str,
) -> DensityFactors {
    let kind = SpecializationKind::classify(specialization);
    DensityFactors {
        kind,
        targets_per_clinic: profile.targets_per_clinic(kind),
        same_clinic_probability: profile.same_clinic_probability,
        waiting_time_range: profile.waiting_time_range,
        doctor_absence_probability: profile.doctor_absence_probability,
        district_count: profile.district_count,
        clinic_count: profile.polyclinics,
        avg_distance_km: profile.avg_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_city() {
        let registry = CityProfileRegistry::builtin();
        let factors = resolve_density_factors(&registry, "Saint Petersburg", "Cardiologists")
            .expect("city should be in the builtin registry");
        assert_eq!(factors.kind, SpecializationKind::Cardiology);
        assert_eq!(factors.district_count, 10);
        assert_eq!(factors.clinic_count, 283);
        let expected = 1229.0 / 283.0 * 0.6;
        assert!((factors.targets_per_clinic - expected).abs() < 1e-9);
    }

    #[test]
    fn unknown_city_resolves_to_none() {
        let registry = CityProfileRegistry::builtin();
        assert!(resolve_density_factors(&registry, "Atlantis", "therapists").is_none());
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = CityProfileRegistry::builtin();
        let first = resolve_density_factors(&registry, "Kazan", "Pharmacies");
        let second = resolve_density_factors(&registry, "Kazan", "Pharmacies");
        assert_eq!(first, second);
    }

    #[test]
    fn unmatched_specialization_uses_therapy_numbers() {
        let registry = CityProfileRegistry::builtin();
        let fallback = resolve_density_factors(&registry, "Moscow", "dermatologists")
            .expect("city should be in the builtin registry");
        let therapy = resolve_density_factors(&registry, "Moscow", "therapists")
            .expect("city should be in the builtin registry");
        assert_eq!(fallback.kind, SpecializationKind::Therapy);
        assert_eq!(fallback.targets_per_clinic, therapy.targets_per_clinic);
    }
}
