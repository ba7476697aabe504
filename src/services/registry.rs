use crate::domain::city::CityProfile;

/// Immutable lookup of per-city reference data.
#[derive(Debug, Clone)]
pub struct CityProfileRegistry {
    profiles: Vec<CityProfile>,
}

impl CityProfileRegistry {
    pub fn new(profiles: Vec<CityProfile>) -> Self {
        CityProfileRegistry { profiles }
    }

    /// The bundled five-city reference dataset.
    pub fn builtin() -> Self {
        CityProfileRegistry::new(vec![
            CityProfile {
                name: "Moscow".to_string(),
                polyclinics: 397,
                pharmacies: 5493,
                cardiology_doctors: 2857,
                therapy_doctors: 8069,
                pediatrics_doctors: 6486,
                on_duty_share: 0.7,
                open_pharmacy_share: 0.8,
                area_km2: 2561.0,
                district_count: 12,
                avg_distance_km: 3.5,
                same_clinic_probability: 0.6,
                waiting_time_range: (5.0, 20.0),
                doctor_absence_probability: 0.15,
            },
            CityProfile {
                name: "Saint Petersburg".to_string(),
                polyclinics: 283,
                pharmacies: 2819,
                cardiology_doctors: 1229,
                therapy_doctors: 3722,
                pediatrics_doctors: 2698,
                on_duty_share: 0.6,
                open_pharmacy_share: 0.7,
                area_km2: 1439.0,
                district_count: 10,
                avg_distance_km: 2.8,
                same_clinic_probability: 0.5,
                waiting_time_range: (5.0, 25.0),
                doctor_absence_probability: 0.18,
            },
            CityProfile {
                name: "Yekaterinburg".to_string(),
                polyclinics: 68,
                pharmacies: 999,
                cardiology_doctors: 307,
                therapy_doctors: 1164,
                pediatrics_doctors: 928,
                on_duty_share: 0.5,
                open_pharmacy_share: 0.6,
                area_km2: 468.0,
                district_count: 4,
                avg_distance_km: 4.2,
                same_clinic_probability: 0.3,
                waiting_time_range: (5.0, 30.0),
                doctor_absence_probability: 0.2,
            },
            CityProfile {
                name: "Novosibirsk".to_string(),
                polyclinics: 90,
                pharmacies: 1231,
                cardiology_doctors: 402,
                therapy_doctors: 1449,
                pediatrics_doctors: 881,
                on_duty_share: 0.5,
                open_pharmacy_share: 0.6,
                area_km2: 505.0,
                district_count: 5,
                avg_distance_km: 4.5,
                same_clinic_probability: 0.35,
                waiting_time_range: (5.0, 30.0),
                doctor_absence_probability: 0.22,
            },
            CityProfile {
                name: "Kazan".to_string(),
                polyclinics: 63,
                pharmacies: 875,
                cardiology_doctors: 269,
                therapy_doctors: 1078,
                pediatrics_doctors: 793,
                on_duty_share: 0.5,
                open_pharmacy_share: 0.6,
                area_km2: 425.0,
                district_count: 4,
                avg_distance_km: 3.2,
                same_clinic_probability: 0.4,
                waiting_time_range: (5.0, 25.0),
                doctor_absence_probability: 0.18,
            },
        ])
    }

    /// Case-insensitive lookup by city name.
    pub fn get(&self, city_name: &str) -> Option<&CityProfile> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(city_name))
    }

    pub fn profiles(&self) -> &[CityProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_holds_the_five_reference_cities() {
        let registry = CityProfileRegistry::builtin();
        assert_eq!(registry.profiles().len(), 5);
        for city in [
            "Moscow",
            "Saint Petersburg",
            "Novosibirsk",
            "Yekaterinburg",
            "Kazan",
        ] {
            assert!(registry.get(city).is_some(), "missing {city}");
        }
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        let registry = CityProfileRegistry::builtin();
        let lower = registry.get("moscow");
        let upper = registry.get("MOSCOW");
        assert!(lower.is_some());
        assert_eq!(lower, upper);
    }

    #[test]
    fn unknown_city_is_none() {
        let registry = CityProfileRegistry::builtin();
        assert!(registry.get("Atlantis").is_none());
    }

    #[test]
    fn moscow_profile_matches_reference_data() {
        let registry = CityProfileRegistry::builtin();
        let moscow = registry.get("Moscow").unwrap();
        assert_eq!(moscow.polyclinics, 397);
        assert_eq!(moscow.cardiology_doctors, 2857);
        assert_eq!(moscow.district_count, 12);
        assert_eq!(moscow.waiting_time_range, (5.0, 20.0));
        assert!((moscow.doctor_absence_probability - 0.15).abs() < 1e-9);
    }
}
