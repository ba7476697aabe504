use crate::domain::specialization::SpecializationKind;

/// Static reference data for one city. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CityProfile {
    pub name: String,
    pub polyclinics: u32,
    pub pharmacies: u32,
    pub cardiology_doctors: u32,
    pub therapy_doctors: u32,
    pub pediatrics_doctors: u32,
    /// Share of a clinic's doctors on shift at the same time.
    pub on_duty_share: f64,
    /// Share of pharmacies open at the same time.
    pub open_pharmacy_share: f64,
    pub area_km2: f64,
    pub district_count: u32,
    pub avg_distance_km: f64,
    /// Chance that a clinic can absorb another visit on the same day.
    pub same_clinic_probability: f64,
    /// Queue waiting bounds in minutes.
    pub waiting_time_range: (f64, f64),
    pub doctor_absence_probability: f64,
}

impl CityProfile {
    /// Average number of reachable targets per clinic for a specialization.
    ///
    /// Doctor counts are city-wide, so they are spread over the polyclinics
    /// and scaled down to the share actually on duty. Pharmacy visits target
    /// the pharmacies themselves rather than doctors.
    pub fn targets_per_clinic(&self, kind: SpecializationKind) -> f64 {
        let clinics = self.polyclinics.max(1) as f64;
        match kind {
            SpecializationKind::Cardiology => {
                self.cardiology_doctors as f64 / clinics * self.on_duty_share
            }
            SpecializationKind::Therapy => {
                self.therapy_doctors as f64 / clinics * self.on_duty_share
            }
            SpecializationKind::Pediatrics => {
                self.pediatrics_doctors as f64 / clinics * self.on_duty_share
            }
            SpecializationKind::Pharmacy => {
                self.pharmacies as f64 / clinics * self.open_pharmacy_share
            }
        }
    }
}

/// Density class driving the territorial constraints of a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityClass {
    Metro,
    Regional,
    Compact,
}

/// Cities dense enough that a representative covers at most two districts
/// a day but moves efficiently inside them.
const METRO_CITIES: [&str; 2] = ["Moscow", "Saint Petersburg"];

/// District count from which a city counts as regional rather than compact.
const REGIONAL_DISTRICT_CUTOFF: u32 = 5;

impl CityClass {
    pub fn classify(city_name: &str, district_count: u32) -> Self {
        if METRO_CITIES.iter().any(|m| m.eq_ignore_ascii_case(city_name)) {
            CityClass::Metro
        } else if district_count >= REGIONAL_DISTRICT_CUTOFF {
            CityClass::Regional
        } else {
            CityClass::Compact
        }
    }

    /// Upper bound on distinct districts worked in one day.
    pub fn district_budget(&self) -> u32 {
        match self {
            CityClass::Metro => 2,
            CityClass::Regional | CityClass::Compact => 3,
        }
    }

    /// Typical hop between clinics of the same district, in km.
    pub fn within_district_km(&self) -> f64 {
        match self {
            CityClass::Metro => 1.5,
            CityClass::Regional => 2.0,
            CityClass::Compact => 3.0,
        }
    }

    /// Typical hop between districts, in km.
    pub fn between_district_km(&self) -> f64 {
        match self {
            CityClass::Metro => 8.0,
            CityClass::Regional => 5.0,
            CityClass::Compact => 4.0,
        }
    }

    /// Scale on raw travel time; dense cities route more directly.
    pub fn travel_efficiency(&self) -> f64 {
        match self {
            CityClass::Metro => 0.9,
            CityClass::Regional => 0.8,
            CityClass::Compact => 0.7,
        }
    }

    /// Density advantage applied to the raw efficiency percentage.
    pub fn boost_efficiency(&self, base_percent: f64) -> f64 {
        match self {
            CityClass::Metro => (base_percent * 1.15).min(95.0),
            CityClass::Regional => (base_percent * 1.05).min(90.0),
            CityClass::Compact => base_percent,
        }
    }

    pub fn is_metro(&self) -> bool {
        matches!(self, CityClass::Metro)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CityClass::Metro => "metro",
            CityClass::Regional => "regional",
            CityClass::Compact => "compact",
        }
    }
}
