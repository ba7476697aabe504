use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::city::CityProfile;
use crate::services::registry::CityProfileRegistry;

#[derive(Error, Debug)]
pub enum CityProfilesYamlError {
    #[error("city profiles file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read city profiles file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse city profiles file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("city profiles file contains no cities: {0}")]
    Empty(PathBuf),
    #[error("duplicate city name in {path}: {name}")]
    DuplicateCity { path: PathBuf, name: String },
    #[error("{field} for city {name} in {path} must be within [0, 1], got {value}")]
    InvalidProbability {
        path: PathBuf,
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("waiting time range for city {name} in {path} is invalid: {min}..{max}")]
    InvalidWaitingRange {
        path: PathBuf,
        name: String,
        min: f64,
        max: f64,
    },
    #[error("city {name} in {path} must have at least one district")]
    NoDistricts { path: PathBuf, name: String },
    #[error("city {name} in {path} must have at least one polyclinic")]
    NoClinics { path: PathBuf, name: String },
    #[error("area for city {name} in {path} must be positive, got {value}")]
    InvalidArea {
        path: PathBuf,
        name: String,
        value: f64,
    },
}

#[derive(Debug, Deserialize)]
struct CityProfileRecord {
    name: String,
    polyclinics: u32,
    pharmacies: u32,
    cardiology_doctors: u32,
    therapy_doctors: u32,
    pediatrics_doctors: u32,
    on_duty_share: f64,
    open_pharmacy_share: f64,
    area_km2: f64,
    districts: u32,
    avg_distance_km: f64,
    same_clinic_probability: f64,
    waiting_time_min: f64,
    waiting_time_max: f64,
    doctor_absence_probability: f64,
}

/// Loads a replacement city registry from a single YAML file holding a list
/// of city records.
///
/// # Errors
/// - Returns an error when `path` does not exist or is not a file.
/// - Returns an error on I/O or parse failures.
/// - Returns an error when the list is empty, a name repeats, or a record
///   carries out-of-range values.
pub fn load_city_profiles_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<CityProfileRegistry, CityProfilesYamlError> {
    let path = path.as_ref();
    if !path.exists() || !path.is_file() {
        return Err(CityProfilesYamlError::FileNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| CityProfilesYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_city_profiles_from_yaml_str(&contents, path)
}

fn deserialize_city_profiles_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<CityProfileRegistry, CityProfilesYamlError> {
    let records: Vec<CityProfileRecord> =
        serde_yaml::from_str(input).map_err(|source| CityProfilesYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        return Err(CityProfilesYamlError::Empty(origin_path.to_path_buf()));
    }

    let mut profiles: Vec<CityProfile> = Vec::with_capacity(records.len());
    for record in records {
        let profile = city_profile_from_record(record, origin_path)?;
        if profiles
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&profile.name))
        {
            return Err(CityProfilesYamlError::DuplicateCity {
                path: origin_path.to_path_buf(),
                name: profile.name,
            });
        }
        profiles.push(profile);
    }
    Ok(CityProfileRegistry::new(profiles))
}

fn city_profile_from_record(
    record: CityProfileRecord,
    origin_path: &Path,
) -> Result<CityProfile, CityProfilesYamlError> {
    let probabilities = [
        ("on_duty_share", record.on_duty_share),
        ("open_pharmacy_share", record.open_pharmacy_share),
        ("same_clinic_probability", record.same_clinic_probability),
        (
            "doctor_absence_probability",
            record.doctor_absence_probability,
        ),
    ];
    for (field, value) in probabilities {
        if !(0.0..=1.0).contains(&value) {
            return Err(CityProfilesYamlError::InvalidProbability {
                path: origin_path.to_path_buf(),
                name: record.name,
                field,
                value,
            });
        }
    }
    if record.waiting_time_min < 0.0 || record.waiting_time_min > record.waiting_time_max {
        return Err(CityProfilesYamlError::InvalidWaitingRange {
            path: origin_path.to_path_buf(),
            name: record.name,
            min: record.waiting_time_min,
            max: record.waiting_time_max,
        });
    }
    if record.districts == 0 {
        return Err(CityProfilesYamlError::NoDistricts {
            path: origin_path.to_path_buf(),
            name: record.name,
        });
    }
    if record.polyclinics == 0 {
        return Err(CityProfilesYamlError::NoClinics {
            path: origin_path.to_path_buf(),
            name: record.name,
        });
    }
    if record.area_km2 <= 0.0 {
        return Err(CityProfilesYamlError::InvalidArea {
            path: origin_path.to_path_buf(),
            name: record.name,
            value: record.area_km2,
        });
    }

    Ok(CityProfile {
        name: record.name,
        polyclinics: record.polyclinics,
        pharmacies: record.pharmacies,
        cardiology_doctors: record.cardiology_doctors,
        therapy_doctors: record.therapy_doctors,
        pediatrics_doctors: record.pediatrics_doctors,
        on_duty_share: record.on_duty_share,
        open_pharmacy_share: record.open_pharmacy_share,
        area_km2: record.area_km2,
        district_count: record.districts,
        avg_distance_km: record.avg_distance_km,
        same_clinic_probability: record.same_clinic_probability,
        waiting_time_range: (record.waiting_time_min, record.waiting_time_max),
        doctor_absence_probability: record.doctor_absence_probability,
    })
}
