use clap::ValueEnum;
use serde::Serialize;

/// How the representative moves between clinics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum TransportMode {
    Car,
    PublicTransit,
    Walking,
}

impl TransportMode {
    pub fn speed_kmh(&self) -> f64 {
        match self {
            TransportMode::Car => 40.0,
            TransportMode::PublicTransit => 25.0,
            TransportMode::Walking => 5.0,
        }
    }

    /// Parking or stop waiting added once per clinic stop, in minutes.
    pub fn stop_overhead_min(&self) -> f64 {
        match self {
            TransportMode::Car => 5.0,
            TransportMode::PublicTransit => 10.0,
            TransportMode::Walking => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::PublicTransit => "public transit",
            TransportMode::Walking => "walking",
        }
    }
}
