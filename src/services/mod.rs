pub mod city_profiles_yaml;
pub mod day_simulation;
pub mod density;
pub mod histogram;
pub mod monte_carlo;
pub mod registry;
pub mod statistics;
pub mod workforce;
