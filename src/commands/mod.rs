pub mod base_commands;
pub mod cities_cmd;
pub mod monte_carlo_cmd;
pub mod report_format;
pub mod simulate_day_cmd;
pub mod size_workforce_cmd;
