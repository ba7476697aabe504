use crate::commands::base_commands::{Commands, load_registry};
use crate::commands::report_format::format_cities_report;

pub fn cities_command(cmd: Commands) {
    if let Commands::Cities { cities } = cmd {
        let registry = match load_registry(cities.as_deref()) {
            Some(registry) => registry,
            None => return,
        };
        println!("{}", format_cities_report(&registry));
    }
}
