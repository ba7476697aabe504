use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::commands::base_commands::{Commands, load_registry};
use crate::commands::report_format::format_day_report;
use crate::services::day_simulation::{DayRequest, simulate_day, simulate_day_with_rng};

pub fn simulate_day_command(cmd: Commands) {
    if let Commands::SimulateDay {
        city,
        specialization,
        visits,
        transport,
        seed,
        output,
        format,
        cities,
    } = cmd
    {
        let registry = match load_registry(cities.as_deref()) {
            Some(registry) => registry,
            None => return,
        };
        let request = DayRequest {
            city,
            specialization,
            visit_target: visits,
            transport,
        };
        let simulated = match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                simulate_day_with_rng(&registry, &request, &mut rng)
            }
            None => simulate_day(&registry, &request),
        };
        let result = match simulated {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate day: {e:?}");
                return;
            }
        };

        println!("{}", format_day_report(&request, &result));

        if let Some(output) = output {
            let contents = match format.serialize(&result) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize day result: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, contents) {
                eprintln!("Failed to write day result: {e:?}");
            } else {
                println!("Day result written to {output}");
            }
        }
    }
}
