use crate::commands::base_commands::{Commands, load_registry};
use crate::commands::report_format::format_monte_carlo_report;
use crate::services::histogram::write_histogram_png;
use crate::services::monte_carlo::{MonteCarloRequest, run_monte_carlo};

pub fn monte_carlo_command(cmd: Commands) {
    if let Commands::MonteCarlo {
        city,
        specialization,
        visits,
        transport,
        iterations,
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
        let request = MonteCarloRequest {
            city,
            specialization,
            visit_target: visits,
            transport,
            iterations,
        };
        let results = match run_monte_carlo(&registry, &request, seed) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Failed to run Monte Carlo batch: {e:?}");
                return;
            }
        };

        let histogram_path = format!("{output}.png");
        if let Err(e) = write_histogram_png(&histogram_path, &results.raw_results.total_hours) {
            eprintln!("Failed to render histogram: {e:?}");
            return;
        }

        let contents = match format.serialize(&results) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize Monte Carlo output: {e:?}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write Monte Carlo output: {e:?}");
        } else {
            println!("{}", format_monte_carlo_report(&results));
            println!(
                "Monte Carlo result for {} simulated days written to {output}",
                results.params.iterations
            );
            println!("Histogram written to {histogram_path}");
        }
    }
}
