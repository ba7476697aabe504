use clap::{CommandFactory, Parser};

use fieldcast::commands::base_commands::{CliArgs, Commands};
use fieldcast::commands::cities_cmd::cities_command;
use fieldcast::commands::monte_carlo_cmd::monte_carlo_command;
use fieldcast::commands::simulate_day_cmd::simulate_day_command;
use fieldcast::commands::size_workforce_cmd::size_workforce_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
        command @ Commands::SimulateDay { .. } => simulate_day_command(command),
        command @ Commands::MonteCarlo { .. } => monte_carlo_command(command),
        command @ Commands::SizeWorkforce { .. } => size_workforce_command(command),
        command @ Commands::Cities { .. } => cities_command(command),
    }
}
