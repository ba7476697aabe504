use crate::commands::base_commands::{Commands, load_registry};
use crate::commands::report_format::format_staffing_report;
use crate::services::workforce::{WorkforceRequest, size_workforce};

pub fn size_workforce_command(cmd: Commands) {
    if let Commands::SizeWorkforce {
        city,
        specialization,
        transport,
        total_visits,
        visits_per_day,
        calendar_days,
        work_days_per_week,
        max_hours_per_day,
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
        let request = WorkforceRequest {
            city,
            specialization,
            transport,
            total_visits_needed: total_visits,
            visits_per_rep_per_day: visits_per_day,
            project_calendar_days: calendar_days,
            work_days_per_week,
            max_hours_per_day,
        };
        let plan = match size_workforce(&registry, &request, seed) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Failed to size workforce: {e:?}");
                return;
            }
        };

        println!("{}", format_staffing_report(&plan));

        if let Some(output) = output {
            let contents = match format.serialize(&plan) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize workforce plan: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, contents) {
                eprintln!("Failed to write workforce plan: {e:?}");
            } else {
                println!("Workforce plan written to {output}");
            }
        }
    }
}
