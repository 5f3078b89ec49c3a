use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_projection_report;
use crate::services::projection_yaml::serialize_projection_to_yaml;
use crate::services::scenario_projection::project_from_csv_file;

pub fn project_command(cmd: Commands) {
    if let Commands::Project {
        input,
        output,
        horizon,
        contribution,
    } = cmd
    {
        let projection = match project_from_csv_file(&input, horizon, contribution) {
            Ok(projection) => projection,
            Err(e) => {
                eprintln!("Failed to project scenarios: {e:?}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_projection_to_yaml(&mut buffer, &projection) {
            eprintln!("Failed to serialize projection to YAML: {e:?}");
            return;
        }

        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write projection output: {e:?}");
        } else {
            println!("{}", format_projection_report(&input, &projection));
            println!("Projection for {horizon} periods written to {output}");
        }
    }
}
