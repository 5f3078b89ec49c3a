use crate::commands::base_commands::Commands;
use crate::services::chart_plot::plot_from_csv_file;

pub fn plot_command(cmd: Commands) {
    if let Commands::Plot {
        input,
        output,
        horizon,
        contribution,
    } = cmd
    {
        match plot_from_csv_file(&input, &output, horizon, contribution) {
            Ok(()) => println!("Chart written to {output}"),
            Err(e) => eprintln!("Failed to plot chart: {e:?}"),
        }
    }
}
