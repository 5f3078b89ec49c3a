use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dashboard view-model from a YAML dashboard config
    Render {
        /// Dashboard config YAML
        #[arg(short, long)]
        config: String,
        /// Output JSON view-model file
        #[arg(short, long)]
        output: String,
        /// Optional PNG file for the rendered chart
        #[arg(long)]
        chart: Option<String>,
    },
    /// Project savings scenarios from period data into YAML
    Project {
        /// Period data CSV file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Total number of periods to project to
        #[arg(short = 't', long)]
        horizon: usize,
        /// Periodic contribution (defaults to the last recorded one)
        #[arg(short, long)]
        contribution: Option<f64>,
    },
    /// Plot period data into a PNG chart
    Plot {
        /// Period data CSV file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Project scenarios up to this many periods instead of plotting growth
        #[arg(short = 't', long)]
        horizon: Option<usize>,
        /// Periodic contribution for the projection
        #[arg(short, long)]
        contribution: Option<f64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_contribution_is_optional() {
        let args = CliArgs::parse_from([
            "projections",
            "project",
            "-i",
            "datos.csv",
            "-o",
            "out.yaml",
            "-t",
            "1150",
        ]);

        if let Commands::Project {
            horizon,
            contribution,
            ..
        } = args.command
        {
            assert_eq!(horizon, 1150);
            assert_eq!(contribution, None);
        } else {
            panic!("expected project command");
        }
    }

    #[test]
    fn render_chart_output_is_optional() {
        let args = CliArgs::parse_from([
            "projections",
            "render",
            "-c",
            "dashboard.yaml",
            "-o",
            "view.json",
        ]);

        if let Commands::Render { chart, .. } = args.command {
            assert_eq!(chart, None);
        } else {
            panic!("expected render command");
        }
    }

    #[test]
    fn plot_accepts_projection_arguments() {
        let args = CliArgs::parse_from([
            "projections",
            "plot",
            "-i",
            "datos.csv",
            "-o",
            "chart.png",
            "-t",
            "20",
            "-c",
            "250.5",
        ]);

        if let Commands::Plot {
            horizon,
            contribution,
            ..
        } = args.command
        {
            assert_eq!(horizon, Some(20));
            assert_eq!(contribution, Some(250.5));
        } else {
            panic!("expected plot command");
        }
    }
}
