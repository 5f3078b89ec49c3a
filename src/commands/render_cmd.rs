use crate::commands::base_commands::Commands;
use crate::services::dashboard::render_dashboard_from_config_file;
use crate::services::render_sink::{JsonViewSink, PngChartSink, RenderSink};

pub fn render_command(cmd: Commands) {
    if let Commands::Render {
        config,
        output,
        chart,
    } = cmd
    {
        let view = match render_dashboard_from_config_file(&config) {
            Ok(view) => view,
            Err(e) => {
                eprintln!("Failed to render dashboard: {e:?}");
                return;
            }
        };

        if let Some([amount]) = view.text_for(".value-amount") {
            println!("Current valuation: {amount}");
        }

        let mut sinks: Vec<(Box<dyn RenderSink>, String)> = vec![(
            Box::new(JsonViewSink {
                output_path: output.clone(),
            }) as Box<dyn RenderSink>,
            format!("Dashboard view written to {output}"),
        )];
        if let Some(chart) = chart {
            sinks.push((
                Box::new(PngChartSink {
                    output_path: chart.clone(),
                }),
                format!("Dashboard chart written to {chart}"),
            ));
        }

        for (sink, message) in sinks {
            if let Err(e) = sink.render(&view) {
                eprintln!("Failed to write dashboard output: {e:?}");
                return;
            }
            println!("{message}");
        }
    }
}
