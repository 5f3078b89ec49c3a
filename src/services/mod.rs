pub mod chart_plot;
pub mod chart_series;
pub mod chart_types;
pub mod currency_format;
pub mod dashboard;
pub mod dashboard_config;
pub mod data_source;
pub mod metadata_csv;
pub mod period_csv;
pub mod progress;
pub mod projection_types;
pub mod projection_yaml;
pub mod render_sink;
pub mod scenario_projection;
