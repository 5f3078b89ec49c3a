pub mod base_commands;
pub mod plot_cmd;
pub mod project_cmd;
pub mod render_cmd;
pub mod report_format;
