pub mod output_path;
pub mod show_config;
