pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, CheckArgs, Cli, Commands, CommonArgs, ExportArgs,
    InitArgs, RenderArgs,
};
pub use runner::run;
