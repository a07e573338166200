use clap::Parser;
use restdoc::cli::{run_cli, Cli};
use restdoc::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}
