//! Главный исполняемый файл sqlscan

use clap::Parser;
use sqlscan::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    env_logger::Builder::new()
        .parse_filters(&config.logging.level)
        .parse_default_env()
        .init();
    log::debug!("Конфигурация: {:?}", config);

    cli.execute(config)
}
