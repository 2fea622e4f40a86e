use std::io;

use clap::Parser;
use colored::Colorize;
use ctconv::{
    cli::Cli,
    config::{Config, Resolution},
    convert,
    logging::init_logging,
    prompt::Prompter,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let config = match Config::resolve(cli, &mut prompter)? {
        Resolution::Ready(config) => config,
        Resolution::Abort(reason) => {
            // Nothing was written; the user only needs to know why.
            eprintln!("{}", reason.to_string().yellow());
            return Ok(());
        }
    };

    log::debug!("Configuration: {:?}", config);

    // Malformed tables are fatal
    let written = convert(&config)?;

    log::info!("{}", written.summary);

    Ok(())
}
