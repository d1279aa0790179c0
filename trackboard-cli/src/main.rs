use clap::Parser;
use std::process;
use trackboard_cli::{commands, logging, Cli, CliConfig};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose, cli.debug, cli.quiet);

    let config = match &cli.config {
        Some(path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    };
    tracing::debug!(?config, "loaded config");

    let exit_code = match commands::run(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_ERROR
        }
    };
    process::exit(exit_code);
}
