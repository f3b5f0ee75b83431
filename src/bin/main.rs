use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use kickoff::{cli::input::CliArgs, utils::logger::config_logger, worker::run_kickoff};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;
    log::info!("Launching kickoff");
    run_kickoff(&cli_args)?;
    log::info!("Tasks successfully finished");

    Ok(())
}
