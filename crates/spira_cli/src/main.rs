//! Prints the Spira release identifier.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install().expect("error initializing panic handler");

    log::trace!("{}", spira::SPIRA_VERSION_STRING);

    cli::exec(args.subcommand.unwrap_or_default())
}
