use std::fs::OpenOptions;
use std::io;

use clap::Parser;
use rawargs::{
    arguments::{Argument, ParsedArguments},
    cli::Cli,
    config::Config,
    error::Result,
    logging::init_logging,
    output::{OutputWriter, Report},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    run(config)?;

    Ok(())
}

fn run(config: Config) -> Result<()> {
    let arguments = ParsedArguments::parse_with(config.tokens, config.parse_options);

    log::debug!(
        "Classified {} named and {} positional arguments",
        arguments.named_keys().len(),
        arguments.positional_len()
    );

    let report = Report::build(&arguments, &config.queries);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // Falls back to stdout when no output file was given
    let mut target = Argument::from(config.output.as_deref()).open_file(&options, io::stdout())?;

    let writer = OutputWriter::new(config.output_format, config.no_color || !target.is_default());
    writer.write(&report, &mut target)?;

    Ok(())
}
