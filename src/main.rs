use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use uvmon::cli::Cli;
use uvmon::config::Config;
use uvmon::ingest::{FeedFetcher, FileFetcher, HttpFetcher};
use uvmon::{logging, pipeline, report};

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_to(&mut config);

    logging::init_logger(config.log.level, config.log.file.as_deref())
        .context("initialising logging")?;

    let zones = config.time_zone_table()?;

    let fetcher: Box<dyn FeedFetcher> = match &cli.input {
        Some(path) => Box::new(FileFetcher::new(path)),
        None => Box::new(HttpFetcher::new(config.feed_url.as_str(), config.timeout())?),
    };

    let lines = pipeline::run(fetcher.as_ref(), &zones, &cli.query_options())?;

    report::write_lines(&mut io::stdout().lock(), &lines)?;
    Ok(())
}
