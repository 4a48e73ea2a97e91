use std::io;

use anyhow::Result;
use clap::Parser;

use ngram_sieve::config::{Cli, ScanConfig};
use ngram_sieve::report::Report;
use ngram_sieve::run;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ScanConfig::resolve(&cli)?;
    log::debug!("config: {config:?}");

    let mut report = Report::new(io::stdout().lock(), config.columns.clone());
    let summary = match run::run(&config, &mut report) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("{e:#}");
            return Err(e);
        }
    };
    report.summary(&summary)?;
    Ok(())
}
