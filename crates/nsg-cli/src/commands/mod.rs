pub mod frobenius;
pub mod genus;
pub mod genus_multiplicity;

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use nsg_core::NsgError;
use nsg_search::{
    run_search, FnSink, NullSink, SearchConfig, SearchStrategy, SemigroupRecord,
};

use crate::render;

/// Flags shared by every search subcommand.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print the full report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// YAML file overriding the search heuristics.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl OutputArgs {
    fn load_config(&self) -> Result<SearchConfig, Box<dyn Error>> {
        match &self.config {
            Some(path) => Ok(SearchConfig::load(path)?),
            None => Ok(SearchConfig::default()),
        }
    }
}

/// Runs `strategy` and prints the report, streaming Apéry lines as they arrive.
pub fn execute(strategy: &dyn SearchStrategy, output: &OutputArgs) -> Result<(), Box<dyn Error>> {
    let config = output.load_config()?;
    let started = Instant::now();
    if output.json {
        let report = run_search(strategy, &config, &mut NullSink)?;
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }
    let mut sink = FnSink(|record: &SemigroupRecord| -> Result<(), NsgError> {
        if let Some(line) = render::apery_line(record) {
            println!("{line}");
        }
        Ok(())
    });
    let report = run_search(strategy, &config, &mut sink)?;
    if report.records.iter().any(|record| record.apery.is_some()) {
        println!();
    }
    print!("{}", render::summary(&report, started.elapsed()));
    Ok(())
}
