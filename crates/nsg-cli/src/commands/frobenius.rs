use std::error::Error;

use clap::Args;
use nsg_search::FixedFrobeniusSearch;

use super::{execute, OutputArgs};
use crate::input::resolve;

#[derive(Args, Debug)]
pub struct FrobeniusArgs {
    /// Target Frobenius number; prompted for when absent.
    #[arg(long)]
    pub value: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &FrobeniusArgs) -> Result<(), Box<dyn Error>> {
    let frobenius = resolve(
        args.value.as_deref(),
        "Frobenius number (F): ",
        "Frobenius number",
    )?;
    execute(&FixedFrobeniusSearch::new(frobenius), &args.output)
}
