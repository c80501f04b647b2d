use std::error::Error;

use clap::Args;
use nsg_search::FixedGenusSearch;

use super::{execute, OutputArgs};
use crate::input::resolve;

#[derive(Args, Debug)]
pub struct GenusArgs {
    /// Target genus; prompted for when absent.
    #[arg(long)]
    pub value: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &GenusArgs) -> Result<(), Box<dyn Error>> {
    let genus = resolve(args.value.as_deref(), "Genus: ", "genus")?;
    execute(&FixedGenusSearch::new(genus), &args.output)
}
