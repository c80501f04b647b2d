use std::error::Error;

use clap::Args;
use nsg_search::FixedGenusMultiplicitySearch;

use super::{execute, OutputArgs};
use crate::input::{parse_natural, read_raw};

#[derive(Args, Debug)]
pub struct GenusMultiplicityArgs {
    /// Target genus; prompted for when absent.
    #[arg(long)]
    pub genus: Option<String>,
    /// Target multiplicity; prompted for when absent.
    #[arg(long)]
    pub multiplicity: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &GenusMultiplicityArgs) -> Result<(), Box<dyn Error>> {
    let raw_genus = read_raw(args.genus.as_deref(), "Genus: ")?;
    let raw_multiplicity = read_raw(args.multiplicity.as_deref(), "Multiplicity: ")?;
    let genus = parse_natural(&raw_genus, "genus")?;
    let multiplicity = parse_natural(&raw_multiplicity, "multiplicity")?;
    execute(
        &FixedGenusMultiplicitySearch::new(genus, multiplicity),
        &args.output,
    )
}
