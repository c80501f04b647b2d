use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    frobenius::{self, FrobeniusArgs},
    genus::{self, GenusArgs},
    genus_multiplicity::{self, GenusMultiplicityArgs},
};

mod commands;
mod input;
mod render;

#[derive(Parser, Debug)]
#[command(name = "nsg", about = "Numerical semigroup enumeration and classification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every semigroup with a fixed Frobenius number, with Apéry sets.
    Frobenius(FrobeniusArgs),
    /// Every semigroup with a fixed genus.
    Genus(GenusArgs),
    /// Every semigroup with a fixed genus and multiplicity.
    GenusMultiplicity(GenusMultiplicityArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result: Result<(), Box<dyn Error>> = match cli.command {
        Command::Frobenius(args) => frobenius::run(&args),
        Command::Genus(args) => genus::run(&args),
        Command::GenusMultiplicity(args) => genus_multiplicity::run(&args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
