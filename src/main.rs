use clap::Parser;
use hues::cli::{Cli, Commands};
use hues::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Score(args) => hues::cli::score::run(args, &printer)?,
        Commands::Derive(args) => hues::cli::derive::run(args, &printer)?,
        Commands::Convert(args) => hues::cli::convert::run(args, &printer)?,
        Commands::Init(args) => hues::cli::init::run(args, &printer)?,
        Commands::Completions(args) => hues::cli::completions::run(args)?,
    }

    Ok(())
}
