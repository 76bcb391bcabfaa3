use clap::Parser;
use stopalign::{align, pairwise};

#[derive(Parser)]
#[command(version, about)]
enum Cli {
    /// Align all route variants in a file.
    Align(align::Cli),
    /// Align the stops of two route variants given on the command line.
    Pairwise(pairwise::Cli),
}

fn main() -> anyhow::Result<()> {
    match Cli::parse() {
        Cli::Align(cli) => align::cli(cli),
        Cli::Pairwise(cli) => pairwise::cli(cli),
    }
}
