use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lib_stopalign::{pairwise::pairwise_align, plain_text::write_alignment_table};
use log::{LevelFilter, debug};

use crate::{config::read_configuration, initialise_logging};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The stops of the first route variant, separated by whitespace.
    #[clap(long, short = 'f')]
    first: String,

    /// The stops of the second route variant, separated by whitespace.
    #[clap(long, short = 's')]
    second: String,

    /// A toml file containing the alignment scores.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);
    let configuration = read_configuration(cli.config.as_deref())?;

    let first: Vec<_> = cli.first.split_whitespace().collect();
    let second: Vec<_> = cli.second.split_whitespace().collect();
    let alignment = pairwise_align(&first, &second, &configuration)?;
    debug!("Alignment: {}", alignment.alignment);

    write_alignment_table(
        std::io::stdout().lock(),
        &[
            ("first", &alignment.aligned_first),
            ("second", &alignment.aligned_second),
        ],
    )?;
    println!("Score: {}", alignment.score);

    Ok(())
}
