use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use lib_stopalign::{
    aligned_sequence::{AlignedSequence, AlignedSequenceSet},
    alignment_configuration::AlignmentConfiguration,
    plain_text::write_alignment_table,
    progressive::progressive_align,
    route_variant::{RouteVariant, read_route_variants},
    statistics::AlignmentStatistics,
};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};

use crate::{config::read_configuration, initialise_logging};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The file containing the route variants, one per line in the form `<name>: <stop> <stop> ...`.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// A toml file containing the alignment scores.
    ///
    /// Missing scores keep their default value.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// The file to store the aligned route variants and the alignment statistics in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// The maximum amount of cells of a single alignment matrix.
    ///
    /// Overrides the limit from the configuration file.
    #[clap(long)]
    max_matrix_cells: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentOutput {
    pub statistics: AlignmentStatistics,
    pub variants: Vec<AlignedRouteVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRouteVariant {
    pub name: String,
    pub aligned_stops: AlignedSequence<String>,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let mut configuration = read_configuration(cli.config.as_deref())?;
    if let Some(max_matrix_cells) = cli.max_matrix_cells {
        configuration.max_matrix_cells = Some(max_matrix_cells);
    }

    info!("Loading route variants from {:?}", cli.input);
    let input = BufReader::new(
        File::open(&cli.input)
            .with_context(|| format!("Cannot open input file {:?}", cli.input))?,
    );
    let variants = read_route_variants(input)
        .with_context(|| format!("Cannot read route variants from {:?}", cli.input))?;
    ensure!(
        !variants.is_empty(),
        "The input file {:?} contains no route variants",
        cli.input
    );

    info!("Aligning {} route variants", variants.len());
    let output = align_route_variants(&variants, &configuration)?;
    info!("{}", output.statistics);

    let rows: Vec<_> = output
        .variants
        .iter()
        .map(|variant| (variant.name.as_str(), &variant.aligned_stops))
        .collect();
    write_alignment_table(std::io::stdout().lock(), &rows)?;

    if let Some(path) = &cli.output {
        info!("Writing alignment to {path:?}");
        let mut file = BufWriter::new(
            File::create(path).with_context(|| format!("Cannot create output file {path:?}"))?,
        );
        write!(file, "{}", toml::to_string(&output)?)?;
        file.flush()?;
    }

    Ok(())
}

/// Aligns the stops of all route variants, keeping the order of the variants.
pub fn align_route_variants(
    variants: &[RouteVariant],
    configuration: &AlignmentConfiguration,
) -> Result<AlignmentOutput> {
    let stops: Vec<_> = variants
        .iter()
        .map(|variant| variant.stops.as_slice())
        .collect();
    let aligned = AlignedSequenceSet::new(progressive_align(&stops, configuration)?)?;

    Ok(AlignmentOutput {
        statistics: AlignmentStatistics::new(&aligned),
        variants: variants
            .iter()
            .zip(aligned.into_sequences())
            .map(|(variant, aligned_stops)| AlignedRouteVariant {
                name: variant.name.clone(),
                aligned_stops,
            })
            .collect(),
    })
}
