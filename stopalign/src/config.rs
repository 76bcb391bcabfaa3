use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result};
use lib_stopalign::alignment_configuration::AlignmentConfiguration;
use log::{debug, info};

/// Reads the alignment scores from a toml file.
///
/// Missing fields keep their default value, and without a file the default configuration is used.
pub fn read_configuration(path: Option<&Path>) -> Result<AlignmentConfiguration> {
    let Some(path) = path else {
        debug!("No configuration file given, using default scores");
        return Ok(AlignmentConfiguration::default());
    };

    info!("Loading configuration file {path:?}");
    let mut config_file = BufReader::new(
        File::open(path).with_context(|| format!("Cannot open configuration file {path:?}"))?,
    );
    let mut config = String::new();
    config_file.read_to_string(&mut config)?;

    let configuration: AlignmentConfiguration = toml::from_str(&config)
        .with_context(|| format!("Cannot parse configuration file {path:?}"))?;
    debug!("Configuration: {configuration:?}");
    Ok(configuration)
}
