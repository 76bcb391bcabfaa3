use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use stopalign::{
    align::{self, AlignmentOutput},
    pairwise,
};

/// Resolves a path relative to the repository root.
pub fn repo_path(path: &str) -> PathBuf {
    // The manifest directory is "[...]/stopalign-tests".
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(path)
}

/// Runs a command as if it was called from the repository root.
///
/// Arguments are separated by whitespace.
pub fn run_in_repo_root(args: &str) -> Result<()> {
    let args: Vec<OsString> = args
        .split_whitespace()
        .map(|arg| {
            if arg.starts_with("test_files/") {
                repo_path(arg).into_os_string()
            } else {
                arg.into()
            }
        })
        .collect();

    if args.first().is_some_and(|command| command == "align") {
        align::cli(align::Cli::parse_from(args))?;
    } else if args.first().is_some_and(|command| command == "pairwise") {
        pairwise::cli(pairwise::Cli::parse_from(args))?;
    }

    Ok(())
}

/// Runs the pairwise command on two whitespace separated stop lists.
pub fn run_pairwise(first: &str, second: &str) -> Result<()> {
    pairwise::cli(pairwise::Cli::parse_from([
        "pairwise", "-f", first, "-s", second,
    ]))
}

/// Runs the align command on a file in the repository and parses the toml output.
pub fn align_to_output(input: &str, output_name: &str) -> Result<AlignmentOutput> {
    let output = std::env::temp_dir().join(format!(
        "stopalign-tests-{}-{output_name}.toml",
        std::process::id()
    ));

    let args: [OsString; 5] = [
        "align".into(),
        "-i".into(),
        repo_path(input).into_os_string(),
        "-o".into(),
        output.clone().into_os_string(),
    ];
    align::cli(align::Cli::parse_from(args))?;

    let result = toml::from_str(&fs::read_to_string(&output)?)?;
    fs::remove_file(&output)?;
    Ok(result)
}
