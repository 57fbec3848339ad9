use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;

use phyconv_core::models::SequenceSet;
use phyconv_io::NexusWrite;

pub fn run_fasta2nexus(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to an input FASTA is required.")?;

    let output = matches
        .get_one::<String>("output")
        .context("A path for the output NEXUS is required.")?;

    let records = SequenceSet::try_from(Path::new(input))
        .with_context(|| format!("Failed to load FASTA: {}", input))?;
    info!(
        "loaded {} sequences of length {}",
        records.ntax(),
        records.nchar()
    );

    records
        .write_nexus(output)
        .with_context(|| format!("Failed to write NEXUS: {}", output))?;

    println!(
        "Wrote {} (ntax={}, nchar={})",
        output,
        records.ntax(),
        records.nchar()
    );

    Ok(())
}
