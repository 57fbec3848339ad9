use anyhow::{Context, Result};
use clap::ArgMatches;

use phyconv_genotype::{
    OutputSelection, parse_missing_char, read_genotype_alignment, summary_lines, write_outputs,
};

pub fn run_vcf2aln(matches: &ArgMatches) -> Result<()> {
    let vcf = matches
        .get_one::<String>("vcf")
        .context("A path to an input VCF is required.")?;

    let outprefix = matches
        .get_one::<String>("outprefix")
        .context("An output prefix is required.")?;

    // both have clap defaults
    let missing_char = matches
        .get_one::<String>("missing-char")
        .context("A missing character is required.")?;
    let missing_char = parse_missing_char(missing_char)?;

    let wrap = *matches
        .get_one::<usize>("wrap")
        .context("A FASTA line width is required.")?;

    let selection = match (
        matches.get_flag("fasta-only"),
        matches.get_flag("phylip-only"),
    ) {
        (true, _) => OutputSelection::FastaOnly,
        (_, true) => OutputSelection::PhylipOnly,
        _ => OutputSelection::Both,
    };

    let alignment = read_genotype_alignment(vcf, missing_char)
        .with_context(|| format!("Failed to read VCF: {}", vcf))?;

    let written = write_outputs(&alignment, outprefix, selection, wrap)
        .with_context(|| format!("Failed to write alignment with prefix: {}", outprefix))?;

    for line in summary_lines(&alignment, &written) {
        eprintln!("{}", line);
    }

    Ok(())
}
