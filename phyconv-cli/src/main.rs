mod fasta2nexus;
mod vcf2aln;

use anyhow::Result;
use clap::{Command, arg};
use tracing_subscriber::{EnvFilter, fmt};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "phyconv";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Alignment format conversion for phylogenetics workflows.")
        .subcommand_required(true)
        .arg(
            arg!(--"log-level" <level> "Log filter, e.g. info or debug (overrides RUST_LOG)")
                .global(true),
        )
        .subcommand(fasta2nexus::cli::create_fasta2nexus_cli())
        .subcommand(vcf2aln::cli::create_vcf2aln_cli())
}

/// Logs go to stderr so they never mix with summaries on stdout.
fn init_logging(level: Option<&String>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(consts::DEFAULT_LOG_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_one::<String>("log-level"));

    match matches.subcommand() {
        //
        // FASTA -> NEXUS
        //
        Some((fasta2nexus::cli::FASTA2NEXUS_CMD, matches)) => {
            fasta2nexus::handlers::run_fasta2nexus(matches)?;
        }

        //
        // VCF -> GENOTYPE ALIGNMENT
        //
        Some((vcf2aln::cli::VCF2ALN_CMD, matches)) => {
            vcf2aln::handlers::run_vcf2aln(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
