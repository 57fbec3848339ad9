use clap::{Command, arg};

pub const FASTA2NEXUS_CMD: &str = "fasta2nexus";

pub fn create_fasta2nexus_cli() -> Command {
    Command::new(FASTA2NEXUS_CMD)
        .about("Convert an aligned FASTA to NEXUS (DNA).")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "Input FASTA (optionally gzipped)").required(true))
        .arg(arg!(-o --output <output> "Output NEXUS").required(true))
}
