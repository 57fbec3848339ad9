use clap::{ArgGroup, Command, arg, value_parser};

pub const VCF2ALN_CMD: &str = "vcf2aln";

pub fn create_vcf2aln_cli() -> Command {
    Command::new(VCF2ALN_CMD)
        .about("VCF -> IQ-TREE genotype alignment (FASTA/PHYLIP).")
        .arg_required_else_help(true)
        .arg(arg!(-i --vcf <vcf> "Input VCF (optionally .gz)").required(true))
        .arg(
            arg!(-o --outprefix <outprefix> "Output prefix (writes .fasta/.phy)").required(true),
        )
        .arg(
            arg!(--"missing-char" <char> "Character for missing/unsupported genotypes")
                .default_value("?")
                .allow_hyphen_values(true),
        )
        .arg(arg!(--"fasta-only" "Write only FASTA"))
        .arg(arg!(--"phylip-only" "Write only PHYLIP (relaxed)"))
        .group(
            ArgGroup::new("outputs")
                .args(["fasta-only", "phylip-only"])
                .multiple(false),
        )
        .arg(
            arg!(--wrap <width> "FASTA line width, 0 disables wrapping")
                .value_parser(value_parser!(usize))
                .default_value("80"),
        )
}
