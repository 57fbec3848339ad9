//! VCF to genotype-symbol alignment.
//!
//! Streams a VCF (plain or gzipped), keeps strict biallelic SNPs and turns every sample's
//! GT call into one symbol per site using the IQ-TREE genotype table, where phased
//! heterozygotes keep their allele order (`A|C` is `M`, `C|A` is `!`). The resulting
//! per-sample sequences are written as FASTA and/or relaxed PHYLIP.

pub mod consts;
pub mod encoding;
pub mod output;
pub mod resolve;
pub mod vcf;

pub use consts::*;
pub use encoding::Phase;
pub use output::{OutputSelection, WrittenOutputs, summary_lines, write_outputs};
pub use resolve::{parse_missing_char, resolve};
pub use vcf::{
    GenotypeAlignment, VcfGenotypeReader, VcfSummary, genotype_alignment_from_reader,
    read_genotype_alignment,
};
