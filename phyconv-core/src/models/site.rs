use std::fmt::{self, Display};

///
/// A biallelic single-nucleotide site taken from one VCF data line.
///
/// Borrows the positional fields from the line it was parsed from; sites only live for
/// the duration of that line's processing.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct BiallelicSite<'a> {
    pub chrom: &'a str,
    pub pos: &'a str,
    pub id: &'a str,
    pub ref_base: char,
    pub alt_base: char,
}

impl<'a> BiallelicSite<'a> {
    ///
    /// Build a site from the positional VCF columns, or `None` if the REF/ALT pair is not
    /// a strict biallelic SNP (ALT holds a comma, or either allele is not exactly one
    /// character long).
    ///
    pub fn from_fields(
        chrom: &'a str,
        pos: &'a str,
        id: &'a str,
        ref_allele: &str,
        alt_allele: &str,
    ) -> Option<Self> {
        if alt_allele.contains(',') {
            return None;
        }

        Some(BiallelicSite {
            chrom,
            pos,
            id,
            ref_base: single_char(ref_allele)?,
            alt_base: single_char(alt_allele)?,
        })
    }
}

fn single_char(allele: &str) -> Option<char> {
    let mut chars = allele.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl Display for BiallelicSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}>{}",
            self.chrom, self.pos, self.ref_base, self.alt_base
        )
    }
}
