//! The IQ-TREE genotype symbol tables.
//!
//! Both tables are indexed `[first allele][second allele]` by base ordinal (A, C, G, T).
//! Homozygotes map to the base itself. Unphased heterozygotes use the IUPAC ambiguity
//! code for either order; phased heterozygotes use the IUPAC code when the alleles are
//! in alphabetical order and one of `! " # $ % &` otherwise.

pub const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

#[rustfmt::skip]
pub const PHASED_TABLE: [[char; 4]; 4] = [
    //  A     C     G     T
    ['A', 'M', 'R', 'W'], // A
    ['!', 'C', 'S', 'Y'], // C
    ['"', '$', 'G', 'K'], // G
    ['#', '%', '&', 'T'], // T
];

#[rustfmt::skip]
pub const UNPHASED_TABLE: [[char; 4]; 4] = [
    //  A     C     G     T
    ['A', 'M', 'R', 'W'], // A
    ['M', 'C', 'S', 'Y'], // C
    ['R', 'S', 'G', 'K'], // G
    ['W', 'Y', 'K', 'T'], // T
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Phased,
    Unphased,
}

impl Phase {
    pub fn separator(self) -> char {
        match self {
            Phase::Phased => '|',
            Phase::Unphased => '/',
        }
    }

    pub fn table(self) -> &'static [[char; 4]; 4] {
        match self {
            Phase::Phased => &PHASED_TABLE,
            Phase::Unphased => &UNPHASED_TABLE,
        }
    }
}

/// Ordinal of an upper-case nucleotide in [BASES].
pub fn base_ordinal(base: char) -> Option<usize> {
    BASES.iter().position(|&b| b == base)
}

///
/// Symbol for an ordered pair of upper-case bases, or `None` when either base is not
/// one of A, C, G, T.
///
pub fn lookup(phase: Phase, first: char, second: char) -> Option<char> {
    let i = base_ordinal(first)?;
    let j = base_ordinal(second)?;
    Some(phase.table()[i][j])
}
