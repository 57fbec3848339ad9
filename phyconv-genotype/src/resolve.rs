use phyconv_core::errors::{ConvertError, Result};

use crate::encoding::{BASES, Phase, lookup};

///
/// Map one GT token to a single alignment symbol.
///
/// Allele index `0` is the REF base and `1` the ALT base (both upper-cased). A token
/// containing `|` is phased, one containing `/` is unphased, and anything else is read
/// as a single haploid allele. Every unsupported case (missing calls, indices other than
/// 0 or 1, non-numeric alleles, non-ACGT bases) yields `missing`.
///
/// # Arguments
/// - token: the raw GT value, e.g. `0/1`, `1|0`, `./.`
/// - ref_base: the site's REF allele
/// - alt_base: the site's ALT allele
/// - missing: symbol used for anything that cannot be encoded
pub fn resolve(token: &str, ref_base: char, alt_base: char, missing: char) -> char {
    if matches!(token, "" | "." | "./." | ".|.") {
        return missing;
    }

    let phase = match token.contains('|') {
        true => Phase::Phased,
        false => Phase::Unphased,
    };

    // a haploid call has no separator at all, so splitting yields the whole token
    let mut first = None;
    let mut second = None;
    for allele in token.split(phase.separator()) {
        let base = match allele_base(allele, ref_base, alt_base, missing) {
            Some(base) => base,
            None => return missing,
        };
        if base == missing {
            return missing;
        }

        if first.is_none() {
            first = Some(base);
        } else if second.is_none() {
            second = Some(base);
        }
    }

    match (first, second) {
        (Some(base), None) if BASES.contains(&base) => base,
        (Some(a), Some(b)) => lookup(phase, a, b).unwrap_or(missing),
        _ => missing,
    }
}

/// Translate an allele index; `None` for anything other than `0`, `1` or `.`.
fn allele_base(allele: &str, ref_base: char, alt_base: char, missing: char) -> Option<char> {
    if allele == "." {
        return Some(missing);
    }

    match allele.trim().parse::<i64>().ok()? {
        0 => Some(ref_base.to_ascii_uppercase()),
        1 => Some(alt_base.to_ascii_uppercase()),
        _ => None,
    }
}

///
/// Validate a user supplied missing symbol: it must be exactly one character.
///
pub fn parse_missing_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConvertError::InvalidMissingChar(value.to_string())),
    }
}
