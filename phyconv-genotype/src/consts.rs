/// Tag prefixed to the summary lines written after a conversion.
pub const SUMMARY_TAG: &str = "[vcf2aln]";

/// Lines between spinner message refreshes.
pub const PROGRESS_INTERVAL: u64 = 10_000;
