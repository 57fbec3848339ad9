//! Streaming VCF reader that accumulates one genotype symbol per sample per kept site.

use std::io::BufRead;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use phyconv_core::errors::Result;
use phyconv_core::models::{BiallelicSite, SampleSequences};
use phyconv_core::utils::get_dynamic_reader;

use crate::consts::PROGRESS_INTERVAL;
use crate::resolve::resolve;

/// Fixed columns before the first sample column.
const FIXED_COLUMNS: usize = 9;

/// Counters describing what happened to each data line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VcfSummary {
    /// Non-header, non-blank lines seen.
    pub total_records: usize,
    /// Lines with fewer than 10 tab-separated fields.
    pub malformed_lines: usize,
    /// Biallelic SNP sites, one alignment column each.
    pub kept_sites: usize,
    /// Well-formed lines dropped by the biallelic SNP filter.
    pub skipped_sites: usize,
}

/// The finished per-sample alignment plus the counters collected while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeAlignment {
    pub samples: SampleSequences,
    pub summary: VcfSummary,
}

impl GenotypeAlignment {
    pub fn alignment_length(&self) -> usize {
        self.samples.nchar()
    }
}

///
/// Line-at-a-time VCF consumer.
///
/// The `#CHROM` header fixes sample order; every data line after it either appends one
/// column to all samples or is dropped entirely.
///
#[derive(Debug, Clone)]
pub struct VcfGenotypeReader {
    missing_char: char,
    samples: SampleSequences,
    summary: VcfSummary,
}

impl VcfGenotypeReader {
    pub fn new(missing_char: char) -> Self {
        VcfGenotypeReader {
            missing_char,
            samples: SampleSequences::default(),
            summary: VcfSummary::default(),
        }
    }

    pub fn summary(&self) -> &VcfSummary {
        &self.summary
    }

    ///
    /// Consume one line of VCF text (line terminators are ignored).
    ///
    pub fn process_line(&mut self, line: &str) {
        let line = line.trim_end_matches(['\n', '\r']);

        if line.trim().is_empty() || line.starts_with("##") {
            return;
        }

        if line.starts_with("#CHROM") {
            let names: Vec<String> = line
                .split('\t')
                .skip(FIXED_COLUMNS)
                .map(|s| s.to_string())
                .collect();
            debug!("found {} samples in header", names.len());
            self.samples = SampleSequences::new(names);
            return;
        }

        self.summary.total_records += 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= FIXED_COLUMNS {
            debug!(
                "skipping line {} with only {} fields",
                self.summary.total_records,
                fields.len()
            );
            self.summary.malformed_lines += 1;
            return;
        }

        let site = match BiallelicSite::from_fields(
            fields[0], fields[1], fields[2], fields[3], fields[4],
        ) {
            Some(site) => site,
            None => {
                debug!(
                    "skipping non-SNP site {}:{} {}>{}",
                    fields[0], fields[1], fields[3], fields[4]
                );
                self.summary.skipped_sites += 1;
                return;
            }
        };

        let gt_index = fields[8].split(':').position(|key| key == "GT");
        if gt_index.is_none() {
            debug!("no GT in FORMAT at {}", site);
        }

        let genotypes = &fields[FIXED_COLUMNS..];
        let missing = self.missing_char;

        self.samples.push_site(|idx| {
            let token = gt_index.and_then(|gt| {
                genotypes
                    .get(idx)
                    .and_then(|block| block.split(':').nth(gt))
            });
            match token {
                Some(token) => resolve(token, site.ref_base, site.alt_base, missing),
                None => missing,
            }
        });

        self.summary.kept_sites += 1;
    }

    pub fn finish(self) -> GenotypeAlignment {
        GenotypeAlignment {
            samples: self.samples,
            summary: self.summary,
        }
    }
}

///
/// Build a genotype alignment from any buffered VCF text source.
///
pub fn genotype_alignment_from_reader<R: BufRead>(
    mut reader: R,
    missing_char: char,
) -> Result<GenotypeAlignment> {
    let mut vcf = VcfGenotypeReader::new(missing_char);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["-", "\\", "|", "/", "-"]),
    );
    spinner.set_message("Reading VCF records...");

    let mut line_buf = String::new();
    let mut lines_read: u64 = 0;
    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        vcf.process_line(&line_buf);

        lines_read += 1;
        if lines_read % PROGRESS_INTERVAL == 0 {
            spinner.set_message(format!(
                "Read {} records, kept {} sites",
                vcf.summary().total_records,
                vcf.summary().kept_sites
            ));
            spinner.tick();
        }
    }
    spinner.finish_and_clear();

    let alignment = vcf.finish();
    info!(
        "read {} records: {} kept, {} non-SNP, {} malformed",
        alignment.summary.total_records,
        alignment.summary.kept_sites,
        alignment.summary.skipped_sites,
        alignment.summary.malformed_lines
    );

    Ok(alignment)
}

///
/// Build a genotype alignment from a VCF file on disk.
///
/// # Arguments
/// - path: path to a `.vcf`, `.vcf.gz` or `.vcf.bgz` file
/// - missing_char: symbol for missing or unsupported genotypes
///
/// # Errors
/// Only failures to open or read the file; per-site problems are never fatal.
pub fn read_genotype_alignment<T: AsRef<Path>>(
    path: T,
    missing_char: char,
) -> Result<GenotypeAlignment> {
    debug!("reading VCF {}", path.as_ref().display());
    let reader = get_dynamic_reader(path.as_ref())?;
    genotype_alignment_from_reader(reader, missing_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\ts1\ts2\ts3";

    fn build(lines: &[&str]) -> GenotypeAlignment {
        let mut reader = VcfGenotypeReader::new('?');
        for line in lines {
            reader.process_line(line);
        }
        reader.finish()
    }

    #[rstest]
    fn test_header_defines_sample_order() {
        let alignment = build(&["##fileformat=VCFv4.2", HEADER]);
        assert_eq!(alignment.samples.names(), &["s1", "s2", "s3"]);
        assert_eq!(alignment.alignment_length(), 0);
        assert_eq!(alignment.summary, VcfSummary::default());
    }

    #[rstest]
    fn test_kept_site_appends_to_every_sample() {
        let alignment = build(&[
            HEADER,
            "1\t10\trs1\tA\tG\t50\tPASS\t.\tGT:DP\t0/1:12\t1|0:8\t./.:0",
        ]);

        assert_eq!(alignment.summary.kept_sites, 1);
        assert_eq!(alignment.samples.get("s1"), Some("R"));
        assert_eq!(alignment.samples.get("s2"), Some("\""));
        assert_eq!(alignment.samples.get("s3"), Some("?"));
    }

    #[rstest]
    #[case("1\t10\t.\tA\tC,T\t.\t.\t.\tGT\t0/1\t0/1\t0/1")]
    #[case("1\t10\t.\tAT\tA\t.\t.\t.\tGT\t0/1\t0/1\t0/1")]
    #[case("1\t10\t.\tA\tAT\t.\t.\t.\tGT\t0/1\t0/1\t0/1")]
    fn test_non_snp_sites_add_no_column(#[case] line: &str) {
        let alignment = build(&[HEADER, line]);

        assert_eq!(alignment.summary.kept_sites, 0);
        assert_eq!(alignment.summary.skipped_sites, 1);
        assert_eq!(alignment.summary.total_records, 1);
        assert_eq!(alignment.alignment_length(), 0);
    }

    #[rstest]
    fn test_short_lines_are_skipped() {
        let alignment = build(&[HEADER, "1\t10\t.\tA\tC\t.\t.\t.\tGT"]);
        assert_eq!(alignment.summary.malformed_lines, 1);
        assert_eq!(alignment.summary.kept_sites, 0);
    }

    #[rstest]
    fn test_missing_gt_format_key() {
        let alignment = build(&[HEADER, "1\t10\t.\tA\tC\t.\t.\t.\tDP:GQ\t3:10\t4:20\t5:30"]);
        assert_eq!(alignment.summary.kept_sites, 1);
        for (_, sequence) in alignment.samples.iter() {
            assert_eq!(sequence, "?");
        }
    }

    #[rstest]
    fn test_gt_not_first_and_short_blocks() {
        let alignment = build(&[HEADER, "1\t10\t.\tC\tT\t.\t.\t.\tDP:GT\t3:0|1\t4\t5:1/1"]);
        assert_eq!(alignment.samples.get("s1"), Some("Y"));
        assert_eq!(alignment.samples.get("s2"), Some("?"));
        assert_eq!(alignment.samples.get("s3"), Some("T"));
    }

    #[rstest]
    fn test_fewer_blocks_than_samples() {
        let alignment = build(&[HEADER, "1\t10\t.\tG\tT\t.\t.\t.\tGT\t0/0"]);
        assert_eq!(alignment.samples.get("s1"), Some("G"));
        assert_eq!(alignment.samples.get("s2"), Some("?"));
        assert_eq!(alignment.samples.get("s3"), Some("?"));
    }

    #[rstest]
    fn test_reader_handles_crlf_and_blank_lines() {
        let text = format!(
            "##fileformat=VCFv4.2\r\n{}\r\n\r\n1\t5\t.\tt\tg\t.\t.\t.\tGT\t0|1\t1|0\t1\r\n",
            HEADER
        );
        let alignment = genotype_alignment_from_reader(Cursor::new(text), '-').unwrap();

        assert_eq!(alignment.summary.total_records, 1);
        assert_eq!(alignment.samples.get("s1"), Some("&"));
        assert_eq!(alignment.samples.get("s2"), Some("K"));
        assert_eq!(alignment.samples.get("s3"), Some("G"));
    }

    #[rstest]
    fn test_columns_follow_site_order() {
        let alignment = build(&[
            HEADER,
            "1\t1\t.\tA\tC\t.\t.\t.\tGT\t0/0\t0/1\t1/1",
            "1\t2\t.\tA\tC,G\t.\t.\t.\tGT\t0/0\t0/1\t1/1",
            "1\t3\t.\tG\tT\t.\t.\t.\tGT\t1|0\t0|1\t.",
        ]);

        assert_eq!(alignment.alignment_length(), 2);
        assert_eq!(alignment.samples.get("s1"), Some("A&"));
        assert_eq!(alignment.samples.get("s2"), Some("MK"));
        assert_eq!(alignment.samples.get("s3"), Some("C?"));
    }
}
