use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use phyconv_io::{AlignmentWrite, FASTA_EXT, PHYLIP_EXT};

use crate::consts::SUMMARY_TAG;
use crate::vcf::GenotypeAlignment;

/// Which alignment files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputSelection {
    #[default]
    Both,
    FastaOnly,
    PhylipOnly,
}

impl OutputSelection {
    pub fn fasta(self) -> bool {
        self != OutputSelection::PhylipOnly
    }

    pub fn phylip(self) -> bool {
        self != OutputSelection::FastaOnly
    }
}

/// Paths of the files actually written; `None` for skipped formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub fasta: Option<PathBuf>,
    pub phylip: Option<PathBuf>,
}

/// `<prefix>.<ext>`, appending rather than replacing any extension already on the prefix.
fn prefixed_path(prefix: &Path, ext: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

///
/// Write the selected alignment formats next to `prefix`.
///
/// # Arguments
/// - alignment: the finished genotype alignment
/// - prefix: output prefix; files are `<prefix>.fasta` and `<prefix>.phy`
/// - selection: which of the two files to write
/// - wrap: FASTA line width, 0 for unwrapped
pub fn write_outputs<T: AsRef<Path>>(
    alignment: &GenotypeAlignment,
    prefix: T,
    selection: OutputSelection,
    wrap: usize,
) -> io::Result<WrittenOutputs> {
    let prefix = prefix.as_ref();
    let mut written = WrittenOutputs::default();

    if selection.fasta() {
        let path = prefixed_path(prefix, FASTA_EXT);
        alignment.samples.write_fasta(&path, wrap)?;
        info!("wrote {}", path.display());
        written.fasta = Some(path);
    }

    if selection.phylip() {
        let path = prefixed_path(prefix, PHYLIP_EXT);
        alignment.samples.write_phylip(&path)?;
        info!("wrote {}", path.display());
        written.phylip = Some(path);
    }

    Ok(written)
}

///
/// The two summary lines reported after a conversion.
///
pub fn summary_lines(alignment: &GenotypeAlignment, written: &WrittenOutputs) -> [String; 2] {
    let fasta = written
        .fasta
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(FASTA skipped)".to_string());
    let phylip = written
        .phylip
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(PHYLIP skipped)".to_string());

    [
        format!(
            "{} Samples: {} | Sites kept: {} | Alignment length: {}",
            SUMMARY_TAG,
            alignment.samples.ntax(),
            alignment.summary.kept_sites,
            alignment.alignment_length()
        ),
        format!("{} Wrote: {} {}", SUMMARY_TAG, fasta, phylip),
    ]
}
