use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{ConvertError, Result};
use crate::models::SequenceRecord;
use crate::utils::get_dynamic_reader;

///
/// SequenceSet struct, the validated contents of an aligned FASTA file.
///
/// A set is never empty and every record in it shares the same sequence length.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceSet {
    records: Vec<SequenceRecord>,
    pub path: Option<PathBuf>,
}

impl SequenceSet {
    ///
    /// Parse and validate FASTA records from any buffered reader.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let records = parse_fasta_records(reader)?;
        Self::validate(records, "input")
    }

    fn validate(records: Vec<SequenceRecord>, source: &str) -> Result<Self> {
        if records.is_empty() {
            return Err(ConvertError::EmptyInput(source.to_string()));
        }

        let lengths: BTreeSet<usize> = records.iter().map(|r| r.len()).collect();
        if lengths.len() != 1 {
            return Err(ConvertError::UnequalLength(lengths.into_iter().collect()));
        }

        Ok(SequenceSet {
            records,
            path: None,
        })
    }

    /// Number of taxa.
    pub fn ntax(&self) -> usize {
        self.records.len()
    }

    /// Shared sequence length.
    pub fn nchar(&self) -> usize {
        // validated non-empty
        self.records[0].len()
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }
}

///
/// Split FASTA text into records in file order.
///
/// Header lines start a record named by the trimmed rest of the line. Trimmed sequence
/// lines are concatenated onto the current record. Blank lines, and sequence lines seen
/// before any header, are ignored.
///
fn parse_fasta_records<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(SequenceRecord::new(name.trim(), String::new()));
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(line);
        } else {
            debug!("ignoring sequence line before first header");
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    Ok(records)
}

impl TryFrom<&Path> for SequenceSet {
    type Error = ConvertError;

    ///
    /// Create a new [SequenceSet] from an aligned FASTA file.
    ///
    /// # Arguments:
    /// - value: path to a fasta file on disk (optionally gzipped).
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        let records = parse_fasta_records(reader)?;

        let mut set = Self::validate(records, &value.display().to_string())?;
        set.path = Some(value.to_path_buf());

        debug!(
            "loaded {} records of length {} from {}",
            set.ntax(),
            set.nchar(),
            value.display()
        );

        Ok(set)
    }
}

impl TryFrom<&str> for SequenceSet {
    type Error = ConvertError;

    fn try_from(value: &str) -> Result<Self> {
        SequenceSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for SequenceSet {
    type Error = ConvertError;

    fn try_from(value: PathBuf) -> Result<Self> {
        SequenceSet::try_from(value.as_path())
    }
}

impl TryFrom<Vec<SequenceRecord>> for SequenceSet {
    type Error = ConvertError;

    fn try_from(records: Vec<SequenceRecord>) -> Result<Self> {
        SequenceSet::validate(records, "record list")
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/fasta")
            .join(file_name)
    }

    #[fixture]
    fn multiline_fasta() -> &'static str {
        "\n>taxon_A  \nACGT\n  AC-?\n\n>taxon B\nTTTT\nGGNN\n>taxon'C\nAAAAAAAA\n"
    }

    #[rstest]
    fn test_parse_multiline_records(multiline_fasta: &str) {
        let set = SequenceSet::from_reader(Cursor::new(multiline_fasta)).unwrap();

        assert_eq!(set.ntax(), 3);
        assert_eq!(set.nchar(), 8);
        assert_eq!(
            set.records(),
            &[
                SequenceRecord::new("taxon_A", "ACGTAC-?"),
                SequenceRecord::new("taxon B", "TTTTGGNN"),
                SequenceRecord::new("taxon'C", "AAAAAAAA"),
            ]
        );
    }

    #[rstest]
    fn test_empty_input_is_rejected() {
        let result = SequenceSet::from_reader(Cursor::new("\n\nACGT\n"));
        assert!(matches!(result, Err(ConvertError::EmptyInput(_))));
    }

    #[rstest]
    fn test_unequal_lengths_report_distinct_lengths() {
        let result = SequenceSet::from_reader(Cursor::new(">a\nACGTA\n>b\nACG\n>c\nACG\n"));
        match result {
            Err(ConvertError::UnequalLength(lengths)) => assert_eq!(lengths, vec![3, 5]),
            other => panic!("expected UnequalLength, got {:?}", other),
        }
    }

    #[rstest]
    fn test_header_without_sequence_is_a_record() {
        let result = SequenceSet::from_reader(Cursor::new(">a\n>b\n")).unwrap();
        assert_eq!(result.ntax(), 2);
        assert_eq!(result.nchar(), 0);
    }

    #[rstest]
    fn test_missing_file_is_not_found() {
        let result = SequenceSet::try_from(get_test_path("does_not_exist.fa"));
        assert!(matches!(result, Err(ConvertError::NotFound(_))));
    }

    #[rstest]
    fn test_load_from_file() {
        let set = SequenceSet::try_from(get_test_path("aligned.fasta")).unwrap();

        assert_eq!(set.ntax(), 4);
        assert_eq!(set.nchar(), 24);
        assert!(set.path.is_some());

        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Homo_sapiens", "Pan troglodytes", "Gorilla-gorilla.1", "Pongo's_abelii"]
        );
    }

    #[rstest]
    fn test_load_gzipped_file_matches_plain() {
        let plain = SequenceSet::try_from(get_test_path("aligned.fasta")).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let gz_path = dir.path().join("aligned.fasta.gz");
        let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
        encoder
            .write_all(&std::fs::read(get_test_path("aligned.fasta")).unwrap())
            .unwrap();
        encoder.finish().unwrap();

        let gzipped = SequenceSet::try_from(gz_path.as_path()).unwrap();

        assert_eq!(gzipped.ntax(), 4);
        assert_eq!(gzipped.nchar(), 24);
        assert_eq!(gzipped.records(), plain.records());
    }

    #[rstest]
    fn test_load_unequal_file() {
        let result = SequenceSet::try_from(get_test_path("unequal.fasta"));
        assert!(matches!(result, Err(ConvertError::UnequalLength(_))));
    }
}
