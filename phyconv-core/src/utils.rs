use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{ConvertError, Result};

/// Buffer size for line-oriented input; VCF files can be large.
const READ_CAPACITY: usize = 256 * 1024;

///
/// Whether a path names a gzip (or bgzf) compressed file, judged by its suffix.
///
pub fn is_gzipped(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("gz") | Some("bgz")
    )
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
/// # Errors
///
/// [ConvertError::NotFound] when the path does not exist, [ConvertError::Io] when it
/// cannot be opened.
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::with_capacity(READ_CAPACITY, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("calls.vcf.gz", true)]
    #[case("calls.vcf.bgz", true)]
    #[case("calls.vcf", false)]
    #[case("aln.fasta", false)]
    #[case("noextension", false)]
    fn test_is_gzipped(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_gzipped(Path::new(name)), expected);
    }

    #[rstest]
    fn test_missing_file_is_not_found() {
        let result = get_dynamic_reader(Path::new("definitely/not/here.vcf"));
        assert!(matches!(result, Err(ConvertError::NotFound(_))));
    }

    #[rstest]
    fn test_reads_gzipped_and_plain_alike() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("x.txt");
        let gz = dir.path().join("x.txt.gz");

        std::fs::write(&plain, "line one\nline two\n").unwrap();
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"line one\nline two\n").unwrap();
        encoder.finish().unwrap();

        let plain_lines: Vec<String> = get_dynamic_reader(&plain)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        let gz_lines: Vec<String> = get_dynamic_reader(&gz)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();

        assert_eq!(plain_lines, vec!["line one", "line two"]);
        assert_eq!(gz_lines, plain_lines);
    }
}
