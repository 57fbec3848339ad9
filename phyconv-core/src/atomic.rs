use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

///
/// An output file written through a uniquely named temporary sibling and moved over the
/// destination on [AtomicFile::commit]. The temporary file is removed whenever the
/// [AtomicFile] is dropped uncommitted or the commit fails, and any existing destination is
/// left untouched in both cases.
///
pub struct AtomicFile {
    path: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl AtomicFile {
    ///
    /// Open a new atomic output file, creating parent directories as needed.
    ///
    /// # Arguments
    /// - path: final destination of the file
    pub fn create<T: AsRef<Path>>(path: T) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if path.file_name().is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Output path has no file name: {}", path.display()),
            ));
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        let tmp = tempfile::Builder::new()
            .prefix(".phyconv-")
            .suffix(".tmp")
            .tempfile_in(&dir)?;

        Ok(AtomicFile {
            path,
            writer: BufWriter::new(tmp),
        })
    }

    /// The final destination of this file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    ///
    /// Flush everything to disk and move the file into place.
    ///
    pub fn commit(self) -> io::Result<()> {
        let tmp = self.writer.into_inner().map_err(|e| e.into_error())?;
        tmp.as_file().sync_all()?;
        // a failed persist hands the temp file back and dropping it deletes it
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!("committed {}", self.path.display());
        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
