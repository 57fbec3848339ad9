use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use phyconv_core::AtomicFile;
use phyconv_core::models::SequenceSet;

use crate::consts::NEXUS_TAXON_WIDTH;

///
/// Quote a taxon name for a NEXUS matrix.
///
/// Names made only of `[A-Za-z0-9_.-]` pass through unchanged. Anything else is wrapped
/// in single quotes with embedded single quotes doubled.
///
pub fn quote_taxon(name: &str) -> Cow<'_, str> {
    let plain = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

    if plain {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("'{}'", name.replace('\'', "''")))
    }
}

///
/// Inverse of [quote_taxon].
///
pub fn unquote_taxon(token: &str) -> Cow<'_, str> {
    match token
        .strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
    {
        Some(inner) => Cow::Owned(inner.replace("''", "'")),
        None => Cow::Borrowed(token),
    }
}

pub trait NexusWrite {
    ///
    /// Write a NEXUS DNA data block to any writer
    ///
    /// # Arguments
    /// - writer: where to write the block
    fn write_nexus_to<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    ///
    /// Write data to disk as a NEXUS file, replacing any existing file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_nexus<T: AsRef<Path>>(&self, path: T) -> io::Result<()>;
}

impl NexusWrite for SequenceSet {
    fn write_nexus_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "#NEXUS")?;
        writeln!(writer, "Begin data;")?;
        writeln!(
            writer,
            "    Dimensions ntax={} nchar={};",
            self.ntax(),
            self.nchar()
        )?;
        writeln!(writer, "    Format datatype=DNA missing=? gap=-;")?;
        writeln!(writer, "    Matrix")?;
        for record in self {
            writeln!(
                writer,
                "    {:<width$} {}",
                quote_taxon(&record.name),
                record.sequence,
                width = NEXUS_TAXON_WIDTH
            )?;
        }
        writeln!(writer, "    ;")?;
        // no newline after the final line
        write!(writer, "End;")?;
        Ok(())
    }

    fn write_nexus<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let mut file = AtomicFile::create(path)?;
        self.write_nexus_to(&mut file)?;
        file.commit()
    }
}
