use std::io::{self, Write};
use std::path::Path;

use phyconv_core::AtomicFile;
use phyconv_core::models::SampleSequences;

pub trait AlignmentWrite {
    ///
    /// Write sequences as FASTA, wrapping sequence lines at `wrap` characters
    ///
    /// # Arguments
    /// - writer: where to write the records
    /// - wrap: line width; 0 writes each sequence on a single line
    fn write_fasta_to<W: Write>(&self, writer: &mut W, wrap: usize) -> io::Result<()>;

    ///
    /// Write sequences in relaxed PHYLIP layout (names are never truncated)
    ///
    /// # Arguments
    /// - writer: where to write the alignment
    fn write_phylip_to<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    ///
    /// Write data to disk as a FASTA file, replacing any existing file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - wrap: line width; 0 disables wrapping
    fn write_fasta<T: AsRef<Path>>(&self, path: T, wrap: usize) -> io::Result<()> {
        let mut file = AtomicFile::create(path)?;
        self.write_fasta_to(&mut file, wrap)?;
        file.commit()
    }

    ///
    /// Write data to disk as a relaxed PHYLIP file, replacing any existing file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_phylip<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let mut file = AtomicFile::create(path)?;
        self.write_phylip_to(&mut file)?;
        file.commit()
    }
}

impl AlignmentWrite for SampleSequences {
    fn write_fasta_to<W: Write>(&self, writer: &mut W, wrap: usize) -> io::Result<()> {
        for (name, sequence) in self.iter() {
            writeln!(writer, ">{}", name)?;

            if wrap == 0 {
                writeln!(writer, "{}", sequence)?;
                continue;
            }

            let symbols: Vec<char> = sequence.chars().collect();
            for chunk in symbols.chunks(wrap) {
                let line: String = chunk.iter().collect();
                writeln!(writer, "{}", line)?;
            }
        }
        Ok(())
    }

    fn write_phylip_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{} {}", self.ntax(), self.nchar())?;
        for (name, sequence) in self.iter() {
            writeln!(writer, "{} {}", name, sequence)?;
        }
        Ok(())
    }
}
