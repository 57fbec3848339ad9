///
/// Per-sample genotype symbol sequences built while streaming a VCF.
///
/// Sample order is the order of the `#CHROM` header and is authoritative for every
/// writer. Each kept site appends exactly one symbol to every sample, so all sequences
/// always share one length.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleSequences {
    names: Vec<String>,
    sequences: Vec<String>,
}

impl SampleSequences {
    pub fn new(names: Vec<String>) -> Self {
        let sequences = vec![String::new(); names.len()];
        SampleSequences { names, sequences }
    }

    ///
    /// Append one alignment column. `symbol_for` is called once per sample index, in
    /// header order, and its result is appended to that sample's sequence.
    ///
    pub fn push_site<F: FnMut(usize) -> char>(&mut self, mut symbol_for: F) {
        for (idx, sequence) in self.sequences.iter_mut().enumerate() {
            sequence.push(symbol_for(idx));
        }
    }

    /// Number of samples.
    pub fn ntax(&self) -> usize {
        self.names.len()
    }

    /// Alignment length, taken from the first sample; 0 without samples.
    pub fn nchar(&self) -> usize {
        self.sequences
            .first()
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.sequences[idx].as_str())
    }

    /// (name, sequence) pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .zip(self.sequences.iter())
            .map(|(n, s)| (n.as_str(), s.as_str()))
    }
}
