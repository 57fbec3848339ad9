use std::fmt::{self, Display};

///
/// SequenceRecord struct, one named sequence of an aligned FASTA file
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new<N: Into<String>, S: Into<String>>(name: N, sequence: S) -> Self {
        SequenceRecord {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    ///
    /// Number of characters (alignment columns) in the sequence
    ///
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.name, self.sequence)
    }
}
