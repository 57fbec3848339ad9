pub mod sample_sequences;
pub mod sequence;
pub mod sequence_set;
pub mod site;

// re-export for cleaner imports
pub use self::sample_sequences::SampleSequences;
pub use self::sequence::SequenceRecord;
pub use self::sequence_set::SequenceSet;
pub use self::site::BiallelicSite;
