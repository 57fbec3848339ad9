//! # Output writers for alignment data.
//!
//! Serializers for the two record sets phyconv builds: a validated [SequenceSet] is written
//! as a NEXUS DNA data block, and per-sample genotype sequences ([SampleSequences]) are
//! written as wrapped FASTA or relaxed PHYLIP. All file writers go through
//! [phyconv_core::AtomicFile], so a destination is either fully replaced or left alone.
//!
//! [SequenceSet]: phyconv_core::models::SequenceSet
//! [SampleSequences]: phyconv_core::models::SampleSequences
pub mod alignment;
pub mod consts;
pub mod nexus;

// re-expose core functions
pub use alignment::*;
pub use consts::*;
pub use nexus::*;
