//! # Core models and utilities for phyconv
//!
//! This crate holds the pieces shared by both conversion pipelines: the in-memory data model
//! (sequence records, biallelic sites and per-sample genotype sequences), the FASTA parser,
//! the error taxonomy and a couple of small file helpers (gzip-transparent readers and
//! write-then-rename output files).
//!
pub mod atomic;
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use atomic::AtomicFile;
pub use errors::{ConvertError, Result};
