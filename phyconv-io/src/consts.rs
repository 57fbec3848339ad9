/// Minimum width of the taxon column in a NEXUS matrix.
pub const NEXUS_TAXON_WIDTH: usize = 30;

pub const FASTA_EXT: &str = "fasta";
pub const PHYLIP_EXT: &str = "phy";
