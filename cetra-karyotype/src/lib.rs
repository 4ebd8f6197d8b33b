//! Single-pass FASTA scans around the centromere core: karyotype
//! construction, assembly gap detection, telomere detection, and the final
//! karyotype merge.
//!
//! Every scan reads the genome once through `bio::io::fasta` and emits a
//! small tab-separated table; none of them keeps more than one sequence in
//! memory at a time beyond what the FASTA reader buffers.

pub mod errors;
pub mod fasta;
pub mod gaps;
pub mod labels;
pub mod merge;
pub mod telomeres;

// re-exports
pub use fasta::karyotype_from_fasta;
pub use gaps::{DEFAULT_MIN_GAP_LEN, find_gaps};
pub use labels::IdeogramLabel;
pub use merge::{MergedRow, merge_karyotype, write_merged_table};
pub use telomeres::{DEFAULT_MIN_REPEATS, DEFAULT_SEARCH_LEN, TeloType, find_telomeres};
