pub mod interval;
pub mod karyotype;

// re-export for cleaner imports
pub use self::interval::GenomicInterval;
pub use self::karyotype::{ChromosomeRecord, Karyotype};
