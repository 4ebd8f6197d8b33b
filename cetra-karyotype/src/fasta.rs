//! Karyotype construction from a genome FASTA.

use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use cetra_core::models::{ChromosomeRecord, Karyotype};

use crate::errors::FastaScanError;

/// Build the per-chromosome length table from a genome FASTA file.
///
/// The chromosome name is the record id (the first whitespace-delimited
/// token of the header line); the length is the raw sequence length. Record
/// order is preserved so downstream tables keep the assembly's chromosome
/// order.
pub fn karyotype_from_fasta(path: &Path) -> Result<Karyotype, FastaScanError> {
    let file = File::open(path).map_err(|source| FastaScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = fasta::Reader::new(file);

    let mut chromosomes: Vec<ChromosomeRecord> = Vec::new();
    for record in reader.records() {
        let record = record?;
        chromosomes.push(ChromosomeRecord {
            name: record.id().to_string(),
            length: record.seq().len() as u32,
        });
    }

    Ok(Karyotype::new(chromosomes))
}
