use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use cetra_karyotype::karyotype_from_fasta;

pub fn run_karyotype(matches: &ArgMatches) -> Result<()> {
    let fasta_path = matches
        .get_one::<String>("fasta")
        .expect("--fasta is required");
    let output_path = matches
        .get_one::<String>("output")
        .expect("--output is required");

    let karyotype = karyotype_from_fasta(Path::new(fasta_path))
        .with_context(|| format!("Failed to read genome FASTA: {}", fasta_path))?;

    karyotype
        .write_to_path(Path::new(output_path))
        .with_context(|| format!("Failed to write karyotype table: {}", output_path))?;

    eprintln!(
        "Karyotype table for {} chromosomes written to {}",
        karyotype.len(),
        output_path
    );

    Ok(())
}
