use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use cetra_karyotype::find_gaps;
use cetra_karyotype::labels::write_label_table_to_path;

pub fn run_gaps(matches: &ArgMatches) -> Result<()> {
    let fasta_path = matches
        .get_one::<String>("fasta")
        .expect("--fasta is required");
    let output_path = matches
        .get_one::<String>("output")
        .expect("--output is required");
    let min_gap_len = matches
        .get_one::<String>("min-gap-len")
        .expect("--min-gap-len has a default")
        .parse::<u32>()
        .context("Minimum gap length must be a positive integer")?;

    let gaps = find_gaps(Path::new(fasta_path), min_gap_len)
        .with_context(|| format!("Failed to scan genome FASTA for gaps: {}", fasta_path))?;

    write_label_table_to_path(&gaps, Path::new(output_path))
        .with_context(|| format!("Failed to write gap table: {}", output_path))?;

    eprintln!("{} gap labels written to {}", gaps.len(), output_path);

    Ok(())
}
