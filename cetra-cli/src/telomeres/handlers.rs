use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;

use cetra_karyotype::labels::write_label_table_to_path;
use cetra_karyotype::{TeloType, find_telomeres};

pub fn run_telomeres(matches: &ArgMatches) -> Result<()> {
    let fasta_path = matches
        .get_one::<String>("fasta")
        .expect("--fasta is required");
    let output_path = matches
        .get_one::<String>("output")
        .expect("--output is required");
    let telo_type = matches
        .get_one::<String>("telo-type")
        .expect("--telo-type has a default")
        .parse::<TeloType>()
        .map_err(|e| anyhow!(e))?;
    let search_len = matches
        .get_one::<String>("search-len")
        .expect("--search-len has a default")
        .parse::<usize>()
        .context("Search length must be a positive integer")?;
    let min_repeats = matches
        .get_one::<String>("min-repeats")
        .expect("--min-repeats has a default")
        .parse::<usize>()
        .context("Minimum repeat count must be a positive integer")?;

    let telomeres = find_telomeres(Path::new(fasta_path), telo_type, search_len, min_repeats)
        .with_context(|| format!("Failed to scan genome FASTA for telomeres: {}", fasta_path))?;

    write_label_table_to_path(&telomeres, Path::new(output_path))
        .with_context(|| format!("Failed to write telomere table: {}", output_path))?;

    eprintln!(
        "{} telomere labels written to {}",
        telomeres.len(),
        output_path
    );

    Ok(())
}
