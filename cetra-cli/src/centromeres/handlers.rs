use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use cetra_centromere::annotation::read_gene_features;
use cetra_centromere::writer::write_centromere_table_to_path;
use cetra_centromere::{aggregate_tr_intervals, discover_candidate_files};
use cetra_centromere::{compute_lgd_regions, resolve_centromeres};
use cetra_core::models::Karyotype;

pub fn run_centromeres(matches: &ArgMatches) -> Result<()> {
    let karyotype_path = matches
        .get_one::<String>("karyotype")
        .expect("--karyotype is required");
    let gff_path = matches.get_one::<String>("gff").expect("--gff is required");
    let candidates_dir = matches
        .get_one::<String>("candidates")
        .expect("--candidates is required");
    let output_path = matches
        .get_one::<String>("output")
        .expect("--output is required");
    let window_size = matches
        .get_one::<String>("window-size")
        .expect("--window-size has a default")
        .parse::<u32>()
        .context("Window size must be a positive integer")?;
    let json_path = matches.get_one::<String>("json");

    let karyotype = Karyotype::try_from(Path::new(karyotype_path))
        .with_context(|| format!("Failed to read karyotype table: {}", karyotype_path))?;

    let genes = read_gene_features(Path::new(gff_path))
        .with_context(|| format!("Failed to read gene annotation: {}", gff_path))?;
    eprintln!("Read {} gene features from {}", genes.len(), gff_path);

    let lgd_map = compute_lgd_regions(&karyotype, &genes, window_size)
        .context("Failed to compute low gene density regions")?;

    let candidate_files = discover_candidate_files(Path::new(candidates_dir))
        .with_context(|| format!("Failed to scan candidate directory: {}", candidates_dir))?;
    if candidate_files.is_empty() {
        eprintln!("Warning: no candidate files found under {}", candidates_dir);
    } else {
        eprintln!(
            "Aggregating tandem repeats from {} candidate files",
            candidate_files.len()
        );
    }
    let tr_map = aggregate_tr_intervals(&candidate_files);

    let centromeres = resolve_centromeres(&karyotype, &lgd_map, &tr_map);
    if centromeres.is_empty() {
        eprintln!("Warning: no centromere candidates were resolved");
    }

    write_centromere_table_to_path(&centromeres, Path::new(output_path))
        .with_context(|| format!("Failed to write centromere table: {}", output_path))?;

    if let Some(json_path) = json_path {
        let file = File::create(json_path)
            .with_context(|| format!("Failed to create JSON output: {}", json_path))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &centromeres)
            .with_context(|| format!("Failed to write JSON output: {}", json_path))?;
    }

    eprintln!(
        "Centromere candidates for {} of {} chromosomes written to {}",
        centromeres.len(),
        karyotype.len(),
        output_path
    );

    Ok(())
}
