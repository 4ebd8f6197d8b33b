use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use cetra_centromere::writer::read_centromere_table;
use cetra_core::models::Karyotype;
use cetra_karyotype::merge::write_merged_table_to_path;
use cetra_karyotype::merge_karyotype;

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let karyotype_path = matches
        .get_one::<String>("karyotype")
        .expect("--karyotype is required");
    let centromeres_path = matches
        .get_one::<String>("centromeres")
        .expect("--centromeres is required");
    let output_path = matches
        .get_one::<String>("output")
        .expect("--output is required");

    let karyotype = Karyotype::try_from(Path::new(karyotype_path))
        .with_context(|| format!("Failed to read karyotype table: {}", karyotype_path))?;

    let centromeres = read_centromere_table(Path::new(centromeres_path))
        .with_context(|| format!("Failed to read centromere table: {}", centromeres_path))?;

    let rows = merge_karyotype(&karyotype, &centromeres);

    write_merged_table_to_path(&rows, Path::new(output_path))
        .with_context(|| format!("Failed to write merged table: {}", output_path))?;

    eprintln!("{} merged rows written to {}", rows.len(), output_path);

    Ok(())
}
