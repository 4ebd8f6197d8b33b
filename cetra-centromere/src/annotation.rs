//! GFF3 annotation reading for gene density analysis.
//!
//! Only `gene` rows matter here: the density analyzer bins genes by their
//! start coordinate, so everything beyond seqid/type/start/end is ignored.

use std::io::BufRead;
use std::path::Path;

use cetra_core::models::GenomicInterval;
use cetra_core::utils::get_dynamic_reader;

use crate::errors::AnnotationError;

/// Read the gene features from a GFF3 (or gzipped GFF3) annotation.
///
/// Comment lines (`#`) and blank lines are skipped, as are rows with fewer
/// than five tab-separated columns or a feature type other than `gene`.
/// GFF coordinates are 1-based inclusive; a gene row whose start is `0` or
/// whose coordinates fail to parse is skipped with a warning rather than
/// aborting the run. The file itself being unreadable is fatal.
pub fn read_gene_features(path: &Path) -> Result<Vec<GenomicInterval>, AnnotationError> {
    let reader =
        get_dynamic_reader(path).map_err(|e| AnnotationError::FileRead(e.to_string()))?;

    let mut genes: Vec<GenomicInterval> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 5 || fields[2] != "gene" {
            continue;
        }

        let (start, end) = match (fields[3].parse::<u32>(), fields[4].parse::<u32>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                eprintln!(
                    "Warning: skipping gene row with unparseable coordinates: {}",
                    line
                );
                continue;
            }
        };
        if start == 0 {
            eprintln!("Warning: skipping gene row with out-of-range start: {}", line);
            continue;
        }

        genes.push(GenomicInterval {
            chr: fields[0].to_string(),
            start,
            end,
        });
    }

    Ok(genes)
}
