//! Windowed gene density analysis.
//!
//! Splits each chromosome into fixed-size windows, counts genes per window,
//! and extracts the maximal runs of zero-count windows. These low gene
//! density regions are where a centromere can plausibly sit.

use std::collections::HashMap;

use cetra_core::models::{GenomicInterval, Karyotype};

use crate::errors::DensityError;

/// Default window size for gene density binning, in bases.
pub const DEFAULT_WINDOW_SIZE: u32 = 100_000;

/// Compute the low gene density regions for every chromosome in the karyotype.
///
/// Each chromosome is split into `ceil(length / window_size)` windows and
/// every gene is attributed to the window containing its start coordinate
/// (the end coordinate takes no part in binning). A gene whose start is
/// outside the 1-based coordinate space or past the last window is ignored.
/// A maximal run of windows with zero genes, from window `i0` through `i1`,
/// becomes the region `[i0*W + 1, (i1+1)*W]`; a run reaching the last
/// window is clamped to the chromosome length instead of the nominal window
/// boundary, which can exceed the true sequence length.
///
/// A chromosome with no genes in the annotation gets a single region
/// spanning `[1, length]` — expected for unannotated scaffolds, not an
/// error. Regions are emitted in increasing start order and never overlap.
/// The result is a fresh mapping; nothing is accumulated across chromosomes.
pub fn compute_lgd_regions(
    karyotype: &Karyotype,
    genes: &[GenomicInterval],
    window_size: u32,
) -> Result<HashMap<String, Vec<GenomicInterval>>, DensityError> {
    if window_size == 0 {
        return Err(DensityError::InvalidWindowSize);
    }

    let mut gene_starts: HashMap<&str, Vec<u32>> = HashMap::new();
    for gene in genes {
        gene_starts
            .entry(gene.chr.as_str())
            .or_default()
            .push(gene.start);
    }

    let mut lgd_regions: HashMap<String, Vec<GenomicInterval>> = HashMap::new();

    for chrom in karyotype.iter() {
        let n_windows = (chrom.length as u64).div_ceil(window_size as u64) as usize;
        let mut counts = vec![0u32; n_windows];

        if let Some(starts) = gene_starts.get(chrom.name.as_str()) {
            for &start in starts {
                // coordinates are 1-based; a zero start has no window
                if start == 0 {
                    continue;
                }
                let bin = ((start - 1) / window_size) as usize;
                if bin < counts.len() {
                    counts[bin] += 1;
                }
            }
        }

        let mut regions: Vec<GenomicInterval> = Vec::new();
        let mut run_start: Option<usize> = None;

        for (i, &count) in counts.iter().enumerate() {
            if count == 0 {
                run_start.get_or_insert(i);
            } else if let Some(i0) = run_start.take() {
                regions.push(window_run_interval(
                    &chrom.name,
                    i0,
                    i - 1,
                    window_size,
                    chrom.length,
                ));
            }
        }
        if let Some(i0) = run_start {
            regions.push(window_run_interval(
                &chrom.name,
                i0,
                n_windows - 1,
                window_size,
                chrom.length,
            ));
        }

        lgd_regions.insert(chrom.name.clone(), regions);
    }

    Ok(lgd_regions)
}

/// Convert a run of zero-count windows `[i0, i1]` to nucleotide coordinates.
fn window_run_interval(
    chr: &str,
    i0: usize,
    i1: usize,
    window_size: u32,
    chrom_length: u32,
) -> GenomicInterval {
    let start = i0 as u64 * window_size as u64 + 1;
    let end = ((i1 as u64 + 1) * window_size as u64).min(chrom_length as u64);
    GenomicInterval {
        chr: chr.to_string(),
        start: start as u32,
        end: end as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cetra_core::models::ChromosomeRecord;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_karyotype(chromosomes: Vec<(&str, u32)>) -> Karyotype {
        Karyotype::new(
            chromosomes
                .into_iter()
                .map(|(name, length)| ChromosomeRecord {
                    name: name.to_string(),
                    length,
                })
                .collect(),
        )
    }

    fn gene_at(chr: &str, start: u32) -> GenomicInterval {
        GenomicInterval::new(chr, start, start + 100)
    }

    #[rstest]
    fn test_uniform_coverage_yields_no_regions() {
        let karyotype = make_karyotype(vec![("chr1", 500_000)]);
        // one gene in every 100kb window
        let genes: Vec<GenomicInterval> = (0..5)
            .map(|i| gene_at("chr1", i * 100_000 + 50_000))
            .collect();

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(lgd["chr1"], vec![]);
    }

    #[rstest]
    fn test_no_genes_yields_whole_chromosome() {
        let karyotype = make_karyotype(vec![("chr1", 450_000)]);

        let lgd = compute_lgd_regions(&karyotype, &[], 100_000).unwrap();
        assert_eq!(lgd["chr1"], vec![GenomicInterval::new("chr1", 1, 450_000)]);
    }

    #[rstest]
    fn test_interior_run_uses_window_boundaries() {
        // genes in windows 0-2 and 7-9 of a 1Mb chromosome: the zero run is
        // windows 3-6, i.e. [300001, 700000]
        let karyotype = make_karyotype(vec![("chr1", 1_000_000)]);
        let mut genes: Vec<GenomicInterval> = Vec::new();
        for window in [0u32, 1, 2, 7, 8, 9] {
            genes.push(gene_at("chr1", window * 100_000 + 1));
        }

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(
            lgd["chr1"],
            vec![GenomicInterval::new("chr1", 300_001, 700_000)]
        );
    }

    #[rstest]
    fn test_trailing_run_is_clamped_to_chromosome_length() {
        // 350kb chromosome: windows 0-3, the last one only 50kb long. A gene
        // in window 0 leaves the zero run [100001, 350000], not 400000.
        let karyotype = make_karyotype(vec![("chr1", 350_000)]);
        let genes = vec![gene_at("chr1", 10)];

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(
            lgd["chr1"],
            vec![GenomicInterval::new("chr1", 100_001, 350_000)]
        );
    }

    #[rstest]
    fn test_regions_are_sorted_and_disjoint() {
        let karyotype = make_karyotype(vec![("chr1", 1_000_000)]);
        // genes in windows 2 and 6 split the chromosome into three zero runs
        let genes = vec![gene_at("chr1", 250_000), gene_at("chr1", 650_000)];

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        let regions = &lgd["chr1"];

        assert_eq!(
            *regions,
            vec![
                GenomicInterval::new("chr1", 1, 200_000),
                GenomicInterval::new("chr1", 300_001, 600_000),
                GenomicInterval::new("chr1", 700_001, 1_000_000),
            ]
        );
        for pair in regions.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[rstest]
    fn test_gene_attributed_to_start_window_only() {
        // a gene spanning a window boundary counts only where it starts
        let karyotype = make_karyotype(vec![("chr1", 300_000)]);
        let genes = vec![GenomicInterval::new("chr1", 95_000, 150_000)];

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(
            lgd["chr1"],
            vec![GenomicInterval::new("chr1", 100_001, 300_000)]
        );
    }

    #[rstest]
    fn test_zero_start_gene_is_ignored() {
        let karyotype = make_karyotype(vec![("chr1", 200_000)]);
        let genes = vec![GenomicInterval::new("chr1", 0, 100)];

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(lgd["chr1"], vec![GenomicInterval::new("chr1", 1, 200_000)]);
    }

    #[rstest]
    fn test_gene_past_chromosome_end_is_ignored() {
        let karyotype = make_karyotype(vec![("chr1", 200_000)]);
        let genes = vec![gene_at("chr1", 900_000)];

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(lgd["chr1"], vec![GenomicInterval::new("chr1", 1, 200_000)]);
    }

    #[rstest]
    fn test_genes_on_other_chromosomes_do_not_count() {
        let karyotype = make_karyotype(vec![("chr1", 200_000), ("chr2", 200_000)]);
        let genes = vec![gene_at("chr2", 50_000), gene_at("chr2", 150_000)];

        let lgd = compute_lgd_regions(&karyotype, &genes, 100_000).unwrap();
        assert_eq!(lgd["chr1"], vec![GenomicInterval::new("chr1", 1, 200_000)]);
        assert_eq!(lgd["chr2"], vec![]);
    }

    #[rstest]
    fn test_zero_window_size_is_an_error() {
        let karyotype = make_karyotype(vec![("chr1", 200_000)]);
        assert!(matches!(
            compute_lgd_regions(&karyotype, &[], 0),
            Err(DensityError::InvalidWindowSize)
        ));
    }

    #[rstest]
    fn test_zero_length_chromosome_has_no_regions() {
        let karyotype = make_karyotype(vec![("empty", 0)]);
        let lgd = compute_lgd_regions(&karyotype, &[], 100_000).unwrap();
        assert_eq!(lgd["empty"], vec![]);
    }
}
