//! Centromere resolution.
//!
//! Intersects the low gene density regions with the pooled tandem repeat
//! intervals and keeps the single best-supported interval per chromosome.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cetra_core::models::{GenomicInterval, Karyotype};

/// The selected centromere interval for one chromosome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentromereCandidate {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

/// Pick at most one centromere candidate per chromosome.
///
/// Chromosomes are visited in karyotype order, so the output order is
/// reproducible. A chromosome missing from (or empty in) either map yields
/// nothing.
///
/// For each low gene density region `[Ls, Le]`, the tandem repeat intervals
/// that overlap it (strict `<`/`<` test, so touching boundaries do not
/// count) are merged by taking the minimum start and maximum end over the
/// whole overlapping subset. This is a min/max merge, not an interval union:
/// one span comes out even when the repeats themselves are disjoint. The
/// span is then clamped to the region: `max(min_start, Ls)` through
/// `min(max_end, Le)`.
///
/// The candidate with the strictly largest clamped span wins. Ties keep the
/// earliest region in scan order, and because the accumulator starts at
/// zero, a span that clamps to zero or below can never be selected.
pub fn resolve_centromeres(
    karyotype: &Karyotype,
    lgd_map: &HashMap<String, Vec<GenomicInterval>>,
    tr_map: &HashMap<String, Vec<GenomicInterval>>,
) -> Vec<CentromereCandidate> {
    let mut candidates: Vec<CentromereCandidate> = Vec::new();

    for chrom in karyotype.iter() {
        let (Some(lgd_regions), Some(tr_intervals)) =
            (lgd_map.get(&chrom.name), tr_map.get(&chrom.name))
        else {
            continue;
        };
        if lgd_regions.is_empty() || tr_intervals.is_empty() {
            continue;
        }

        let mut best: Option<CentromereCandidate> = None;
        let mut best_span: i64 = 0;

        for lgd in lgd_regions {
            let mut min_start = u32::MAX;
            let mut max_end = 0u32;
            let mut any_overlap = false;

            for tr in tr_intervals {
                if tr.intersects(lgd) {
                    any_overlap = true;
                    min_start = min_start.min(tr.start);
                    max_end = max_end.max(tr.end);
                }
            }
            if !any_overlap {
                continue;
            }

            let final_start = min_start.max(lgd.start);
            let final_end = max_end.min(lgd.end);
            let span = final_end as i64 - final_start as i64;

            if span > best_span {
                best_span = span;
                best = Some(CentromereCandidate {
                    chr: chrom.name.clone(),
                    start: final_start,
                    end: final_end,
                });
            }
        }

        if let Some(candidate) = best {
            candidates.push(candidate);
        }
    }

    candidates
}
