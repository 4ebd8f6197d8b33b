//! Telomere repeat detection at chromosome ends.
//!
//! A chromosome end is called telomeric when enough repeat monomers occur
//! within the search window at that end; the reported boundary is then
//! refined to the outermost monomer inside the first (or last) 2 kb.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use bio::io::fasta;

use crate::errors::FastaScanError;
use crate::labels::{BOX_SHAPE, IdeogramLabel, TELOMERE_COLOR};

/// How many bases from each chromosome end are searched for repeats.
pub const DEFAULT_SEARCH_LEN: usize = 10_000;
/// Minimum number of repeat monomers in the search window to call a telomere.
pub const DEFAULT_MIN_REPEATS: usize = 30;
/// Window at the extreme ends used to place the telomere boundary.
const BOUNDARY_LEN: usize = 2_000;

/// Telomeric repeat family to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeloType {
    Plant,
    Animal,
}

impl TeloType {
    /// Forward-strand monomer.
    pub fn forward_repeat(&self) -> &'static str {
        match self {
            TeloType::Plant => "TTTAGGG",
            TeloType::Animal => "TTAGGG",
        }
    }

    /// Reverse-complement monomer.
    pub fn reverse_repeat(&self) -> &'static str {
        match self {
            TeloType::Plant => "CCCTAAA",
            TeloType::Animal => "CCCTAA",
        }
    }
}

impl FromStr for TeloType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plant" => Ok(TeloType::Plant),
            "animal" => Ok(TeloType::Animal),
            other => Err(format!(
                "Invalid telomere type: {} (expected 'plant' or 'animal')",
                other
            )),
        }
    }
}

/// Find telomeric repeats at both ends of every sequence in the FASTA.
///
/// For the 5' end: forward and reverse monomers are counted within the
/// first `search_len` bases; if the sum reaches `min_repeats`, the label
/// runs from base 1 to the end of the last monomer within the first 2 kb.
/// The 3' end is handled symmetrically, with the boundary at the first
/// monomer within the last 2 kb. If the count threshold is met but no
/// monomer sits inside the boundary window, no label is emitted.
pub fn find_telomeres(
    path: &Path,
    telo_type: TeloType,
    search_len: usize,
    min_repeats: usize,
) -> Result<Vec<IdeogramLabel>, FastaScanError> {
    let file = File::open(path).map_err(|source| FastaScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = fasta::Reader::new(file);

    let fwd = telo_type.forward_repeat().as_bytes();
    let rev = telo_type.reverse_repeat().as_bytes();

    let mut labels: Vec<IdeogramLabel> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let seq = record.seq().to_ascii_uppercase();
        let seq_len = seq.len();

        // 5' end
        let head = &seq[..search_len.min(seq_len)];
        if count_monomers(head, fwd, rev) >= min_repeats {
            let boundary = &seq[..BOUNDARY_LEN.min(seq_len)];
            if let Some(end) = last_monomer_end(boundary, fwd, rev) {
                labels.push(IdeogramLabel {
                    label: "Telomere",
                    shape: BOX_SHAPE,
                    chr: record.id().to_string(),
                    start: 1,
                    end: end as u32,
                    color: TELOMERE_COLOR,
                });
            }
        }

        // 3' end
        let tail = &seq[seq_len.saturating_sub(search_len)..];
        if count_monomers(tail, fwd, rev) >= min_repeats {
            let boundary_offset = seq_len.saturating_sub(BOUNDARY_LEN);
            let boundary = &seq[boundary_offset..];
            if let Some(offset) = first_monomer_start(boundary, fwd, rev) {
                labels.push(IdeogramLabel {
                    label: "Telomere",
                    shape: BOX_SHAPE,
                    chr: record.id().to_string(),
                    start: (boundary_offset + offset) as u32 + 1,
                    end: seq_len as u32,
                    color: TELOMERE_COLOR,
                });
            }
        }
    }

    Ok(labels)
}

/// Non-overlapping monomer count over both strands.
fn count_monomers(window: &[u8], fwd: &[u8], rev: &[u8]) -> usize {
    count_motifs(window, fwd) + count_motifs(window, rev)
}

fn count_motifs(window: &[u8], motif: &[u8]) -> usize {
    let mut count = 0;
    let mut rest = window;
    while let Some(pos) = find_motif(rest, motif) {
        count += 1;
        rest = &rest[pos + motif.len()..];
    }
    count
}

fn find_motif(window: &[u8], motif: &[u8]) -> Option<usize> {
    window.windows(motif.len()).position(|w| w == motif)
}

fn rfind_motif(window: &[u8], motif: &[u8]) -> Option<usize> {
    window.windows(motif.len()).rposition(|w| w == motif)
}

/// End coordinate (1-based inclusive) of the last monomer occurrence.
fn last_monomer_end(window: &[u8], fwd: &[u8], rev: &[u8]) -> Option<usize> {
    let fwd_end = rfind_motif(window, fwd).map(|p| p + fwd.len());
    let rev_end = rfind_motif(window, rev).map(|p| p + rev.len());
    fwd_end.into_iter().chain(rev_end).max()
}

/// Start offset (0-based) of the first monomer occurrence.
fn first_monomer_start(window: &[u8], fwd: &[u8], rev: &[u8]) -> Option<usize> {
    let fwd_start = find_motif(window, fwd);
    let rev_start = find_motif(window, rev);
    fwd_start.into_iter().chain(rev_start).min()
}
