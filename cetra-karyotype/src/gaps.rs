//! Assembly gap detection.
//!
//! Gaps are the stretches of `N` placeholder bases an assembler leaves
//! between contigs within a scaffold.

use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use crate::errors::FastaScanError;
use crate::labels::{BOX_SHAPE, GAP_COLOR, IdeogramLabel};

/// Minimum run of `N`s considered an assembly gap.
pub const DEFAULT_MIN_GAP_LEN: u32 = 10;

/// Find every run of at least `min_gap_len` consecutive `N` (or `n`) bases.
///
/// Coordinates are 1-based inclusive. A `min_gap_len` of zero is treated
/// as one.
pub fn find_gaps(path: &Path, min_gap_len: u32) -> Result<Vec<IdeogramLabel>, FastaScanError> {
    let file = File::open(path).map_err(|source| FastaScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = fasta::Reader::new(file);
    let min_gap_len = min_gap_len.max(1) as usize;

    let mut labels: Vec<IdeogramLabel> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let seq = record.seq();

        let mut i = 0usize;
        while i < seq.len() {
            if seq[i].eq_ignore_ascii_case(&b'N') {
                let run_start = i;
                while i < seq.len() && seq[i].eq_ignore_ascii_case(&b'N') {
                    i += 1;
                }
                if i - run_start >= min_gap_len {
                    labels.push(IdeogramLabel {
                        label: "Gap",
                        shape: BOX_SHAPE,
                        chr: record.id().to_string(),
                        start: run_start as u32 + 1,
                        end: i as u32,
                        color: GAP_COLOR,
                    });
                }
            } else {
                i += 1;
            }
        }
    }

    Ok(labels)
}
