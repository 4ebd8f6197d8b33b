//! Tandem-repeat candidate aggregation.
//!
//! Repeat finders drop one `.candidate` file per analysed sequence chunk;
//! this module pools the (chromosome, start, end) triples from all of them
//! into a per-chromosome mapping. Sources sit behind the [`IntervalSource`]
//! trait so a failing file can be reported and skipped without aborting the
//! whole aggregation.

use std::collections::HashMap;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use cetra_core::models::GenomicInterval;
use cetra_core::utils::get_dynamic_reader;

use crate::errors::CandidateError;

/// File extension recognised by [`discover_candidate_files`].
pub const CANDIDATE_EXTENSION: &str = "candidate";

/// A source of repeat-candidate intervals that can fail independently of its
/// siblings.
pub trait IntervalSource {
    /// Human-readable name used in warnings.
    fn label(&self) -> String;

    /// Read every (chromosome, start, end) triple this source holds.
    fn read_intervals(&self) -> Result<Vec<GenomicInterval>, CandidateError>;
}

/// One whitespace-delimited repeat-candidate file.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    path: PathBuf,
}

impl CandidateFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CandidateFile { path: path.into() }
    }
}

impl IntervalSource for CandidateFile {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    /// Parse the file. Comment (`#`), blank, and indented continuation lines
    /// are skipped. A data record needs at least six whitespace-separated
    /// fields, of which the first three are chromosome, 1-based start, and
    /// 1-based end; shorter records are ignored. A record with unparseable
    /// coordinates fails the whole file so the caller can skip it.
    fn read_intervals(&self) -> Result<Vec<GenomicInterval>, CandidateError> {
        let reader = get_dynamic_reader(&self.path)
            .map_err(|e| CandidateError::FileRead(e.to_string()))?;

        let mut intervals: Vec<GenomicInterval> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.starts_with('#')
                || line.trim().is_empty()
                || line.starts_with(char::is_whitespace)
            {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 6 {
                continue;
            }

            let start = fields[1]
                .parse::<u32>()
                .map_err(|_| CandidateError::RecordParse(line.clone()))?;
            let end = fields[2]
                .parse::<u32>()
                .map_err(|_| CandidateError::RecordParse(line.clone()))?;

            intervals.push(GenomicInterval {
                chr: fields[0].to_string(),
                start,
                end,
            });
        }

        Ok(intervals)
    }
}

/// Find every `*.candidate` file directly inside `dir`, sorted by name so a
/// given directory always yields the same aggregation input. A missing
/// directory yields an empty list, matching the original glob semantics.
pub fn discover_candidate_files(dir: &Path) -> Result<Vec<CandidateFile>, CandidateError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(CANDIDATE_EXTENSION)
        })
        .collect();
    paths.sort();

    Ok(paths.into_iter().map(CandidateFile::new).collect())
}

/// Pool intervals from all sources into one per-chromosome mapping.
///
/// No deduplication and no ordering guarantee within a chromosome. A source
/// that fails to read is reported on stderr and skipped; aggregation never
/// aborts because one file is bad. No sources at all means an empty mapping
/// and, downstream, no tandem repeat support for any chromosome.
pub fn aggregate_tr_intervals<S: IntervalSource>(
    sources: &[S],
) -> HashMap<String, Vec<GenomicInterval>> {
    let mut tr_intervals: HashMap<String, Vec<GenomicInterval>> = HashMap::new();

    for source in sources {
        match source.read_intervals() {
            Ok(intervals) => {
                for interval in intervals {
                    tr_intervals
                        .entry(interval.chr.clone())
                        .or_default()
                        .push(interval);
                }
            }
            Err(e) => {
                eprintln!("Warning: could not process {}: {}", source.label(), e);
            }
        }
    }

    tr_intervals
}
