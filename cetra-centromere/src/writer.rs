//! Centromere summary table serialization.
//!
//! The summary is a three-column TSV. The header is always written, so a run
//! with no centromere calls still produces a well-formed (empty) table
//! rather than a missing file.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use cetra_core::utils::get_dynamic_reader;

use crate::errors::SummaryError;
use crate::resolver::CentromereCandidate;

/// Header of the centromere summary table.
pub const SUMMARY_HEADER: &str = "Chr\tCE_start\tCE_end";

pub fn write_centromere_table<W: Write>(
    candidates: &[CentromereCandidate],
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "{}", SUMMARY_HEADER)?;
    for candidate in candidates {
        writeln!(
            writer,
            "{}\t{}\t{}",
            candidate.chr, candidate.start, candidate.end
        )?;
    }
    Ok(())
}

pub fn write_centromere_table_to_path(
    candidates: &[CentromereCandidate],
    path: &Path,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_centromere_table(candidates, &mut writer)?;
    writer.flush()
}

/// Read a centromere summary table back, as written by
/// [`write_centromere_table`]. An empty-but-headered table parses to an
/// empty list.
pub fn read_centromere_table(path: &Path) -> Result<Vec<CentromereCandidate>, SummaryError> {
    let reader = get_dynamic_reader(path).map_err(|e| SummaryError::FileRead(e.to_string()))?;

    let mut candidates: Vec<CentromereCandidate> = Vec::new();
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            let header = header?;
            if header.trim_end() != SUMMARY_HEADER {
                return Err(SummaryError::MissingHeader(header));
            }
        }
        None => return Err(SummaryError::MissingHeader(String::new())),
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(SummaryError::RecordParse(line));
        }

        let start = fields[1]
            .parse::<u32>()
            .map_err(|_| SummaryError::RecordParse(line.clone()))?;
        let end = fields[2]
            .parse::<u32>()
            .map_err(|_| SummaryError::RecordParse(line.clone()))?;

        candidates.push(CentromereCandidate {
            chr: fields[0].to_string(),
            start,
            end,
        });
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    #[rstest]
    fn test_empty_result_is_header_only() {
        let mut out: Vec<u8> = Vec::new();
        write_centromere_table(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Chr\tCE_start\tCE_end\n");
    }

    #[rstest]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("centromeres.txt");

        let candidates = vec![
            CentromereCandidate {
                chr: "chr1".to_string(),
                start: 350_000,
                end: 650_000,
            },
            CentromereCandidate {
                chr: "chr3".to_string(),
                start: 10_000,
                end: 90_000,
            },
        ];

        write_centromere_table_to_path(&candidates, &path).unwrap();
        let reloaded = read_centromere_table(&path).unwrap();

        assert_eq!(reloaded, candidates);
    }

    #[rstest]
    fn test_empty_table_reads_back_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("centromeres.txt");

        write_centromere_table_to_path(&[], &path).unwrap();
        assert_eq!(read_centromere_table(&path).unwrap(), vec![]);
    }

    #[rstest]
    fn test_wrong_header_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.txt");
        std::fs::write(&path, "Chr\tStart\tEnd\nchr1\t0\t100\n").unwrap();

        assert!(matches!(
            read_centromere_table(&path),
            Err(SummaryError::MissingHeader(_))
        ));
    }
}
