//! Final karyotype assembly.
//!
//! Left-joins the centromere summary onto the chromosome length table to
//! produce the five-column karyotype consumed by ideogram plotting.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cetra_centromere::resolver::CentromereCandidate;
use cetra_core::models::Karyotype;

/// Header of the merged karyotype table.
pub const MERGED_HEADER: &str = "Chr\tStart\tEnd\tCE_start\tCE_end";

/// One row of the final karyotype: the chromosome extent plus the centromere
/// interval, if one was called.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MergedRow {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub ce_start: Option<u32>,
    pub ce_end: Option<u32>,
}

/// Left-join the centromere calls onto the karyotype.
///
/// Every chromosome appears exactly once, in karyotype order; chromosomes
/// without a call keep empty centromere cells.
pub fn merge_karyotype(
    karyotype: &Karyotype,
    centromeres: &[CentromereCandidate],
) -> Vec<MergedRow> {
    let by_chrom: HashMap<&str, &CentromereCandidate> =
        centromeres.iter().map(|c| (c.chr.as_str(), c)).collect();

    karyotype
        .iter()
        .map(|chrom| {
            let call = by_chrom.get(chrom.name.as_str());
            MergedRow {
                chr: chrom.name.clone(),
                start: 0,
                end: chrom.length,
                ce_start: call.map(|c| c.start),
                ce_end: call.map(|c| c.end),
            }
        })
        .collect()
}

pub fn write_merged_table<W: Write>(rows: &[MergedRow], writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{}", MERGED_HEADER)?;
    for row in rows {
        let ce_start = row.ce_start.map_or(String::new(), |v| v.to_string());
        let ce_end = row.ce_end.map_or(String::new(), |v| v.to_string());
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            row.chr, row.start, row.end, ce_start, ce_end
        )?;
    }
    Ok(())
}

pub fn write_merged_table_to_path(rows: &[MergedRow], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_merged_table(rows, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cetra_core::models::ChromosomeRecord;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_karyotype() -> Karyotype {
        Karyotype::new(vec![
            ChromosomeRecord {
                name: "chr1".to_string(),
                length: 1_000_000,
            },
            ChromosomeRecord {
                name: "chr2".to_string(),
                length: 800_000,
            },
        ])
    }

    #[rstest]
    fn test_left_join_keeps_every_chromosome() {
        let centromeres = vec![CentromereCandidate {
            chr: "chr2".to_string(),
            start: 300_000,
            end: 400_000,
        }];

        let rows = merge_karyotype(&make_karyotype(), &centromeres);

        assert_eq!(
            rows,
            vec![
                MergedRow {
                    chr: "chr1".to_string(),
                    start: 0,
                    end: 1_000_000,
                    ce_start: None,
                    ce_end: None,
                },
                MergedRow {
                    chr: "chr2".to_string(),
                    start: 0,
                    end: 800_000,
                    ce_start: Some(300_000),
                    ce_end: Some(400_000),
                },
            ]
        );
    }

    #[rstest]
    fn test_missing_calls_write_empty_cells() {
        let rows = merge_karyotype(&make_karyotype(), &[]);

        let mut out: Vec<u8> = Vec::new();
        write_merged_table(&rows, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Chr\tStart\tEnd\tCE_start\tCE_end\n\
             chr1\t0\t1000000\t\t\n\
             chr2\t0\t800000\t\t\n"
        );
    }

    #[rstest]
    fn test_calls_for_unknown_chromosomes_are_dropped() {
        let centromeres = vec![CentromereCandidate {
            chr: "chrZ".to_string(),
            start: 1,
            end: 2,
        }];

        let rows = merge_karyotype(&make_karyotype(), &centromeres);
        assert!(rows.iter().all(|r| r.ce_start.is_none()));
    }
}
