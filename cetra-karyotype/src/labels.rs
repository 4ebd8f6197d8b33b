//! Ideogram label tables.
//!
//! Gaps and telomeres are reported as six-column label rows understood by
//! ideogram plotting tools: `Type, Shape, Chr, Start, End, color`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header of the label tables emitted for gaps and telomeres.
pub const LABEL_HEADER: &str = "Type\tShape\tChr\tStart\tEnd\tcolor";

pub const GAP_COLOR: &str = "e41a1c";
pub const TELOMERE_COLOR: &str = "377eb8";
pub const BOX_SHAPE: &str = "box";

/// One row of an ideogram label table (1-based inclusive coordinates).
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct IdeogramLabel {
    pub label: &'static str,
    pub shape: &'static str,
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub color: &'static str,
}

pub fn write_label_table<W: Write>(
    labels: &[IdeogramLabel],
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "{}", LABEL_HEADER)?;
    for label in labels {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            label.label, label.shape, label.chr, label.start, label.end, label.color
        )?;
    }
    Ok(())
}

pub fn write_label_table_to_path(labels: &[IdeogramLabel], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_label_table(labels, &mut writer)?;
    writer.flush()
}
