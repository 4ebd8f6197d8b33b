use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::KaryotypeError;
use crate::utils::get_dynamic_reader;

/// Header of the chromosome length table.
pub const KARYOTYPE_HEADER: &str = "Chr\tStart\tEnd";

/// One chromosome entry of the karyotype table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ChromosomeRecord {
    pub name: String,
    pub length: u32,
}

///
/// Karyotype struct, the ordered per-chromosome length table loaded from a
/// `Chr\tStart\tEnd` file (Start is always 0, End is the chromosome length).
///
/// Input order is preserved: every downstream table iterates chromosomes in
/// karyotype order so runs are reproducible.
///
#[derive(Debug, Clone, Default)]
pub struct Karyotype {
    pub chromosomes: Vec<ChromosomeRecord>,
}

impl Karyotype {
    pub fn new(chromosomes: Vec<ChromosomeRecord>) -> Self {
        Karyotype { chromosomes }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChromosomeRecord> {
        self.chromosomes.iter()
    }

    /// Length of the named chromosome, if present.
    pub fn length_of(&self, name: &str) -> Option<u32> {
        self.chromosomes
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.length)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", KARYOTYPE_HEADER)?;
        for chrom in &self.chromosomes {
            writeln!(writer, "{}\t0\t{}", chrom.name, chrom.length)?;
        }
        Ok(())
    }

    pub fn write_to_path(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

impl TryFrom<&Path> for Karyotype {
    type Error = KaryotypeError;

    ///
    /// Load a [Karyotype] from a chromosome length table on disk.
    ///
    /// The header row is required; records need at least three tab-separated
    /// fields (the Start column is carried for ideogram compatibility and is
    /// ignored on load).
    ///
    fn try_from(value: &Path) -> Result<Self, KaryotypeError> {
        let reader =
            get_dynamic_reader(value).map_err(|e| KaryotypeError::FileRead(e.to_string()))?;

        let mut chromosomes: Vec<ChromosomeRecord> = Vec::new();
        let mut lines = reader.lines();

        match lines.next() {
            Some(header) => {
                let header = header?;
                if !header.starts_with("Chr") {
                    return Err(KaryotypeError::MissingHeader(header));
                }
            }
            None => return Err(KaryotypeError::MissingHeader(String::new())),
        }

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(KaryotypeError::RecordParse(line));
            }

            let length = fields[2]
                .trim()
                .parse::<u32>()
                .map_err(|_| KaryotypeError::RecordParse(line.clone()))?;

            chromosomes.push(ChromosomeRecord {
                name: fields[0].to_string(),
                length,
            });
        }

        Ok(Karyotype { chromosomes })
    }
}

impl TryFrom<&str> for Karyotype {
    type Error = KaryotypeError;

    fn try_from(value: &str) -> Result<Self, KaryotypeError> {
        Karyotype::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for Karyotype {
    type Error = KaryotypeError;

    fn try_from(value: PathBuf) -> Result<Self, KaryotypeError> {
        Karyotype::try_from(value.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    fn write_table(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("karyotype.txt");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[rstest]
    fn test_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "Chr\tStart\tEnd\nchr2\t0\t2000\nchr1\t0\t1000\n");

        let karyotype = Karyotype::try_from(path.as_path()).unwrap();

        assert_eq!(karyotype.len(), 2);
        assert_eq!(karyotype.chromosomes[0].name, "chr2");
        assert_eq!(karyotype.chromosomes[0].length, 2000);
        assert_eq!(karyotype.length_of("chr1"), Some(1000));
        assert_eq!(karyotype.length_of("chrX"), None);
    }

    #[rstest]
    fn test_missing_header_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "chr1\t0\t1000\n");

        let result = Karyotype::try_from(path.as_path());
        assert!(matches!(result, Err(KaryotypeError::MissingHeader(_))));
    }

    #[rstest]
    fn test_bad_length_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "Chr\tStart\tEnd\nchr1\t0\tnot-a-number\n");

        let result = Karyotype::try_from(path.as_path());
        assert!(matches!(result, Err(KaryotypeError::RecordParse(_))));
    }

    #[rstest]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let result = Karyotype::try_from(path.as_path());
        assert!(matches!(result, Err(KaryotypeError::FileRead(_))));
    }

    #[rstest]
    fn test_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let karyotype = Karyotype::new(vec![
            ChromosomeRecord {
                name: "chr1".to_string(),
                length: 1_000_000,
            },
            ChromosomeRecord {
                name: "chr2".to_string(),
                length: 750_000,
            },
        ]);

        let path = dir.path().join("out.txt");
        karyotype.write_to_path(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Chr\tStart\tEnd\nchr1\t0\t1000000\nchr2\t0\t750000\n");

        let reloaded = Karyotype::try_from(path.as_path()).unwrap();
        assert_eq!(reloaded.chromosomes, karyotype.chromosomes);
    }
}
