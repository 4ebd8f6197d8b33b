use std::fmt::{self, Display};

///
/// GenomicInterval struct, representation of one interval on a chromosome.
///
/// Coordinates are 1-based and inclusive on both ends, matching the GFF and
/// repeat-candidate table conventions.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GenomicInterval {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl GenomicInterval {
    pub fn new(chr: &str, start: u32, end: u32) -> Self {
        GenomicInterval {
            chr: chr.to_string(),
            start,
            end,
        }
    }

    ///
    /// Get nucleotide span of the interval
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Overlap test used throughout centromere resolution.
    ///
    /// Both far ends are treated as exclusive (`self.start < other.end &&
    /// other.start < self.end`) even though the coordinates themselves are
    /// inclusive, so two intervals that only share a boundary coordinate do
    /// NOT overlap. This exact convention must be kept for coordinate
    /// compatibility with the repeat-finder output.
    pub fn intersects(&self, other: &GenomicInterval) -> bool {
        self.chr == other.chr && self.start < other.end && other.start < self.end
    }

    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(100, 200, 300, 400, false)]
    #[case(100, 200, 200, 300, false)] // equal boundary is not overlap
    #[case(100, 201, 200, 300, true)] // one base past the boundary is
    #[case(250, 260, 200, 300, true)] // containment
    #[case(150, 350, 200, 300, true)] // spanning
    fn test_intersects(
        #[case] a_start: u32,
        #[case] a_end: u32,
        #[case] b_start: u32,
        #[case] b_end: u32,
        #[case] expected: bool,
    ) {
        let a = GenomicInterval::new("chr1", a_start, a_end);
        let b = GenomicInterval::new("chr1", b_start, b_end);
        assert_eq!(a.intersects(&b), expected);
        assert_eq!(b.intersects(&a), expected);
    }

    #[rstest]
    fn test_intersects_requires_same_chromosome() {
        let a = GenomicInterval::new("chr1", 100, 200);
        let b = GenomicInterval::new("chr2", 100, 200);
        assert!(!a.intersects(&b));
    }

    #[rstest]
    fn test_width_and_display() {
        let interval = GenomicInterval::new("chr3", 350_000, 650_000);
        assert_eq!(interval.width(), 300_000);
        assert_eq!(interval.to_string(), "chr3\t350000\t650000");
    }
}
