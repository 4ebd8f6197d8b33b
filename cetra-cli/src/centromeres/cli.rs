use clap::{Command, arg};

pub const CENTROMERES_CMD: &str = "centromeres";

pub fn create_centromeres_cli() -> Command {
    Command::new(CENTROMERES_CMD)
        .about("Locate centromere candidates from gene density and tandem repeat evidence.")
        .arg(
            arg!(--karyotype <KARYOTYPE>)
                .required(true)
                .help("Path to the chromosome length table (Chr/Start/End)"),
        )
        .arg(
            arg!(--gff <GFF>)
                .required(true)
                .help("Path to the GFF3 (or GFF3.gz) genome annotation"),
        )
        .arg(
            arg!(--candidates <DIR>)
                .required(true)
                .help("Directory holding the repeat finder *.candidate files"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Output path for the centromere summary table"),
        )
        .arg(
            arg!(--"window-size" <BASES>)
                .required(false)
                .default_value("100000")
                .help("Window size for gene density binning, in bases"),
        )
        .arg(
            arg!(--json <JSON>)
                .required(false)
                .help("Also write the resolved candidates as JSON to this path"),
        )
}
