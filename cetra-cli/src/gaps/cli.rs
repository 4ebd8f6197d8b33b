use clap::{Command, arg};

pub const GAPS_CMD: &str = "gaps";

pub fn create_gaps_cli() -> Command {
    Command::new(GAPS_CMD)
        .about("Report assembly gaps (runs of N) as ideogram labels.")
        .arg(
            arg!(--fasta <FASTA>)
                .required(true)
                .help("Path to the genome FASTA file"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Output path for the gap label table"),
        )
        .arg(
            arg!(--"min-gap-len" <BASES>)
                .required(false)
                .default_value("10")
                .help("Minimum N run length to report as a gap"),
        )
}
