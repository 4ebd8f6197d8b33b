use clap::{Command, arg};

pub const KARYOTYPE_CMD: &str = "karyotype";

pub fn create_karyotype_cli() -> Command {
    Command::new(KARYOTYPE_CMD)
        .about("Generate the chromosome length table from a genome FASTA file.")
        .arg(
            arg!(--fasta <FASTA>)
                .required(true)
                .help("Path to the genome FASTA file"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Output path for the karyotype table"),
        )
}
