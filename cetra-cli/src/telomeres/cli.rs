use clap::{Command, arg};

pub const TELOMERES_CMD: &str = "telomeres";

pub fn create_telomeres_cli() -> Command {
    Command::new(TELOMERES_CMD)
        .about("Report telomeric repeat tracts at chromosome ends as ideogram labels.")
        .arg(
            arg!(--fasta <FASTA>)
                .required(true)
                .help("Path to the genome FASTA file"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Output path for the telomere label table"),
        )
        .arg(
            arg!(--"telo-type" <TYPE>)
                .required(false)
                .default_value("plant")
                .help("Telomeric repeat family, 'plant' (TTTAGGG) or 'animal' (TTAGGG)"),
        )
        .arg(
            arg!(--"search-len" <BASES>)
                .required(false)
                .default_value("10000")
                .help("How far into each chromosome end to count monomers"),
        )
        .arg(
            arg!(--"min-repeats" <COUNT>)
                .required(false)
                .default_value("30")
                .help("Minimum monomer count for a chromosome end to be labelled"),
        )
}
