use clap::{Command, arg};

pub const MERGE_CMD: &str = "merge";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .about("Join centromere calls onto the karyotype for plotting.")
        .arg(
            arg!(--karyotype <KARYOTYPE>)
                .required(true)
                .help("Path to the chromosome length table (Chr/Start/End)"),
        )
        .arg(
            arg!(--centromeres <CENTROMERES>)
                .required(true)
                .help("Path to the centromere summary table (Chr/CE_start/CE_end)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Output path for the merged table"),
        )
}
