mod centromeres;
mod gaps;
mod karyotype;
mod merge;
mod telomeres;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "cetra";
    pub const BIN_NAME: &str = "cetra";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Karyotype and centromere annotation tools for assembled genomes.")
        .subcommand_required(true)
        .subcommand(karyotype::cli::create_karyotype_cli())
        .subcommand(centromeres::cli::create_centromeres_cli())
        .subcommand(gaps::cli::create_gaps_cli())
        .subcommand(telomeres::cli::create_telomeres_cli())
        .subcommand(merge::cli::create_merge_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // KARYOTYPE
        //
        Some((karyotype::cli::KARYOTYPE_CMD, matches)) => {
            karyotype::handlers::run_karyotype(matches)?;
        }

        //
        // CENTROMERES
        //
        Some((centromeres::cli::CENTROMERES_CMD, matches)) => {
            centromeres::handlers::run_centromeres(matches)?;
        }

        //
        // GAPS
        //
        Some((gaps::cli::GAPS_CMD, matches)) => {
            gaps::handlers::run_gaps(matches)?;
        }

        //
        // TELOMERES
        //
        Some((telomeres::cli::TELOMERES_CMD, matches)) => {
            telomeres::handlers::run_telomeres(matches)?;
        }

        //
        // MERGE
        //
        Some((merge::cli::MERGE_CMD, matches)) => {
            merge::handlers::run_merge(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
