use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastaScanError {
    #[error("Can't read FASTA file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
