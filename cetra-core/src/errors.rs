use thiserror::Error;

#[derive(Error, Debug)]
pub enum KaryotypeError {
    #[error("Can't read karyotype file: {0}")]
    FileRead(String),

    #[error("Karyotype file is missing its 'Chr  Start  End' header, found: {0:?}")]
    MissingHeader(String),

    #[error("Error parsing karyotype record: {0}")]
    RecordParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
