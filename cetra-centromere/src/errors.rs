use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Can't read annotation file: {0}")]
    FileRead(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DensityError {
    #[error("Window size must be greater than zero")]
    InvalidWindowSize,
}

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("Can't read candidate file: {0}")]
    FileRead(String),

    #[error("Error parsing candidate record: {0}")]
    RecordParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Can't read centromere summary file: {0}")]
    FileRead(String),

    #[error("Centromere summary is missing its 'Chr  CE_start  CE_end' header, found: {0:?}")]
    MissingHeader(String),

    #[error("Error parsing centromere summary record: {0}")]
    RecordParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
