use std::path::PathBuf;
use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    /// Bad invocation (wrong argument count, unknown flag)
    #[error("{0}")]
    Usage(String),

    #[error("The file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ReportError::Io(io),
            _ => ReportError::Parse(message),
        }
    }
}
