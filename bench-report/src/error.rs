use std::io;
use std::path::PathBuf;


pub type Result<T, E = ReportError> = core::result::Result<T, E>;


#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("cannot access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    /// None of the candidate delimiters produced a table with two or more columns.
    #[error("could not read {path:?}: check the delimiter (comma, semicolon or tab)")]
    UndetectedDelimiter { path: PathBuf },
    #[error("expected one of the columns {candidates:?}, found {found:?}")]
    MissingColumn {
        candidates: Vec<String>,
        found: Vec<String>,
    },
    #[error("no per-run duration nor mean column, found {found:?}")]
    NoMeasureColumn { found: Vec<String> },
    #[error("no data left: {0}")]
    EmptyDataset(String),
    #[error("combined CSV needs a representation column (LA/MA)")]
    MissingRepresentation,
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),
    #[error("no CSV file found in {0:?}")]
    NoCsvFiles(PathBuf),
    #[error("image export failed: {0}")]
    Export(String),
    #[error("nothing entered")]
    NothingEntered,
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
    pub fn empty(msg: impl Into<String>) -> Self {
        Self::EmptyDataset(msg.into())
    }
}
