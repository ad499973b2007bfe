use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{ReportError, Result};


/// Delimiters tried by [`load_delimited`], in order.
pub const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];


/// A delimited file as read from disk: free-form headers and string cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub path: PathBuf,
    pub delimiter: u8,
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}


impl RawTable {
    /// Cell of `row` at `column`, empty when the record is short.
    pub fn cell<'a>(&'a self, row: &'a StringRecord, column: usize) -> &'a str {
        row.get(column).unwrap_or("")
    }
    
    /// Stem of the source file name (`out/dijkstra.csv` -> `dijkstra`).
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}


/// Load `path`, sniffing the delimiter among [`CANDIDATE_DELIMITERS`].
///
/// The first delimiter that parses every record without error and yields
/// at least two columns wins. A file that stays single-column under every
/// candidate is rejected rather than guessed further.
pub fn load_delimited(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;
    
    for delimiter in CANDIDATE_DELIMITERS {
        match parse_with(&bytes, delimiter) {
            Ok((headers, rows)) if headers.len() >= 2 => {
                debug!(
                    "{}: delimiter {:?}, {} columns, {} rows",
                    path.display(),
                    delimiter as char,
                    headers.len(),
                    rows.len()
                );
                return Ok(RawTable {
                    path: path.to_path_buf(),
                    delimiter,
                    headers,
                    rows,
                });
            }
            Ok((headers, _)) => {
                debug!("delimiter {:?}: only {} column(s)", delimiter as char, headers.len());
            }
            Err(e) => {
                debug!("delimiter {:?}: {e}", delimiter as char);
            }
        }
    }
    
    Err(ReportError::UndetectedDelimiter {
        path: path.to_path_buf(),
    })
}


/// Records shorter than the header are kept (missing cells read as empty);
/// a record longer than the header rejects the delimiter.
fn parse_with(bytes: &[u8], delimiter: u8) -> Result<(Vec<String>, Vec<StringRecord>), String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(bytes);
    
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        if record.len() > headers.len() {
            return Err(format!(
                "record {} has {} fields, header has {}",
                rows.len() + 1,
                record.len(),
                headers.len()
            ));
        }
        rows.push(record);
    }
    Ok((headers, rows))
}


/// Lenient numeric coercion: trims, accepts a decimal comma when no dot is
/// present, and treats anything non-finite as missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let value = match raw.parse::<f64>() {
        Ok(v) => v,
        Err(_) if raw.contains(',') && !raw.contains('.') => {
            raw.replace(',', ".").parse::<f64>().ok()?
        }
        Err(_) => return None,
    };
    value.is_finite().then_some(value)
}
