use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;


static SIZE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)-").unwrap());


/// Vertex count embedded in a benchmark input name (`sample100-1980.gr` -> 100).
///
/// Only the last path component is searched, and only the first run of
/// digits followed by a dash counts. The number is not validated.
pub fn extract_size(file_name: &str) -> Option<u64> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let caps = SIZE_PREFIX.captures(base)?;
    caps[1].parse().ok()
}
