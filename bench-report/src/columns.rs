//! Case-insensitive lookup of logical fields among free-form header names.

use crate::error::{ReportError, Result};


pub const ALGORITHM: &[&str] = &["algoritmo", "algorithm", "algo"];
pub const REPRESENTATION: &[&str] = &["rep", "representacao", "repr", "representation"];
pub const SOURCE_FILE: &[&str] = &["arquivo", "file", "graph", "grafo"];
pub const DURATION: &[&str] = &["tempo_ms", "tempo", "ms", "time_ms", "duracao_ms", "duration_ms"];
pub const MEAN: &[&str] = &["media_ms", "mean_ms"];
pub const INPUT_SIZE: &[&str] = &["n"];
pub const SCENARIO: &[&str] = &["cenario", "scenario"];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub index: usize,
    pub name: String,
}


/// Return the header matching the first candidate that is present.
///
/// Candidates are tried in order; both sides are compared lowercased.
pub fn resolve_column(
    headers: &[String],
    candidates: &[&str],
    presence: Presence,
) -> Result<Option<ColumnRef>> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    
    for candidate in candidates {
        let candidate = candidate.to_lowercase();
        if let Some(index) = lowered.iter().position(|h| *h == candidate) {
            return Ok(Some(ColumnRef {
                index,
                name: headers[index].clone(),
            }));
        }
    }
    
    match presence {
        Presence::Optional => Ok(None),
        Presence::Required => Err(ReportError::MissingColumn {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            found: headers.to_vec(),
        }),
    }
}


/// [`resolve_column`] with [`Presence::Required`].
pub fn require_column(headers: &[String], candidates: &[&str]) -> Result<ColumnRef> {
    resolve_column(headers, candidates, Presence::Required)?.ok_or_else(|| {
        ReportError::MissingColumn {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            found: headers.to_vec(),
        }
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    
    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }
    
    #[test]
    fn matches_regardless_of_case() {
        let h = headers(&["Algoritmo", "TEMPO_MS"]);
        let col = require_column(&h, &["tempo_ms", "tempo"]).unwrap();
        assert_eq!(col, ColumnRef { index: 1, name: "TEMPO_MS".into() });
        
        let col = require_column(&h, &["TEMPO", "Tempo_Ms"]).unwrap();
        assert_eq!(col.name, "TEMPO_MS");
    }
    
    #[test]
    fn earlier_candidate_wins() {
        let h = headers(&["ms", "tempo_ms"]);
        let col = require_column(&h, DURATION).unwrap();
        assert_eq!(col.name, "tempo_ms");
    }
    
    #[test]
    fn optional_absent_is_none() {
        let h = headers(&["arquivo", "tempo_ms"]);
        assert_eq!(resolve_column(&h, REPRESENTATION, Presence::Optional).unwrap(), None);
    }
    
    #[test]
    fn required_absent_lists_what_was_found() {
        let h = headers(&["arquivo", "tempo_ms"]);
        match resolve_column(&h, ALGORITHM, Presence::Required) {
            Err(ReportError::MissingColumn { candidates, found }) => {
                assert_eq!(candidates[0], "algoritmo");
                assert_eq!(found, h);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
