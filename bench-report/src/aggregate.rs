//! Grouping of normalized rows into per-group samples and statistics.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::warn;

use crate::graph::Measurement;
use crate::representation::Representation;
use crate::stats::Summary;


/// Collect values per key, keys in sorted order.
pub fn group_values<K, I>(pairs: I) -> BTreeMap<K, Vec<f64>>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    groups
}


/// LA and MA samples of one algorithm at one vertex count.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub algorithm: String,
    pub size: u64,
    pub list: Vec<f64>,
    pub matrix: Vec<f64>,
}


/// Pair LA and MA runs per (algorithm, size).
///
/// Groups lacking one of the two representations are skipped with a
/// warning; partial data yields partial output.
pub fn compare_representations(measurements: &[Measurement]) -> Vec<Comparison> {
    let algorithms: BTreeSet<&str> = measurements.iter().map(|m| m.algorithm.as_str()).collect();
    let mut comparisons = Vec::new();
    
    for algorithm in algorithms {
        let runs: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.algorithm == algorithm)
            .collect();
        let sizes: BTreeSet<u64> = runs.iter().map(|m| m.size).collect();
        
        for size in sizes {
            let mut list = Vec::new();
            let mut matrix = Vec::new();
            for m in runs.iter().filter(|m| m.size == size) {
                match m.representation {
                    Some(Representation::List) => list.push(m.duration_ms),
                    Some(Representation::Matrix) => matrix.push(m.duration_ms),
                    _ => {}
                }
            }
            
            if list.is_empty() || matrix.is_empty() {
                warn!("{algorithm} (V={size}): missing LA or MA data, boxplot skipped");
                continue;
            }
            comparisons.push(Comparison {
                algorithm: algorithm.to_string(),
                size,
                list,
                matrix,
            });
        }
    }
    
    comparisons
}


/// One line of the summary statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub algorithm: String,
    pub representation: String,
    pub size: u64,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub count: usize,
}


/// Descriptive statistics per (algorithm, representation, size).
///
/// Measurements without a representation are left out.
pub fn summarize(measurements: &[Measurement]) -> Vec<SummaryRow> {
    let groups = group_values(measurements.iter().filter_map(|m| {
        let rep = m.representation.clone()?;
        Some(((m.algorithm.clone(), rep, m.size), m.duration_ms))
    }));
    
    groups
        .into_iter()
        .filter_map(|((algorithm, representation, size), samples)| {
            let summary = Summary::from_samples(&samples)?;
            Some(SummaryRow {
                algorithm,
                representation: representation.to_string(),
                size,
                mean: summary.mean,
                median: summary.median,
                p95: summary.p95,
                count: summary.count,
            })
        })
        .collect()
}
