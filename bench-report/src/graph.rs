//! Graph-algorithm runs: LA vs MA per vertex count.

use tracing::{debug, info};

use crate::aggregate::Comparison;
use crate::columns::{self, require_column, resolve_column, Presence};
use crate::error::{ReportError, Result};
use crate::loader::{parse_number, RawTable};
use crate::render::{Chart, ChartStyle};
use crate::representation::Representation;
use crate::size::extract_size;


/// One benchmark run after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub algorithm: String,
    /// `None` when the source file had no representation column.
    pub representation: Option<Representation>,
    pub source_file: String,
    pub size: u64,
    pub duration_ms: f64,
}


/// Algorithm name implied by a results file stem.
///
/// A trailing alphabetic representation tag is dropped, so `dijkstra_la`
/// and `dijkstra-MA` both name `dijkstra`.
pub fn algorithm_name(stem: &str) -> String {
    if let Some((head, tag)) = stem.rsplit_once(['_', '-']) {
        let tagged = !head.is_empty()
            && tag.chars().all(|c| c.is_ascii_alphabetic())
            && Representation::normalize(tag).is_canonical();
        if tagged {
            return head.to_string();
        }
    }
    stem.to_string()
}


/// Build measurements from one results file.
///
/// Rows without a parseable duration or a vertex count in the graph file
/// name are dropped.
pub fn standardize(table: &RawTable, algorithm: &str) -> Result<Vec<Measurement>> {
    let source = require_column(&table.headers, columns::SOURCE_FILE)?;
    let rep = resolve_column(&table.headers, columns::REPRESENTATION, Presence::Optional)?;
    let duration = require_column(&table.headers, columns::DURATION)?;
    
    let measurements: Vec<Measurement> = table
        .rows
        .iter()
        .filter_map(|row| {
            let source_file = table.cell(row, source.index).trim().to_string();
            let size = extract_size(&source_file)?;
            let duration_ms = parse_number(table.cell(row, duration.index))?;
            Some(Measurement {
                algorithm: algorithm.to_string(),
                representation: rep
                    .as_ref()
                    .map(|col| Representation::normalize(table.cell(row, col.index))),
                source_file,
                size,
                duration_ms,
            })
        })
        .collect();
    
    debug!(
        "{}: kept {} of {} rows",
        table.path.display(),
        measurements.len(),
        table.rows.len()
    );
    Ok(measurements)
}


/// Concatenate separately recorded LA and MA runs.
///
/// A side whose representation is entirely absent is assumed to be LA for
/// `list` and MA for `matrix`.
pub fn merge_list_and_matrix(
    mut list: Vec<Measurement>,
    mut matrix: Vec<Measurement>,
) -> Vec<Measurement> {
    default_representation(&mut list, Representation::List);
    default_representation(&mut matrix, Representation::Matrix);
    list.append(&mut matrix);
    list
}


fn default_representation(measurements: &mut [Measurement], rep: Representation) {
    if measurements.iter().all(|m| m.representation.is_none()) {
        for m in measurements.iter_mut() {
            m.representation = Some(rep.clone());
        }
    }
}


/// A combined LA+MA file must say which representation each run used.
pub fn require_representation(measurements: &[Measurement]) -> Result<()> {
    if measurements.iter().any(|m| m.representation.is_none()) {
        return Err(ReportError::MissingRepresentation);
    }
    Ok(())
}


/// Keep only LA and MA runs.
pub fn retain_canonical(mut measurements: Vec<Measurement>) -> Result<Vec<Measurement>> {
    let before = measurements.len();
    measurements.retain(|m| m.representation.as_ref().is_some_and(Representation::is_canonical));
    if measurements.is_empty() {
        return Err(ReportError::empty(
            "no rows with representation LA/MA after normalization",
        ));
    }
    info!("{} of {before} runs are LA/MA", measurements.len());
    Ok(measurements)
}


pub fn chart_file_name(cmp: &Comparison) -> String {
    format!("{}_V{}_LA_vs_MA_boxplot.png", cmp.algorithm, cmp.size)
}


pub fn comparison_chart(cmp: &Comparison) -> (Chart, ChartStyle) {
    let chart = Chart::Distribution(vec![
        (Representation::List.to_string(), cmp.list.clone()),
        (Representation::Matrix.to_string(), cmp.matrix.clone()),
    ]);
    let style = ChartStyle {
        title: format!("{} - LA vs MA (V={})", cmp.algorithm.to_uppercase(), cmp.size),
        show_outliers: false,
        ..Default::default()
    };
    (chart, style)
}
