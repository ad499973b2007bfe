use std::path::Path;

use cli_table::format::{Border, Separator};
use cli_table::Table;

use crate::aggregate::SummaryRow;
use crate::error::{ReportError, Result};
use crate::render::prepare_output;


pub const SUMMARY_HEADER: [&str; 7] = [
    "algorithm",
    "representation",
    "size",
    "mean",
    "median",
    "p95",
    "count",
];


/// Write the summary as a comma-separated file, overwriting `path`.
pub fn write_summary_csv(rows: &[SummaryRow], path: &Path) -> Result<()> {
    prepare_output(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(SUMMARY_HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| ReportError::io(path, e))?;
    Ok(())
}


/// Render the summary as a terminal table.
pub fn summary_table(rows: &[SummaryRow]) -> Result<String> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.algorithm.clone(),
                r.representation.clone(),
                r.size.to_string(),
                format!("{:.5}", r.mean),
                format!("{:.5}", r.median),
                format!("{:.5}", r.p95),
                r.count.to_string(),
            ]
        })
        .collect();
    
    let display = cells
        .table()
        .title(SUMMARY_HEADER.to_vec())
        .border(Border::builder().build())
        .separator(Separator::builder().build())
        .display()
        .map_err(|e| ReportError::io("stdout", e))?;
    Ok(display.to_string())
}
