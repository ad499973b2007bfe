//! Per-algorithm overview of a single results file: a boxplot of the
//! individual runs, or a bar chart when only means were recorded.

use std::cmp::Ordering;

use tracing::info;

use crate::aggregate::group_values;
use crate::columns::{self, resolve_column, require_column, Presence};
use crate::error::{ReportError, Result};
use crate::loader::{parse_number, RawTable};
use crate::render::{Chart, ChartStyle};


/// Optional row filters, ignored when the file lacks the matching column.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Keep rows whose `n` column equals this input size.
    pub size: Option<u64>,
    /// Keep rows whose scenario matches, case-insensitively.
    pub scenario: Option<String>,
}


impl Filters {
    /// Suffix appended to chart titles, e.g. ` - n=1000 - random`.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if let Some(n) = self.size {
            out.push_str(&format!(" - n={n}"));
        }
        if let Some(scenario) = self.scenario.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(" - {scenario}"));
        }
        out
    }
}


pub fn plan_overview(table: &RawTable, filters: &Filters) -> Result<Chart> {
    let algorithm = require_column(&table.headers, columns::ALGORITHM)?;
    let size = resolve_column(&table.headers, columns::INPUT_SIZE, Presence::Optional)?;
    let scenario = resolve_column(&table.headers, columns::SCENARIO, Presence::Optional)?;
    
    let rows: Vec<_> = table
        .rows
        .iter()
        .filter(|row| match (filters.size, &size) {
            (Some(n), Some(col)) => parse_number(table.cell(row, col.index)) == Some(n as f64),
            _ => true,
        })
        .filter(|row| match (filters.scenario.as_deref(), &scenario) {
            (Some(wanted), Some(col)) => {
                table.cell(row, col.index).trim().to_lowercase() == wanted.to_lowercase()
            }
            _ => true,
        })
        .collect();
    if rows.is_empty() {
        return Err(ReportError::empty(format!(
            "no rows left after filters{}",
            filters.describe()
        )));
    }
    info!("{} rows selected from {}", rows.len(), table.path.display());
    
    if let Some(duration) = resolve_column(&table.headers, columns::DURATION, Presence::Optional)? {
        let groups = group_values(rows.iter().filter_map(|row| {
            let value = parse_number(table.cell(row, duration.index))?;
            Some((table.cell(row, algorithm.index).to_string(), value))
        }));
        if groups.is_empty() {
            return Err(ReportError::empty(format!(
                "no valid values in '{}' for a boxplot",
                duration.name
            )));
        }
        return Ok(Chart::Distribution(groups.into_iter().collect()));
    }
    
    if let Some(mean) = resolve_column(&table.headers, columns::MEAN, Presence::Optional)? {
        let groups = group_values(rows.iter().filter_map(|row| {
            let value = parse_number(table.cell(row, mean.index))?;
            Some((table.cell(row, algorithm.index).to_string(), value))
        }));
        let mut bars: Vec<(String, f64)> = groups
            .into_iter()
            .map(|(name, values)| (name, statistical::mean(&values)))
            .collect();
        if bars.is_empty() {
            return Err(ReportError::empty(format!("no valid values in '{}'", mean.name)));
        }
        bars.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        return Ok(Chart::Means(bars));
    }
    
    Err(ReportError::NoMeasureColumn {
        found: table.headers.clone(),
    })
}


/// Styling of the overview chart; `title` overrides the generated one.
pub fn overview_style(chart: &Chart, title: Option<&str>, filters: &Filters, log_scale: bool) -> ChartStyle {
    let (default_title, y_label, show_means) = match chart {
        Chart::Distribution(_) => ("Boxplot by algorithm", "Time (ms)", true),
        Chart::Means(_) => ("Mean by algorithm", "Mean (ms)", false),
    };
    
    ChartStyle {
        title: format!("{}{}", title.unwrap_or(default_title), filters.describe()),
        x_label: "Algorithm".to_string(),
        y_label: y_label.to_string(),
        log_scale,
        show_means,
        width: 1000,
        height: 600,
        ..Default::default()
    }
}


#[cfg(test)]
mod tests {
    use csv::StringRecord;
    
    use super::*;
    
    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            path: "results.csv".into(),
            delimiter: b',',
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(|r| StringRecord::from(r.to_vec())).collect(),
        }
    }
    
    #[test]
    fn runs_become_boxplot_groups() {
        let t = table(
            &["algoritmo", "tempo_ms"],
            &[&["quicksort", "12.3"], &["quicksort", "15.1"], &["mergesort", "9.0"]],
        );
        let chart = plan_overview(&t, &Filters::default()).unwrap();
        assert_eq!(
            chart,
            Chart::Distribution(vec![
                ("mergesort".into(), vec![9.0]),
                ("quicksort".into(), vec![12.3, 15.1]),
            ])
        );
    }
    
    #[test]
    fn non_numeric_durations_are_dropped() {
        let t = table(
            &["Algoritmo", "TEMPO_MS"],
            &[&["a", "1.0"], &["a", "oops"], &["b", ""], &["c", "2"]],
        );
        let chart = plan_overview(&t, &Filters::default()).unwrap();
        assert_eq!(
            chart,
            Chart::Distribution(vec![("a".into(), vec![1.0]), ("c".into(), vec![2.0])])
        );
    }
    
    #[test]
    fn means_only_become_sorted_bars() {
        let t = table(
            &["algoritmo", "media_ms"],
            &[&["a", "1.0"], &["b", "4.0"], &["b", "2.0"], &["c", "2.5"]],
        );
        let chart = plan_overview(&t, &Filters::default()).unwrap();
        assert_eq!(
            chart,
            Chart::Means(vec![("b".into(), 3.0), ("c".into(), 2.5), ("a".into(), 1.0)])
        );
    }
    
    #[test]
    fn filters_apply_only_when_column_exists() {
        let t = table(
            &["algoritmo", "n", "cenario", "tempo_ms"],
            &[
                &["a", "100", "Aleatorio", "1"],
                &["a", "200", "aleatorio", "2"],
                &["a", "100", "crescente", "3"],
            ],
        );
        let filters = Filters {
            size: Some(100),
            scenario: Some("aleatorio".into()),
        };
        let chart = plan_overview(&t, &filters).unwrap();
        assert_eq!(chart, Chart::Distribution(vec![("a".into(), vec![1.0])]));
        
        let bare = table(&["algoritmo", "tempo_ms"], &[&["a", "1"]]);
        assert!(plan_overview(&bare, &filters).is_ok());
    }
    
    #[test]
    fn empty_after_filter_is_an_error() {
        let t = table(&["algoritmo", "n", "tempo_ms"], &[&["a", "100", "1"]]);
        let filters = Filters {
            size: Some(5),
            ..Default::default()
        };
        assert!(matches!(
            plan_overview(&t, &filters),
            Err(ReportError::EmptyDataset(_))
        ));
    }
    
    #[test]
    fn missing_columns() {
        let t = table(&["algoritmo", "x"], &[&["a", "1"]]);
        assert!(matches!(
            plan_overview(&t, &Filters::default()),
            Err(ReportError::NoMeasureColumn { .. })
        ));
        let t = table(&["alg", "tempo_ms"], &[&["a", "1"]]);
        assert!(matches!(
            plan_overview(&t, &Filters::default()),
            Err(ReportError::MissingColumn { .. })
        ));
    }
    
    #[test]
    fn title_carries_filters() {
        let chart = Chart::Means(vec![("a".into(), 1.0)]);
        let filters = Filters {
            size: Some(1000),
            scenario: Some("random".into()),
        };
        let style = overview_style(&chart, None, &filters, true);
        assert_eq!(style.title, "Mean by algorithm - n=1000 - random");
        assert_eq!(style.y_label, "Mean (ms)");
        assert!(style.log_scale);
    }
}
