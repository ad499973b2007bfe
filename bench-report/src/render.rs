use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use plotly::box_plot::{BoxMean, BoxPoints};
use plotly::common::{Font, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{Bar, BoxPlot, ImageFormat, Layout, Plot};
use tracing::info;

use crate::error::{ReportError, Result};


/// What gets drawn. Per-run samples become a boxplot; pre-aggregated means
/// become a bar chart. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Distribution(Vec<(String, Vec<f64>)>),
    Means(Vec<(String, f64)>),
}


impl Chart {
    #[cfg(test)]
    pub(crate) fn labels(&self) -> Vec<&str> {
        match self {
            Chart::Distribution(groups) => groups.iter().map(|(name, _)| name.as_str()).collect(),
            Chart::Means(bars) => bars.iter().map(|(name, _)| name.as_str()).collect(),
        }
    }
}


#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub log_scale: bool,
    /// Draw the mean line inside each box.
    pub show_means: bool,
    /// Draw outlier points beyond the whiskers.
    pub show_outliers: bool,
    pub width: usize,
    pub height: usize,
    pub scale: f64,
}


impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            title: String::new(),
            x_label: String::new(),
            y_label: "Time (ms)".to_string(),
            log_scale: false,
            show_means: false,
            show_outliers: true,
            width: 800,
            height: 500,
            scale: 2.0,
        }
    }
}


pub fn build_plot(chart: &Chart, style: &ChartStyle) -> Plot {
    let mut plot = Plot::new();
    
    match chart {
        Chart::Distribution(groups) => {
            for (name, values) in groups {
                let mut trace = BoxPlot::new(values.clone())
                    .name(name.as_str())
                    .whisker_width(0.2);
                if style.show_means {
                    trace = trace.box_mean(BoxMean::True);
                }
                if !style.show_outliers {
                    trace = trace.box_points(BoxPoints::False);
                }
                plot.add_trace(trace);
            }
        }
        Chart::Means(bars) => {
            let (names, means): (Vec<String>, Vec<f64>) = bars.iter().cloned().unzip();
            plot.add_trace(Bar::new(names, means).name(style.y_label.as_str()));
        }
    }
    
    plot.set_layout(generate_layout(style));
    plot
}


fn generate_layout(style: &ChartStyle) -> Layout {
    let mut y_axis = Axis::new()
        .title(Title::new(style.y_label.as_str()).font(Font::new().size(16)))
        .color("black")
        .show_grid(true)
        .grid_color("#dddddd");
    if style.log_scale {
        y_axis = y_axis.type_(AxisType::Log);
    }
    
    Layout::new()
        .y_axis(y_axis)
        .x_axis(
            Axis::new()
                .title(Title::new(style.x_label.as_str()))
                .color("black")
                .tick_font(Font::new().size(14)),
        )
        .show_legend(false)
        .title(
            Title::new(format!("<b>{}</b>", style.title).as_str())
                .font(Font::new().color("black").size(20)),
        )
}


/// Image format implied by the extension of `path`, PNG when unknown.
pub fn image_format(path: &Path) -> ImageFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => ImageFormat::JPEG,
        Some("webp") => ImageFormat::WEBP,
        Some("svg") => ImageFormat::SVG,
        Some("pdf") => ImageFormat::PDF,
        Some("eps") => ImageFormat::EPS,
        _ => ImageFormat::PNG,
    }
}


/// Create the parent directories of `path` if they are missing.
pub fn prepare_output(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))
        }
        _ => Ok(()),
    }
}


/// File kaleido actually writes for `path`: the extension is replaced by the
/// format name, so `chart.jpg` lands on `chart.jpeg` and `saida` on `saida.png`.
pub fn image_destination(path: &Path) -> (PathBuf, ImageFormat) {
    let format = image_format(path);
    (path.with_extension(format.to_string()), format)
}


/// Write `plot` as an image plus an interactive `.html` copy next to it and
/// return the image path. Existing files are overwritten.
pub fn write_chart(plot: &Plot, path: &Path, style: &ChartStyle) -> Result<PathBuf> {
    prepare_output(path)?;
    let (image, format) = image_destination(path);
    
    let html = image.with_extension("html");
    fs::write(&html, plot.to_html()).map_err(|e| ReportError::io(&html, e))?;
    
    let data = serde_json::to_value(plot).map_err(|e| ReportError::Export(e.to_string()))?;
    let exported = panic::catch_unwind(AssertUnwindSafe(|| {
        plotly_kaleido::Kaleido::new()
            .save(&image, &data, &format.to_string(), style.width, style.height, style.scale)
            .map_err(|e| e.to_string())
    }));
    match exported {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(ReportError::Export(e)),
        Err(_) => return Err(ReportError::Export("kaleido is unavailable".to_string())),
    }
    if !image.is_file() {
        return Err(ReportError::Export(format!("no image produced at {}", image.display())));
    }
    info!("chart written to {}", image.display());
    
    Ok(image)
}


#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn boxplot_has_one_trace_per_group() {
        let chart = Chart::Distribution(vec![
            ("mergesort".into(), vec![9.0]),
            ("quicksort".into(), vec![12.3, 15.1]),
        ]);
        let style = ChartStyle {
            title: "Boxplot".into(),
            show_means: true,
            ..Default::default()
        };
        let json = build_plot(&chart, &style).to_json();
        assert_eq!(json.matches("\"type\":\"box\"").count(), 2);
        assert!(json.contains("\"boxmean\""));
        assert!(!json.contains("\"type\":\"bar\""));
    }
    
    #[test]
    fn means_render_as_bars() {
        let chart = Chart::Means(vec![("a".into(), 2.0), ("b".into(), 1.0)]);
        let json = build_plot(&chart, &ChartStyle::default()).to_json();
        assert_eq!(json.matches("\"type\":\"bar\"").count(), 1);
        assert!(!json.contains("\"type\":\"box\""));
    }
    
    #[test]
    fn log_scale_and_hidden_outliers() {
        let chart = Chart::Distribution(vec![("a".into(), vec![1.0, 100.0])]);
        let style = ChartStyle {
            log_scale: true,
            show_outliers: false,
            ..Default::default()
        };
        let json = build_plot(&chart, &style).to_json();
        assert!(json.contains("\"log\""));
        assert!(json.contains("\"boxpoints\""));
    }
    
    #[test]
    fn format_follows_extension() {
        assert!(matches!(image_format(Path::new("a/b.svg")), ImageFormat::SVG));
        assert!(matches!(image_format(Path::new("b.JPG")), ImageFormat::JPEG));
        assert!(matches!(image_format(Path::new("b")), ImageFormat::PNG));
    }
    
    #[test]
    fn destination_follows_kaleido_naming() {
        let (image, format) = image_destination(Path::new("plots/chart.jpg"));
        assert_eq!(image, PathBuf::from("plots/chart.jpeg"));
        assert!(matches!(format, ImageFormat::JPEG));
        
        let (image, _) = image_destination(Path::new("results/saida"));
        assert_eq!(image, PathBuf::from("results/saida.png"));
        
        let (image, _) = image_destination(Path::new("plots/bfs_V100_LA_vs_MA_boxplot.png"));
        assert_eq!(image, PathBuf::from("plots/bfs_V100_LA_vs_MA_boxplot.png"));
    }
    
    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory squatting on the html path makes the write fail
        fs::create_dir(dir.path().join("chart.html")).unwrap();
        let chart = Chart::Means(vec![("a".into(), 1.0)]);
        let style = ChartStyle::default();
        let plot = build_plot(&chart, &style);
        let err = write_chart(&plot, &dir.path().join("chart.png"), &style).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
    
    #[test]
    fn creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/chart.png");
        prepare_output(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
        prepare_output(Path::new("chart.png")).unwrap();
    }
}
