use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use bench_report::loader::load_delimited;
use bench_report::overview::{overview_style, plan_overview, Filters};
use bench_report::prompt::Prompter;
use bench_report::render::{build_plot, write_chart};
use tracing::{debug, warn};


const HELP: &str = "\
Usage:  performance-analysis [ options ]
Render a boxplot per algorithm (or a bar chart of means) from a results CSV.
Missing paths are asked for interactively.

Options:
            [ --input <csv> ]           results file (columns: algoritmo, tempo_ms | media_ms)
            [ --output <image> ]        chart file, format from extension (default png)
            [ --size <n> ]              keep only rows whose `n` column equals this value
            [ --scenario <name> ]       keep only rows of this scenario
            [ --title <text> ]          chart title
            [ --log-scale ]             logarithmic y axis
";


#[derive(Debug)]
struct Config {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    filters: Filters,
    title: Option<String>,
    log_scale: bool,
}


fn main() -> ExitCode {
    bench_report::logging::init();
    
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}


fn run() -> anyhow::Result<()> {
    let config = get_config()?;
    debug!("configuration: {config:#?}");
    println!("=== Benchmark plot ===");
    
    let mut prompter = Prompter::stdio();
    let input = match config.input.clone() {
        Some(path) => path,
        None => PathBuf::from(
            prompter.ask_required("CSV path (e.g. results/results.csv): ")?,
        ),
    };
    if !input.exists() {
        bail!("file not found: {}", input.display());
    }
    
    let table = load_delimited(&input).context("reading CSV")?;
    let chart = plan_overview(&table, &config.filters)?;
    
    let output = match config.output.clone() {
        Some(path) => path,
        None => PathBuf::from(
            prompter.ask_required("Output image path (e.g. results/chart.png): ")?,
        ),
    };
    
    let style = overview_style(
        &chart,
        config.title.as_deref(),
        &config.filters,
        config.log_scale,
    );
    let plot = build_plot(&chart, &style);
    let written = write_chart(&plot, &output, &style)?;
    
    println!("Chart saved to: {}", absolute(&written).display());
    Ok(())
}


fn get_config() -> anyhow::Result<Config> {
    let mut pargs = pico_args::Arguments::from_env();
    
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }
    
    let config = Config {
        input: pargs.opt_value_from_str("--input")?,
        output: pargs.opt_value_from_str("--output")?,
        filters: Filters {
            size: pargs.opt_value_from_str("--size")?,
            scenario: pargs.opt_value_from_str("--scenario")?,
        },
        title: pargs.opt_value_from_str("--title")?,
        log_scale: pargs.contains("--log-scale"),
    };
    
    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("unused arguments left: {:?}", remaining);
    }
    
    Ok(config)
}


fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
