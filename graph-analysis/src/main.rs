use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use bench_report::aggregate::{compare_representations, summarize};
use bench_report::graph::{self, algorithm_name, Measurement};
use bench_report::loader::load_delimited;
use bench_report::prompt::{list_csv_files, Prompter};
use bench_report::render::{build_plot, write_chart};
use bench_report::summary::{summary_table, write_summary_csv};
use tracing::{debug, info, warn};


const SUMMARY_FILE: &str = "summary_stats.csv";

const HELP: &str = "\
Usage:  graph-analysis [ options ]
Boxplots of LA vs MA runs per algorithm and vertex count, plus summary stats.

Options:
            [ --input-dir <dir> ]       where the result CSVs are listed (default out)
            [ --plots-dir <dir> ]       where charts and the summary go (default plots)
            [ --mode <1|2> ]            1: one combined LA+MA CSV, 2: separate LA and MA CSVs
";


#[derive(Debug)]
struct Config {
    input_dir: PathBuf,
    plots_dir: PathBuf,
    mode: Option<String>,
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
    println!("=== Boxplots LA vs MA ===");
    println!("CSV files are listed from: {}\n", config.input_dir.display());
    
    let mut prompter = Prompter::stdio();
    let mode = match config.mode.clone() {
        Some(mode) => mode,
        None => {
            prompter.say("1) One combined CSV (LA+MA together)")?;
            prompter.say("2) Two separate CSVs (LA and MA)")?;
            prompter.ask("Choose 1 or 2: ")?
        }
    };
    
    let runs = match mode.as_str() {
        "1" => {
            let name = select_file(&mut prompter, &config.input_dir, "Combined CSV: ")?;
            let runs = load_runs(&config.input_dir.join(name))?;
            graph::require_representation(&runs)?;
            runs
        }
        "2" => {
            prompter.say("\n=== LA file ===")?;
            let la = select_file(&mut prompter, &config.input_dir, "LA CSV number: ")?;
            prompter.say("\n=== MA file ===")?;
            let ma = select_file(&mut prompter, &config.input_dir, "MA CSV number: ")?;
    
            graph::merge_list_and_matrix(
                load_runs(&config.input_dir.join(la))?,
                load_runs(&config.input_dir.join(ma))?,
            )
        }
        other => bail!("invalid option: {other:?}"),
    };
    let runs = graph::retain_canonical(runs)?;
    
    save_boxplots(&runs, &config.plots_dir)?;
    
    let stats = summarize(&runs);
    let stats_path = config.plots_dir.join(SUMMARY_FILE);
    write_summary_csv(&stats, &stats_path)?;
    println!("{}", summary_table(&stats)?);
    
    println!("\n[OK] Summary statistics written to {}", stats_path.display());
    println!("[OK] Charts saved in {}/", config.plots_dir.display());
    println!("[OK] Done!");
    Ok(())
}


fn get_config() -> anyhow::Result<Config> {
    let mut pargs = pico_args::Arguments::from_env();
    
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }
    
    let config = Config {
        input_dir: pargs
            .opt_value_from_str("--input-dir")?
            .unwrap_or_else(|| PathBuf::from("out")),
        plots_dir: pargs
            .opt_value_from_str("--plots-dir")?
            .unwrap_or_else(|| PathBuf::from("plots")),
        mode: pargs.opt_value_from_str("--mode")?,
    };
    
    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("unused arguments left: {:?}", remaining);
    }
    
    Ok(config)
}


fn select_file<R, W>(prompter: &mut Prompter<R, W>, dir: &Path, message: &str) -> anyhow::Result<String>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let mut files = list_csv_files(dir)?;
    let index = prompter.choose(message, &files)?;
    Ok(files.swap_remove(index))
}


fn load_runs(path: &Path) -> anyhow::Result<Vec<Measurement>> {
    let table = load_delimited(path).with_context(|| format!("reading {}", path.display()))?;
    let algorithm = algorithm_name(&table.stem());
    let runs = graph::standardize(&table, &algorithm)
        .with_context(|| format!("normalizing {}", path.display()))?;
    info!("{}: {} runs of {algorithm}", path.display(), runs.len());
    Ok(runs)
}


/// One chart per algorithm and vertex count holding both representations.
fn save_boxplots(runs: &[Measurement], plots_dir: &Path) -> anyhow::Result<()> {
    for cmp in compare_representations(runs) {
        let (chart, style) = graph::comparison_chart(&cmp);
        let plot = build_plot(&chart, &style);
        let out = write_chart(&plot, &plots_dir.join(graph::chart_file_name(&cmp)), &style)?;
        println!("[OK] Boxplot saved to {}", out.display());
    }
    Ok(())
}
