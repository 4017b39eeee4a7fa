use anyhow::{Context, Result};
use clap::Parser;
use perfwatch::{
    cli::{Cli, OutputFormat},
    history::{extract_history, load_benchmark_data},
    json_output::JsonReport,
    regression::{assess_history, RegressionConfig},
    report::{Outcome, RegressionReport, SummarySink},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Progress output: stdout for text, stderr for json so stdout stays parseable
fn progress(format: OutputFormat, line: &str) {
    match format {
        OutputFormat::Text => println!("{line}"),
        OutputFormat::Json => eprintln!("{line}"),
    }
}

fn load_config(args: &Cli) -> Result<RegressionConfig> {
    let config = match &args.config {
        Some(path) => RegressionConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => args.preset.config(),
    };
    config.validate()?;
    Ok(config)
}

fn run_check(args: &Cli, config: &RegressionConfig) -> Result<Outcome> {
    let format = args.format;

    progress(
        format,
        &format!("Loading benchmark data from {}", args.data_file.display()),
    );
    let data = load_benchmark_data(&args.data_file)?;

    let Some(entries) = data.suite(&args.suite)? else {
        progress(
            format,
            &format!(
                "Suite '{}' not found. Available: {:?}",
                args.suite,
                data.suite_names()
            ),
        );
        progress(format, "No history yet - skipping regression check.");
        if format == OutputFormat::Json {
            println!("{}", JsonReport::missing_suite(&args.suite, config).to_json()?);
        }
        return Ok(Outcome::Pass);
    };

    progress(
        format,
        &format!(
            "Found {} historical entries for '{}'",
            entries.len(),
            args.suite
        ),
    );

    let history = extract_history(&entries);
    progress(
        format,
        &format!(
            "Checking {} benchmarks (window={}, threshold={:.0}%, min_history={}):\n",
            history.len(),
            config.window_size,
            config.threshold_percent(),
            config.min_history
        ),
    );

    let report = RegressionReport::new(assess_history(&history, config)?, config.clone());

    match format {
        OutputFormat::Text => {
            for line in report.console_lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", JsonReport::from_report(&args.suite, &report).to_json()?);
        }
    }

    if let Some(sink) = SummarySink::from_env() {
        sink.append(&report)?;
    }

    progress(format, "");
    for line in report.conclusion_lines() {
        progress(format, &line);
    }

    Ok(report.outcome())
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    let outcome = run_check(&args, &config)?;

    Ok(ExitCode::from(outcome.exit_code()))
}
