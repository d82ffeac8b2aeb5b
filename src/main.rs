use anyhow::{Context, Result};
use clap::Parser;
use basket::{
    cli::{Cli, OutputFormat},
    config::MiningConfig,
    csv_output::CsvOutput,
    json_output::JsonOutput,
    loader, pipeline, text_output,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Base config from `--config`, or defaults
fn load_config(args: &Cli) -> Result<MiningConfig> {
    let base = match &args.config {
        Some(path) => MiningConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MiningConfig::default(),
    };
    let config = args.apply_to(base);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = load_config(&args)?;
    tracing::debug!(?config, "mining configuration");

    let transactions = loader::load_csv(&args.input, args.header)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let report = pipeline::run(&transactions, &config).context("mining failed")?;

    match args.format {
        OutputFormat::Text => print!("{}", text_output::render(&report, config.top_items)),
        OutputFormat::Json => {
            println!("{}", JsonOutput::from_report(&report, &config).to_json()?)
        }
        OutputFormat::Csv => {
            let csv = CsvOutput::new(
                report
                    .item_frequencies
                    .iter()
                    .take(config.top_items)
                    .cloned()
                    .collect(),
                report.itemset_rows(),
                report.rule_rows(),
            );
            print!("{}", csv.to_csv());
        }
    }

    Ok(())
}
