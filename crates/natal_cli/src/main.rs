mod cli;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use natal_config::{NatalConfig, OutputFormat};
use natal_rs::{
    AnalysisOptions, ChartAssembler, ChartReport, SimplifiedEphemeris, read_chart_with,
    zodiac_position,
};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", one_line(&e));
        std::process::exit(1);
    }
}

/// The error chain on one line, skipping causes a parent already quotes.
fn one_line(e: &anyhow::Error) -> String {
    let mut msg = e.to_string();
    for cause in e.chain().skip(1) {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
    }
    msg
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    init_logging(cli.log_level(config.log.level.level_filter()))?;
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Chart { birth, json } => {
            let input = birth.to_input();
            let assembler = ChartAssembler::new(SimplifiedEphemeris, config.chart_config()?);
            let chart = assembler.compute(&input)?;
            if wants_json(json, &config) {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print!("{}", ChartReport::new(&chart));
            }
        }
        Commands::Analyze {
            birth,
            locale,
            json,
        } => {
            let input = birth.to_input();
            let mut options: AnalysisOptions = config.analysis_options();
            if let Some(locale) = locale {
                options.locale = locale;
            }
            let reading = read_chart_with(&input, &config.chart_config()?, &options)?;
            if wants_json(json, &config) {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print!("{}", ChartReport::from(&reading));
            }
        }
        Commands::Zodiac { lon, json } => {
            if !lon.is_finite() {
                bail!("longitude must be a finite number, got {lon}");
            }
            let pos = zodiac_position(lon);
            if wants_json(json, &config) {
                println!("{}", serde_json::to_string_pretty(&pos)?);
            } else {
                println!(
                    "{} {} ({})  {:.4}° in sign  {}",
                    pos.sign.symbol(),
                    pos.sign.name(),
                    pos.sign.element().name(),
                    pos.degree_in_sign,
                    pos
                );
            }
        }
        Commands::InitConfig { path, force } => init_config(&path, force)?,
    }
    Ok(())
}

fn wants_json(flag: bool, config: &NatalConfig) -> bool {
    flag || config.output.format == OutputFormat::Json
}

/// `--config` if given, else `./natal.toml` if present, else defaults.
fn load_config(cli: &Cli) -> Result<NatalConfig> {
    if let Some(path) = &cli.config {
        return NatalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    let found = NatalConfig::load_from_dir(Path::new(".")).context("loading ./natal.toml")?;
    Ok(found.unwrap_or_default())
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    let content = NatalConfig::default_toml()?;
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    println!("Created {} with default settings.", path.display());
    Ok(())
}
