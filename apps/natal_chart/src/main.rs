mod place;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use urania::interpretation::{build_prompt, render_interpretation, render_prompt_summary};
use urania::{ChartSnapshot, NatalEngine};
use urania_config::UraniaConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Birth instant, RFC 3339 (e.g. 1990-05-17T08:30:00Z or with an offset).
    #[arg(long, value_parser = parse_datetime, required_unless_present = "chart")]
    datetime: Option<DateTime<Utc>>,

    /// Render a chart previously saved as JSON instead of computing one.
    #[arg(long, conflicts_with_all = ["datetime", "lat", "lon", "location"])]
    chart: Option<PathBuf>,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,

    /// Place as "City, Country", resolved through the city catalog.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,

    /// City catalog JSON (overrides [locations].cities_path).
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Config file (default: configs/urania.toml, if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the plain-text chart summary instead of JSON.
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Print a template reading of the chart instead of JSON.
    #[arg(long, default_value_t = false)]
    interpretation: bool,

    /// Print a full text-model prompt for this question instead of JSON.
    #[arg(long)]
    question: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

fn load_config(args: &Args) -> anyhow::Result<UraniaConfig> {
    match &args.config {
        Some(path) => urania_config::load_config_from(path),
        None => match urania_config::load_config() {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                log::warn!("{e}; using default engine settings");
                Ok(UraniaConfig {
                    engine: Default::default(),
                    cities_path: None,
                })
            }
        },
    }
}

fn read_chart(path: &Path) -> anyhow::Result<ChartSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart {}", path.display()))?;
    let chart = ChartSnapshot::from_json(&text)
        .with_context(|| format!("Failed to parse chart {}", path.display()))?;
    log::info!("Loaded stored chart from {}", path.display());
    Ok(chart)
}

async fn compute_chart(args: &Args, datetime: DateTime<Utc>) -> anyhow::Result<ChartSnapshot> {
    let config = load_config(args)?;
    let location = place::resolve_place(args, &config).await?;

    let engine = NatalEngine::new(config.engine);
    engine
        .compute(datetime, location)
        .with_context(|| format!("Failed to compute chart for {}", datetime))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let chart = match (&args.chart, args.datetime) {
        (Some(path), _) => read_chart(path)?,
        (None, Some(datetime)) => compute_chart(&args, datetime).await?,
        (None, None) => anyhow::bail!("--datetime or --chart is required"),
    };

    if let Some(question) = &args.question {
        println!("{}", build_prompt(&chart, question));
    } else if args.summary {
        print!("{}", render_prompt_summary(&chart));
    } else if args.interpretation {
        println!("{}", render_interpretation(&chart));
    } else if args.pretty {
        println!("{}", chart.to_json_pretty()?);
    } else {
        println!("{}", chart.to_json()?);
    }
    Ok(())
}
