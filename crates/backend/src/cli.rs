use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use contracts::dashboards::d400_sales_overview::SalesFilterRequest;
use contracts::usecases::u508_generate_sales_data::GenerateRequest;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use crate::dashboards::d400_sales_overview::{filter_domain, render, text, FilterSession};
use crate::routes::configure_routes;
use crate::shared::config::{get_data_dir, Config};
use crate::shared::data::dataset::{initialize_dataset, Dataset};
use crate::shared::format::format_number;
use crate::usecases::u508_generate_sales_data;

#[derive(Parser, Debug)]
#[command(name = "backend")]
#[command(about = "Synthetic sales data generator and sales overview dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate sales_data.csv and monthly_targets.csv
    Generate(GenerateArgs),
    /// Print the sales overview for the given filters
    Report(ReportArgs),
    /// Serve the dashboard over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of order lines
    #[arg(long)]
    pub records: Option<usize>,
    /// First order date, YYYY-MM-DD
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last order date, YYYY-MM-DD
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[arg(long)]
    pub from: Option<NaiveDate>,
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Repeatable; none means all states
    #[arg(long = "state")]
    pub states: Vec<String>,
    #[arg(long = "channel")]
    pub channels: Vec<String>,
    #[arg(long = "category")]
    pub categories: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[arg(long)]
    pub port: Option<u16>,
}

impl GenerateArgs {
    /// Configured defaults with the given flags on top
    pub fn to_request(&self, config: &Config) -> GenerateRequest {
        let mut request = config.generator.to_request(&config.data);
        if let Some(records) = self.records {
            request.records = records;
        }
        if let Some(start) = self.start {
            request.start = start;
        }
        if let Some(end) = self.end {
            request.end = end;
        }
        if let Some(out) = &self.out {
            request.output_dir = out.display().to_string();
        }
        if let Some(seed) = self.seed {
            request.seed = seed;
        }
        request
    }
}

impl ReportArgs {
    pub fn to_filter_request(&self) -> SalesFilterRequest {
        SalesFilterRequest {
            date_from: self.from,
            date_to: self.to,
            states: self.states.clone(),
            channels: self.channels.clone(),
            categories: self.categories.clone(),
        }
    }
}

fn data_dir(flag: &Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir.clone()),
        None => get_data_dir(config),
    }
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => generate(&args, &config),
        Command::Report(args) => report(&args, &config),
        Command::Serve(args) => serve(&args, &config).await,
    }
}

fn generate(args: &GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let request = args.to_request(config);
    let response = u508_generate_sales_data::execute(&request)?;
    println!(
        "Generated {} orders and {} targets",
        format_number(response.orders_written),
        format_number(response.targets_written)
    );
    println!("  {}", response.sales_path);
    println!("  {}", response.targets_path);
    Ok(())
}

fn report(args: &ReportArgs, config: &Config) -> anyhow::Result<()> {
    let dir = data_dir(&args.data_dir, config)?;
    let dataset = Dataset::load(&dir)?;
    let domain = filter_domain(&dataset.orders)
        .with_context(|| format!("no orders in {}", dir.display()))?;

    let mut session = FilterSession::new(domain);
    let filter = session.apply(&args.to_filter_request());
    print!("{}", text::render_text(&render(&dataset, filter)));
    Ok(())
}

async fn serve(args: &ServeArgs, config: &Config) -> anyhow::Result<()> {
    let dir = data_dir(&args.data_dir, config)?;
    initialize_dataset(&dir)?;

    let port = args.port.unwrap_or(config.server.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    tracing::info!("Sales overview listening on http://{}", addr);

    axum::serve(listener, configure_routes()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{DataConfig, GeneratorConfig, ServerConfig};

    fn config() -> Config {
        Config {
            data: DataConfig { dir: "data".into() },
            generator: GeneratorConfig::default(),
            server: ServerConfig::default(),
        }
    }

    #[test]
    fn test_generate_flags_override_config() {
        let cli = Cli::try_parse_from([
            "backend", "generate", "--records", "1000", "--end", "2023-03-31", "--seed", "9",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let request = args.to_request(&config());
        assert_eq!(request.records, 1000);
        assert_eq!(request.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(request.end, NaiveDate::from_ymd_opt(2023, 3, 31).unwrap());
        assert_eq!(request.seed, 9);
        assert_eq!(request.output_dir, "data");
    }

    #[test]
    fn test_report_collects_repeated_filters() {
        let cli = Cli::try_parse_from([
            "backend", "report", "--state", "SP", "--state", "RJ", "--channel", "Marketplace",
            "--from", "2023-02-01",
        ])
        .unwrap();
        let Command::Report(args) = cli.command else {
            panic!("expected report");
        };
        let request = args.to_filter_request();
        assert_eq!(request.states, vec!["SP", "RJ"]);
        assert_eq!(request.channels, vec!["Marketplace"]);
        assert!(request.categories.is_empty());
        assert_eq!(request.date_from, NaiveDate::from_ymd_opt(2023, 2, 1));
        assert_eq!(request.date_to, None);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(Cli::try_parse_from(["backend", "generate", "--start", "2023-13-01"]).is_err());
    }

    #[test]
    fn test_report_on_generated_data() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            records: Some(200),
            start: NaiveDate::from_ymd_opt(2023, 1, 1),
            end: NaiveDate::from_ymd_opt(2023, 2, 28),
            out: Some(dir.path().to_path_buf()),
            seed: None,
        };
        generate(&args, &config()).unwrap();

        let report_args = ReportArgs {
            data_dir: Some(dir.path().to_path_buf()),
            states: vec!["SP".into()],
            ..Default::default()
        };
        report(&report_args, &config()).unwrap();
    }
}
