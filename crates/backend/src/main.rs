pub mod cli;
pub mod dashboards;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    system::tracing::initialize()?;
    let config = shared::config::load_config()?;

    cli::run(cli, config).await
}
