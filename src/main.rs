use std::process::ExitCode;

use anyhow::Result;
use autopush::App;
use autopush::Config;
use autopush::ops::git::RealGit;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Parser)]
#[command(name = "autopush")]
#[command(about = "Stage, commit and push the dashboard repository in one shot", long_about = None)]
pub struct Cli {}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging()?;
    let _cli = Cli::parse();

    let config = Config::from_env();
    let git = RealGit::new(config.repo_dir.clone());
    let app = App::new(config, git);

    let outcome = app.cmd_sync(&mut std::io::stdout()).await?;

    // The run's exit code is the push's, since push is the last command
    Ok(ExitCode::from(outcome.exit_code()))
}

fn setup_logging() -> Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let format = tracing_subscriber::fmt::format().with_timer(timer);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    let subscriber = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_filter(filter);
    tracing_subscriber::registry().with(subscriber).init();
    Ok(())
}
