mod archiver;
mod config;
mod crawler;
mod error;
mod fetcher;
mod html;
mod images;
mod models;
mod pages;
mod parser;
mod price;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use crate::config::Config;
use crate::fetcher::HttpFetcher;
use crate::parser::RowExtractor;

#[derive(Parser)]
#[command(name = "price_strip_crawler", about = "Crawl a paginated product listing into a CSV file")]
struct Cli {
    /// Path to the TOML configuration
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse_from(single_dash_config(std::env::args_os()));
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Accepts the single-dash `-config <path>` / `-config=<path>` spelling by
/// rewriting it to clap's `--config`.
fn single_dash_config<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-config") => OsString::from("--config"),
            Some(s) if s.starts_with("-config=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config).context("Can't load config file")?;

    let rows = html::selector(&config.row_selector)?;
    let extractor = RowExtractor::new(config.label_trim())?;
    let fetcher = HttpFetcher::new()?;

    let products = crawler::crawl(&fetcher, config.page_source(), &rows, &extractor)?;

    let path = archiver::save_to_csv(&products, config.csv_layout(), &config.output_dir)?;
    println!(
        "Fetched {} products. Saved in file: {}",
        products.len(),
        path.display()
    );
    Ok(())
}
