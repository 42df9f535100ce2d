//! Example rendering a batch of simulated downloads.
//!
//! Run with `cargo run --example downloads`. Press Ctrl-C to cancel; the
//! cursor is restored either way.

use color_eyre::Result;
use comfy_table::Table;
use std::io;
use tracing_subscriber::EnvFilter;
use twirl::renderer::{CancellationToken, RendererBuilder};
use twirl::workload::Workload;
use twirl::{Error, SystemClock};

/// Total simulated bandwidth, in MB/s.
const DOWNLOAD_SPEED: f64 = 100.0;
const NUMBER_OF_ITEMS: usize = 10;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let token = CancellationToken::new();
    let handle = token.clone();
    ctrlc::set_handler(move || handle.cancel())?;

    let clock = SystemClock::shared();
    let downloads = Workload::new(NUMBER_OF_ITEMS, DOWNLOAD_SPEED).generate(clock.clone())?;

    let mut renderer = RendererBuilder::new()
        .clock(clock)
        .cancellation_token(token)
        .build(downloads.iter().map(|d| d.clone() as twirl::SharedItem))?;
    renderer.initialize()?;

    let result = {
        let mut stdout = io::stdout().lock();
        renderer.run(&mut stdout)
    };
    let summary = match result {
        Ok(summary) => summary,
        Err(Error::Cancelled) => {
            println!("Interrupted, nothing else to do.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut table = Table::new();
    table.set_header(vec!["Download", "Size (MB)", "Expected (s)"]);
    for download in &downloads {
        table.add_row(vec![
            format!("{download:?}"),
            format!("{:.0}", download.size()),
            format!("{:.2}", download.expected_duration().as_secs_f64()),
        ]);
    }
    println!("\n{table}");
    println!(
        "{} succeeded, {} failed",
        summary.succeeded(),
        summary.failed()
    );

    Ok(())
}
