//! Downloads every MKC talk transcript into `graydon_talks/`.

use anyhow::Context;
use log::LevelFilter;
use talkbook_core::CollectionConfig;
use talkbook_engine::{collect_talks, FetchSettings, ReqwestFetcher};
use talkbook_logging::talkbook_info;

fn main() -> anyhow::Result<()> {
    talkbook_logging::initialize(LevelFilter::Info);

    let config = CollectionConfig::default();
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let summary = runtime.block_on(collect_talks(&fetcher, &config));

    talkbook_info!(
        "Fetched {} of {} talks ({} failed)",
        summary.saved.len(),
        config.talk_count,
        summary.failed.len()
    );
    Ok(())
}
