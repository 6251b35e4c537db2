//! Combines the fetched talks into `graydon_talks_combined.pdf`.

use log::LevelFilter;
use talkbook_core::AssemblyConfig;
use talkbook_engine::{assemble, AssembleOutcome};
use talkbook_logging::talkbook_debug;

fn main() -> anyhow::Result<()> {
    talkbook_logging::initialize(LevelFilter::Info);

    let config = AssemblyConfig::default();
    match assemble(&config)? {
        AssembleOutcome::NoInput => {}
        AssembleOutcome::Written(summary) => {
            talkbook_debug!(
                "Wrote {} pages to {:?}",
                summary.page_count,
                summary.output_path
            );
        }
    }
    Ok(())
}
