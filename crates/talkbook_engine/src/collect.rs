//! The fetch loop: one request per talk, each failure isolated to its index.

use std::path::PathBuf;

use talkbook_core::{build_talk_markdown, CollectionConfig, TalkIndex};
use talkbook_logging::{talkbook_debug, talkbook_error, talkbook_info, talkbook_warn};

use crate::decode::{decode_text, DecodeError};
use crate::fetch::Fetcher;
use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};
use crate::{FailureKind, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Persist(#[from] PersistError),
}

impl CollectError {
    /// Request-level failures, as opposed to problems handling a good response.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, CollectError::Fetch(_))
    }
}

#[derive(Debug)]
pub struct SavedTalk {
    pub index: TalkIndex,
    pub path: PathBuf,
    pub encoding: String,
    pub bytes: u64,
}

#[derive(Debug)]
pub struct FailedTalk {
    pub index: TalkIndex,
    pub url: String,
    pub error: CollectError,
}

#[derive(Debug, Default)]
pub struct FetchSummary {
    pub saved: Vec<SavedTalk>,
    pub failed: Vec<FailedTalk>,
}

impl FetchSummary {
    pub fn attempted(&self) -> usize {
        self.saved.len() + self.failed.len()
    }
}

/// Fetches every talk of `config` in ascending order and stores it as markdown.
///
/// Never aborts: each failure is logged, recorded in the summary and the loop
/// moves on to the next index.
pub async fn collect_talks(fetcher: &dyn Fetcher, config: &CollectionConfig) -> FetchSummary {
    let writer = AtomicFileWriter::new(config.talks_dir.clone());
    let mut summary = FetchSummary::default();

    if let Err(err) = ensure_output_dir(writer.dir()) {
        talkbook_error!("Cannot prepare {:?}: {}", writer.dir(), err);
    }

    for index in config.indices() {
        let url = match config.source_url(index) {
            Ok(url) => url.to_string(),
            Err(err) => {
                let url = format!("{}{}", config.base_url, index.source_filename());
                talkbook_warn!("Failed to fetch {}: invalid url: {}", url, err);
                summary.failed.push(FailedTalk {
                    index,
                    url,
                    error: FetchError::new(FailureKind::InvalidUrl, err.to_string()).into(),
                });
                continue;
            }
        };

        talkbook_info!("Fetching {}...", url);
        match collect_one(fetcher, &writer, config, index, &url).await {
            Ok(saved) => {
                talkbook_info!("Saved {}", index.markdown_filename());
                summary.saved.push(saved);
            }
            Err(error) => {
                if error.is_fetch_failure() {
                    talkbook_warn!("Failed to fetch {}: {}", url, error);
                } else {
                    talkbook_error!("Error processing {}: {}", url, error);
                }
                summary.failed.push(FailedTalk { index, url, error });
            }
        }
    }

    summary
}

async fn collect_one(
    fetcher: &dyn Fetcher,
    writer: &AtomicFileWriter,
    config: &CollectionConfig,
    index: TalkIndex,
    url: &str,
) -> Result<SavedTalk, CollectError> {
    let output = fetcher.fetch(url).await?;
    talkbook_debug!(
        "Fetched {} bytes from {} (redirects={}, content_type={:?})",
        output.metadata.byte_len,
        output.metadata.final_url,
        output.metadata.redirect_count,
        output.metadata.content_type
    );

    let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref())?;
    let markdown = build_talk_markdown(index, &config.series_label, &decoded.text);
    let path = writer.write(&index.markdown_filename(), &markdown)?;

    Ok(SavedTalk {
        index,
        path,
        encoding: decoded.encoding_label,
        bytes: output.metadata.byte_len,
    })
}
