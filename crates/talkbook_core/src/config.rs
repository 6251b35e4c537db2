use std::path::PathBuf;

use url::Url;

use crate::layout::{PageGeometry, StyleSheet};
use crate::TalkIndex;

/// Number of talks in the MKC series.
pub const DEFAULT_TALK_COUNT: u32 = 58;

const DEFAULT_BASE_URL: &str = "http://venge.net/graydon/talks/mkc/html/";
const DEFAULT_TALKS_DIR: &str = "graydon_talks";

/// Where the fetcher reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Directory URL holding the `mgpNNNNN.txt` transcripts. Keep the trailing `/`.
    pub base_url: String,
    pub talk_count: u32,
    pub talks_dir: PathBuf,
    /// Used in the `# Talk {n} - {series_label}` title line.
    pub series_label: String,
}

impl CollectionConfig {
    pub fn source_url(&self, index: TalkIndex) -> Result<Url, url::ParseError> {
        let base = Url::parse(&self.base_url)?;
        index.source_url(&base)
    }

    pub fn indices(&self) -> impl Iterator<Item = TalkIndex> {
        TalkIndex::range(self.talk_count)
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            talk_count: DEFAULT_TALK_COUNT,
            talks_dir: PathBuf::from(DEFAULT_TALKS_DIR),
            series_label: "Graydon's MKC Series".to_string(),
        }
    }
}

/// Inputs, output and look of the combined document.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyConfig {
    pub talks_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_filename: String,
    pub document_title: String,
    /// Used in the `Talk {n} - {section_label}` headings.
    pub section_label: String,
    /// Count announced on the title page.
    pub talk_count: u32,
    pub geometry: PageGeometry,
    pub styles: StyleSheet,
}

impl AssemblyConfig {
    pub fn subtitle(&self) -> String {
        format!("All {} talks from the MKC series", self.talk_count)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_filename)
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            talks_dir: PathBuf::from(DEFAULT_TALKS_DIR),
            output_dir: PathBuf::from("."),
            output_filename: "graydon_talks_combined.pdf".to_string(),
            document_title: "Graydon's MKC Talks Collection".to_string(),
            section_label: "MKC Series".to_string(),
            talk_count: DEFAULT_TALK_COUNT,
            geometry: PageGeometry::letter(),
            styles: StyleSheet::default(),
        }
    }
}
