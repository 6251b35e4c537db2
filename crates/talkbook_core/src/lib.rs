//! Talkbook core: pure talk naming, markdown wrapping, story building and page layout.
mod config;
mod layout;
mod markdown;
mod metrics;
mod story;
mod talk;

pub use config::{AssemblyConfig, CollectionConfig, DEFAULT_TALK_COUNT};
pub use layout::{
    paginate, Alignment, Page, PageGeometry, PlacedText, StyleSheet, TextStyle,
};
pub use markdown::{build_talk_markdown, talk_body_lines, FENCE};
pub use metrics::{text_width, FontFace};
pub use story::{Block, HeadingLevel, Story, BLANK_LINE_SPACER, SECTION_SPACER, TITLE_SPACER};
pub use talk::{parse_markdown_filename, FilenameError, TalkIndex, TalkIndexError, MAX_TALK_INDEX};
