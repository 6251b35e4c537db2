use std::fmt;

use url::Url;

/// Largest index that still fits the 5-digit zero padding of the file names.
pub const MAX_TALK_INDEX: u32 = 99_999;

const SOURCE_PREFIX: &str = "mgp";
const SOURCE_SUFFIX: &str = ".txt";
const MARKDOWN_PREFIX: &str = "mkp";
const MARKDOWN_SUFFIX: &str = ".md";

/// Identifies one talk of the series. Always in `1..=MAX_TALK_INDEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TalkIndex(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("talk index {0} is outside 1..=99999")]
pub struct TalkIndexError(pub u32);

impl TalkIndex {
    pub fn new(value: u32) -> Result<Self, TalkIndexError> {
        if value == 0 || value > MAX_TALK_INDEX {
            return Err(TalkIndexError(value));
        }
        Ok(Self(value))
    }

    /// All indices `1..=count`, ascending.
    pub fn range(count: u32) -> impl Iterator<Item = TalkIndex> {
        (1..=count.min(MAX_TALK_INDEX)).map(TalkIndex)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Remote plain-text name, e.g. `mgp00007.txt`.
    pub fn source_filename(self) -> String {
        format!("{SOURCE_PREFIX}{:05}{SOURCE_SUFFIX}", self.0)
    }

    /// Local markdown name, e.g. `mkp00007.md`.
    pub fn markdown_filename(self) -> String {
        format!("{MARKDOWN_PREFIX}{:05}{MARKDOWN_SUFFIX}", self.0)
    }

    /// Source URL below `base`. `base` must end in `/` for the last path
    /// segment to be kept.
    pub fn source_url(self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.source_filename())
    }
}

impl fmt::Display for TalkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("file name {0:?} does not match mkpNNNNN.md")]
    Pattern(String),
    #[error("file name {name:?} carries an invalid talk number: {reason}")]
    Number { name: String, reason: String },
}

/// Recovers the talk index from a markdown file name by stripping the fixed
/// prefix and suffix. Anything that is not a number in between is an error.
pub fn parse_markdown_filename(name: &str) -> Result<TalkIndex, FilenameError> {
    let digits = name
        .strip_prefix(MARKDOWN_PREFIX)
        .and_then(|rest| rest.strip_suffix(MARKDOWN_SUFFIX))
        .ok_or_else(|| FilenameError::Pattern(name.to_string()))?;

    let value = digits
        .parse::<u32>()
        .map_err(|err| FilenameError::Number {
            name: name.to_string(),
            reason: err.to_string(),
        })?;

    TalkIndex::new(value).map_err(|err| FilenameError::Number {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

