//! The assemble loop: every talk file, in name order, into one PDF.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use talkbook_core::{paginate, parse_markdown_filename, AssemblyConfig, FilenameError, Story, TalkIndex};
use talkbook_logging::{talkbook_debug, talkbook_info};

use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::{render_pdf, RenderError};

const MARKDOWN_EXTENSION: &str = ".md";

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("cannot list {path:?}: {source}")]
    ListDir { path: PathBuf, source: io::Error },
    #[error("cannot read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Filename(#[from] FilenameError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("cannot write combined document: {0}")]
    Persist(#[from] PersistError),
}

/// One talk file with the index taken from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkFile {
    pub index: TalkIndex,
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleSummary {
    pub file_count: usize,
    pub page_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleOutcome {
    /// Nothing to assemble; no output was written.
    NoInput,
    Written(AssembleSummary),
}

/// Reads every `*.md` file of `dir` in lexicographic name order.
///
/// Hidden files are ignored. A missing directory reads as empty. A name that
/// does not carry a talk number, or a file that cannot be read, fails the
/// whole load.
pub fn load_talks(dir: &Path) -> Result<Vec<TalkFile>, AssembleError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(AssembleError::ListDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(MARKDOWN_EXTENSION) && !name.starts_with('.'))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|filename| -> Result<TalkFile, AssembleError> {
            let index = parse_markdown_filename(&filename)?;
            let path = dir.join(&filename);
            let content = fs::read_to_string(&path)
                .map_err(|source| AssembleError::Read { path, source })?;
            Ok(TalkFile {
                index,
                filename,
                content,
            })
        })
        .collect()
}

/// Title page followed by one section per talk, in the order given.
pub fn compose_story(config: &AssemblyConfig, talks: &[TalkFile]) -> Story {
    let mut story = Story::new();
    story.push_title_page(&config.document_title, &config.subtitle());
    for talk in talks {
        talkbook_info!("Processing {}...", talk.filename);
        story.push_talk(talk.index, &config.section_label, &talk.content);
    }
    story
}

/// Builds the combined PDF from `config.talks_dir`.
///
/// An empty input directory is not an error: it is logged and reported as
/// [`AssembleOutcome::NoInput`] without touching the output file.
pub fn assemble(config: &AssemblyConfig) -> Result<AssembleOutcome, AssembleError> {
    let talks = load_talks(&config.talks_dir)?;
    if talks.is_empty() {
        talkbook_info!(
            "No markdown files found in {}/ directory",
            config.talks_dir.display()
        );
        return Ok(AssembleOutcome::NoInput);
    }

    let story = compose_story(config, &talks);
    talkbook_debug!("Story holds {} blocks", story.blocks().len());

    let pages = paginate(&story, &config.geometry, &config.styles);
    let bytes = render_pdf(&config.document_title, &config.geometry, &pages)?;

    let writer = AtomicFileWriter::new(config.output_dir.clone());
    let output_path = writer.write(&config.output_filename, &bytes)?;

    talkbook_info!(
        "Successfully converted {} .md files to {}",
        talks.len(),
        config.output_filename
    );

    Ok(AssembleOutcome::Written(AssembleSummary {
        file_count: talks.len(),
        page_count: pages.len(),
        output_path,
    }))
}
