//! Talkbook engine: fetching, persisting and assembling talk transcripts.
mod assemble;
mod collect;
mod decode;
mod fetch;
mod persist;
mod render;
mod types;

pub use assemble::{
    assemble, compose_story, load_talks, AssembleError, AssembleOutcome, AssembleSummary,
    TalkFile,
};
pub use collect::{collect_talks, CollectError, FailedTalk, FetchSummary, SavedTalk};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{render_pdf, RenderError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
