//! # Colorpedia Core
//!
//! Reference color dataset, nearest-color matching, and bilingual report
//! rendering.
//!
//! The crate is organized around a static snapshot loaded once at startup:
//!
//! - [`dataset`] loads and holds the reference table.
//! - [`matcher`] resolves a free-form query (name or hex) to exactly one
//!   record, falling back to nearest-neighbor in RGB space.
//! - [`report`] renders a match into a bilingual text report, translating
//!   fields through an injected [`translate::Translator`].
//! - [`suggest`] builds song-mood prompts for an injected
//!   [`suggest::MoodModel`].
//!
//! Resolution is a pure function of the dataset and the query; the dataset
//! is immutable after load, so any number of requests may resolve
//! concurrently without coordination.

pub mod dataset;
pub mod error;
pub mod matcher;
pub mod record;
pub mod report;
pub mod suggest;
pub mod translate;

pub use dataset::ColorDataset;
pub use error::{LoadError, MatchError, SuggestError, TranslateError};
pub use matcher::{MatchResult, resolve};
pub use record::ColorRecord;
pub use report::{Report, ReportFormatter};
pub use suggest::{MoodModel, SongMetadata, suggest_music};
pub use translate::Translator;

#[cfg(test)]
pub(crate) mod testing;
