use thiserror::Error;

/// Errors raised while loading the reference snapshot. All of these are fatal
/// at startup: the server must not accept traffic without a loaded dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Snapshot is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Record '{name}': hex code '{hex}' does not reproduce channels ({r}, {g}, {b})")]
    ChannelMismatch {
        name: String,
        hex: String,
        r: u8,
        g: u8,
        b: u8,
    },

    #[error("Record at row {0} has an empty name")]
    EmptyName(usize),

    #[error("Snapshot contains no records")]
    Empty,
}

/// Errors raised while resolving a color query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The query is not a known name, a known hex code, or a parseable hex
    /// triple. Carries the original (untrimmed) query for diagnostics.
    #[error("'{query}' is not a known color name, hex code, or parseable hex value")]
    InvalidFormat { query: String },

    /// Defensive: nearest-neighbor over an empty table. Unreachable through
    /// [`crate::dataset::ColorDataset`], which rejects empty snapshots.
    #[error("Color dataset is empty")]
    EmptyDataset,
}

/// Errors from the translation collaborator. Always recovered inside the
/// formatter by falling back to the untranslated text.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Translation service error: {0}")]
    Api(String),
}

/// Errors from the mood-model collaborator.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Mood model error: {0}")]
    Api(String),

    #[error("Mood model returned an empty completion")]
    EmptyCompletion,
}
