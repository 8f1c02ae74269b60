//! The static reference table.
//!
//! Loaded exactly once at startup from a CSV snapshot and shared read-only
//! for the process lifetime. There is no write path: concurrent resolution
//! needs no locking.

use std::path::Path;

use tracing::info;

use crate::error::LoadError;
use crate::matcher::parse_hex;
use crate::record::ColorRecord;

/// Header names the snapshot must provide. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 13] = [
    "Color Name",
    "HEX Code",
    "R",
    "G",
    "B",
    "Category",
    "Personality",
    "Emotion",
    "Mood",
    "Symbolism",
    "Description",
    "Use Case",
    "Keywords",
];

/// The in-memory reference dataset. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ColorDataset {
    records: Vec<ColorRecord>,
}

impl ColorDataset {
    /// Read the CSV snapshot at `path` into memory.
    ///
    /// Fails if the file is missing or malformed, a required column is
    /// absent, any record violates the hex/channel invariant, or the
    /// snapshot is empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: ColorRecord = row?;
            records.push(record);
        }

        let dataset = Self::from_records(records)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            "color dataset loaded"
        );
        Ok(dataset)
    }

    /// Build a dataset from already-parsed records, applying the same
    /// validation as [`ColorDataset::load`]. Source order is preserved; it
    /// is the tie-break order for matching.
    pub fn from_records(records: Vec<ColorRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(LoadError::EmptyName(index + 1));
            }

            // The hex column must reproduce the channel columns; a mismatch
            // means the snapshot itself is corrupt.
            match parse_hex(&record.hex) {
                Some(rgb) if rgb == record.rgb() => {}
                _ => {
                    return Err(LoadError::ChannelMismatch {
                        name: record.name.clone(),
                        hex: record.hex.clone(),
                        r: record.r,
                        g: record.g,
                        b: record.b,
                    });
                }
            }
        }

        Ok(Self { records })
    }

    #[cfg(test)]
    pub(crate) fn empty_unchecked() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Records in snapshot order.
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Iterate records in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty. Never true for a dataset built through
    /// [`ColorDataset::load`] or [`ColorDataset::from_records`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
