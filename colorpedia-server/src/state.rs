use std::fmt;
use std::sync::Arc;

use colorpedia_core::{ColorDataset, MoodModel, ReportFormatter};

use crate::config::Config;

/// Shared, read-only application state. Cheap to clone; every field is
/// immutable after startup, so handlers need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dataset: Arc<ColorDataset>,
    pub formatter: Arc<ReportFormatter>,
    pub mood_model: Option<Arc<dyn MoodModel>>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        dataset: Arc<ColorDataset>,
        formatter: Arc<ReportFormatter>,
        mood_model: Option<Arc<dyn MoodModel>>,
    ) -> Self {
        Self {
            config,
            dataset,
            formatter,
            mood_model,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("dataset_records", &self.dataset.len())
            .field("mood_model", &self.mood_model.is_some())
            .finish()
    }
}
