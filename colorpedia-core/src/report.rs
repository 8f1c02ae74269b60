//! Bilingual report rendering.
//!
//! Turns a [`MatchResult`] into the human-readable report returned by the
//! API: the matched record's fields in English, then again in the target
//! language via the injected [`Translator`]. A failed translation degrades
//! that single field to its English value; the report itself never fails.

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::debug;

use crate::matcher::MatchResult;
use crate::record::ColorRecord;
use crate::translate::Translator;

/// The descriptive fields of one record, in one language.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFields {
    /// Color name.
    pub name: String,
    /// Hex code, as stored in the snapshot.
    pub hex: String,
    /// Color family.
    pub category: String,
    /// Personality traits.
    pub personality: String,
    /// Associated emotion.
    pub emotion: String,
    /// Associated mood.
    pub mood: String,
    /// Symbolism.
    pub symbolism: String,
    /// Free-text description.
    pub description: String,
    /// Typical use cases.
    pub use_case: String,
    /// Keywords.
    pub keywords: String,
}

impl ReportFields {
    fn from_record(record: &ColorRecord) -> Self {
        Self {
            name: record.name.clone(),
            hex: record.hex.clone(),
            category: record.category.clone(),
            personality: record.personality.clone(),
            emotion: record.emotion.clone(),
            mood: record.mood.clone(),
            symbolism: record.symbolism.clone(),
            description: record.description.clone(),
            use_case: record.use_case.clone(),
            keywords: record.keywords.clone(),
        }
    }
}

/// A rendered match: optional approximation note plus the record's fields in
/// both languages.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Present only for nearest-neighbor results; names the original query
    /// and flags the match as approximate.
    pub note: Option<String>,
    /// Original-language fields.
    pub english: ReportFields,
    /// Target-language fields; any field that failed to translate holds its
    /// English value instead.
    pub localized: ReportFields,
}

impl Report {
    /// Render the report as the text block served by the API.
    pub fn render(&self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(note) = &self.note {
            writeln!(f, "{note}")?;
        }

        let en = &self.english;
        writeln!(f, "🔤 English:")?;
        writeln!(f, "🎨 Color: {} ({})", en.name, en.hex)?;
        writeln!(f, "📂 Category: {}", en.category)?;
        writeln!(f, "🔮 Personality: {}", en.personality)?;
        writeln!(f, "💭 Emotion: {}", en.emotion)?;
        writeln!(f, "😌 Mood: {}", en.mood)?;
        writeln!(f, "🔗 Symbolism: {}", en.symbolism)?;
        writeln!(f, "🧠 Description: {}", en.description)?;
        writeln!(f, "📦 Use Case: {}", en.use_case)?;
        writeln!(f, "🔑 Keywords: {}", en.keywords)?;
        writeln!(f)?;

        let vi = &self.localized;
        writeln!(f, "🌐 Vietnamese:")?;
        writeln!(f, "🎨 Màu: {} ({})", vi.name, vi.hex)?;
        writeln!(f, "📂 Nhóm màu: {}", vi.category)?;
        writeln!(f, "🔮 Tính cách: {}", vi.personality)?;
        writeln!(f, "💭 Cảm xúc: {}", vi.emotion)?;
        writeln!(f, "😌 Tâm trạng: {}", vi.mood)?;
        writeln!(f, "🔗 Biểu tượng: {}", vi.symbolism)?;
        writeln!(f, "🧠 Mô tả: {}", vi.description)?;
        writeln!(f, "📦 Ứng dụng: {}", vi.use_case)?;
        write!(f, "🔑 Từ khoá: {}", vi.keywords)
    }
}

/// Renders match results into [`Report`]s using an injected translator.
#[derive(Clone)]
pub struct ReportFormatter {
    translator: Arc<dyn Translator>,
    target_lang: String,
}

impl fmt::Debug for ReportFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportFormatter")
            .field("target_lang", &self.target_lang)
            .finish()
    }
}

impl ReportFormatter {
    /// Build a formatter translating into `target_lang`.
    pub fn new(
        translator: Arc<dyn Translator>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            target_lang: target_lang.into(),
        }
    }

    /// Render `result` for the query that produced it.
    ///
    /// Infallible: translation failures degrade individual fields, and the
    /// hex code is carried over untranslated.
    pub async fn format(&self, result: &MatchResult<'_>, query: &str) -> Report {
        let record = result.record();
        let note = match result {
            MatchResult::Exact(_) => None,
            MatchResult::Nearest { .. } => Some(format!(
                "⚠️ Không tìm thấy màu '{query}' trong cơ sở dữ liệu.\n👉 Màu gần nhất là:"
            )),
        };

        let english = ReportFields::from_record(record);

        // One translation per descriptive field, all in flight at once; each
        // falls back to its English value independently.
        let mut translated = join_all(
            [
                &english.name,
                &english.category,
                &english.personality,
                &english.emotion,
                &english.mood,
                &english.symbolism,
                &english.description,
                &english.use_case,
                &english.keywords,
            ]
            .map(|text| self.translate_or_original(text)),
        )
        .await
        .into_iter();

        let mut next = || translated.next().unwrap_or_default();
        let localized = ReportFields {
            name: next(),
            hex: english.hex.clone(),
            category: next(),
            personality: next(),
            emotion: next(),
            mood: next(),
            symbolism: next(),
            description: next(),
            use_case: next(),
            keywords: next(),
        };

        Report {
            note,
            english,
            localized,
        }
    }

    async fn translate_or_original(&self, text: &str) -> String {
        match self.translator.translate(text, &self.target_lang).await {
            Ok(translated) => translated,
            Err(err) => {
                debug!(error = %err, "translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}
