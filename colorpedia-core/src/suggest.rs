//! Song-mood suggestion via a pretrained language model.
//!
//! The core owns only the prompt template and the string-in/string-out
//! interface; how the completion is produced is the collaborator's business.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::SuggestError;

/// Marker separating the prompt from the model's answer.
const RESPONSE_MARKER: &str = "### Response:";

/// Free-form song metadata accepted by the recommend endpoint. Every field
/// is optional; absent fields take the defaults the model was tuned on.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SongMetadata {
    /// Musical genre, e.g. "lofi".
    pub genre: Option<String>,
    /// Release date or year.
    pub release: Option<String>,
    /// Musical key, e.g. "C Maj".
    pub key: Option<String>,
    /// Tempo, e.g. "60 BPM".
    pub tempo: Option<String>,
    /// Emotion to steer the description toward.
    pub emotion: Option<String>,
}

/// Build the instruction/input/response prompt for `meta`.
pub fn build_prompt(meta: &SongMetadata) -> String {
    let genre = meta.genre.as_deref().unwrap_or("ambient");
    let release = meta.release.as_deref().unwrap_or("2022");
    let key = meta.key.as_deref().unwrap_or("C Maj");
    let tempo = meta.tempo.as_deref().unwrap_or("60 BPM");
    let emotion = meta.emotion.as_deref().unwrap_or("");

    format!(
        "Below is an instruction that describes a task, paired with an input that provides further context. Write a response that appropriately completes the request.\n\
### Instruction:\n\
Based on the song metadata provided, describe the mood, style, and characteristics of the track.\n\
### Input:\n\
Song: [Custom Track]\n\
Artist: [Color AI]\n\
Genre: {genre}\n\
Release Date: {release}\n\
Key: {key}\n\
Tempo: {tempo}\n\
Loudness: -12 dB\n\
Explicit: No\n\
Emotion: {emotion}\n\
{RESPONSE_MARKER}"
    )
}

/// Strip everything up to and including the final response marker. Models
/// that echo the prompt return it in front of the answer.
pub fn extract_response(completion: &str) -> String {
    match completion.rfind(RESPONSE_MARKER) {
        Some(index) => completion[index + RESPONSE_MARKER.len()..].trim().to_string(),
        None => completion.trim().to_string(),
    }
}

/// A text-completion model: string prompt in, string completion out.
#[async_trait]
pub trait MoodModel: Send + Sync {
    /// Produce a completion for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, SuggestError>;
}

/// Describe the mood of a song with the given metadata.
pub async fn suggest_music(
    model: &dyn MoodModel,
    meta: &SongMetadata,
) -> Result<String, SuggestError> {
    let prompt = build_prompt(meta);
    let completion = model.complete(&prompt).await?;
    let answer = extract_response(&completion);
    if answer.is_empty() {
        return Err(SuggestError::EmptyCompletion);
    }
    Ok(answer)
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Client for a text-generation-inference style HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpMoodModel {
    http: reqwest::Client,
    endpoint: String,
    max_new_tokens: u32,
}

impl HttpMoodModel {
    /// Build a client for `endpoint` with a bounded request `timeout`.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SuggestError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            max_new_tokens: 150,
        })
    }
}

#[async_trait]
impl MoodModel for HttpMoodModel {
    async fn complete(&self, prompt: &str) -> Result<String, SuggestError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "inputs": prompt,
                "parameters": { "max_new_tokens": self.max_new_tokens },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Api(format!(
                "mood model returned {status}"
            )));
        }

        let mut body: Vec<GeneratedText> = response.json().await?;
        match body.pop() {
            Some(generation) => Ok(generation.generated_text),
            None => Err(SuggestError::EmptyCompletion),
        }
    }
}
