//! # Colorpedia Server
//!
//! Small web API over a static reference table of named colors.
//!
//! - `POST /analyze` resolves a color query (name or hex) to its closest
//!   reference record and returns a bilingual descriptive report.
//! - `POST /recommend-music` asks a pretrained language model to describe
//!   the mood of a hypothetical song.
//!
//! The dataset is loaded once at startup; the process refuses to serve
//! traffic without it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colorpedia_core::{
    ColorDataset, MoodModel, ReportFormatter, Translator,
    suggest::HttpMoodModel,
    translate::{HttpTranslator, NoopTranslator},
};
use colorpedia_server::{AppState, Config, create_app};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "colorpedia-server")]
#[command(
    about = "Color metadata API with nearest-color matching and song-mood suggestions"
)]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Path to the CSV color snapshot (overrides config)
    #[arg(long, env = "COLORPEDIA_DATASET")]
    dataset: Option<PathBuf>,
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }
    if let Some(dataset) = cli.dataset.clone() {
        config.dataset_path = dataset;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env().context("failed to load configuration")?;
    apply_overrides(&mut config, &cli);

    let dataset =
        ColorDataset::load(&config.dataset_path).with_context(|| {
            format!(
                "failed to load color dataset from {}",
                config.dataset_path.display()
            )
        })?;

    let translator: Arc<dyn Translator> = match &config.translate.url {
        Some(url) => {
            info!(
                endpoint = %url,
                target_lang = %config.translate.target_lang,
                "translation enabled"
            );
            Arc::new(
                HttpTranslator::new(url.clone(), config.translate.timeout)
                    .context("failed to build translation client")?,
            )
        }
        None => {
            warn!("TRANSLATE_URL not set - reports will not be translated");
            Arc::new(NoopTranslator)
        }
    };
    let formatter = Arc::new(ReportFormatter::new(
        translator,
        config.translate.target_lang.clone(),
    ));

    let mood_model: Option<Arc<dyn MoodModel>> = match &config.mood_model.url {
        Some(url) => {
            info!(endpoint = %url, "mood model enabled");
            Some(Arc::new(
                HttpMoodModel::new(url.clone(), config.mood_model.timeout)
                    .context("failed to build mood model client")?,
            ))
        }
        None => {
            warn!("MOOD_MODEL_URL not set - /recommend-music is disabled");
            None
        }
    };

    let config = Arc::new(config);
    let state = AppState::new(
        Arc::clone(&config),
        Arc::new(dataset),
        formatter,
        mood_model,
    );
    let app = create_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting Colorpedia server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
