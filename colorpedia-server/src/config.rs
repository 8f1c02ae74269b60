//! Environment-first configuration.
//!
//! Everything can be set through environment variables (a `.env` file is
//! honored via dotenvy before this runs); host, port, and dataset path can
//! additionally be overridden on the command line.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATASET: &str = "data/colorpedia.csv";
pub const DEFAULT_TARGET_LANG: &str = "vi";
const DEFAULT_TRANSLATE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_MOOD_MODEL_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default)]
pub struct CorsSettings {
    /// Origins allowed outside dev mode. Empty means allow any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TranslateSettings {
    /// LibreTranslate-compatible endpoint. Unset disables translation and
    /// the report falls back to English throughout.
    pub url: Option<String>,
    pub target_lang: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MoodModelSettings {
    /// Text-generation endpoint. Unset disables /recommend-music.
    pub url: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerSettings,
    pub dev_mode: bool,
    pub cors: CorsSettings,
    pub dataset_path: PathBuf,
    pub translate: TranslateSettings,
    pub mood_model: MoodModelSettings,
}

impl Config {
    /// Assemble the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT is not a valid port: '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let translate_timeout = env_millis(
            "TRANSLATE_TIMEOUT_MS",
            DEFAULT_TRANSLATE_TIMEOUT_MS,
        )?;
        let mood_model_timeout = env_millis(
            "MOOD_MODEL_TIMEOUT_MS",
            DEFAULT_MOOD_MODEL_TIMEOUT_MS,
        )?;

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            dev_mode: env_flag("DEV_MODE"),
            cors: CorsSettings {
                allowed_origins: split_csv(
                    std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
                ),
            },
            dataset_path: std::env::var("COLORPEDIA_DATASET")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET)),
            translate: TranslateSettings {
                url: std::env::var("TRANSLATE_URL").ok(),
                target_lang: std::env::var("TRANSLATE_TARGET_LANG")
                    .unwrap_or_else(|_| DEFAULT_TARGET_LANG.to_string()),
                timeout: translate_timeout,
            },
            mood_model: MoodModelSettings {
                url: std::env::var("MOOD_MODEL_URL").ok(),
                timeout: mood_model_timeout,
            },
        })
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        })
        .unwrap_or(false)
}

fn env_millis(key: &str, default_ms: u64) -> anyhow::Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => {
            let ms = raw.parse::<u64>().with_context(|| {
                format!("{key} is not a valid millisecond count: '{raw}'")
            })?;
            Ok(Duration::from_millis(ms))
        }
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

// Parse a comma-separated list into trimmed, non-empty entries
fn split_csv(s: String) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarGuard {
        fn unset(key: &'static str) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: tests run in isolation and restore previous environment state on drop.
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, previous }
        }

        fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: tests run in isolation and restore previous environment state on drop.
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            // SAFETY: we reinstate the environment variable to its prior state.
            unsafe {
                match &self.previous {
                    Some(prev) => std::env::set_var(self.key, prev),
                    None => std::env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv(" https://a.example , ,https://b.example".to_string()),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(split_csv(String::new()).is_empty());
    }

    // Single test: both cases touch SERVER_PORT and must not run in parallel.
    #[test]
    fn port_parsing_and_defaults() {
        let _host = EnvVarGuard::unset("SERVER_HOST");
        let _dataset = EnvVarGuard::unset("COLORPEDIA_DATASET");
        let _lang = EnvVarGuard::unset("TRANSLATE_TARGET_LANG");

        {
            let _port = EnvVarGuard::set("SERVER_PORT", "70000");
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("SERVER_PORT"));
        }

        {
            let _port = EnvVarGuard::unset("SERVER_PORT");
            let config = Config::from_env().expect("config");
            assert_eq!(config.server.port, DEFAULT_PORT);
            assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
            assert_eq!(config.translate.target_lang, DEFAULT_TARGET_LANG);
            assert!(config.mood_model.url.is_none());
        }
    }
}
