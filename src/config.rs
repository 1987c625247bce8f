use crate::error::{Error, Result};
use chrono::Datelike;
use std::env;

/// Suggestion behavior for unquantified achievement statements.
/// The stored sentence is never modified in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionMode {
    /// Pass unquantified achievements through without comment.
    #[default]
    Silent,
    /// Emit an advisory rewrite suggestion per unquantified achievement.
    Advise,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub template_dir: String,
    pub default_template: String,
    pub max_summary_sentences: usize,
    pub suggestions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let template_dir =
            env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());

        let default_template =
            env::var("DEFAULT_TEMPLATE").unwrap_or_else(|_| "modern".to_string());

        let max_summary_sentences = match env::var("SUMMARY_MAX_SENTENCES") {
            Ok(v) => v.parse().map_err(|_| {
                Error::Config(format!("SUMMARY_MAX_SENTENCES is not a number: {v}"))
            })?,
            Err(_) => 3,
        };

        let suggestions = env::var("SUGGESTIONS")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            template_dir,
            default_template,
            max_summary_sentences,
            suggestions,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    pub mode: SuggestionMode,
    pub max_summary_sentences: usize,
    /// Year stamped onto certifications. Injectable so tests are not
    /// coupled to the wall clock.
    pub current_year: i32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            mode: SuggestionMode::default(),
            max_summary_sentences: 3,
            current_year: chrono::Utc::now().year(),
        }
    }
}

impl From<&Config> for NormalizerConfig {
    fn from(config: &Config) -> Self {
        Self {
            mode: if config.suggestions {
                SuggestionMode::Advise
            } else {
                SuggestionMode::Silent
            },
            max_summary_sentences: config.max_summary_sentences,
            current_year: chrono::Utc::now().year(),
        }
    }
}
