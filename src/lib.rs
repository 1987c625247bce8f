pub mod analyzer;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod render;
pub mod taxonomy;

pub use analyzer::{AchievementAnalyzer, Suggestion, Tagger};
pub use config::{Config, NormalizerConfig, SuggestionMode};
pub use error::{Error, Result};
pub use normalizer::Normalizer;
pub use render::TemplateEngine;
