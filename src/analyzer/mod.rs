pub mod tagger;

use serde::Serialize;

use crate::config::SuggestionMode;
use crate::taxonomy::VerbExamples;

pub use tagger::{LexiconTagger, PosTag, Tagger, Token};

/// Outcome of analyzing a single achievement sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum AchievementAnalysis {
    /// The sentence already carries at least one number-like token.
    Quantified,
    /// No numeric content found; `advice` is an advisory rewrite hint.
    NeedsQuantification { advice: String },
}

/// Advisory suggestion surfaced to the caller. The stored sentence is never
/// modified; fabricating a metric would put a false claim in the resume.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub section: String,
    pub original: String,
    pub advice: String,
}

/// Classifies achievement sentences as quantified or not. Holds the tagger
/// handle for the life of the process; the tagger is built once and shared
/// across every call.
pub struct AchievementAnalyzer {
    tagger: Box<dyn Tagger>,
    examples: VerbExamples,
}

impl AchievementAnalyzer {
    pub fn new() -> Self {
        Self::with_tagger(Box::new(LexiconTagger::new()))
    }

    pub fn with_tagger(tagger: Box<dyn Tagger>) -> Self {
        Self {
            tagger,
            examples: VerbExamples::new(),
        }
    }

    pub fn analyze(&self, sentence: &str) -> AchievementAnalysis {
        let tokens = self.tagger.tag(sentence);

        if tokens.iter().any(|t| is_number_like(t)) {
            return AchievementAnalysis::Quantified;
        }

        let first_verb = tokens.iter().find(|t| t.tag == PosTag::Verb);
        let advice = match first_verb {
            Some(verb) => match self.examples.lookup(&verb.text) {
                Some(example) => format!(
                    "Original: \"{sentence}\"\nSuggestion: add a measurable outcome, e.g. \"{example}\""
                ),
                None => format!(
                    "Original: \"{sentence}\"\nSuggestion: quantify what \"{}\" achieved \
                     (a percentage, time saved, or a count)",
                    verb.text
                ),
            },
            None => format!(
                "Original: \"{sentence}\"\nSuggestion: add a measurable outcome \
                 (a percentage, time saved, or a count)"
            ),
        };

        AchievementAnalysis::NeedsQuantification { advice }
    }

    /// Review one achievement under the given mode. Returns advisory text for
    /// unquantified sentences in `Advise` mode, `None` otherwise.
    pub fn review(&self, sentence: &str, mode: SuggestionMode) -> Option<String> {
        match self.analyze(sentence) {
            AchievementAnalysis::Quantified => None,
            AchievementAnalysis::NeedsQuantification { advice } => match mode {
                SuggestionMode::Silent => None,
                SuggestionMode::Advise => Some(advice),
            },
        }
    }
}

impl Default for AchievementAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_number_like(token: &Token) -> bool {
    token.tag == PosTag::Number || token.text.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_quantified() {
        let analyzer = AchievementAnalyzer::new();
        assert_eq!(
            analyzer.analyze("Increased revenue by 30%"),
            AchievementAnalysis::Quantified
        );
    }

    #[test]
    fn test_spelled_numbers_are_quantified() {
        let analyzer = AchievementAnalyzer::new();
        assert_eq!(
            analyzer.analyze("Mentored five interns"),
            AchievementAnalysis::Quantified
        );
    }

    #[test]
    fn test_unquantified_known_verb_gets_worked_example() {
        let analyzer = AchievementAnalyzer::new();
        match analyzer.analyze("Led a team of developers") {
            AchievementAnalysis::NeedsQuantification { advice } => {
                assert!(advice.contains("Original"));
                assert!(advice.contains("Suggestion"));
                assert!(advice.contains("Led a team of 8 engineers"));
            }
            other => panic!("expected NeedsQuantification, got {other:?}"),
        }
    }

    #[test]
    fn test_unquantified_unknown_verb_names_the_verb() {
        let analyzer = AchievementAnalyzer::new();
        match analyzer.analyze("Evangelized the platform internally") {
            AchievementAnalysis::NeedsQuantification { advice } => {
                assert!(advice.contains("Evangelized"));
                assert!(advice.contains("percentage"));
            }
            other => panic!("expected NeedsQuantification, got {other:?}"),
        }
    }

    #[test]
    fn test_silent_mode_returns_nothing() {
        let analyzer = AchievementAnalyzer::new();
        assert!(analyzer
            .review("Led a team of developers", SuggestionMode::Silent)
            .is_none());
    }

    #[test]
    fn test_advise_mode_references_the_verb() {
        let analyzer = AchievementAnalyzer::new();
        let advice = analyzer
            .review("Led a team of developers", SuggestionMode::Advise)
            .unwrap();
        assert!(advice.to_lowercase().contains("led"));
    }

    #[test]
    fn test_stub_tagger_substitution() {
        struct EverythingIsANumber;

        impl Tagger for EverythingIsANumber {
            fn tag(&self, sentence: &str) -> Vec<Token> {
                sentence
                    .split_whitespace()
                    .map(|w| Token {
                        text: w.to_string(),
                        tag: PosTag::Number,
                    })
                    .collect()
            }
        }

        let analyzer = AchievementAnalyzer::with_tagger(Box::new(EverythingIsANumber));
        assert_eq!(
            analyzer.analyze("no digits here"),
            AchievementAnalysis::Quantified
        );
    }
}
