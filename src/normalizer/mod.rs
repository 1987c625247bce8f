pub mod format;

use serde_json::{Map, Value};

use crate::analyzer::{AchievementAnalyzer, Suggestion, Tagger};
use crate::config::NormalizerConfig;
use crate::error::{Error, Result};

pub use format::{condense_summary, format_date, format_date_range, format_year};

/// The eight top-level sections every canonical record carries.
pub const SECTIONS: [&str; 8] = [
    "contact_details",
    "summary",
    "skills",
    "education",
    "work_experience",
    "volunteer_experience",
    "certifications",
    "awards",
];

/// Sections that accept a bare string on input and are wrapped into a
/// one-element list before processing.
const SCALAR_COERCED_SECTIONS: [&str; 3] = ["skills", "certifications", "awards"];

/// Produces a canonical resume record from an arbitrary input mapping.
/// Stateless across records; the record is mutated in place and the only
/// output besides the mutation is a list of advisory suggestions.
pub struct Normalizer {
    analyzer: AchievementAnalyzer,
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            analyzer: AchievementAnalyzer::new(),
            config,
        }
    }

    /// Substitute the part-of-speech tagger, used by tests to avoid the
    /// full lexicon.
    pub fn with_tagger(config: NormalizerConfig, tagger: Box<dyn Tagger>) -> Self {
        Self {
            analyzer: AchievementAnalyzer::with_tagger(tagger),
            config,
        }
    }

    /// Run every normalization pass over the record. Each pass is idempotent
    /// on already-canonical input, so re-normalizing is harmless.
    pub fn normalize(&self, record: &mut Map<String, Value>) -> Result<Vec<Suggestion>> {
        self.ensure_sections(record);
        self.coerce_scalar_sections(record);
        self.process_summary(record);
        self.process_skills(record);
        self.process_education(record)?;
        let suggestions = self.process_work_experience(record)?;
        self.process_volunteer_experience(record)?;
        self.process_certifications(record);
        self.process_awards(record)?;

        tracing::debug!(
            sections = SECTIONS.len(),
            suggestions = suggestions.len(),
            "record normalized"
        );

        Ok(suggestions)
    }

    /// Insert an empty list for each absent section. Present values are
    /// never overwritten.
    fn ensure_sections(&self, record: &mut Map<String, Value>) {
        for section in SECTIONS {
            if !record.contains_key(section) {
                record.insert(section.to_string(), Value::Array(Vec::new()));
            }
        }
    }

    /// A bare string in a list-valued section becomes a one-element list.
    fn coerce_scalar_sections(&self, record: &mut Map<String, Value>) {
        for section in SCALAR_COERCED_SECTIONS {
            if let Some(value) = record.get_mut(section) {
                if value.is_string() {
                    let scalar = value.take();
                    *value = Value::Array(vec![scalar]);
                }
            }
        }
    }

    fn process_summary(&self, record: &mut Map<String, Value>) {
        if let Some(Value::String(summary)) = record.get_mut("summary") {
            *summary = condense_summary(summary, self.config.max_summary_sentences);
        }
    }

    /// First-element heuristic, preserved as documented: a leading object is
    /// taken as evidence the whole list is already normalized. Mixed-shape
    /// lists are intentionally left alone in that case.
    fn process_skills(&self, record: &mut Map<String, Value>) {
        let Some(Value::Array(skills)) = record.get_mut("skills") else {
            return;
        };

        if skills.first().is_some_and(|s| s.is_object()) {
            return;
        }

        for skill in skills.iter_mut() {
            let name = coerce_text(skill);
            let mut pair = Map::new();
            pair.insert("name".to_string(), Value::String(name));
            pair.insert("level".to_string(), Value::String(String::new()));
            *skill = Value::Object(pair);
        }
    }

    fn process_education(&self, record: &mut Map<String, Value>) -> Result<()> {
        for entry in section_entries(record, "education") {
            let year = entry
                .get("graduation_year")
                .ok_or(Error::MissingField {
                    section: "education",
                    field: "graduation_year",
                })?;
            let formatted = format_year(year);
            entry.insert("graduation_year".to_string(), Value::String(formatted));
        }
        Ok(())
    }

    fn process_work_experience(
        &self,
        record: &mut Map<String, Value>,
    ) -> Result<Vec<Suggestion>> {
        let mut suggestions = Vec::new();

        for entry in section_entries(record, "work_experience") {
            let date = entry.get("date").ok_or(Error::MissingField {
                section: "work_experience",
                field: "date",
            })?;
            let formatted = format_date_range(&coerce_text(date))?;
            entry.insert("date".to_string(), Value::String(formatted));

            let responsibilities = entry.get("responsibilities").ok_or(Error::MissingField {
                section: "work_experience",
                field: "responsibilities",
            })?;
            self.quantify_achievements(responsibilities, &mut suggestions);
        }

        Ok(suggestions)
    }

    fn process_volunteer_experience(&self, record: &mut Map<String, Value>) -> Result<()> {
        for entry in section_entries(record, "volunteer_experience") {
            let date = entry.get("date").ok_or(Error::MissingField {
                section: "volunteer_experience",
                field: "date",
            })?;
            let formatted = format_date_range(&coerce_text(date))?;
            entry.insert("date".to_string(), Value::String(formatted));
        }
        Ok(())
    }

    fn process_certifications(&self, record: &mut Map<String, Value>) {
        let year = format_year(&Value::from(self.config.current_year));

        if let Some(Value::Array(certifications)) = record.get_mut("certifications") {
            for cert in certifications.iter_mut() {
                if let Value::String(text) = cert {
                    // Re-normalizing must not stack year suffixes.
                    if !text.ends_with(&format!("({year})")) {
                        *text = format!("{text} ({year})");
                    }
                }
            }
        }
    }

    fn process_awards(&self, record: &mut Map<String, Value>) -> Result<()> {
        for entry in section_entries(record, "awards") {
            let year = entry.get("year").ok_or(Error::MissingField {
                section: "awards",
                field: "year",
            })?;
            let formatted = format_year(year);
            entry.insert("year".to_string(), Value::String(formatted));
        }
        Ok(())
    }

    /// Analyze each achievement without modifying it. Fabricating a metric
    /// would be a false claim, so unquantified items only ever produce
    /// advisory suggestions.
    fn quantify_achievements(&self, items: &Value, suggestions: &mut Vec<Suggestion>) {
        let Value::Array(items) = items else {
            return;
        };

        for item in items {
            let Some(sentence) = item.as_str() else {
                continue;
            };
            if let Some(advice) = self.analyzer.review(sentence, self.config.mode) {
                suggestions.push(Suggestion {
                    section: "work_experience".to_string(),
                    original: sentence.to_string(),
                    advice,
                });
            }
        }
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Iterate the object entries of a list-valued section; non-object entries
/// are skipped.
fn section_entries<'a>(
    record: &'a mut Map<String, Value>,
    section: &str,
) -> impl Iterator<Item = &'a mut Map<String, Value>> {
    record
        .get_mut(section)
        .and_then(Value::as_array_mut)
        .map(|entries| entries.iter_mut())
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuggestionMode;
    use serde_json::json;

    fn test_config() -> NormalizerConfig {
        NormalizerConfig {
            mode: SuggestionMode::Silent,
            max_summary_sentences: 3,
            current_year: 2024,
        }
    }

    fn sample_record() -> Map<String, Value> {
        json!({
            "summary": "Experienced software developer with expertise in Rust. \
                        Passionate about efficient solutions. \
                        Skilled in agile methodologies. \
                        Also enjoys long walks.",
            "skills": ["Python", "SQL"],
            "education": [{
                "degree": "BSc Computer Science",
                "institution": "University of Technology",
                "graduation_year": 2020
            }],
            "work_experience": [{
                "title": "Software Developer",
                "company": "Tech Solutions Inc.",
                "date": "2020 - Present",
                "responsibilities": [
                    "Increased revenue by 30%",
                    "Led a team"
                ]
            }],
            "volunteer_experience": [{
                "organization": "Code for Good",
                "role": "Volunteer Developer",
                "date": "2019 - 2020"
            }],
            "certifications": ["AWS Certified"],
            "awards": [{"title": "Best Innovation Award", "year": 2021}]
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_all_sections_present_after_normalize() {
        let normalizer = Normalizer::new(test_config());
        let mut record = Map::new();
        normalizer.normalize(&mut record).unwrap();

        for section in SECTIONS {
            assert!(record.contains_key(section), "missing section {section}");
            assert!(record[section].is_array());
        }
    }

    #[test]
    fn test_ensure_sections_does_not_overwrite() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();
        assert_eq!(record["skills"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_summary_condensed_to_three_sentences() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();

        let summary = record["summary"].as_str().unwrap();
        assert!(summary.split('.').count() <= 4);
        assert!(!summary.contains("long walks"));
    }

    #[test]
    fn test_skills_normalized_to_pairs() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();

        assert_eq!(
            record["skills"],
            json!([
                {"name": "Python", "level": ""},
                {"name": "SQL", "level": ""}
            ])
        );
    }

    #[test]
    fn test_skills_idempotent_via_first_element_heuristic() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();
        let first_pass = record["skills"].clone();

        normalizer.normalize(&mut record).unwrap();
        assert_eq!(record["skills"], first_pass);
    }

    #[test]
    fn test_dates_and_years_formatted() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();

        assert_eq!(
            record["work_experience"][0]["date"],
            json!("01/2020 - Present")
        );
        assert_eq!(
            record["volunteer_experience"][0]["date"],
            json!("01/2019 - 01/2020")
        );
        assert_eq!(record["education"][0]["graduation_year"], json!("2020"));
        assert_eq!(record["awards"][0]["year"], json!("2021"));
    }

    #[test]
    fn test_certifications_get_current_year_suffix() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();

        assert_eq!(record["certifications"][0], json!("AWS Certified (2024)"));
    }

    #[test]
    fn test_certification_suffix_not_stacked_on_renormalize() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        normalizer.normalize(&mut record).unwrap();
        normalizer.normalize(&mut record).unwrap();

        assert_eq!(record["certifications"][0], json!("AWS Certified (2024)"));
    }

    #[test]
    fn test_scalar_sections_coerced_to_lists() {
        let normalizer = Normalizer::new(test_config());
        let mut record = json!({"certifications": "AWS Certified"})
            .as_object()
            .unwrap()
            .clone();
        normalizer.normalize(&mut record).unwrap();

        assert_eq!(record["certifications"], json!(["AWS Certified (2024)"]));
    }

    #[test]
    fn test_responsibilities_never_mutated() {
        let mut config = test_config();
        config.mode = SuggestionMode::Advise;
        let normalizer = Normalizer::new(config);

        let mut record = sample_record();
        let suggestions = normalizer.normalize(&mut record).unwrap();

        assert_eq!(
            record["work_experience"][0]["responsibilities"],
            json!(["Increased revenue by 30%", "Led a team"])
        );
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].original, "Led a team");
        assert!(suggestions[0].advice.to_lowercase().contains("led"));
    }

    #[test]
    fn test_stub_tagger_flows_through_normalizer() {
        use crate::analyzer::{PosTag, Token};

        struct EverythingIsANumber;

        impl crate::analyzer::Tagger for EverythingIsANumber {
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

        let mut config = test_config();
        config.mode = SuggestionMode::Advise;
        let normalizer = Normalizer::with_tagger(config, Box::new(EverythingIsANumber));

        let mut record = sample_record();
        let suggestions = normalizer.normalize(&mut record).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_silent_mode_emits_no_suggestions() {
        let normalizer = Normalizer::new(test_config());
        let mut record = sample_record();
        let suggestions = normalizer.normalize(&mut record).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_missing_date_is_a_missing_field_error() {
        let normalizer = Normalizer::new(test_config());
        let mut record = json!({
            "work_experience": [{"title": "Developer", "company": "Acme"}]
        })
        .as_object()
        .unwrap()
        .clone();

        let err = normalizer.normalize(&mut record).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField { section: "work_experience", field: "date" }
        ));
    }

    #[test]
    fn test_malformed_date_range_is_a_format_error() {
        let normalizer = Normalizer::new(test_config());
        let mut record = json!({
            "volunteer_experience": [{"organization": "Org", "date": "2019"}]
        })
        .as_object()
        .unwrap()
        .clone();

        let err = normalizer.normalize(&mut record).unwrap_err();
        assert!(matches!(err, Error::Format { what: "date range", .. }));
        assert!(err.to_string().contains("2019"));
    }
}
