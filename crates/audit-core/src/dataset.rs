//! Questionnaire dataset: intro copy, sections, scoring bands, next steps
//!
//! The dataset is plain structured data. It is either the built-in
//! executive audit (see [`crate::builtin`]) or loaded from a TOML file, and
//! is validated once before the flow starts. After that it is shared
//! read-only (wrapped in an `Arc` by the app layer).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::scoring::{self, BandTable};
use crate::types::Severity;

/// Introductory copy shown before the assessment starts
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Intro {
    pub headline: String,
    /// Paragraphs separated by blank lines
    pub description: String,
    #[serde(default)]
    pub footer: String,
}

/// A named group of questions sharing introductory context
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Citation / context text shown with the section header
    #[serde(default)]
    pub info: String,
    pub questions: Vec<String>,
}

/// An inclusive score range mapped to a level and interpretation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreBand {
    pub min: u32,
    pub max: u32,
    pub level: String,
    pub text: String,
    #[serde(default)]
    pub severity: Severity,
}

impl ScoreBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Guidance shown below the score
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NextStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub call_to_action: String,
}

/// Results copy: bands plus next-step guidance
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResultsCopy {
    pub bands: Vec<ScoreBand>,
    #[serde(default)]
    pub next_step: NextStep,
}

/// Raw dataset as written in a TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Dataset {
    pub intro: Intro,
    pub sections: Vec<Section>,
    pub results: ResultsCopy,
}

impl Dataset {
    /// Parse a dataset from TOML text (not yet validated)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a dataset file (not yet validated)
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::dataset_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let dataset = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
        debug!("Loaded dataset from {:?}", path);
        Ok(dataset)
    }

    /// Number of questions across all sections
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

/// One question of the flattened list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1-based position in the flattened list
    pub number: usize,
    pub text: String,
    pub section_index: usize,
    pub section_title: String,
    pub section_subtitle: String,
    pub section_info: String,
    /// True only for the first question of each section
    pub is_first_of_section: bool,
}

/// Flatten sections into a single ordered question list
///
/// Order is section order, then in-section order.
pub fn flatten_sections(sections: &[Section]) -> Vec<Question> {
    sections
        .iter()
        .enumerate()
        .flat_map(|(section_index, section)| {
            section
                .questions
                .iter()
                .enumerate()
                .map(move |(i, text)| (section_index, section, i, text))
        })
        .enumerate()
        .map(|(flat_index, (section_index, section, i, text))| Question {
            number: flat_index + 1,
            text: text.clone(),
            section_index,
            section_title: section.title.clone(),
            section_subtitle: section.subtitle.clone(),
            section_info: section.info.clone(),
            is_first_of_section: i == 0,
        })
        .collect()
}

/// A validated dataset with its flattened questions
#[derive(Debug, Clone)]
pub struct Assessment {
    intro: Intro,
    sections: Vec<Section>,
    questions: Vec<Question>,
    bands: BandTable,
    next_step: NextStep,
}

impl Assessment {
    /// Validate a raw dataset and flatten its questions
    pub fn new(dataset: Dataset) -> Result<Self> {
        if dataset.sections.is_empty() {
            return Err(Error::dataset_invalid("dataset has no sections"));
        }
        if let Some(empty) = dataset.sections.iter().find(|s| s.questions.is_empty()) {
            return Err(Error::dataset_invalid(format!(
                "section '{}' has no questions",
                empty.title
            )));
        }

        let questions = flatten_sections(&dataset.sections);
        let max_score = scoring::max_score(questions.len());
        let bands = BandTable::new(dataset.results.bands, max_score)?;

        Ok(Self {
            intro: dataset.intro,
            sections: dataset.sections,
            questions,
            bands,
            next_step: dataset.results.next_step,
        })
    }

    /// The built-in executive stress & trauma audit
    pub fn builtin() -> Self {
        let dataset = crate::builtin::dataset();
        let questions = flatten_sections(&dataset.sections);
        Self {
            intro: dataset.intro,
            sections: dataset.sections,
            questions,
            bands: BandTable::new_unchecked(dataset.results.bands),
            next_step: dataset.results.next_step,
        }
    }

    /// Load and validate a dataset file
    pub fn load(path: &Path) -> Result<Self> {
        let assessment = Self::new(Dataset::from_file(path)?)?;
        info!(
            "Dataset {:?}: {} sections, {} questions",
            path,
            assessment.sections.len(),
            assessment.questions.len()
        );
        Ok(assessment)
    }

    pub fn intro(&self) -> &Intro {
        &self.intro
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn max_score(&self) -> u32 {
        scoring::max_score(self.questions.len())
    }

    pub fn bands(&self) -> &[ScoreBand] {
        self.bands.bands()
    }

    /// Band matching a total score (last band when none matches)
    pub fn resolve_band(&self, score: u32) -> &ScoreBand {
        self.bands.resolve(score)
    }

    pub fn next_step(&self) -> &NextStep {
        &self.next_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn section(title: &str, n: usize) -> Section {
        Section {
            title: title.to_string(),
            subtitle: String::new(),
            info: format!("{title} info"),
            questions: (1..=n).map(|i| format!("{title} q{i}")).collect(),
        }
    }

    fn band(min: u32, max: u32, level: &str) -> ScoreBand {
        ScoreBand {
            min,
            max,
            level: level.to_string(),
            text: format!("{level} text"),
            severity: Severity::Low,
        }
    }

    fn small_dataset() -> Dataset {
        Dataset {
            intro: Intro {
                headline: "Check".into(),
                description: "Answer honestly.".into(),
                footer: String::new(),
            },
            sections: vec![section("A", 2), section("B", 1)],
            results: ResultsCopy {
                bands: vec![band(0, 7, "Low"), band(8, 15, "High")],
                next_step: NextStep::default(),
            },
        }
    }

    #[test]
    fn test_flatten_builtin_yields_25_ordered_questions() {
        let assessment = Assessment::builtin();
        let questions = assessment.questions();

        assert_eq!(questions.len(), 25);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.number, i + 1);
            assert_eq!(q.is_first_of_section, i % 5 == 0, "question {}", i);
            assert_eq!(q.section_index, i / 5);
        }
    }

    #[test]
    fn test_flatten_preserves_section_then_question_order() {
        let questions = flatten_sections(&[section("A", 2), section("B", 3)]);
        let texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["A q1", "A q2", "B q1", "B q2", "B q3"]);
        assert_eq!(questions[2].section_title, "B");
        assert_eq!(questions[2].section_info, "B info");
        assert!(questions[2].is_first_of_section);
        assert!(!questions[3].is_first_of_section);
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let sections = vec![section("A", 4), section("B", 2)];
        assert_eq!(flatten_sections(&sections), flatten_sections(&sections));
    }

    #[test]
    fn test_assessment_new_accepts_valid_dataset() {
        let assessment = Assessment::new(small_dataset()).unwrap();
        assert_eq!(assessment.total_questions(), 3);
        assert_eq!(assessment.max_score(), 15);
        assert_eq!(assessment.resolve_band(9).level, "High");
    }

    #[test]
    fn test_assessment_rejects_empty_sections() {
        let mut dataset = small_dataset();
        dataset.sections.clear();
        let err = Assessment::new(dataset).unwrap_err();
        assert!(matches!(err, Error::DatasetInvalid { .. }));
    }

    #[test]
    fn test_assessment_rejects_section_without_questions() {
        let mut dataset = small_dataset();
        dataset.sections.push(section("Empty", 0));
        let err = Assessment::new(dataset).unwrap_err();
        assert!(err.to_string().contains("Empty"));
    }

    #[test]
    fn test_assessment_rejects_band_gap() {
        let mut dataset = small_dataset();
        dataset.results.bands = vec![band(0, 6, "Low"), band(8, 15, "High")];
        let err = Assessment::new(dataset).unwrap_err();
        assert!(matches!(err, Error::DatasetInvalid { .. }));
    }

    #[test]
    fn test_builtin_passes_validation() {
        let dataset = crate::builtin::dataset();
        assert!(Assessment::new(dataset).is_ok());
    }

    #[test]
    fn test_dataset_from_toml() {
        let content = r#"
[intro]
headline = "Team Check"
description = "A short check."

[[sections]]
title = "Focus"
info = "Attention matters."
questions = ["I lose focus.", "I skip breaks."]

[results]
[[results.bands]]
min = 0
max = 5
level = "Calm"
text = "All good."

[[results.bands]]
min = 6
max = 10
level = "Strained"
severity = "high"
text = "Take a break."

[results.next_step]
title = "Next"
description = "Talk to someone."
points = ["Rest"]
call_to_action = "Book a call."
"#;
        let dataset = Dataset::from_toml_str(content).unwrap();
        assert_eq!(dataset.question_count(), 2);
        assert_eq!(dataset.sections[0].subtitle, "");

        let assessment = Assessment::new(dataset).unwrap();
        assert_eq!(assessment.max_score(), 10);
        assert_eq!(assessment.resolve_band(6).severity, Severity::High);
        assert_eq!(assessment.next_step().points, vec!["Rest".to_string()]);
    }

    #[test]
    fn test_dataset_from_missing_file() {
        let temp = tempdir().unwrap();
        let err = Dataset::from_file(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { .. }));
    }

    #[test]
    fn test_dataset_from_invalid_toml_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();
        let err = Dataset::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_builtin_round_trips_through_toml() {
        let dataset = crate::builtin::dataset();
        let text = toml::to_string(&dataset).unwrap();
        let temp = tempdir().unwrap();
        let path = temp.path().join("audit.toml");
        std::fs::write(&path, text).unwrap();

        let loaded = Assessment::load(&path).unwrap();
        assert_eq!(loaded.total_questions(), 25);
        assert_eq!(loaded.intro().headline, Assessment::builtin().intro().headline);
    }
}
