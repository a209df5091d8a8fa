//! The question/answer catalog — immutable once loaded.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use faqclaw_core::error::{FaqClawError, Result};

/// One question/answer record. Both fields are required; a source
/// record missing either fails catalog construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// Immutable mapping from original question text (casing preserved)
/// to answer text, keeping the source order of questions.
///
/// Duplicate questions: the last answer wins, the first position is
/// kept. Source data is assumed deduplicated in practice.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<String>,
    answers: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from an ordered sequence of entries.
    pub fn from_entries(entries: Vec<QaEntry>) -> Self {
        let mut questions = Vec::with_capacity(entries.len());
        let mut answers = HashMap::with_capacity(entries.len());
        for entry in entries {
            if answers.insert(entry.question.clone(), entry.answer).is_none() {
                questions.push(entry.question);
            }
        }
        Self { questions, answers }
    }

    /// Load a catalog from a JSON file (an array of `{question, answer}`
    /// objects). Unreadable or malformed sources are a `Data` error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FaqClawError::Data(format!("Failed to read catalog {}: {e}", path.display()))
        })?;
        let entries: Vec<QaEntry> = serde_json::from_str(&content).map_err(|e| {
            FaqClawError::Data(format!("Failed to parse catalog {}: {e}", path.display()))
        })?;
        tracing::info!("📚 Catalog loaded: {} question(s)", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// The original question strings, in source order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Look up the answer for an original question string.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(q: &str, a: &str) -> QaEntry {
        QaEntry {
            question: q.into(),
            answer: a.into(),
        }
    }

    #[test]
    fn test_from_entries_preserves_order() {
        let catalog = Catalog::from_entries(vec![
            entry("What is the internship duration?", "3 months"),
            entry("How do I apply?", "Via the portal"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.questions()[0], "What is the internship duration?");
        assert_eq!(catalog.answer_for("How do I apply?"), Some("Via the portal"));
    }

    #[test]
    fn test_duplicate_question_last_answer_wins() {
        let catalog = Catalog::from_entries(vec![
            entry("How do I apply?", "By mail"),
            entry("What is the stipend?", "Unpaid"),
            entry("How do I apply?", "Via the portal"),
        ]);
        assert_eq!(catalog.len(), 2);
        // Last answer, first position.
        assert_eq!(catalog.questions()[0], "How do I apply?");
        assert_eq!(catalog.answer_for("How do I apply?"), Some("Via the portal"));
    }

    #[test]
    fn test_answer_for_uses_original_casing() {
        let catalog = Catalog::from_entries(vec![entry("How Do I Apply?", "Via the portal")]);
        assert_eq!(catalog.answer_for("How Do I Apply?"), Some("Via the portal"));
        assert_eq!(catalog.answer_for("how do i apply?"), None);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"question": "What is the internship duration?", "answer": "3 months"}}]"#
        )
        .unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.answer_for("What is the internship duration?"),
            Some("3 months")
        );
    }

    #[test]
    fn test_load_missing_field_is_data_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"question": "Orphaned question"}}]"#).unwrap();
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, FaqClawError::Data(_)));
    }

    #[test]
    fn test_load_malformed_json_is_data_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, FaqClawError::Data(_)));
    }

    #[test]
    fn test_load_unreadable_path_is_data_error() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, FaqClawError::Data(_)));
    }
}
