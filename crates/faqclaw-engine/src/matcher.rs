//! Best-match selection over the catalog questions.

use crate::normalize::Normalizer;
use crate::tfidf;

/// Default acceptance threshold. Calibrated against representative
/// catalogs; override per deployment via `[matcher]` config.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Matches free-text queries against a list of catalog questions.
///
/// Stateless across calls: every lookup is a cold, single-shot
/// classification over the immutable catalog snapshot, so a shared
/// `Matcher` is safe to call from concurrently composed surfaces.
pub struct Matcher {
    normalizer: Normalizer,
    threshold: f64,
}

impl Matcher {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            normalizer: Normalizer::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Return the catalog question closest to `query`, or `None` when
    /// nothing scores strictly above the threshold.
    ///
    /// Questions are scored in input order; ties keep the earliest
    /// index, and the returned string is always an element of
    /// `questions` (original casing intact).
    pub fn best_match<'a>(&self, query: &str, questions: &'a [String]) -> Option<&'a str> {
        if questions.is_empty() {
            return None;
        }

        let normalized_query = self.normalizer.normalize(query);
        let normalized: Vec<String> = questions
            .iter()
            .map(|q| self.normalizer.normalize(q))
            .collect();

        let scores = tfidf::similarity_scores(&normalized_query, &normalized);

        let mut best_index = 0;
        let mut best_score = scores[0];
        for (index, &score) in scores.iter().enumerate().skip(1) {
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        tracing::debug!(
            "Best candidate {:?} scored {best_score:.3} (threshold {})",
            questions[best_index],
            self.threshold
        );

        if best_score > self.threshold {
            Some(questions[best_index].as_str())
        } else {
            None
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internship_questions() -> Vec<String> {
        vec![
            "What is the internship duration?".into(),
            "How do I apply?".into(),
        ]
    }

    #[test]
    fn test_exact_question_self_matches() {
        let matcher = Matcher::new();
        let questions = internship_questions();
        let best = matcher.best_match("What is the internship duration?", &questions);
        assert_eq!(best, Some("What is the internship duration?"));
    }

    #[test]
    fn test_rephrased_question_matches() {
        let matcher = Matcher::new();
        let questions = internship_questions();
        let best = matcher.best_match("how long is the internship", &questions);
        assert_eq!(best, Some("What is the internship duration?"));
    }

    #[test]
    fn test_gibberish_returns_none() {
        let matcher = Matcher::new();
        let questions = internship_questions();
        assert_eq!(
            matcher.best_match("asdkjasdkj nonsense gibberish", &questions),
            None
        );
    }

    #[test]
    fn test_result_is_always_a_catalog_question() {
        let matcher = Matcher::new();
        let questions = internship_questions();
        for query in ["how do i apply", "internship duration", "apply now please"] {
            if let Some(best) = matcher.best_match(query, &questions) {
                assert!(questions.iter().any(|q| q == best));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let matcher = Matcher::new();
        let questions = internship_questions();
        let first = matcher.best_match("how do I apply?", &questions);
        let second = matcher.best_match("how do I apply?", &questions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_question_list_returns_none() {
        let matcher = Matcher::new();
        assert_eq!(matcher.best_match("anything", &[]), None);
        assert_eq!(matcher.best_match("", &[]), None);
    }

    #[test]
    fn test_empty_query_returns_none() {
        let matcher = Matcher::new();
        assert_eq!(matcher.best_match("", &internship_questions()), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        // A self-match scores exactly 1.0, which is not strictly
        // greater than a threshold of 1.0.
        let questions = vec!["alpha beta".to_string()];
        let at_threshold = Matcher::with_threshold(1.0);
        assert_eq!(at_threshold.best_match("alpha beta", &questions), None);

        let below_threshold = Matcher::with_threshold(0.99);
        assert_eq!(
            below_threshold.best_match("alpha beta", &questions),
            Some("alpha beta")
        );
    }

    #[test]
    fn test_tie_break_keeps_earliest() {
        let matcher = Matcher::new();
        let questions = vec!["same words here".to_string(), "same words here".to_string()];
        let best = matcher.best_match("same words here", &questions);
        assert!(std::ptr::eq(best.unwrap(), questions[0].as_str()));
    }
}
