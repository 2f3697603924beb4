//! Strategic viability heuristic
//!
//! Scores the free-text description of a project from keyword presence and
//! text length. This is a fixed heuristic, not language analysis.

use serde::{Deserialize, Serialize};

use crate::project::StrategicInput;

/// Terms counted by substring presence, each at most once
pub const KEYWORDS: [&str; 7] = ["roi", "efficiency", "growth", "ai", "automate", "scale", "cost"];

/// Upper bound on any score
pub const MAX_SCORE: u8 = 98;

const BASE_SCORE: f64 = 70.0;
const POINTS_PER_KEYWORD: f64 = 3.0;
const DENSITY_WEIGHT: f64 = 0.1;
/// Characters at which the length term saturates
const FULL_DENSITY_LENGTH: f64 = 400.0;

/// Fields longer than this count as filled in
const MIN_FIELD_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    /// Score above 80
    High,
    Review,
}

/// Outcome of scoring a strategic description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub viability: u8,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub keyword_matches: usize,
}

/// Quality flag for a single text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldQuality {
    Valid,
    Incomplete,
}

/// Score a project description
///
/// `score = min(floor(70 + 3 * matches + 0.1 * density), 98)` where density is
/// `min(len / 400, 1) * 100` over the combined, lower-cased text.
pub fn score_strategy(input: &StrategicInput) -> ScoreResult {
    let text = input.combined_text();
    let keyword_matches = count_keywords(&text);
    let score = score_from(keyword_matches, text.chars().count());

    let recommendation = if score > 80 {
        Recommendation::High
    } else {
        Recommendation::Review
    };

    let mut strengths = vec!["Defined scope".to_string()];
    if keyword_matches > 2 {
        strengths.push("Strong technical terminology".to_string());
    }

    let mut weaknesses = Vec::new();
    if score < 85 {
        weaknesses.push("Execution detail required".to_string());
    }

    ScoreResult {
        score,
        viability: score,
        recommendation,
        strengths,
        weaknesses,
        keyword_matches,
    }
}

/// Number of distinct keywords present anywhere in `text`
pub fn count_keywords(text: &str) -> usize {
    KEYWORDS.iter().filter(|k| text.contains(*k)).count()
}

fn score_from(keyword_matches: usize, length: usize) -> u8 {
    let density = (length as f64 / FULL_DENSITY_LENGTH).min(1.0) * 100.0;
    let raw = (BASE_SCORE + keyword_matches as f64 * POINTS_PER_KEYWORD + density * DENSITY_WEIGHT).floor();
    raw.clamp(0.0, MAX_SCORE as f64) as u8
}

/// Whether a single form field has enough text to be useful
pub fn assess_field(text: &str) -> FieldQuality {
    if text.chars().count() > MIN_FIELD_LENGTH {
        FieldQuality::Valid
    } else {
        FieldQuality::Incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Text of exactly `length` characters containing the first `matches` keywords
    fn padded_text(matches: usize, length: usize) -> String {
        let mut text = KEYWORDS[..matches].join(" ");
        while text.len() < length {
            text.push('x');
        }
        text
    }

    #[test]
    fn test_empty_input_scores_baseline() {
        let result = score_strategy(&StrategicInput::default());
        // Three joining spaces give density 0.75 -> 70.075
        assert_eq!(result.score, 70);
        assert_eq!(result.viability, 70);
        assert_eq!(result.keyword_matches, 0);
        assert_eq!(result.recommendation, Recommendation::Review);
        assert_eq!(result.strengths, vec!["Defined scope"]);
        assert_eq!(result.weaknesses, vec!["Execution detail required"]);
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(count_keywords("scalefoo"), 1);
        // "ai" hides inside "maintain", "roi" inside "heroic"
        assert_eq!(count_keywords("maintain heroic"), 2);
        assert_eq!(count_keywords("cost cost cost"), 1);
        assert_eq!(count_keywords("nothing here"), 0);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let input = StrategicInput::new("AI Rollout", "High COST of manual work", "AUTOMATE triage", "ROI in 6 months");
        let result = score_strategy(&input);
        assert_eq!(result.keyword_matches, 4);
        assert!(result.strengths.contains(&"Strong technical terminology".to_string()));
    }

    #[test]
    fn test_score_formula() {
        // 7 keywords, saturated density: 70 + 21 + 10 = 101 -> capped
        assert_eq!(score_from(7, 400), 98);
        assert_eq!(score_from(7, 10_000), 98);
        // 200 chars -> density 50 -> +5
        assert_eq!(score_from(2, 200), 81);
        assert_eq!(score_from(0, 0), 70);
        assert_eq!(score_from(0, 399), 79);
    }

    #[test]
    fn test_score_monotone_in_matches() {
        let length = 120;
        let scores: Vec<u8> = (0..=KEYWORDS.len())
            .map(|m| {
                let text = padded_text(m, length);
                assert_eq!(text.len(), length);
                assert_eq!(count_keywords(&text), m);
                score_from(m, length)
            })
            .collect();

        assert!(scores.windows(2).all(|w| w[1] >= w[0]));
        assert!(scores.iter().all(|&s| s <= MAX_SCORE));
    }

    #[test]
    fn test_recommendation_threshold() {
        let long_text = "a".repeat(500);
        let strong = score_strategy(&StrategicInput::new("", &long_text, "", ""));
        // "a" repeated contains no keyword; density alone gives 80
        assert_eq!(strong.score, 80);
        assert_eq!(strong.recommendation, Recommendation::Review);

        let stronger = score_strategy(&StrategicInput::new("growth", &long_text, "", ""));
        assert_eq!(stronger.score, 83);
        assert_eq!(stronger.recommendation, Recommendation::High);
        assert_eq!(stronger.weaknesses.len(), 1);

        let best = score_strategy(&StrategicInput::new("growth roi cost", &long_text, "", ""));
        assert_eq!(best.score, 89);
        assert!(best.weaknesses.is_empty());
    }

    #[test]
    fn test_recommendation_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Recommendation::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&Recommendation::Review).unwrap(), "\"REVIEW\"");
    }

    #[test]
    fn test_assess_field() {
        assert_eq!(assess_field("Short name"), FieldQuality::Incomplete);
        assert_eq!(assess_field("exactly twenty chars"), FieldQuality::Incomplete);
        assert_eq!(assess_field("Reduce manual invoice handling"), FieldQuality::Valid);
    }
}
