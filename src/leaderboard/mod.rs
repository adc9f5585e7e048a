//! Leaderboard
//!
//! An in-memory score table kept sorted by score, highest first. Entries are
//! never deduplicated or trimmed. Ties keep submission order.

pub mod routes;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// A single stored score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
}

/// An unvalidated submission, as it arrives on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub name: Option<String>,
    /// Kept loose so bad input can be reported rather than failing to parse
    #[serde(default)]
    pub score: Option<Value>,
}

impl ScoreSubmission {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: Some(name.into()),
            score: Some(Value::from(score)),
        }
    }

    /// Check the submission and turn it into a storable entry
    pub fn validate(&self) -> Result<LeaderboardEntry, ValidationError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName)?;

        let score = match &self.score {
            None | Some(Value::Null) => return Err(ValidationError::MissingScore),
            Some(value) => parse_score(value)?,
        };

        Ok(LeaderboardEntry {
            name: name.to_string(),
            score,
        })
    }
}

/// Accept whole non-negative numbers, either as JSON numbers or numeric strings
fn parse_score(value: &Value) -> Result<u64, ValidationError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                    .map(|f| f as u64)
            })
            .ok_or_else(|| ValidationError::InvalidScore(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidScore(s.clone())),
        other => Err(ValidationError::InvalidScore(other.to_string())),
    }
}

/// Score table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Seed from a JSON array of `{name, score}` entries
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut entries: Vec<LeaderboardEntry> = serde_json::from_str(json)?;
        // Stable: equal scores keep file order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        log::info!("Loaded {} leaderboard entries", entries.len());
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// All entries, highest score first
    pub fn fetch_all(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Validate and store a submission. Returns the 1-indexed rank achieved.
    pub fn append(&mut self, submission: &ScoreSubmission) -> Result<usize, ValidationError> {
        let entry = submission.validate()?;
        Ok(self.insert(entry))
    }

    /// Insert an already-valid entry after any equal scores
    fn insert(&mut self, entry: LeaderboardEntry) -> usize {
        let pos = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        log::info!("Leaderboard: {} scored {} (rank {})", entry.name, entry.score, pos + 1);
        self.entries.insert(pos, entry);
        pos + 1
    }

    /// Rank a score would reach if submitted now (1-indexed)
    pub fn potential_rank(&self, score: u64) -> usize {
        self.entries.iter().filter(|e| e.score >= score).count() + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: Value) -> ScoreSubmission {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_fetch_all_sorted_descending() {
        let mut board = Leaderboard::new();
        board.append(&ScoreSubmission::new("B", 10)).unwrap();
        board.append(&ScoreSubmission::new("C", 5)).unwrap();
        board.append(&ScoreSubmission::new("D", 7)).unwrap();

        let names: Vec<_> = board.fetch_all().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["B", "D", "C"]);
        assert_eq!(board.top_score(), Some(10));
    }

    #[test]
    fn test_ties_keep_submission_order_and_no_dedup() {
        let mut board = Leaderboard::new();
        assert_eq!(board.append(&ScoreSubmission::new("first", 10)), Ok(1));
        assert_eq!(board.append(&ScoreSubmission::new("second", 10)), Ok(2));
        assert_eq!(board.append(&ScoreSubmission::new("first", 10)), Ok(3));
        assert_eq!(board.len(), 3);
        assert_eq!(board.entries()[1].name, "second");
    }

    #[test]
    fn test_rejects_non_numeric_score() {
        let mut board = Leaderboard::new();
        let err = board
            .append(&submission(json!({ "name": "A", "score": "x" })))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidScore("x".to_string()));
        assert!(board.is_empty());
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert_eq!(
            submission(json!({ "name": "A" })).validate(),
            Err(ValidationError::MissingScore)
        );
        assert_eq!(
            submission(json!({ "name": "A", "score": null })).validate(),
            Err(ValidationError::MissingScore)
        );
        assert_eq!(
            submission(json!({ "score": 3 })).validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            submission(json!({ "name": "   ", "score": 3 })).validate(),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_score_forms() {
        let ok = |v: Value| submission(json!({ "name": "A", "score": v })).validate();
        assert_eq!(ok(json!(12)).unwrap().score, 12);
        assert_eq!(ok(json!("12")).unwrap().score, 12);
        assert_eq!(ok(json!(12.0)).unwrap().score, 12);
        assert_eq!(ok(json!(0)).unwrap().score, 0);
        assert!(ok(json!(-1)).is_err());
        assert!(ok(json!(1.5)).is_err());
        assert!(ok(json!(true)).is_err());
        assert!(ok(json!([1])).is_err());
    }

    #[test]
    fn test_seed_from_json() {
        let board = Leaderboard::from_json(
            r#"[{"name":"low","score":1},{"name":"high","score":99},{"name":"mid","score":50}]"#,
        )
        .unwrap();
        assert_eq!(board.top_score(), Some(99));
        assert_eq!(board.entries()[2].name, "low");

        let round = Leaderboard::from_json(&board.to_json().unwrap()).unwrap();
        assert_eq!(round, board);
    }

    #[test]
    fn test_potential_rank() {
        let mut board = Leaderboard::new();
        assert_eq!(board.potential_rank(5), 1);
        board.append(&ScoreSubmission::new("a", 10)).unwrap();
        board.append(&ScoreSubmission::new("b", 5)).unwrap();
        assert_eq!(board.potential_rank(20), 1);
        assert_eq!(board.potential_rank(5), 3);
        assert_eq!(board.potential_rank(7), 2);
    }
}
