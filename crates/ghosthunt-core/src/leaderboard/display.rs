//! Console rendering of the leaderboard.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::leaderboard::Leaderboard;
use crate::score::{RecordId, ScoreRecord};

const NO_SCORES: &str = "No scores yet";

/// One leaderboard line: `"1. Alice: Scored 7.5/10 in 83.2s"`.
pub fn format_entry(position: usize, record: &ScoreRecord, max_score: usize) -> String {
    format!(
        "{}. {}: Scored {:.1}/{} in {:.1}s",
        position + 1,
        record.name,
        record.score,
        max_score,
        record.elapsed_seconds
    )
}

/// Render the top `limit` rows, highlighting the record with id `highlight`.
pub fn format_leaderboard(
    board: &Leaderboard,
    limit: usize,
    max_score: usize,
    highlight: Option<&RecordId>,
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", "Leaderboard".yellow().bold());

    if board.is_empty() {
        let _ = writeln!(output, "  {}", NO_SCORES);
        return output;
    }

    for (position, record) in board.top(limit).iter().enumerate() {
        let line = format_entry(position, record, max_score);
        if highlight == Some(&record.id) {
            let _ = writeln!(output, "  {}", line.red().bold());
        } else {
            let _ = writeln!(output, "  {}", line);
        }
    }

    // Current player outside the shown rows
    if let Some(id) = highlight
        && let Some(position) = board.position_of(id)
        && position >= limit
    {
        let _ = writeln!(output, "  {}", "...".dimmed());
        let line = format_entry(position, &board.entries()[position], max_score);
        let _ = writeln!(output, "  {}", line.red().bold());
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        let record = ScoreRecord::new("Alice", "a@x.com", 7.5, 83.24);
        assert_eq!(
            format_entry(0, &record, 10),
            "1. Alice: Scored 7.5/10 in 83.2s"
        );
    }

    #[test]
    fn test_empty_board() {
        let out = format_leaderboard(&Leaderboard::default(), 10, 10, None);
        assert!(out.contains(NO_SCORES));
    }

    #[test]
    fn test_limit_and_out_of_range_highlight() {
        let mut records: Vec<ScoreRecord> = (0..5)
            .map(|i| ScoreRecord::new(format!("p{}", i), "p@x.com", 5.0 - i as f64, 10.0))
            .collect();
        let last = ScoreRecord::new("me", "me@x.com", 0.0, 99.0);
        records.push(last.clone());
        let board = Leaderboard::new(records);

        let out = format_leaderboard(&board, 3, 10, Some(&last.id));
        assert!(out.contains("1. p0"));
        assert!(out.contains("3. p2"));
        assert!(!out.contains("4. p3"));
        assert!(out.contains("6. me"));
    }
}
