/// Score input parsing: JSON arrays or one value per line.
///
/// Missing markers are `null` in JSON, and `NA`, `NaN`, `null` or a blank line in
/// plain text (case-insensitive).
use rankorder_core::Score;

/// Plain-text spellings of a missing score.
const MISSING_TOKENS: [&str; 3] = ["na", "nan", "null"];

/// Parse one plain-text token into a score.
pub fn parse_score_token(token: &str) -> Result<Score, String> {
    let t = token.trim();
    if t.is_empty() || MISSING_TOKENS.iter().any(|m| t.eq_ignore_ascii_case(m)) {
        return Ok(Score::Missing);
    }
    t.parse::<f64>()
        .map(Score::from)
        .map_err(|_| format!("\"{t}\" is not a number or a missing marker (NA, NaN, null)"))
}

/// Parse a whole input as either a JSON array (`[1.5, null, 3]`) or one score per line.
///
/// Leading and trailing blank lines are ignored; blank lines in between are missing scores.
pub fn parse_scores_from_str(content: &str) -> Result<Vec<Score>, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| format!("Input looks like JSON but failed to parse: {e}"));
    }

    // Number lines against the original input, not the trimmed view
    let lines: Vec<&str> = content.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
    let last = lines.iter().rposition(|l| !l.trim().is_empty()).unwrap_or(0);

    lines[first..=last]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            parse_score_token(line).map_err(|e| format!("line {}: {e}", first + i + 1))
        })
        .collect()
}
