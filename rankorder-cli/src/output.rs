/// Output formatting: terminal table and JSON.
use rankorder_core::Score;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput {
    order: Vec<usize>,
    ranks: Vec<usize>,
    missing: usize,
}

fn display_score(score: &Score) -> String {
    match score.value() {
        Some(v) => v.to_string(),
        None => "NA".to_string(),
    }
}

/// Render the order as a table: output rank, input position, input score.
pub fn render_table(order: &[usize], scores: &[Score], one_based: bool) -> String {
    let offset = usize::from(one_based);
    let score_width = scores.iter().map(|s| display_score(s).len()).max().unwrap_or(5).max(5);

    let mut out = String::new();
    out.push_str(&format!("    # | Position | {:>score_width$}\n", "Score"));
    out.push_str(&format!("------|----------|-{}\n", "-".repeat(score_width)));

    for (i, &position) in order.iter().enumerate() {
        out.push_str(&format!(
            "{:>5} | {:>8} | {:>score_width$}\n",
            i + 1,
            position + offset,
            display_score(&scores[position]),
        ));
    }

    let missing = scores.iter().filter(|s| s.is_missing()).count();
    out.push_str(&format!("\n{} scores ordered ({} missing)\n", scores.len(), missing));
    out
}

/// Render the order, per-position ranks and missing count as pretty JSON.
///
/// `order` holds positions, shifted by `one_based`. `ranks` are always 1-based, since a
/// rank counts places rather than indexing the input.
pub fn render_json(order: &[usize], ranks: &[usize], scores: &[Score], one_based: bool) -> Result<String, String> {
    let offset = usize::from(one_based);
    let output = JsonOutput {
        order: order.iter().map(|&p| p + offset).collect(),
        ranks: ranks.to_vec(),
        missing: scores.iter().filter(|s| s.is_missing()).count(),
    };
    serde_json::to_string_pretty(&output).map_err(|e| format!("Failed to serialize output: {e}"))
}
