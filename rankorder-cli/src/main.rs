mod config;
mod output;
mod parse;

use clap::Parser;
use rankorder_core::{ranks_from_order, sort_indices, RankConfig, RankError, Score};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::RankorderConfig;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "rankorder", version, about = "Rank-order indices for a list of scores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the positions that sort the given scores
    Order(OrderArgs),
    /// Create a default config file at ~/.config/rankorder/config.toml
    Init,
}

#[derive(Parser)]
struct OrderArgs {
    /// File with scores: a JSON array (null = missing) or one score per line
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Inline score (repeatable). NA, NaN or null mark a missing score
    #[arg(long = "score", allow_hyphen_values = true)]
    inline_scores: Vec<String>,

    /// Missing score placement: "worst" (last) or "best" (first)
    #[arg(long)]
    missing: Option<String>,

    /// Direction for present scores: "asc" or "desc"
    #[arg(long)]
    direction: Option<String>,

    /// Tie-break for equal scores: "stable" or "first"
    #[arg(long)]
    ties: Option<String>,

    /// Print 1-based positions
    #[arg(long, conflicts_with = "zero_based")]
    one_based: bool,

    /// Print 0-based positions, overriding `one_based = true` in the config file
    #[arg(long)]
    zero_based: bool,

    /// Output JSON instead of table.
    /// `order` follows the --one-based/--zero-based convention; `ranks` are always 1-based
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/rankorder/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "rankorder=debug,rankorder_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load scores from all sources: --scores file, then --score inline args, or stdin.
fn load_scores(args: &OrderArgs) -> Vec<Score> {
    let mut scores = Vec::new();

    if let Some(ref path) = args.scores {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read scores file {}: {e}", path.display())));
        scores = parse::parse_scores_from_str(&content)
            .unwrap_or_else(|e| bail(format!("{}: {e}", path.display())));
        tracing::debug!(path = %path.display(), count = scores.len(), "loaded scores from file");
    }

    for token in &args.inline_scores {
        let score = parse::parse_score_token(token).unwrap_or_else(|e| bail(format!("--score: {e}")));
        scores.push(score);
    }

    // From stdin (only if no file and no inline scores)
    if args.scores.is_none() && args.inline_scores.is_empty() {
        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            bail("No scores provided. Use --scores <file>, --score <value>, or pipe scores via stdin.");
        }
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}")));
        scores = parse::parse_scores_from_str(&content).unwrap_or_else(|e| bail(format!("stdin: {e}")));
        tracing::debug!(count = scores.len(), "loaded scores from stdin");
    }

    scores
}

/// Merge CLI flags, config file values and defaults (CLI wins).
///
/// Returns the validated ranking config and whether positions are printed 1-based.
fn resolve_config(args: &OrderArgs, cfg: &RankorderConfig) -> Result<(RankConfig, bool), RankError> {
    let rank_config = RankConfig::parse(
        args.missing.as_deref().or(cfg.missing.as_deref()).unwrap_or("worst"),
        args.direction.as_deref().or(cfg.direction.as_deref()).unwrap_or("asc"),
        args.ties.as_deref().or(cfg.ties.as_deref()).unwrap_or("stable"),
    )?;

    let one_based = if args.one_based {
        true
    } else if args.zero_based {
        false
    } else {
        cfg.one_based.unwrap_or(false)
    };

    Ok((rank_config, one_based))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Order(args) => {
            init_tracing(args.verbose);
            run_order(args);
        }
        Commands::Init => {
            let path = config::config_path().unwrap_or_else(|e| bail(e));
            config::create_default_config(&path).unwrap_or_else(|e| bail(e));
            println!("Created config at {}", path.display());
            println!("Edit it to set your default missing placement, direction, etc.");
        }
    }
}

fn run_order(args: OrderArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = match args.config.clone() {
        Some(path) => path,
        None => config::config_path().unwrap_or_else(|e| bail(e)),
    };
    let cfg = config::load_config(&config_path).unwrap_or_else(|e| bail(e));

    // Validate every knob before reading any input
    let (rank_config, one_based) = resolve_config(&args, &cfg).unwrap_or_else(|e| bail(e));

    tracing::debug!(
        config = %config_path.display(),
        missing = %rank_config.missing_placement,
        direction = %rank_config.direction,
        ties = %rank_config.tie_break,
        one_based,
        "resolved configuration"
    );

    let scores = load_scores(&args);
    let order = sort_indices(&scores, &rank_config);

    if args.json {
        let ranks = ranks_from_order(&order);
        let json = output::render_json(&order, &ranks, &scores, one_based).unwrap_or_else(|e| bail(e));
        println!("{json}");
    } else {
        print!("{}", output::render_table(&order, &scores, one_based));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankorder_core::{Direction, MissingPlacement, TieBreak};

    fn order_args(extra: &[&str]) -> OrderArgs {
        let mut argv = vec!["rankorder", "order"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Order(args) => args,
            Commands::Init => panic!("expected the order subcommand"),
        }
    }

    fn file_config(missing: Option<&str>, direction: Option<&str>, ties: Option<&str>, one_based: Option<bool>) -> RankorderConfig {
        RankorderConfig {
            missing: missing.map(str::to_string),
            direction: direction.map(str::to_string),
            ties: ties.map(str::to_string),
            one_based,
        }
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let (config, one_based) = resolve_config(&order_args(&[]), &RankorderConfig::default()).unwrap();
        assert_eq!(config, RankConfig::default());
        assert!(!one_based);
    }

    #[test]
    fn test_config_file_applies_when_flags_absent() {
        let cfg = file_config(Some("best"), Some("desc"), Some("first"), Some(true));
        let (config, one_based) = resolve_config(&order_args(&[]), &cfg).unwrap();
        assert_eq!(
            config,
            RankConfig::new(MissingPlacement::Best, Direction::Descending, TieBreak::First)
        );
        assert!(one_based);
    }

    #[test]
    fn test_flags_override_config_file() {
        let cfg = file_config(Some("best"), Some("desc"), Some("first"), Some(true));
        let args = order_args(&["--missing", "worst", "--direction", "asc", "--ties", "stable", "--zero-based"]);
        let (config, one_based) = resolve_config(&args, &cfg).unwrap();
        assert_eq!(config, RankConfig::default());
        assert!(!one_based);
    }

    #[test]
    fn test_one_based_flag_over_config() {
        let cfg = file_config(None, None, None, Some(false));
        let (_, one_based) = resolve_config(&order_args(&["--one-based"]), &cfg).unwrap();
        assert!(one_based);
    }

    #[test]
    fn test_one_based_and_zero_based_conflict() {
        assert!(Cli::try_parse_from(["rankorder", "order", "--one-based", "--zero-based"]).is_err());
    }

    #[test]
    fn test_invalid_config_file_value_is_rejected() {
        let cfg = file_config(None, Some("sideways"), None, None);
        let err = resolve_config(&order_args(&[]), &cfg).unwrap_err();
        assert!(matches!(err, RankError::InvalidConfiguration { field: "direction", .. }));
    }

    #[test]
    fn test_valid_flag_masks_invalid_config_value() {
        let cfg = file_config(Some("nowhere"), None, None, None);
        let (config, _) = resolve_config(&order_args(&["--missing", "best"]), &cfg).unwrap();
        assert_eq!(config.missing_placement, MissingPlacement::Best);
    }

    #[test]
    fn test_negative_inline_scores_parse_as_values() {
        let args = order_args(&["--score", "-1.5", "--score", "NA"]);
        assert_eq!(args.inline_scores, vec!["-1.5", "NA"]);
    }
}
