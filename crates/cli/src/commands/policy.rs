use anyhow::Context;
use app_utils::yaml::{PolicyParser, TomlParser, YamlParser};
use colored::*;
use std::fs;
use std::path::Path;

pub fn check(file_path: &str) -> anyhow::Result<()> {
    println!("{} {}", "Checking policy:".bold(), file_path);

    let content = fs::read_to_string(file_path).context("Failed to read file")?;

    let is_yaml = matches!(
        Path::new(file_path).extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let parser: &dyn PolicyParser = if is_yaml { &YamlParser } else { &TomlParser };
    tracing::debug!(file = file_path, is_yaml, bytes = content.len(), "parsing policy file");
    let policy = parser.parse(&content).context("Policy parsing error")?;

    println!("  {} Policy name: {}", "✓".green(), policy.name());
    if let Some(description) = policy.description() {
        println!("  {} Description: {}", "✓".green(), description);
    }

    let db = app_utils::database::builtin();
    let selector = policy
        .selector(db)
        .with_context(|| format!("Policy '{}' has an unusable rule string", policy.name()))?;
    println!("  {} Rule: {}", "✓".green(), selector.rule());
    println!("  {} Suites: {}", "✓".green(), selector.len());

    let mut warnings = 0;

    // Selections that still admit weak suites
    let weak = selector
        .iter()
        .filter_map(|name| db.lookup(name))
        .filter(|entry| entry.strength < core_suites::Strength::Medium)
        .count();
    if weak > 0 {
        println!("  {} {} weak suite(s) selected", "⚠".yellow(), weak);
        warnings += 1;
    }

    // Tokens naming suites this catalog does not know
    let effective = core_suites::RuleSet::parse(db, policy.suites())?;
    let tokens = policy.suites().split(':').count();
    if effective.len() < tokens {
        println!(
            "  {} {} token(s) name unknown suites and were ignored",
            "⚠".yellow(),
            tokens - effective.len()
        );
        warnings += 1;
    }

    println!();
    if warnings == 0 {
        println!("{} Policy is valid!", "✓".green().bold());
    } else {
        println!(
            "{} Policy is valid with {} warning(s)",
            "⚠".yellow().bold(),
            warnings
        );
    }

    Ok(())
}
