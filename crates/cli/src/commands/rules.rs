use anyhow::{bail, Context};
use app_utils::env::{rule_string_from_default_env, DEFAULT_RULE_STRING_VAR};
use colored::*;
use core_suites::{Operation, RuleSet, Selector};

pub fn eval(rule: Option<&str>, openssl: bool) -> anyhow::Result<()> {
    let rule = match rule {
        Some(rule) => rule.to_string(),
        None => match rule_string_from_default_env()? {
            Some(rule) => rule,
            None => bail!("No rule string given and {} is not set", DEFAULT_RULE_STRING_VAR),
        },
    };

    let db = app_utils::database::builtin();
    let selector = Selector::from_rule_string(db, &rule)
        .with_context(|| format!("Failed to evaluate cipher rule '{}'", rule))?;

    let names = if openssl {
        selector.openssl_names()
    } else {
        selector.names()
    };
    for name in names {
        println!("{}", name);
    }

    Ok(())
}

pub fn explain(rule: &str) -> anyhow::Result<()> {
    let db = app_utils::database::builtin();
    let rules = RuleSet::parse(db, rule).with_context(|| format!("Invalid cipher rule '{}'", rule))?;

    println!("{} {}", "Explaining rule:".bold(), rule);
    for (i, parsed) in rules.iter().enumerate() {
        let predicate = &parsed.predicate;
        let matches = db.entries().iter().filter(|e| predicate.test(e)).count();

        if parsed.operation == Operation::SortByStrength {
            println!("  {} {:>2}. {}", "✓".green(), i + 1, parsed);
            continue;
        }

        let marker = if parsed.is_vacuous() || matches == 0 {
            "⚠".yellow()
        } else {
            "✓".green()
        };
        println!(
            "  {} {:>2}. {:<24} {:?}: {} ({} suite(s))",
            marker,
            i + 1,
            parsed.to_string(),
            parsed.operation,
            predicate,
            matches
        );
        if predicate.is_always_true() {
            println!("        matches every suite");
        } else if parsed.is_vacuous() {
            println!("        matches no suite; skipped");
        }
    }

    println!();
    match Selector::from_rule_string(db, rule) {
        Ok(selector) => println!(
            "{} {} suite(s) selected",
            "✓".green().bold(),
            selector.len()
        ),
        Err(e) => println!("{} {}", "✗".red().bold(), e),
    }

    Ok(())
}
