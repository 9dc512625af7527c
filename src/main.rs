//! Lifecore - rule-string validation CLI
//!
//! Parses a rule notation into its canonical form and prints it.
//!
//! # Usage
//! - `lifecore B36/S23` - compact notation
//! - `lifecore "3,6" "2 3"` - delimited birth and survival fields
//! - `--json` - emit the parsed rule as JSON

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifecore::{parse_compact, parse_delimited, Config, RuleSet};

fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifecore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}ms",
        config.default_ttl_ms
    );

    let mut json = false;
    let mut fields: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => fields.push(arg),
        }
    }

    let rule = match fields.as_slice() {
        [compact] => parse_compact(compact),
        [birth, survival] => {
            parse_delimited(birth, survival).context("Failed to parse delimited rule")?
        }
        _ => bail!("Usage: lifecore [--json] <rulestring> | lifecore [--json] <birth> <survival>"),
    };

    print_rule(&rule, json)?;
    Ok(())
}

fn print_rule(rule: &RuleSet, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rule)?);
    } else {
        println!("{}", rule);
        println!("  birth:    {:?}", rule.birth);
        println!("  survival: {:?}", rule.survival);
    }
    Ok(())
}
