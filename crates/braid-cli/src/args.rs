//! Command-line argument definitions for the Braid console.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the configuration file, the grammar rule
//! and logging verbosity, and optionally supply expressions to parse once
//! instead of starting the interactive console.

use clap::Parser;

use crate::grammar::Rule;

/// Command-line arguments for the Braid console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Expressions to parse once; the interactive console starts when none are given
    #[arg(value_name = "EXPR")]
    pub expressions: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Grammar rule used to parse input, overriding the configuration
    #[arg(short, long, value_enum)]
    pub rule: Option<Rule>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["braid"]).unwrap();

        assert!(args.expressions.is_empty());
        assert_eq!(args.config, None);
        assert_eq!(args.rule, None);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_rule_and_expressions() {
        let args =
            Args::try_parse_from(["braid", "--rule", "expression", "42", "(f x)"]).unwrap();

        assert_eq!(args.rule, Some(Rule::Expression));
        assert_eq!(args.expressions, ["42", "(f x)"]);
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        assert!(Args::try_parse_from(["braid", "--rule", "statement"]).is_err());
    }
}
