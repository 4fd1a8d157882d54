//! Braid CLI library
//!
//! This module contains the console logic for exploring the Braid parser
//! combinators through a small expression language.

pub mod error_adapter;
pub mod grammar;
pub mod repl;

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::{AppConfig, ConfigError, ReplConfig};
pub use error::CliError;
pub use error_adapter::ErrorAdapter;

use std::io::{self, BufRead, Write};

use log::info;

use grammar::Grammar;

/// Run the Braid console on standard input and output
///
/// # Errors
///
/// See [`run_with`].
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    run_with(args, stdin.lock(), io::stdout().lock())
}

/// Run the Braid console on the given input and output
///
/// With expressions in `args`, each is parsed once and printed. Otherwise
/// lines are read from `input` until it ends or the exit command is entered.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `input` - Source of console lines
/// * `output` - Destination for prompts, values and diagnostics
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Grammar construction errors
/// - I/O errors on `input` or `output`
/// - Command-line expressions that failed to parse
pub fn run_with<R, W>(args: &Args, input: R, mut output: W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let app_config = config::load_config(args.config.as_ref())?;
    let mut repl_config = app_config.repl().clone();
    if let Some(rule) = args.rule {
        repl_config = repl_config.with_rule(rule);
    }

    info!(rule = repl_config.rule().to_string(); "Building grammar");
    let grammar = Grammar::new()?;
    let parser = grammar.parser(repl_config.rule());

    if args.expressions.is_empty() {
        repl::run(&parser, &repl_config, input, output)?;
        return Ok(());
    }

    let mut failed = 0;
    for expression in &args.expressions {
        if !repl::evaluate(&parser, expression, &mut output)? {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CliError::Rejected {
            failed,
            total: args.expressions.len(),
        });
    }

    info!(count = args.expressions.len(); "Parsed all expressions");
    Ok(())
}
