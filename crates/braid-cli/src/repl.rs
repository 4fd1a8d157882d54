//! The interactive console loop.
//!
//! Reads one expression per line, parses it with the configured grammar
//! rule and prints either the parsed value or a rendered diagnostic. The
//! loop works over any [`BufRead`]/[`Write`] pair so it can run against
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use braid::{ParseResult, Parser};

use crate::{
    config::ReplConfig,
    error_adapter::{FailureAdapter, render},
    grammar::Expression,
};

/// Counts of parsed and rejected lines in a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    parsed: usize,
    rejected: usize,
}

impl Summary {
    /// Number of lines that parsed.
    pub fn parsed(&self) -> usize {
        self.parsed
    }

    /// Number of lines that failed to parse.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

/// Parse `line` and print the result to `output`.
///
/// Returns `true` if the line parsed.
///
/// # Errors
///
/// Returns an error only if writing to `output` fails.
pub fn evaluate<P, W>(parser: &P, line: &str, output: &mut W) -> io::Result<bool>
where
    P: Parser<Output = Expression> + ?Sized,
    W: Write,
{
    match parser.parse(line) {
        ParseResult::Success(success) => {
            writeln!(output, "Parsed As:")?;
            writeln!(output, "{}", success.value())?;
            Ok(true)
        }
        ParseResult::Failure(failure) => {
            debug!(
                kind = failure.kind().to_string(),
                index = failure.index();
                "Input rejected"
            );
            write!(output, "{}", render(&FailureAdapter::new(&failure, line)))?;
            Ok(false)
        }
    }
}

/// Run the console until the input ends or the exit command is entered.
///
/// Blank lines are skipped. Surrounding whitespace is trimmed before a line
/// is compared with the exit command or parsed.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run<P, R, W>(parser: &P, config: &ReplConfig, input: R, mut output: W) -> io::Result<Summary>
where
    P: Parser<Output = Expression> + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.prompt())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        let line = line.trim();
        if config.is_exit(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        if evaluate(parser, line, &mut output)? {
            summary.parsed += 1;
        } else {
            summary.rejected += 1;
        }
    }

    info!(
        parsed = summary.parsed,
        rejected = summary.rejected;
        "Console session ended"
    );
    Ok(summary)
}
