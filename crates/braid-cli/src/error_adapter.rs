//! Error adapters for rendering parse failures and [`CliError`] with miette.
//!
//! This module provides the bridge between the library's plain error types
//! and miette's rich diagnostic formatting used in the console.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan,
    SourceSpan,
};

use braid::{Failure, FailureKind};

use crate::error::CliError;

/// Adapter for a parse [`Failure`] on a line of input.
///
/// The failure index becomes a labeled span over the character found
/// there, or an empty span at the end of the line.
pub struct FailureAdapter<'a> {
    /// The wrapped failure
    failure: &'a Failure,
    /// The parsed line, for displaying the snippet
    src: &'a str,
}

impl<'a> FailureAdapter<'a> {
    /// Create a new failure adapter.
    pub fn new(failure: &'a Failure, src: &'a str) -> Self {
        Self { failure, src }
    }

    fn span(&self) -> SourceSpan {
        let index = self.failure.index().min(self.src.len());
        let len = self
            .src
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        SourceSpan::new(index.into(), len)
    }
}

impl fmt::Debug for FailureAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureAdapter")
            .field("failure", &self.failure)
            .finish()
    }
}

impl fmt::Display for FailureAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.failure.message())
    }
}

impl std::error::Error for FailureAdapter<'_> {}

impl MietteDiagnostic for FailureAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("braid::{}", self.failure.kind())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.failure.kind() {
            FailureKind::Parsing => return None,
            FailureKind::Conversion => "the text matched but its value could not be converted",
            FailureKind::Termination => "remove the input after the complete expression",
            FailureKind::Inversion => "this input is excluded by a negative lookahead",
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(
            Some(format!("{} failure", self.failure.kind())),
            self.span(),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`CliError`], which carries no source location.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "braid::io",
            CliError::Config(_) => "braid::config",
            CliError::Grammar(_) => "braid::grammar",
            CliError::Rejected { .. } => "braid::rejected",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::Config(_) => Some(Box::new(
                "check the file given with --config, braid/config.toml, or the user config directory",
            )),
            _ => None,
        }
    }
}

/// Render a diagnostic to a string without colors.
pub fn render(diagnostic: &dyn MietteDiagnostic) -> String {
    let reporter = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, diagnostic)
        .expect("Writing to String buffer is infallible");
    writer
}
