//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// This variant is only created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The file is syntactically fine, but doesn't describe a consistent linear program.
    #[error(transparent)]
    LinearProgram(#[from] InconsistencyError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// Errors found on a specific line are wrapped in `AtLine`, which holds the original error as its
/// source.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// The problem doesn't start with `max` or `min`.
    #[error("expected the problem to start with \"max\" or \"min\", found \"{0}\"")]
    ObjectiveSense(String),
    /// A token that should be a number is not an integer.
    #[error("\"{0}\" is not an integer")]
    NotDigit(String),
    /// A relation other than `<=` or `>=`.
    #[error("unsupported constraint relation \"{0}\", only \"<=\" and \">=\" are accepted")]
    UnsupportedConstraint(String),
    /// An error caused on a specific line of the file, counting from 1.
    #[error("line {line}: {source}")]
    AtLine {
        /// Line number in the file.
        line: usize,
        /// What went wrong on that line.
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the line that caused this error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        ParseError::AtLine { line, source: Box::new(self) }
    }

    /// The error without any location information.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

/// An `InconsistencyError` is returned when the linear program is inconsistently represented in
/// the file.
///
/// It is not used for linear programs that are infeasible or unbounded. It is meant only for
/// descriptions of linear programs, and should not be used after the importing process.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("inconsistent problem: {description}")]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}
