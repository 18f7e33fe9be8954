//! # Reading of linear programs
//!
//! This module reads problems from the plain, whitespace delimited format described in the `parse`
//! module.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::data::linear_program::problem::Problem;
use crate::io::error::ImportError;

pub mod error;
pub mod parse;

/// Import a problem from a file.
///
/// # Errors
///
/// When a file cannot be found or read, or if its contents can't be parsed into a consistent
/// linear program.
pub fn import(file_path: &Path) -> Result<Problem, ImportError> {
    let mut program = String::new();
    File::open(file_path)?
        .read_to_string(&mut program)?;

    debug!("Read {} bytes from {}", program.len(), file_path.display());
    parse::parse(&program)
}
