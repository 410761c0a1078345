//! Interactive input and output for driving programs.
//!
//! The search engine never touches this module. It exists for programs
//! that collect a problem configuration from a user and show the results:
//! prompting for named values, parsing numbers, loading integer matrices
//! from CSV, and printing solutions.

mod console;
mod csv_matrix;

pub use console::ConsoleUi;
pub use csv_matrix::{parse_integer_csv, read_integer_csv};

use crate::solution::Solution;

/// A user-facing input error.
///
/// Messages name the variable or file position involved so they can be
/// shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{name} is not a double")]
    NotADouble { name: String },

    #[error("{name} is not an integer")]
    NotAnInteger { name: String },

    #[error("line {line}, column {column}: {value:?} is not an integer")]
    BadCell {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("malformed csv at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("no input left while reading {name}")]
    Exhausted { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The collaborator a driving program talks to.
pub trait OptimizationUi {
    /// Prompts for the raw text of the variable called `name`.
    fn variable_input(&mut self, name: &str) -> Result<String, InputError>;

    /// Shows a solution to the user.
    fn print_solution(&mut self, solution: &Solution) -> std::io::Result<()>;

    /// Loads an integer matrix, one row per CSV record.
    fn csv_as_integers(&mut self) -> Result<Vec<Vec<i64>>, InputError>;

    /// Shows a line of text to the user.
    fn display(&mut self, output: &str) -> std::io::Result<()>;

    /// Prompts for `name` and parses it as a double.
    fn double_input(&mut self, name: &str) -> Result<f64, InputError> {
        let raw = self.variable_input(name)?;
        raw.trim().parse::<f64>().map_err(|_| InputError::NotADouble {
            name: name.to_string(),
        })
    }

    /// Prompts for `name` and parses it as a non-negative integer.
    fn usize_input(&mut self, name: &str) -> Result<usize, InputError> {
        let raw = self.variable_input(name)?;
        raw.trim().parse::<usize>().map_err(|_| InputError::NotAnInteger {
            name: name.to_string(),
        })
    }
}
