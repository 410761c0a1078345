//! Line-oriented terminal UI.

use super::{read_integer_csv, InputError, OptimizationUi};
use crate::solution::Solution;
use std::io::{self, BufRead, Write};

/// A prompt-and-answer UI over any line reader and writer.
///
/// ```
/// use u_cuckoo::ui::{ConsoleUi, OptimizationUi};
///
/// let mut out = Vec::new();
/// let mut ui = ConsoleUi::new("0.25\n".as_bytes(), &mut out);
/// assert_eq!(ui.double_input("abandonment ratio").unwrap(), 0.25);
/// ```
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
}

impl ConsoleUi<io::StdinLock<'static>, io::Stdout> {
    /// A UI on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> OptimizationUi for ConsoleUi<R, W> {
    fn variable_input(&mut self, name: &str) -> Result<String, InputError> {
        write!(self.output, "{name}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Exhausted {
                name: name.to_string(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print_solution(&mut self, solution: &Solution) -> io::Result<()> {
        let bits: Vec<String> = solution
            .as_discrete()
            .iter()
            .map(|b| b.to_string())
            .collect();
        writeln!(self.output, "{}", bits.join(" "))
    }

    /// Prompts for a file path and loads it.
    fn csv_as_integers(&mut self) -> Result<Vec<Vec<i64>>, InputError> {
        let path = self.variable_input("csv file")?;
        read_integer_csv(path.trim())
    }

    fn display(&mut self, output: &str) -> io::Result<()> {
        writeln!(self.output, "{output}")
    }
}
