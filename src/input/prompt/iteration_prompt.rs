use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::core::data::iteration_limit::{IterationLimit, IterationLimitError};

pub const WELCOME: [&str; 8] = [
    "Welcome to this fractal viewer.",
    "Fractals are complex geometric shapes, often based on interesting math!",
    "This program explores two of the most famous fractals:",
    "The Mandelbrot set and the Julia set.",
    "Due to the complexity of the fractals, generation can take time,",
    "so be patient!",
    "First we have to define the number of iterations,",
    "which determines how detailed the fractal gets.",
];
pub const PROMPT: &str = "Enter number of iterations (3 to 300): ";
pub const NOT_A_NUMBER: &str = "That's not a number!";
pub const OUT_OF_RANGE: &str = "Please enter a number between 3 and 300.";
pub const ACCEPTED: &str = "Creating fractal magic... can take up to a minute :)";
pub const USAGE_HINT: &str =
    "Left-click to explore Julia sets. Right-click and drag to zoom into Mandelbrot.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before an iteration count was entered")]
    InputClosed,
}

/// Asks for the iteration limit until a valid one is entered.
pub fn prompt_iteration_limit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<IterationLimit, PromptError> {
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        match line.parse::<IterationLimit>() {
            Ok(limit) => {
                writeln!(output, "{ACCEPTED}")?;
                return Ok(limit);
            }
            Err(IterationLimitError::NotANumber { .. }) => writeln!(output, "{NOT_A_NUMBER}")?,
            Err(IterationLimitError::OutOfRange { .. }) => writeln!(output, "{OUT_OF_RANGE}")?,
        }
    }
}

/// Prints the introduction shown before the iteration prompt.
pub fn write_welcome<W: Write>(output: &mut W) -> io::Result<()> {
    for line in WELCOME {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

pub fn write_usage_hint<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{USAGE_HINT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<IterationLimit, PromptError>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();

        let result = prompt_iteration_limit(&mut input, &mut output);

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_first_valid_answer() {
        let (result, output) = run("50\n");

        assert_eq!(result.unwrap().get(), 50);
        assert_eq!(output, format!("{PROMPT}{ACCEPTED}\n"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, output) = run("abc\n500\n  -7 \n2\n+300\n");

        assert_eq!(result.unwrap().get(), 300);
        assert_eq!(
            output,
            format!(
                "{PROMPT}{NOT_A_NUMBER}\n{PROMPT}{OUT_OF_RANGE}\n{PROMPT}{OUT_OF_RANGE}\n{PROMPT}{OUT_OF_RANGE}\n{PROMPT}{ACCEPTED}\n"
            )
        );
    }

    #[test]
    fn test_last_line_without_newline_is_accepted() {
        let (result, _) = run("3");

        assert_eq!(result.unwrap().get(), 3);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, output) = run("nope\n");

        assert!(matches!(result, Err(PromptError::InputClosed)));
        assert_eq!(output, format!("{PROMPT}{NOT_A_NUMBER}\n{PROMPT}"));
    }

    #[test]
    fn test_usage_hint() {
        let mut output = Vec::new();

        write_usage_hint(&mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Left-click to explore Julia sets. Right-click and drag to zoom into Mandelbrot.\n"
        );
    }

    #[test]
    fn test_welcome_banner_lines_in_order() {
        let mut output = Vec::new();

        write_welcome(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Welcome to this fractal viewer.");
        assert_eq!(lines[5], "so be patient!");
        assert_eq!(lines[7], "which determines how detailed the fractal gets.");
        assert!(output.ends_with('\n'));
    }
}
