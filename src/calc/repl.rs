use std::io::{self, BufRead, Write};

use super::Operation;
use crate::app::read_console_line;
use crate::error::CalcError;

/// Interactive calculator loop over a line-oriented console.
pub struct Calculator<R, W> {
    input: R,
    output: W,
}

enum Step {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> Calculator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt for operations until `exit` or end of input. Evaluation
    /// errors are printed and never end the loop.
    pub fn run(&mut self) -> io::Result<()> {
        let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
        writeln!(self.output, "Select operation: {}", names.join(", "))?;
        writeln!(self.output, "Type 'exit' to quit.\n")?;

        while let Step::Continue = self.step()? {}
        writeln!(self.output, "Exiting operations.")?;
        Ok(())
    }

    fn step(&mut self) -> io::Result<Step> {
        let Some(line) = self.prompt("Enter operation: ")? else {
            return Ok(Step::Exit);
        };
        let command = line.trim().to_ascii_lowercase();
        if command == "exit" {
            return Ok(Step::Exit);
        }

        let op = match command.parse::<Operation>() {
            Ok(op) => op,
            Err(e) => {
                log::debug!("{e}");
                writeln!(self.output, "Unknown operation. Try again.")?;
                return Ok(Step::Continue);
            }
        };

        match self.evaluate(op)? {
            None => Ok(Step::Exit),
            Some(Ok(result)) => {
                writeln!(self.output, "Result: {result}")?;
                Ok(Step::Continue)
            }
            Some(Err(e)) => {
                writeln!(self.output, "Error: {e}")?;
                writeln!(self.output, "Please try again.\n")?;
                Ok(Step::Continue)
            }
        }
    }

    /// Read the operands and apply `op`. `None` when input ends mid-way.
    fn evaluate(&mut self, op: Operation) -> io::Result<Option<Result<f64, CalcError>>> {
        let prompts: &[&str] = if op.arity() == 2 {
            &["Enter first number: ", "Enter second number: "]
        } else {
            &["Enter a number: "]
        };

        let mut args = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse_number(&line) {
                Ok(v) => args.push(v),
                Err(e) => return Ok(Some(Err(e))),
            }
        }
        Ok(Some(op.apply(&args)))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        read_console_line(&mut self.input)
    }
}

fn parse_number(text: &str) -> Result<f64, CalcError> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}
