use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised while collecting the student's profile
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {0}")]
    EndOfInput(&'static str),

    #[error("invalid {field}: {value:?} is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid profile: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Line-oriented prompt reader
///
/// Each prompt is written to `output` and answered by one line of `input`.
/// Number and yes/no prompts skip blank lines before their answer.
pub struct Prompter<'a, R: ?Sized, W: ?Sized> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead + ?Sized, W: Write + ?Sized> Prompter<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    /// Print an informational line between prompts
    pub fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` and return the trimmed answer
    pub fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String, InputError> {
        self.prompt(prompt)?;
        self.read_answer(field)
    }

    /// Print `prompt` and return the first non-blank answer
    fn ask_token(&mut self, prompt: &str, field: &'static str) -> Result<String, InputError> {
        self.prompt(prompt)?;
        loop {
            let answer = self.read_answer(field)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    pub fn ask_number<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T, InputError> {
        let answer = self.ask_token(prompt, field)?;
        parse_number(&answer, field)
    }

    /// Like [`Prompter::ask`], rejecting a blank answer
    pub fn ask_text(&mut self, prompt: &str, field: &'static str) -> Result<String, InputError> {
        let answer = self.ask(prompt, field)?;
        if answer.is_empty() {
            return Err(InputError::Empty(field));
        }
        Ok(answer)
    }

    pub fn ask_yes_no(&mut self, prompt: &str, field: &'static str) -> Result<bool, InputError> {
        let answer = self.ask_token(prompt, field)?;
        Ok(is_yes(&answer))
    }

    /// Use `value` when present, prompt otherwise
    pub fn number_or_ask<T: FromStr>(
        &mut self,
        value: Option<T>,
        prompt: &str,
        field: &'static str,
    ) -> Result<T, InputError> {
        match value {
            Some(value) => Ok(value),
            None => self.ask_number(prompt, field),
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<(), InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_answer(&mut self, field: &'static str) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput(field));
        }
        Ok(line.trim().to_string())
    }
}

pub fn parse_number<T: FromStr>(text: &str, field: &'static str) -> Result<T, InputError> {
    text.trim().parse::<T>().map_err(|_| InputError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Only "yes" (any case) counts as affirmative
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
