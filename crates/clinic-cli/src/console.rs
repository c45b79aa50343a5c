//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::{PromptError, PromptResult};

/// Interactive console: writes prompts, reads one line per answer.
pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console. `max_attempts` bounds every retrying prompt and is
    /// clamped to at least one.
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Print a full line.
    pub fn say(&mut self, line: impl AsRef<str>) -> PromptResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask repeatedly until `parse` accepts the answer.
    ///
    /// A rejection prints the returned message and asks again. After
    /// `max_attempts` rejections the prompt gives up with
    /// [`PromptError::AttemptsExhausted`].
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> PromptResult<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        for attempt in 1..=self.max_attempts {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    info!(attempt, "answer rejected");
                    self.say(message)?;
                }
            }
        }

        warn!(attempts = self.max_attempts, "prompt gave up");
        Err(PromptError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Ask for an integer, re-prompting with `retry_message` on parse failure.
    pub fn ask_integer(&mut self, prompt: &str, retry_message: &str) -> PromptResult<i64> {
        self.ask_until(prompt, |answer| {
            parse_integer(answer).ok_or_else(|| retry_message.to_string())
        })
    }

    /// Consume the console and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse an integer answer, ignoring surrounding whitespace.
pub fn parse_integer(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}
