//! Interactive configuration questions
//!
//! Three fixed yes/no questions asked in sequence over a blocking
//! line-oriented channel. One input line is consumed per question; the
//! channel is released after the last one.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Answers to the configuration questions, in the order asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub use_expo: bool,
    pub with_storybook: bool,
    pub with_detox: bool,
}

/// Asks yes/no questions over a reader/writer pair.
///
/// Generic over the channel so tests drive it with in-memory buffers; the
/// CLI hands it locked stdin and stdout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask all configuration questions in order. Consumes the prompter, and
    /// with it the input channel.
    pub fn collect(mut self) -> Result<Answers> {
        let use_expo = self.confirm("Use Expo?", false)?;
        let with_storybook = self.confirm("Include Storybook?", true)?;
        let with_detox = self.confirm("Include Detox E2E testing?", true)?;
        Ok(Answers {
            use_expo,
            with_storybook,
            with_detox,
        })
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        write!(self.output, "{} {}: ", question, hint).context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read answer")?;
        Ok(parse_answer(&line, default))
    }
}

/// Normalize one answer line: first character, case-insensitive. Anything
/// unrecognized, including an empty line, falls back to the default.
fn parse_answer(line: &str, default: bool) -> bool {
    match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => true,
        Some('n') => false,
        _ => default,
    }
}
