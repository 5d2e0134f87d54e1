#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::config::CENTER_WIDTH;
use crate::ui::center;

use super::Player;

/// Interactive player reading one guess per line.
pub struct CliPlayer<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Interpret a yes/no answer; anything else is `None`.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        // Indent the cursor under the centred prompt.
        write!(self.out, "{:>width$}", "", width = CENTER_WIDTH / 2 - 2)?;
        self.out.flush()?;
        Ok(self.read_line()?)
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        writeln!(self.out, "\n{}", center("Play again? (y/n):"))?;
        loop {
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Some(answer) = parse_answer(&line) {
                return Ok(answer);
            }
            writeln!(self.out, "\n{}", center("Please enter y or n:"))?;
        }
    }
}
