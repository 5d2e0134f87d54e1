#![cfg(feature = "std")]

//! Console rendering for the game. Rounds and sessions talk to a [`Display`]
//! so they can run headless.

use std::io::{self, Write};
use std::string::String;

use crate::{
    core::{config::{CENTER_WIDTH, NUMBER_LENGTH}, Evaluation, GuessError, ScoreLedger},
    session::RoundSummary,
};

/// Output side of the game.
pub trait Display {
    /// Banner shown once at the start of a session.
    fn introduction(&mut self) -> io::Result<()>;
    /// Separator shown before every round after the first.
    fn round_divider(&mut self) -> io::Result<()>;
    fn prompt(&mut self) -> io::Result<()>;
    fn rejected(&mut self, err: &GuessError) -> io::Result<()>;
    fn feedback(&mut self, evaluation: Evaluation) -> io::Result<()>;
    /// End-of-round statistics and the current leaderboard.
    fn credits(&mut self, summary: &RoundSummary, ledger: &ScoreLedger) -> io::Result<()>;
    /// Non-fatal problem the player should know about.
    fn warning(&mut self, message: &str) -> io::Result<()>;
}

/// Centre `text` within the console width.
pub fn center(text: &str) -> String {
    std::format!("{:^width$}", text, width = CENTER_WIDTH)
}

pub fn divider() -> String {
    "-".repeat(CENTER_WIDTH)
}

/// Singular or plural labels for bulls and cows, padded to equal width.
pub fn plurals(evaluation: Evaluation) -> (&'static str, &'static str) {
    let bulls = if evaluation.bulls == 1 { "Bull " } else { "Bulls" };
    let cows = if evaluation.cows == 1 { "Cow " } else { "Cows" };
    (bulls, cows)
}

/// Render a duration in whole seconds as "M min and S sec.", omitting zero minutes.
pub fn format_elapsed(total_secs: f64) -> String {
    let total = total_secs.round().max(0.0) as u64;
    let (mins, secs) = (total / 60, total % 60);
    if mins == 0 {
        std::format!("{} sec.", secs)
    } else {
        std::format!("{} min and {} sec.", mins, secs)
    }
}

/// Numbered leaderboard lines, marking the entry at `highlight` (1-based).
pub fn leaderboard_lines(ledger: &ScoreLedger, highlight: Option<usize>) -> Vec<String> {
    ledger
        .entries()
        .iter()
        .enumerate()
        .map(|(i, secs)| {
            let marker = if highlight == Some(i + 1) { " <" } else { "  " };
            std::format!("{:>2}. {:>9.3} sec{}", i + 1, secs, marker)
        })
        .collect()
}

/// [`Display`] writing plain text to any writer.
pub struct ConsoleDisplay<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn introduction(&mut self) -> io::Result<()> {
        let d = divider();
        writeln!(self.out, "{}", d)?;
        writeln!(self.out, "{}", center("BULLS and COWS"))?;
        writeln!(self.out, "{}", center("aka"))?;
        writeln!(self.out, "{}", center("'Mastermind'"))?;
        writeln!(self.out, "{}", d)?;
        writeln!(
            self.out,
            "{}",
            center(&std::format!("I've generated a random {} digit number for you.", NUMBER_LENGTH))
        )?;
        writeln!(self.out, "{}", center("Guess which one is it."))?;
        writeln!(self.out, "{}", d)
    }

    fn round_divider(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", divider())
    }

    fn prompt(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", center("Enter the number:"))?;
        self.out.flush()
    }

    fn rejected(&mut self, err: &GuessError) -> io::Result<()> {
        writeln!(self.out, "\n{}", center(&std::format!("{} Enter the number:", err)))
    }

    fn feedback(&mut self, evaluation: Evaluation) -> io::Result<()> {
        let (bulls_word, cows_word) = plurals(evaluation);
        writeln!(
            self.out,
            "{} {:^34} {:^35} {}",
            bulls_word, evaluation.bulls, evaluation.cows, cows_word
        )
    }

    fn credits(&mut self, summary: &RoundSummary, ledger: &ScoreLedger) -> io::Result<()> {
        let d = divider();
        writeln!(self.out, "\n{}", d)?;
        writeln!(self.out, "{}", center("CONGRATULATIONS!"))?;
        writeln!(
            self.out,
            "{}",
            center(&std::format!("You won in {}", format_elapsed(summary.elapsed_secs)))
        )?;
        writeln!(
            self.out,
            "{}",
            center(&std::format!("with {} attempts", summary.attempts))
        )?;
        writeln!(self.out, "{}", d)?;
        writeln!(self.out, "{}", center("TOP SCORES"))?;
        for line in leaderboard_lines(ledger, summary.rank) {
            writeln!(self.out, "{}", center(&line))?;
        }
        writeln!(self.out, "{}", d)
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Warning: {}", message)
    }
}

/// [`Display`] that discards everything.
#[derive(Debug, Default)]
pub struct QuietDisplay;

impl Display for QuietDisplay {
    fn introduction(&mut self) -> io::Result<()> {
        Ok(())
    }
    fn round_divider(&mut self) -> io::Result<()> {
        Ok(())
    }
    fn prompt(&mut self) -> io::Result<()> {
        Ok(())
    }
    fn rejected(&mut self, _err: &GuessError) -> io::Result<()> {
        Ok(())
    }
    fn feedback(&mut self, _evaluation: Evaluation) -> io::Result<()> {
        Ok(())
    }
    fn credits(&mut self, _summary: &RoundSummary, _ledger: &ScoreLedger) -> io::Result<()> {
        Ok(())
    }
    fn warning(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }
}
