//! Line-oriented terminal front end.
//!
//! [`Console`] is the interactive [`Prompter`]: it owns every re-prompt loop
//! so the engine only ever sees valid answers. The free functions render
//! match state as plain text.

use crate::games::tictactoe::{History, Marker, MatchSnapshot, Position, RoundOutcome, RoundReport};
use crate::prompt::{PromptError, Prompter};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Prompter reading answers line by line from `R` and echoing prompts to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R, W> std::fmt::Debug for Console<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("clear_screen", &self.clear_screen)
            .finish_non_exhaustive()
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout()).with_clear_screen(true)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over arbitrary reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enables clearing the terminal before each board is drawn.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Returns the writer, mainly for inspecting captured output.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes `text` followed by a newline.
    pub fn show(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Clears the terminal if clearing is enabled.
    pub fn clear(&mut self) -> Result<(), PromptError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Asks for a single-character marker until a valid one is entered.
    ///
    /// `taken` is refused so two players never share a marker.
    #[instrument(skip(self))]
    pub fn request_marker(
        &mut self,
        prompt: &str,
        taken: Option<Marker>,
    ) -> Result<Marker, PromptError> {
        loop {
            let text = self.request_free_text(prompt, true)?;
            match Marker::parse(&text) {
                Ok(marker) if Some(marker) == taken => {
                    self.show(format!("'{}' is already taken.", marker))?;
                }
                Ok(marker) => return Ok(marker),
                Err(err) => self.show(err)?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed while waiting for an answer");
            return Err(PromptError::new("Input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    #[instrument(skip(self, valid), fields(options = valid.len()))]
    fn request_cell_choice(&mut self, valid: &[Position]) -> Result<Position, PromptError> {
        let prompt = format!("Choose a cell ({}): ", join_or(valid));
        loop {
            let answer = self.ask(&prompt)?;
            match Position::parse_number(&answer) {
                Some(pos) if valid.contains(&pos) => {
                    debug!(position = pos.number(), "Cell chosen");
                    return Ok(pos);
                }
                _ => self.show(format!("Please enter {}.", join_or(valid)))?,
            }
        }
    }

    #[instrument(skip(self))]
    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let prompt = format!("{} (y/n): ", prompt);
        loop {
            match self.ask(&prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.show("Please answer y or n.")?,
            }
        }
    }

    #[instrument(skip(self))]
    fn request_free_text(&mut self, prompt: &str, non_empty: bool) -> Result<String, PromptError> {
        let prompt = format!("{}: ", prompt);
        loop {
            let answer = self.ask(&prompt)?;
            if non_empty && answer.is_empty() {
                self.show("Please enter something.")?;
                continue;
            }
            return Ok(answer);
        }
    }
}

/// Joins items as `1, 2, or 3` (`1 or 2` for two, the item alone for one).
pub fn join_or<T: std::fmt::Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} or {}", first, second),
        [rest @ .., last] => {
            let head: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("{}, or {}", head.join(", "), last)
        }
    }
}

/// Scoreboard line plus the board.
pub fn render_match(snapshot: &MatchSnapshot) -> String {
    let [first, second] = snapshot.players();
    format!(
        "Match {}, round {} (first to {})\n{}: {}   {}: {}\n\n{}",
        snapshot.match_number(),
        snapshot.round_number(),
        snapshot.win_score(),
        first,
        first.score(),
        second,
        second.score(),
        snapshot.board()
    )
}

/// Final board and the round's result.
pub fn render_round(report: &RoundReport) -> String {
    let [first, second] = report.scores();
    let headline = match report.outcome() {
        RoundOutcome::Winner(marker) => {
            let name = if first.marker() == marker {
                first.name()
            } else {
                second.name()
            };
            format!("{} wins round {}!", name, report.round_number())
        }
        RoundOutcome::Draw => format!("Round {} is a draw.", report.round_number()),
    };

    let mut text = format!(
        "{}\n{}\nScore: {} {} - {} {}",
        report.final_board(),
        headline,
        first.name(),
        first.score(),
        second.score(),
        second.name()
    );
    if let Some(winner) = report.match_winner() {
        let name = if first.marker() == winner {
            first.name()
        } else {
            second.name()
        };
        text.push_str(&format!("\n{} wins match {}!", name, report.match_number()));
    }
    text
}

/// The "Game History" replay, grouped per match.
pub fn render_history(history: &History) -> String {
    let mut text = String::from("Game History\n============");
    if history.is_empty() {
        text.push_str("\nNo rounds played.");
        return text;
    }
    for group in history.all_records() {
        text.push_str(&format!("\n\nMatch {}", group.match_number()));
        for round in group.rounds() {
            text.push_str(&format!("\n  {}", round));
        }
    }
    text
}
