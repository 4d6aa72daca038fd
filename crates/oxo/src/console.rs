//! Line-oriented terminal front-end.
//!
//! Drives a [`GameSession`] from text input. Reading and writing go through
//! generic handles so a whole game can be scripted.

use crate::mode::GameMode;
use crate::session::{GameSession, Phase, SessionError, Turn};
use anyhow::Result;
use oxo_engine::Position;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Terminal game loop.
pub struct Console<R, W> {
    input: R,
    output: W,
    preset_mode: Option<GameMode>,
    computer_delay: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            preset_mode: None,
            computer_delay: Duration::ZERO,
        }
    }

    /// Skips the mode menu and always plays `mode`.
    pub fn with_mode(mut self, mode: Option<GameMode>) -> Self {
        self.preset_mode = mode;
        self
    }

    /// Pause shown as the computer "thinking" before its reply.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    /// Returns the output handle.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs games until the player declines a rematch or input ends.
    #[instrument(skip_all)]
    pub fn run(&mut self, session: &mut GameSession) -> Result<()> {
        info!("Starting console game loop");

        loop {
            match session.phase() {
                Phase::ModeSelect => {
                    let Some(mode) = self.choose_mode()? else {
                        return Ok(());
                    };
                    session.start(mode)?;
                    writeln!(self.output, "\n{} mode.", mode.name())?;
                    self.show_board(session)?;
                }
                Phase::InProgress if session.awaiting_computer() => {
                    writeln!(self.output, "Computer is thinking...")?;
                    self.output.flush()?;
                    std::thread::sleep(self.computer_delay);
                    let turn = session.computer_reply()?;
                    self.announce(session, turn)?;
                }
                Phase::InProgress => {
                    let prompt = format!(
                        "{} ({}), choose a cell (1-9): ",
                        session.name_of(session.to_move()),
                        session.to_move()
                    );
                    let Some(line) = self.ask(&prompt)? else {
                        return Ok(());
                    };
                    let Some(position) = Position::from_label_or_number(&line) else {
                        writeln!(self.output, "Enter a number from 1 to 9.")?;
                        continue;
                    };
                    match session.play(position.index()) {
                        Ok(turn) => self.announce(session, turn)?,
                        Err(SessionError::Engine(e)) => {
                            debug!(error = %e, "Move rejected");
                            writeln!(self.output, "{}.", e)?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Phase::Finished(outcome) => {
                    if let Some(message) = session.outcome_message(outcome) {
                        writeln!(self.output, "{}", message)?;
                    }
                    let again = self
                        .ask("Play again? [y/N]: ")?
                        .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
                    if !again {
                        return Ok(());
                    }
                    session.reset();
                }
            }
        }
    }

    fn choose_mode(&mut self) -> Result<Option<GameMode>> {
        if let Some(mode) = self.preset_mode {
            return Ok(Some(mode));
        }
        loop {
            writeln!(self.output, "Choose a mode:\n  1) single-player\n  2) two-player")?;
            let Some(answer) = self.ask("> ")? else {
                return Ok(None);
            };
            match GameMode::from_menu_choice(&answer) {
                Some(mode) => return Ok(Some(mode)),
                None => writeln!(self.output, "Unknown mode {:?}.", answer.trim())?,
            }
        }
    }

    fn announce(&mut self, session: &GameSession, turn: Turn) -> Result<()> {
        writeln!(
            self.output,
            "{} played {} ({}).",
            session.name_of(turn.mark),
            turn.position.index() + 1,
            turn.position
        )?;
        self.show_board(session)
    }

    fn show_board(&mut self, session: &GameSession) -> Result<()> {
        writeln!(self.output, "{}\n", session.board())?;
        Ok(())
    }

    /// Prompts and reads one line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
