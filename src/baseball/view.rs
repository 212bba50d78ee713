//! Console driver: prompts, reads lines and prints feedback.
//!
//! The view owns the read/re-prompt loop. Input and output are injected as
//! [`BufRead`] and [`Write`] so tests can run a whole game in memory.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::baseball::controller::GameController;
use crate::baseball::error::{InvalidInputError, ViewError};
use crate::baseball::format::{
    render_invalid_input, render_score, GUESS_PROMPT, RESTART_PROMPT, START_MESSAGE, WIN_MESSAGE,
};
use crate::baseball::models::RestartOutcome;

pub struct GameView<C, R, W> {
    controller: C,
    reader: R,
    writer: W,
    announce_invalid_input: bool,
}

impl<C: GameController, R: BufRead, W: Write> GameView<C, R, W> {
    pub fn new(controller: C, reader: R, writer: W) -> Self {
        GameView {
            controller,
            reader,
            writer,
            announce_invalid_input: true,
        }
    }

    /// Print a message for rejected input before re-prompting (default on).
    pub fn announce_invalid_input(mut self, announce: bool) -> Self {
        self.announce_invalid_input = announce;
        self
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Play rounds until the player chooses to exit.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), ViewError> {
        writeln!(self.writer, "{START_MESSAGE}")?;
        loop {
            self.guess_until_correct()?;
            if self.ask_restart()? == RestartOutcome::Exit {
                debug!("player chose to exit");
                return Ok(());
            }
        }
    }

    /// Prompt for guesses while the round is unsolved, then print the win message.
    pub fn guess_until_correct(&mut self) -> Result<(), ViewError> {
        while self.controller.is_still_wrong() {
            write!(self.writer, "{GUESS_PROMPT}")?;
            self.writer.flush()?;
            let line = self.read_line()?;
            match self.controller.process_guess(&line) {
                Ok(result) => writeln!(self.writer, "{}", render_score(result))?,
                Err(err) => self.report_invalid(&err)?,
            }
        }
        writeln!(self.writer, "{WIN_MESSAGE}")?;
        Ok(())
    }

    /// Ask restart-or-exit until a valid choice is entered.
    pub fn ask_restart(&mut self) -> Result<RestartOutcome, ViewError> {
        self.controller.begin_restart_decision();
        loop {
            writeln!(self.writer, "{RESTART_PROMPT}")?;
            self.writer.flush()?;
            let line = self.read_line()?;
            match self.controller.process_restart_decision(&line) {
                Ok(outcome) => return Ok(outcome),
                Err(err) => self.report_invalid(&err)?,
            }
        }
    }

    fn report_invalid(&mut self, err: &InvalidInputError) -> Result<(), ViewError> {
        debug!(error = %err, "input rejected");
        if self.announce_invalid_input {
            writeln!(self.writer, "{}", render_invalid_input(err))?;
        }
        Ok(())
    }

    /// Next line without its terminator. End of input is an error.
    ///
    /// Bytes that are not UTF-8 decode to U+FFFD, which the validator then
    /// rejects like any other non-digit.
    fn read_line(&mut self) -> Result<String, ViewError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ViewError::InputClosed);
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(String::from_utf8_lossy(line).into_owned())
    }
}
