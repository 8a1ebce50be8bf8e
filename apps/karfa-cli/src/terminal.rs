//! # Terminal Collaborators
//!
//! `Input` and `Output` over line-based readers and writers.
//!
//! ```text
//! ┌──────────────┐   prompt text    ┌──────────────┐
//! │  LineInput   │ ───────────────► │   stdout     │
//! │              │ ◄─────────────── │   stdin      │  one line per answer
//! └──────────────┘   answer / EOF   └──────────────┘
//!
//! ┌──────────────┐   info  ───────► stdout
//! │ConsoleOutput │
//! └──────────────┘   error ───────► stderr
//! ```
//!
//! End of input is the only thing treated as the user declining to answer.
//! A line that is not valid UTF-8 is decoded lossily and handed on as an
//! ordinary answer, so the operation reports its usual error.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use karfa_core::{Input, Output};
use tracing::warn;

/// Reads one answer per line, writing prompts to `prompt_out`.
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        LineInput { reader, prompt_out }
    }

    /// Writes the prompt and reads one line, without the line ending.
    fn read_answer(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{message} ")?;
        self.prompt_out.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&line);
        if matches!(text, Cow::Owned(_)) {
            warn!("Answer was not valid UTF-8, replaced invalid bytes");
        }

        let answer = text.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(answer))
    }
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Process stdin, prompts on stdout.
    pub fn stdio() -> Self {
        LineInput::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Input for LineInput<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        match self.read_answer(message) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Failed to read answer, treating as declined");
                None
            }
        }
    }
}

/// Writes info text to one writer and error text to another.
pub struct ConsoleOutput<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> ConsoleOutput<O, E> {
    pub fn new(out: O, err: E) -> Self {
        ConsoleOutput { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl ConsoleOutput<io::Stdout, io::Stderr> {
    /// Info on stdout, errors on stderr.
    pub fn stdio() -> Self {
        ConsoleOutput::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Output for ConsoleOutput<O, E> {
    fn info(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "Failed to write output");
        }
    }

    fn error(&mut self, text: &str) {
        if let Err(e) = writeln!(self.err, "{text}") {
            warn!(error = %e, "Failed to write error output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_input_reads_answers() {
        let mut input = LineInput::new(Cursor::new("2\r\n3\n"), Vec::new());

        assert_eq!(input.prompt("Auðkenni:"), Some("2".to_string()));
        assert_eq!(input.prompt("Fjöldi:"), Some("3".to_string()));
        assert_eq!(input.prompt("Meira?"), None); // EOF

        let prompts = String::from_utf8(input.prompt_out).unwrap();
        assert_eq!(prompts, "Auðkenni: Fjöldi: Meira? ");
    }

    #[test]
    fn test_line_input_invalid_utf8_is_an_answer() {
        let mut input = LineInput::new(Cursor::new(&b"\xff\xfe\n4\n"[..]), Vec::new());

        assert_eq!(input.prompt("Veldu:"), Some("\u{fffd}\u{fffd}".to_string()));
        assert_eq!(input.prompt("Veldu:"), Some("4".to_string()));
        assert_eq!(input.prompt("Veldu:"), None);
    }

    #[test]
    fn test_line_input_keeps_blank_answer() {
        let mut input = LineInput::new(Cursor::new("\n"), Vec::new());
        assert_eq!(input.prompt("Nafn:"), Some(String::new()));
    }

    #[test]
    fn test_console_output_splits_channels() {
        let mut output = ConsoleOutput::new(Vec::new(), Vec::new());
        output.info("Karfan er tóm.");
        output.error("Nafn má ekki vera tómt.");

        let (out, err) = output.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Karfan er tóm.\n");
        assert_eq!(String::from_utf8(err).unwrap(), "Nafn má ekki vera tómt.\n");
    }
}
