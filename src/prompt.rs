//! Interactive line prompts.

use std::io::{self, BufRead, Write};

/// Asks questions on a writer and reads one-line answers from a reader.
///
/// Production code wraps stdin/stdout; tests use in-memory buffers.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `question` and returns the answer without its line ending.
    ///
    /// Fails with `UnexpectedEof` if the input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer to '{}'", question.trim()),
            ));
        }

        let trimmed_len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed_len);
        Ok(answer)
    }

    /// Gives back the writer, mostly so tests can inspect what was asked.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
