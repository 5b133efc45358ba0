// Console collaborator: the text prompt/response channel to the player.

use std::collections::VecDeque;
use std::io;

/// Line-oriented interaction with the player.
///
/// The binary wires this to stdin/stdout; tests use [`ScriptedConsole`].
pub trait Console {
    /// Print a block of text followed by a newline.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Print `prompt` and read one line of input, without its line ending.
    /// End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// A console that replays queued answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything shown or asked so far, one entry per call.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript joined into a single string.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of answers"))
    }
}
