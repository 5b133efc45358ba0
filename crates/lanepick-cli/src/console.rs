// Terminal console over stdin/stdout.

use std::io::{self, BufRead, Write};

use lanepick_core::Console;

pub struct StdConsole<I, O> {
    input: I,
    output: O,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> StdConsole<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<I: BufRead, O: Write> Console for StdConsole<I, O> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        // Menus get their own line for the answer; inline prompts end in a space.
        if prompt.ends_with(' ') {
            write!(self.output, "{prompt}")?;
        } else {
            writeln!(self.output, "{prompt}")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
