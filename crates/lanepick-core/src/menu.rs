// Numbered text menus with a closed action type per menu.
//
// Input is matched case-insensitively against the full option label, the
// bare option number ("2") or the number with a parenthesis ("2)"). What
// happens on unmatched input is configured per menu: either re-prompt with a
// strike counter, or treat it as a fixed fallback action.

use tracing::debug;

use crate::console::Console;
use crate::error::PickerError;

/// Behaviour of a menu when the input matches no option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched<A> {
    /// Ask again; after `max_attempts` consecutive misses the session ends
    /// with `message`.
    Retry {
        max_attempts: u32,
        message: &'static str,
    },
    /// Resolve to this action without asking again.
    Fallback(A),
}

#[derive(Debug, Clone)]
pub struct Menu<A> {
    name: &'static str,
    header: String,
    options: Vec<(String, A)>,
    unmatched: Unmatched<A>,
}

impl<A: Copy> Menu<A> {
    pub fn new(name: &'static str, header: impl Into<String>, unmatched: Unmatched<A>) -> Self {
        Self {
            name,
            header: header.into(),
            options: Vec::new(),
            unmatched,
        }
    }

    /// Append an option. Options are numbered from 1 in insertion order.
    pub fn option(mut self, label: impl Into<String>, action: A) -> Self {
        self.options.push((label.into(), action));
        self
    }

    /// Replace the label of the option at `index` (0-based).
    pub fn relabel(&mut self, index: usize, label: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            option.0 = label.into();
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(label, _)| label.as_str())
    }

    /// The prompt text: header line followed by `n) label` lines.
    pub fn render(&self) -> String {
        let mut text = self.header.clone();
        for (i, (label, _)) in self.options.iter().enumerate() {
            text.push('\n');
            text.push_str(&format!("{}) {}", i + 1, label));
        }
        text
    }

    /// Resolve raw input to an action, if it names one of the options.
    pub fn match_input(&self, input: &str) -> Option<A> {
        let input = input.trim();
        let number = input.strip_suffix(')').unwrap_or(input);
        self.options
            .iter()
            .enumerate()
            .find(|(i, (label, _))| {
                label.eq_ignore_ascii_case(input) || number == (i + 1).to_string()
            })
            .map(|(_, (_, action))| *action)
    }

    /// Prompt until a valid option is chosen or the unmatched policy decides.
    pub fn choose(&self, console: &mut dyn Console) -> Result<A, PickerError> {
        let prompt = self.render();
        let mut misses = 0;
        loop {
            let input = console.ask(&prompt)?;
            if let Some(action) = self.match_input(&input) {
                return Ok(action);
            }
            match self.unmatched {
                Unmatched::Fallback(action) => return Ok(action),
                Unmatched::Retry {
                    max_attempts,
                    message,
                } => {
                    misses += 1;
                    debug!(menu = self.name, misses, input = %input, "unmatched menu input");
                    if misses >= max_attempts {
                        return Err(PickerError::InputExhausted {
                            menu: self.name,
                            message,
                        });
                    }
                }
            }
        }
    }
}
