use std::io::{BufRead, Write};

/// Asks whether `count` items may be removed.
pub trait Confirm {
    fn confirm(&mut self, count: usize) -> bool;
}

/// Non-interactive yes.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _count: usize) -> bool {
        true
    }
}

/// Non-interactive no.
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _count: usize) -> bool {
        false
    }
}

/// Prompts on `output` and reads one line from `input`. Only `y` or `Y` confirms;
/// EOF or a read error is a no. Waits as long as it takes.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// [`LinePrompt`] on the terminal. Stdin is only locked while asking.
pub struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn confirm(&mut self, count: usize) -> bool {
        LinePrompt::new(std::io::stdin().lock(), std::io::stdout()).confirm(count)
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, count: usize) -> bool {
        let noun = if count == 1 { "item" } else { "items" };
        let _ = write!(self.output, "Remove {count} {noun}? (y/N): ");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(line.trim_end_matches(['\r', '\n']), "y" | "Y"),
        }
    }
}
