//! Line-oriented terminal prompts.
//!
//! Generic over the reader and writer so the interactive flow can be driven
//! from byte buffers in tests.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use clap::ValueEnum;

use crate::error::Result;
use crate::genius::types::ArtistCandidate;
use crate::services::disambiguation::Confirm;

/// What to do with a finished analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Bar chart of the most frequent words.
    FrequencyPlot,
    /// Word cloud weighted by frequency.
    WordCloud,
    /// Print the raw lyrics.
    PrintLyrics,
}

impl Action {
    /// Parse a menu choice (`1`-`3`).
    pub fn from_menu(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::FrequencyPlot),
            "2" => Some(Self::WordCloud),
            "3" => Some(Self::PrintLyrics),
            _ => None,
        }
    }
}

/// Prompts over an input/output pair.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt over any reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Ask a question and read one trimmed line; `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for an artist or band name.
    pub fn ask_artist(&mut self) -> Result<Option<String>> {
        self.ask("Enter an artist or band name here: ")
    }

    /// Ask a yes/no question until answered; end of input counts as no.
    pub fn yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            match self.ask(&format!("{question} (y/n) "))? {
                None => return Ok(false),
                Some(answer) => match answer.to_lowercase().as_str() {
                    "y" | "yes" => return Ok(true),
                    "n" | "no" => return Ok(false),
                    _ => self.say("Please answer y or n.")?,
                },
            }
        }
    }

    /// Show the action menu and read a choice; `None` at end of input.
    pub fn choose_action(&mut self) -> Result<Option<Action>> {
        self.say("1 = Frequency distribution plot of most used lyrics")?;
        self.say("2 = Word cloud of most used lyrics")?;
        self.say("3 = Print all lyrics")?;
        loop {
            match self.ask("What would you like to do next? (1-3) ")? {
                None => return Ok(None),
                Some(choice) => match Action::from_menu(&choice) {
                    Some(action) => return Ok(Some(action)),
                    None => self.say("Please enter 1, 2 or 3.")?,
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn ask_query(&mut self) -> Result<Option<String>> {
        self.ask_artist()
    }

    fn confirm(&mut self, candidate: &ArtistCandidate) -> Result<bool> {
        self.yes_no(&format!("Did you mean {}?", candidate.name))
    }

    fn notify_no_match(&mut self, query: &str) -> Result<()> {
        self.say(&format!("No artists found for \"{query}\". Please try again."))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    fn output(p: Prompt<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn ask_trims_and_detects_eof() {
        let mut p = prompt("  Radiohead \n");
        assert_eq!(p.ask_artist().unwrap().as_deref(), Some("Radiohead"));
        assert_eq!(p.ask_artist().unwrap(), None);
    }

    #[test]
    fn yes_no_repeats_until_answered() {
        let mut p = prompt("maybe\nY\n");
        assert!(p.yes_no("Continue?").unwrap());
        let out = output(p);
        assert_eq!(out.matches("Continue? (y/n) ").count(), 2);
        assert!(out.contains("Please answer y or n."));
    }

    #[test]
    fn confirm_names_the_candidate() {
        let mut p = prompt("n\n");
        let candidate = ArtistCandidate { id: 1, name: "Björk".into(), hits: 3 };
        assert!(!p.confirm(&candidate).unwrap());
        assert!(output(p).contains("Did you mean Björk? (y/n)"));
    }

    #[test]
    fn action_menu() {
        let mut p = prompt("7\n2\n");
        assert_eq!(p.choose_action().unwrap(), Some(Action::WordCloud));
        assert_eq!(Action::from_menu(" 3 "), Some(Action::PrintLyrics));
        assert_eq!(Action::from_menu("x"), None);
        assert!(prompt("").choose_action().unwrap().is_none());
    }
}
