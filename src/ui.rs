// UI layer: the numbered menu loop. It reads answers through a `Prompter`
// and writes everything it has to say to `out`, so the same loop runs on
// a real terminal (dialoguer) and on piped or scripted input.

use crate::error::AppError;
use crate::state::AppState;
use anyhow::{bail, Context, Result};
use dialoguer::Input;
use std::fmt::Debug;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const NAME_PROMPT: &str = "Enter user name";
const DURATION_PROMPT: &str = "Enter watch duration (minutes)";
const MENU: &str = "1. Add User\n2. Record Watch History\n3. Recommend Content\n4. Exit";

/// Source of operator answers.
pub trait Prompter {
    /// Read a line of free text.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Read a number.
    fn number<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: Debug + ToString;

    /// Whether the prompter puts its prompts on screen itself. When it
    /// does not, the shell writes them to its own output.
    fn shows_prompts(&self) -> bool {
        true
    }
}

/// Interactive prompts on the terminal. `Input` keeps asking until the
/// answer parses, so non-numeric input never reaches the menu.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(answer)
    }

    fn number<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: Debug + ToString,
    {
        let answer: T = Input::new().with_prompt(prompt).interact_text()?;
        Ok(answer)
    }
}

/// One answer per line from any reader. Used when stdin is not a
/// terminal. Prompts are left to the shell.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        LinePrompter { reader }
    }

    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).context("Reading input")?;
        if read == 0 {
            bail!("input closed");
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn text(&mut self, _prompt: &str) -> Result<String> {
        self.next_line()
    }

    fn number<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: Debug + ToString,
    {
        let line = self.next_line()?;
        match line.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(e) => bail!("{}: expected a number, got {:?} ({})", prompt, line, e.to_string()),
        }
    }

    fn shows_prompts(&self) -> bool {
        false
    }
}

/// Main interactive menu. Runs until the operator picks "Exit", which
/// returns `Ok(())`. Domain errors are printed and the menu is shown
/// again; only I/O failures end the loop early.
pub fn main_menu<P, W>(state: &mut AppState, prompter: &mut P, out: &mut W) -> Result<()>
where
    P: Prompter,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let choice: i64 = prompter.number("Choice")?;
        match choice {
            1 => handle_add_user(state, prompter, out)?,
            2 => handle_record_watch(state, prompter, out)?,
            3 => handle_recommend(state, prompter, out)?,
            4 => {
                info!("exit selected");
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

fn handle_add_user<P: Prompter, W: Write>(
    state: &mut AppState,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let name = ask_name(prompter, out)?;
    state.add_user(&name);
    writeln!(out, "User {} added.", name)?;
    Ok(())
}

/// Name, then genre index, then minutes. An out-of-range genre index
/// aborts before the duration is asked for.
fn handle_record_watch<P: Prompter, W: Write>(
    state: &mut AppState,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let name = ask_name(prompter, out)?;

    writeln!(out, "Select a genre by number:")?;
    for (i, genre) in state.catalog.genres_available().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, genre)?;
    }
    let index: i64 = prompter.number("Genre number")?;
    let genre = match state.catalog.genre_at(index) {
        Ok(genre) => genre.to_string(),
        Err(e) => return report(out, &e),
    };

    echo_prompt(prompter, out, DURATION_PROMPT)?;
    let minutes: i64 = prompter.number(DURATION_PROMPT)?;
    match state.record_watch(&name, &genre, minutes) {
        Ok(()) => Ok(()),
        Err(e) => report(out, &e),
    }
}

fn handle_recommend<P: Prompter, W: Write>(
    state: &mut AppState,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let name = ask_name(prompter, out)?;
    match state.recommend(&name) {
        Ok(rec) => {
            writeln!(out, "Recommended genre for {}: {}", name, rec.genre)?;
            writeln!(out, "Suggested movie: {}", rec.title)?;
            Ok(())
        }
        Err(e) => report(out, &e),
    }
}

fn ask_name<P: Prompter, W: Write>(prompter: &mut P, out: &mut W) -> Result<String> {
    echo_prompt(prompter, out, NAME_PROMPT)?;
    prompter.text(NAME_PROMPT)
}

fn echo_prompt<P: Prompter, W: Write>(prompter: &P, out: &mut W, prompt: &str) -> Result<()> {
    if !prompter.shows_prompts() {
        writeln!(out, "{}:", prompt)?;
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &AppError) -> Result<()> {
    debug!(error = ?err, "operation failed");
    writeln!(out, "{}", err)?;
    Ok(())
}
