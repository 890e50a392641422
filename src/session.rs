// 🔁 Command Loop - read a choice, dispatch, print, repeat
//
// The session owns the directory for its whole lifetime. Input and output are
// generic so the same loop runs on stdin/stdout and on in-memory buffers.

use crate::config::{SessionConfig, UnknownChoice};
use crate::directory::{ContactDirectory, DirectoryError, Listing, PhoneNumber};
use crate::menu::{ChoiceError, MenuChoice, CHOICE_PROMPT, MENU_TEXT};
use crate::render::{render_listing, Painter};
use anyhow::{Context as AnyhowContext, Result};
use log::{debug, info, warn};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, Write};

const NAME_PROMPT: &str = "Enter the contact name : ";
const SEARCH_PROMPT: &str = "Enter the name of the contact : ";
const EDIT_PROMPT: &str = "Enter the contact to be edited : ";
const DELETE_PROMPT: &str = "Enter the contact to be deleted : ";
const PHONE_PROMPT: &str = "Enter the mobile number : ";
const CONFIRM_PROMPT: &str = "Do you want to delete this contact? (YES or NO) : ";

/// Whether the loop keeps going after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Counters reported when the session ends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Operations dispatched (exit not included)
    pub operations: usize,
    pub not_found: usize,
    pub invalid_choices: usize,
    /// Contacts left in the directory at the end
    pub contacts: usize,
}

pub struct Session<R: BufRead, W: Write> {
    directory: ContactDirectory,
    config: SessionConfig,
    painter: Painter,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Session {
            directory: ContactDirectory::new(),
            painter: Painter::new(config.color),
            config,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    /// Start from an existing directory instead of an empty one
    pub fn with_directory(mut self, directory: ContactDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Contact book session started");

        loop {
            if self.config.show_menu {
                writeln!(self.output, "\n{}", MENU_TEXT)?;
            }

            let Some(line) = self.prompt(CHOICE_PROMPT)? else {
                info!("Input closed, ending session");
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "{}", self.painter.success("Goodbye!"))?;
                    Flow::Exit
                }
                Ok(choice) => {
                    debug!("Dispatching '{}'", choice.title());
                    self.summary.operations += 1;
                    self.dispatch(choice)?
                }
                Err(err) => self.invalid_choice(err)?,
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.summary.contacts = self.directory.len();
        info!(
            "Session ended: {} operations, {} not found, {} invalid choices, {} contacts",
            self.summary.operations,
            self.summary.not_found,
            self.summary.invalid_choices,
            self.summary.contacts
        );
        if let Listing::Entries(entries) = self.directory.list() {
            debug!("Final contacts: {}", serde_json::to_string(&entries)?);
        }

        self.output.flush()?;
        Ok(self.summary.clone())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_contact(),
            MenuChoice::Search => self.search_contact(),
            MenuChoice::Display => self.display_contacts().map(|_| Flow::Continue),
            MenuChoice::Edit => self.edit_contact(),
            MenuChoice::Delete => self.delete_contact(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn invalid_choice(&mut self, err: ChoiceError) -> Result<Flow> {
        self.summary.invalid_choices += 1;
        warn!("{}", err);
        writeln!(self.output, "{}", self.painter.error(&err.to_string()))?;

        match err {
            ChoiceError::NotANumber(_) => Ok(Flow::Continue),
            ChoiceError::OutOfRange(_) => match self.config.unknown_choice {
                UnknownChoice::Reprompt => Ok(Flow::Continue),
                UnknownChoice::Exit => {
                    writeln!(self.output, "Exiting contact book")?;
                    Ok(Flow::Exit)
                }
            },
        }
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    fn add_contact(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let Some(phone) = self.prompt_phone(PHONE_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match self.directory.add(&name, phone) {
            Ok(None) => {
                let message = format!("Contact {} saved", name.trim());
                writeln!(self.output, "{}", self.painter.success(&message))?;
            }
            Ok(Some(old)) => {
                let message = format!("Contact {} updated (was {})", name.trim(), old);
                writeln!(self.output, "{}", self.painter.success(&message))?;
            }
            Err(err) => self.report(err)?,
        }

        Ok(Flow::Continue)
    }

    fn search_contact(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt(SEARCH_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match self.directory.search(&name) {
            Ok(phone) => {
                writeln!(
                    self.output,
                    "{}'s contact number is : {}",
                    name.trim(),
                    phone
                )?;
            }
            Err(err) => self.report(err)?,
        }

        Ok(Flow::Continue)
    }

    fn display_contacts(&mut self) -> Result<()> {
        let table = render_listing(&self.directory.list(), &self.painter);
        writeln!(self.output, "{}", table)?;
        Ok(())
    }

    fn edit_contact(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt(EDIT_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        if !self.directory.contains(&name) {
            self.report(DirectoryError::NotFound(name.trim().to_string()))?;
            return Ok(Flow::Continue);
        }

        let Some(phone) = self.prompt_phone(PHONE_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        match self.directory.edit(&name, phone) {
            Ok(_) => {
                writeln!(self.output, "{}", self.painter.success("Contact Updated"))?;
                self.display_contacts()?;
            }
            Err(err) => self.report(err)?,
        }

        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt(DELETE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        if !self.directory.contains(&name) {
            self.report(DirectoryError::NotFound(name.trim().to_string()))?;
            return Ok(Flow::Continue);
        }

        let Some(answer) = self.prompt(CONFIRM_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        if self.config.delete_confirmation.permits(&answer) {
            match self.directory.delete(&name) {
                Ok(_) => {
                    let message = format!("Contact {} deleted", name.trim());
                    writeln!(self.output, "{}", self.painter.success(&message))?;
                }
                Err(err) => self.report(err)?,
            }
        } else {
            info!("Deletion of '{}' cancelled (answer: {:?})", name.trim(), answer);
            writeln!(self.output, "{}", self.painter.warning("Deletion cancelled"))?;
        }

        self.display_contacts()?;
        Ok(Flow::Continue)
    }

    // ========================================================================
    // INPUT HELPERS
    // ========================================================================

    /// Print `text` and read one line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD and fail parsing like any other bad line
        let line = String::from_utf8_lossy(&raw);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line was not valid UTF-8");
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Keep asking until the answer parses as a phone number
    fn prompt_phone(&mut self, text: &str) -> Result<Option<PhoneNumber>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };

            match line.trim().parse::<PhoneNumber>() {
                Ok(phone) => return Ok(Some(phone)),
                Err(err) => {
                    warn!("Rejected phone number input {:?}", line);
                    writeln!(self.output, "{}", self.painter.error(&err.to_string()))?;
                }
            }
        }
    }

    fn report(&mut self, err: DirectoryError) -> Result<()> {
        if matches!(err, DirectoryError::NotFound(_)) {
            self.summary.not_found += 1;
        }
        debug!("Operation failed: {}", err);
        writeln!(self.output, "{}", self.painter.error(&err.to_string()))?;
        Ok(())
    }
}
