// src/cli/session.rs
use crate::application::{Guestbook, NoteBackend, Notifier, SubmitOutcome};
use crate::domain::{DomainError, Emoji, FormDraft};
use crate::ports::TerminalPresenter;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Type a message and press Enter to post it.
  /nick NAME     change nickname
  /emoji EMOJI   change emoji (🌊 🔥 🚀 💖 🍀 or wave, fire, rocket, heart, clover)
  /list          reload and show the guestbook
  /retry         send the current message again
  /help          show this help
  /quit          leave";

const ACK_PROMPT: &str = "(press Enter to continue)";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Post(String),
    Nick(String),
    Emoji(Emoji),
    List,
    Retry,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(SessionCommand::Empty);
        }
        let Some(command) = line.strip_prefix('/') else {
            return Ok(SessionCommand::Post(line.to_string()));
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((command, ""));

        match name {
            "nick" => Ok(SessionCommand::Nick(rest.to_string())),
            "emoji" => rest.parse().map(SessionCommand::Emoji),
            "list" => Ok(SessionCommand::List),
            "retry" => Ok(SessionCommand::Retry),
            "help" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            _ => Err(DomainError::UnknownCommand(line.to_string())),
        }
    }
}

/// Interactive posting loop: one draft kept alive across many posts.
pub struct Session<B: NoteBackend, N: Notifier> {
    guestbook: Guestbook<B, N>,
    draft: FormDraft,
    presenter: TerminalPresenter,
}

impl<B: NoteBackend, N: Notifier> Session<B, N> {
    pub fn new(guestbook: Guestbook<B, N>, draft: FormDraft) -> Self {
        Self {
            guestbook,
            draft,
            presenter: TerminalPresenter::new(),
        }
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn guestbook(&self) -> &Guestbook<B, N> {
        &self.guestbook
    }

    fn prompt(&self, out: &mut impl Write) -> Result<()> {
        let nickname = if self.draft.nickname.is_empty() {
            "?"
        } else {
            self.draft.nickname.as_str()
        };
        write!(out, "{} {}> ", self.draft.emoji, nickname)?;
        out.flush()?;
        Ok(())
    }

    /// Submit the draft; returns `true` when the user has to acknowledge a
    /// failure before continuing.
    fn submit(&mut self, out: &mut impl Write) -> Result<bool> {
        match self.guestbook.submit_note(&mut self.draft) {
            SubmitOutcome::Posted => {
                write!(out, "{}", self.presenter.render_posted(self.guestbook.notes()))?;
                Ok(false)
            }
            SubmitOutcome::Skipped => Ok(false),
            SubmitOutcome::Failed => {
                writeln!(out, "{ACK_PROMPT}")?;
                Ok(true)
            }
        }
    }

    /// Read commands from `input` until `/quit` or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{HELP}")?;
        write!(out, "{}", self.presenter.render_list(self.guestbook.notes()))?;

        let mut lines = input.lines();
        let mut typed_ahead: Option<String> = None;
        loop {
            let line = match typed_ahead.take() {
                Some(line) => line,
                None => {
                    self.prompt(&mut out)?;
                    let Some(line) = lines.next() else {
                        writeln!(out)?;
                        break;
                    };
                    line?
                }
            };

            let command = match SessionCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{e}. Type /help for commands.")?;
                    continue;
                }
            };
            debug!(?command, "Session command");

            let needs_ack = match command {
                SessionCommand::Post(content) => {
                    self.draft.content = content;
                    self.submit(&mut out)?
                }
                SessionCommand::Retry => self.submit(&mut out)?,
                SessionCommand::Nick(nickname) => {
                    self.draft.nickname = nickname;
                    false
                }
                SessionCommand::Emoji(emoji) => {
                    self.draft.emoji = emoji;
                    false
                }
                SessionCommand::List => {
                    self.guestbook.load_notes();
                    write!(out, "{}", self.presenter.render_list(self.guestbook.notes()))?;
                    false
                }
                SessionCommand::Help => {
                    writeln!(out, "{HELP}")?;
                    false
                }
                SessionCommand::Quit => break,
                SessionCommand::Empty => false,
            };

            if needs_ack {
                // only a blank line acknowledges; anything else is the next command
                match lines.next().transpose()? {
                    None => break,
                    Some(ack) if ack.trim().is_empty() => {}
                    Some(line) => typed_ahead = Some(line),
                }
            }
        }

        Ok(())
    }
}
