// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{Guestbook, SubmitOutcome};
use cli::args::{Args, Command};
use cli::session::Session;
use domain::{Emoji, FormDraft};
use infrastructure::renderer::PageRenderer;
use infrastructure::{ApiConfig, HttpNoteBackend};
use ports::{HtmlPresenter, TerminalNotifier, TerminalPresenter};
use std::io::{self, Write};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting wavenote with arguments");

    // Initialize infrastructure
    let config = ApiConfig::resolve(args.api_url.as_deref())?;
    let backend = HttpNoteBackend::new(config)?;
    let notifier = TerminalNotifier::stderr();

    match args.command {
        Command::List { json } => {
            let guestbook = Guestbook::mount(backend, notifier);
            let presenter = TerminalPresenter::new();
            let output = if json {
                presenter.render_json(guestbook.notes())? + "\n"
            } else {
                presenter.render_list(guestbook.notes())
            };
            print_stdout(&output)
        }
        Command::Post {
            nickname,
            emoji,
            content,
        } => {
            let mut guestbook = Guestbook::new(backend, notifier);
            let mut draft = FormDraft::with_author(nickname, emoji);
            draft.content = content.join(" ");

            info!("Posting note");
            match guestbook.submit_note(&mut draft) {
                SubmitOutcome::Posted => {
                    print_stdout(&TerminalPresenter::new().render_posted(guestbook.notes()))
                }
                SubmitOutcome::Skipped => Ok(()),
                SubmitOutcome::Failed => bail!("Note was not posted"),
            }
        }
        Command::View => {
            let guestbook = Guestbook::mount(backend, notifier);
            let html = HtmlPresenter::new().render(guestbook.notes(), &FormDraft::new());

            let renderer = PageRenderer::new();
            let path = renderer.create_temp_file(&html)?;
            info!(?path, "Opening guestbook page");
            renderer.open_in_browser(&path)
        }
        Command::Session { nickname, emoji } => run_session(backend, notifier, nickname, emoji),
    }
}

fn run_session(
    backend: HttpNoteBackend,
    notifier: TerminalNotifier<io::Stderr>,
    nickname: String,
    emoji: Emoji,
) -> Result<()> {
    let guestbook = Guestbook::mount(backend, notifier);
    let mut session = Session::new(guestbook, FormDraft::with_author(nickname, emoji));

    let stdin = io::stdin();
    session
        .run(stdin.lock(), io::stdout())
        .context("Interactive session failed")
}

fn print_stdout(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")
}
