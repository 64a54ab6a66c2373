// src/cli/args.rs
use crate::constants::API_URL_ENV;
use crate::domain::Emoji;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Backend origin, e.g. http://localhost:8080
    #[arg(long, value_name = "URL", env = API_URL_ENV, global = true)]
    pub api_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, post, view, or session)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all notes, newest first
    List {
        /// Output notes as JSON instead of one line per note
        #[arg(long)]
        json: bool,
    },

    /// Post a note, then list the guestbook
    Post {
        /// Name shown under the note
        #[arg(short, long, value_name = "NICKNAME", default_value = "")]
        nickname: String,

        /// One of 🌊 🔥 🚀 💖 🍀, or wave, fire, rocket, heart, clover
        #[arg(short, long, value_name = "EMOJI", default_value_t = Emoji::Wave)]
        emoji: Emoji,

        /// Message text; several words are joined with spaces
        #[arg(value_name = "MESSAGE", trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// Open the guestbook as a web page in the browser
    View,

    /// Post several notes interactively, one per line
    Session {
        /// Name shown under each note
        #[arg(short, long, value_name = "NICKNAME", default_value = "")]
        nickname: String,

        /// Emoji to start with
        #[arg(short, long, value_name = "EMOJI", default_value_t = Emoji::Wave)]
        emoji: Emoji,
    },
}
