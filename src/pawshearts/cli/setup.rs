use super::render::HelpEntry;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use pawshearts::commands::search::SpeciesFilter;
use pawshearts::model::Role;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pawshearts", bin_name = "pawshearts", version)]
#[command(
    about = "Paws & Hearts: browse pets and apply to adopt them",
    long_about = "Starts an interactive session on stdin. Every line is one command; type `help` to list them."
)]
pub struct Cli {
    /// Seed the session from this JSON catalog instead of the built-in pets
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One line of input inside a session.
#[derive(Parser, Debug)]
#[command(
    name = "pawshearts",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true
)]
pub struct Line {
    #[command(subcommand)]
    pub command: LineCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Search pets by name or breed (no term clears the search)
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        term: Vec<String>,
    },

    /// Show one species only, or `all`
    Filter {
        #[arg(value_name = "SPECIES")]
        filter: SpeciesFilter,
    },

    /// Open the sign-in dialog
    Signin,

    /// Open the sign-up dialog
    Signup,

    /// Switch the open dialog between sign-in and sign-up
    Switch,

    /// Close the sign-in dialog
    Close,

    /// Sign in with an email address
    Login {
        email: String,
        #[arg(long, default_value_t = Role::Adopter)]
        role: Role,
    },

    /// Sign in with Google
    Google {
        #[arg(long, default_value_t = Role::Adopter)]
        role: Role,
    },

    /// Sign out
    Logout,

    /// Start an adoption application for a pet
    Adopt { pet_id: String },

    /// Dismiss the adoption dialog
    Cancel,

    /// Send the application for the selected pet
    Apply {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        message: Vec<String>,
    },

    /// Show the screen again
    Show,

    /// List commands
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
///
/// `search` and `apply` take the rest of the line verbatim as a single value, so
/// spacing and leading dashes in free text survive.
pub fn parse_line(input: &str) -> Option<Result<LineCommand, clap::Error>> {
    let line = input.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim_start()))
        .unwrap_or((line, ""));
    let text = || match rest {
        "" => Vec::new(),
        rest => vec![rest.to_string()],
    };
    match word {
        "search" => return Some(Ok(LineCommand::Search { term: text() })),
        "apply" => return Some(Ok(LineCommand::Apply { message: text() })),
        _ => {}
    }

    Some(Line::try_parse_from(line.split_whitespace()).map(|line| line.command))
}

/// Help rows built from the command definitions above.
pub fn help_entries() -> Vec<HelpEntry> {
    Line::command()
        .get_subcommands()
        .filter(|sc| !sc.is_hide_set())
        .map(|sc| {
            let mut usage = sc.get_name().to_string();
            for arg in sc.get_arguments() {
                let value = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
                let piece = match arg.get_long() {
                    Some(long) => format!("[--{long} <{value}>]"),
                    None if arg.is_required_set() => format!("<{value}>"),
                    None => format!("[{value}...]"),
                };
                usage.push(' ');
                usage.push_str(&piece);
            }
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            HelpEntry::new(usage, about)
        })
        .collect()
}
