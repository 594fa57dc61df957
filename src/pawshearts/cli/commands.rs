use super::render::Renderer;
use super::setup::{help_entries, parse_line, Cli, LineCommand};
use clap::error::ErrorKind;
use console::Term;
use directories::ProjectDirs;
use pawshearts::catalog;
use pawshearts::commands::CmdMessage;
use pawshearts::config::PawsConfig;
use pawshearts::error::Result;
use pawshearts::identity::{IdentityProvider, MockIdentityProvider};
use pawshearts::session::{AuthMode, Session};
use pawshearts::views::Screen;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

const PROMPT: &str = "> ";

/// What the host should do after one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = match config_dir(&cli) {
        Some(dir) => PawsConfig::load(dir)?,
        None => PawsConfig::default(),
    };

    let pets = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            catalog::load(path)?
        }
        None => catalog::builtin(),
    };
    let mut session = Session::new(pets, MockIdentityProvider::new(config.avatar_url.clone()))?;

    let use_color = !cli.no_color
        && config
            .color
            .unwrap_or_else(|| Term::stdout().features().colors_supported());
    let renderer = Renderer::new(use_color)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();

    write!(out, "{}", renderer.screen(&Screen::build(session.state()))?)?;
    prompt(&mut out, interactive)?;
    for line in stdin.lock().lines() {
        match handle_line(&mut session, &renderer, &line?)? {
            Outcome::Print(output) => write!(out, "{}", output)?,
            Outcome::Quit => break,
        }
        prompt(&mut out, interactive)?;
    }
    Ok(())
}

/// Asks for the next line. Piped sessions get no prompt.
fn prompt(out: &mut impl Write, interactive: bool) -> io::Result<()> {
    if interactive {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "pawshearts", "pawshearts")
            .map(|dirs| dirs.config_dir().to_path_buf())
    })
}

/// Applies one line of input to the session and returns what to print.
///
/// Failed operations are reported as messages and leave the session running; only
/// rendering failures are returned as errors.
pub fn handle_line<P: IdentityProvider>(
    session: &mut Session<P>,
    renderer: &Renderer,
    input: &str,
) -> Result<Outcome> {
    let command = match parse_line(input) {
        None => return Ok(Outcome::Print(String::new())),
        Some(Err(err)) if err.kind() == ErrorKind::DisplayHelp => {
            return Ok(Outcome::Print(err.render().to_string()));
        }
        Some(Err(err)) => {
            let rendered = err.to_string();
            let summary = rendered.lines().next().unwrap_or_default().to_string();
            return Ok(Outcome::Print(renderer.messages(&[
                CmdMessage::error(summary),
                CmdMessage::info("Type `help` to list commands"),
            ])?));
        }
        Some(Ok(command)) => command,
    };

    let result = match command {
        LineCommand::Quit => return Ok(Outcome::Quit),
        LineCommand::Help => return Ok(Outcome::Print(renderer.help(&help_entries())?)),
        LineCommand::Show => {
            return Ok(Outcome::Print(
                renderer.screen(&Screen::build(session.state()))?,
            ))
        }
        LineCommand::Search { term } => Ok(session.set_search_term(&term.join(" "))),
        LineCommand::Filter { filter } => Ok(session.set_species_filter(filter)),
        LineCommand::Signin => Ok(session.open_auth_modal(AuthMode::SignIn)),
        LineCommand::Signup => Ok(session.open_auth_modal(AuthMode::SignUp)),
        LineCommand::Switch => Ok(session.toggle_auth_mode()),
        LineCommand::Close => Ok(session.close_auth_modal()),
        LineCommand::Login { email, role } => session.authenticate(&email, role),
        LineCommand::Google { role } => session.authenticate_with_google(role),
        LineCommand::Logout => Ok(session.logout()),
        LineCommand::Adopt { pet_id } => session.select_pet(&pet_id),
        LineCommand::Cancel => Ok(session.clear_selection()),
        LineCommand::Apply { message } => session.submit_application(&message.join(" ")),
    };

    match result {
        Ok(result) => {
            let mut output = renderer.screen(&Screen::build(session.state()))?;
            output.push_str(&renderer.messages(&result.messages)?);
            Ok(Outcome::Print(output))
        }
        Err(err) if err.is_precondition() => Ok(Outcome::Print(
            renderer.messages(&[CmdMessage::warning(err.to_string())])?,
        )),
        Err(err) => {
            tracing::warn!(error = %err, input, "command failed");
            Ok(Outcome::Print(
                renderer.messages(&[CmdMessage::error(err.to_string())])?,
            ))
        }
    }
}
