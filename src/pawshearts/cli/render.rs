//! # Rendering Module
//!
//! Styled terminal output for the screen, command messages and help, produced from the
//! minijinja templates in `templates.rs` with the named styles of `styles.rs`.
//!
//! Layout work (truncation to the terminal's columns, relative times, which style a
//! piece of state maps to) stays in Rust. Templates decide what goes on which line.
//!
//! Color is decided once, when the [`Renderer`] is built: with colors off the `style`
//! filter passes text through untouched.

use super::styles::{names, Theme, PAWS_THEME};
use super::templates;
use chrono::{DateTime, Utc};
use minijinja::{context, Environment, Value};
use pawshearts::commands::{CmdMessage, MessageLevel};
use pawshearts::error::Result;
use pawshearts::views::{ApplicationEntry, DashboardView, FilterOption, Page, PetCard, Screen};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
/// Card bodies are indented under the pet's name.
const BODY_INDENT: usize = 3;

#[derive(Serialize)]
struct FilterChip {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CardLine<'a> {
    card: &'a PetCard,
    details: String,
    blurb: String,
    action_style: &'static str,
}

#[derive(Serialize)]
struct ApplicationLine<'a> {
    entry: &'a ApplicationEntry,
    status_style: &'static str,
    age: String,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

/// One row of the help listing.
#[derive(Debug, Clone, Serialize)]
pub struct HelpEntry {
    pub usage: String,
    pub about: String,
    padding: String,
}

impl HelpEntry {
    pub fn new(usage: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            about: about.into(),
            padding: String::new(),
        }
    }
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        for &(name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        register_style_filter(&mut env, PAWS_THEME.clone(), use_color);
        Ok(Self { env })
    }

    pub fn screen(&self, screen: &Screen) -> Result<String> {
        let (filters, cards, applications): (Vec<FilterChip>, Vec<CardLine>, Vec<ApplicationLine>) =
            match &screen.page {
                Page::Catalog(view) => (
                    view.filters.iter().map(filter_chip).collect(),
                    view.cards.iter().map(card_line).collect(),
                    Vec::new(),
                ),
                Page::Dashboard(DashboardView::Adopter { applications, .. }) => (
                    Vec::new(),
                    Vec::new(),
                    applications.iter().map(application_line).collect(),
                ),
                Page::Dashboard(DashboardView::Owner { .. }) => {
                    (Vec::new(), Vec::new(), Vec::new())
                }
            };

        let tmpl = self.env.get_template("screen.jinja")?;
        Ok(tmpl.render(context! {
            screen => screen,
            filters => filters,
            cards => cards,
            applications => applications,
        })?)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let data: Vec<MessageData> = messages
            .iter()
            .map(|msg| MessageData {
                content: &msg.content,
                style: level_style(msg.level),
            })
            .collect();

        let tmpl = self.env.get_template("messages.jinja")?;
        Ok(tmpl.render(context! { messages => data })?)
    }

    pub fn help(&self, entries: &[HelpEntry]) -> Result<String> {
        let usage_width = entries
            .iter()
            .map(|entry| entry.usage.width())
            .max()
            .unwrap_or(0);
        let entries: Vec<HelpEntry> = entries
            .iter()
            .map(|entry| HelpEntry {
                padding: " ".repeat(usage_width - entry.usage.width() + 2),
                ..entry.clone()
            })
            .collect();

        let tmpl = self.env.get_template("help.jinja")?;
        Ok(tmpl.render(context! { entries => entries })?)
    }
}

/// Registers the `style` filter: `{{ value | style("name") }}`.
///
/// Unknown style names render the text unstyled.
fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match theme.get(name.as_str()) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text,
        }
    });
}

fn level_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn filter_chip(option: &FilterOption) -> FilterChip {
    if option.active {
        FilterChip {
            text: format!("[{}]", option.label),
            style: names::FILTER_ACTIVE,
        }
    } else {
        FilterChip {
            text: option.label.clone(),
            style: names::FILTER,
        }
    }
}

fn card_line(card: &PetCard) -> CardLine<'_> {
    let mut details = vec![card.age.clone(), card.breed.clone(), card.gender.clone()];
    if let Some(size) = &card.size {
        details.push(size.clone());
    }

    CardLine {
        card,
        details: details.join(" · "),
        blurb: truncate_to_width(&card.description, LINE_WIDTH - BODY_INDENT),
        action_style: if card.action.enabled {
            names::ACTION
        } else {
            names::ACTION_DISABLED
        },
    }
}

fn application_line(entry: &ApplicationEntry) -> ApplicationLine<'_> {
    ApplicationLine {
        entry,
        status_style: status_style(&entry.status),
        age: format_time_ago(entry.created_at),
    }
}

fn status_style(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "available" => names::STATUS_AVAILABLE,
        "adopted" => names::STATUS_ADOPTED,
        "approved" => names::STATUS_APPROVED,
        "rejected" => names::STATUS_REJECTED,
        _ => names::STATUS_PENDING,
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawshearts::identity::SequentialIdentityProvider;
    use pawshearts::model::Role;
    use pawshearts::session::{AuthMode, Session};

    fn session() -> Session<SequentialIdentityProvider> {
        Session::with_builtin_catalog(SequentialIdentityProvider::new()).unwrap()
    }

    fn render(session: &Session<SequentialIdentityProvider>) -> String {
        Renderer::new(false)
            .unwrap()
            .screen(&Screen::build(session.state()))
            .unwrap()
    }

    #[test]
    fn test_catalog_lists_pets_and_actions() {
        let output = render(&session());

        assert!(output.contains("Find Your Perfect Companion"));
        assert!(output.contains("Luna"));
        assert!(output.contains("2 years old · Golden Retriever · female · large"));
        assert!(output.contains("[Adopt Me]"));
        assert!(output.contains("[Already in Process]"));
        assert!(output.contains("Filter: [All] Dog Cat Bird Rabbit Hamster Fish"));
    }

    #[test]
    fn test_catalog_without_color_has_no_ansi() {
        let output = render(&session());
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_color_adds_ansi() {
        let output = Renderer::new(true)
            .unwrap()
            .screen(&Screen::build(session().state()))
            .unwrap();
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_search_result() {
        let mut session = session();
        session.set_search_term("zebra");
        let output = render(&session);
        assert!(output.contains("Search: zebra"));
        assert!(output.contains("No pets match your search."));
    }

    #[test]
    fn test_owner_dashboard_empty() {
        let mut session = session();
        session.authenticate("b@x.com", Role::Owner).unwrap();
        let output = render(&session);
        assert!(output.contains("My Listed Pets"));
        assert!(output.contains("You have not listed any pets yet."));
        assert!(!output.contains("Luna"));
    }

    #[test]
    fn test_adopter_dashboard_shows_application() {
        let mut session = session();
        session.authenticate("a@x.com", Role::Adopter).unwrap();
        session.select_pet("1").unwrap();
        session.submit_application("please").unwrap();

        let output = render(&session);
        assert!(output.contains("My Applications"));
        assert!(output.contains("Luna"));
        assert!(output.contains("Pending"));
        assert!(output.contains("please"));
    }

    #[test]
    fn test_dialogs_render() {
        let mut session = session();
        session.open_auth_modal(AuthMode::SignUp);
        session.select_pet("2").unwrap();

        let output = render(&session);
        assert!(output.contains("Create Account"));
        assert!(output.contains("--role <adopter|owner>"));
        assert!(output.contains("Adopt Oliver"));
        assert!(output.contains("Sign in to send your application."));
    }

    #[test]
    fn test_dialog_headings_use_dialog_style() {
        let mut session = session();
        session.open_auth_modal(AuthMode::SignIn);
        session.select_pet("1").unwrap();

        let output = Renderer::new(true)
            .unwrap()
            .screen(&Screen::build(session.state()))
            .unwrap();
        let dialog = &PAWS_THEME[names::DIALOG];
        for heading in ["Welcome Back", "Adopt Luna"] {
            let styled = dialog.apply_to(heading).force_styling(true).to_string();
            assert!(output.contains(&styled), "{heading} not styled");
        }
    }

    #[test]
    fn test_render_messages() {
        let renderer = Renderer::new(false).unwrap();
        assert!(renderer.messages(&[]).unwrap().is_empty());

        let output = renderer
            .messages(&[
                CmdMessage::success("Application sent for Luna"),
                CmdMessage::warning("Bella is already in process"),
            ])
            .unwrap();
        assert_eq!(
            output,
            "Application sent for Luna\nBella is already in process\n"
        );
    }

    #[test]
    fn test_help_aligns_descriptions() {
        let output = Renderer::new(false)
            .unwrap()
            .help(&[
                HelpEntry::new("show", "Show the screen again"),
                HelpEntry::new("adopt <PET_ID>", "Apply to adopt a pet"),
            ])
            .unwrap();
        assert!(output.contains("  show            Show the screen again"));
        assert!(output.contains("  adopt <PET_ID>  Apply to adopt a pet"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }
}
