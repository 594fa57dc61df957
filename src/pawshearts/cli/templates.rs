//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/`, included
//! here as string constants so they ship inside the binary.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a block tag on a line
//! of its own produces no output. A line that *ends* in a block tag would lose its line
//! break, which is why such lines end with `{{ "" }}`.
//!
//! Style selection that depends on state is computed in Rust and handed to the
//! template as a style name; templates only pipe values through `style(...)`.

pub const SCREEN_TEMPLATE: &str = include_str!("templates/screen.jinja");
pub const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.jinja");
pub const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.jinja");
pub const AUTH_DIALOG_TEMPLATE: &str = include_str!("templates/auth_dialog.jinja");
pub const ADOPTION_DIALOG_TEMPLATE: &str = include_str!("templates/adoption_dialog.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.jinja");

/// Every template, under the name other templates include it by.
pub const ALL: &[(&str, &str)] = &[
    ("screen.jinja", SCREEN_TEMPLATE),
    ("catalog.jinja", CATALOG_TEMPLATE),
    ("dashboard.jinja", DASHBOARD_TEMPLATE),
    ("auth_dialog.jinja", AUTH_DIALOG_TEMPLATE),
    ("adoption_dialog.jinja", ADOPTION_DIALOG_TEMPLATE),
    ("messages.jinja", MESSAGES_TEMPLATE),
    ("help.jinja", HELP_TEMPLATE),
];
