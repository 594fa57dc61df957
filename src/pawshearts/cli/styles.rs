//! Styles for the pawshearts terminal client.
//!
//! Templates only ever name a style by what the text *is* (a pet name, a status, a
//! hint), never by how it looks. The actual colors live here, in one theme registered
//! through `once_cell::sync::Lazy`, so the look can change without touching templates.
//!
//! Statuses have one style each (`status-available`, `status-pending`, ...), which lets
//! templates build the name from the value itself.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const BRAND: &str = "brand";
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const LABEL: &str = "label";
    pub const INDEX: &str = "index";
    pub const PET_NAME: &str = "pet-name";
    pub const BADGE: &str = "badge";
    pub const TIME: &str = "time";
    pub const FILTER: &str = "filter";
    pub const FILTER_ACTIVE: &str = "filter-active";
    pub const ACTION: &str = "action";
    pub const ACTION_DISABLED: &str = "action-disabled";
    pub const DIALOG: &str = "dialog";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const STATUS_AVAILABLE: &str = "status-available";
    pub const STATUS_PENDING: &str = "status-pending";
    pub const STATUS_ADOPTED: &str = "status-adopted";
    pub const STATUS_APPROVED: &str = "status-approved";
    pub const STATUS_REJECTED: &str = "status-rejected";
    // Help styles
    pub const HELP_HEADER: &str = "help-header";
    pub const HELP_COMMAND: &str = "help-command";
    pub const HELP_DESC: &str = "help-desc";
}

pub type Theme = HashMap<&'static str, Style>;

pub static PAWS_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let accent = Style::new().color256(208);
    let muted = Style::new().color256(245);
    let faint = Style::new().color256(240);
    let good = Style::new().green();
    let caution = Style::new().yellow();

    let mut theme = Theme::new();
    theme.insert(names::BRAND, accent.clone().bold());
    theme.insert(names::TITLE, Style::new().bold());
    theme.insert(names::MUTED, muted.clone());
    theme.insert(names::LABEL, muted.clone().bold());
    theme.insert(names::INDEX, accent.clone());
    theme.insert(names::PET_NAME, Style::new().bold());
    theme.insert(names::BADGE, good.clone());
    theme.insert(names::TIME, muted.clone().italic());
    theme.insert(names::FILTER, muted.clone());
    theme.insert(names::FILTER_ACTIVE, accent.clone().bold());
    theme.insert(names::ACTION, accent.clone().bold());
    theme.insert(names::ACTION_DISABLED, faint);
    theme.insert(names::DIALOG, Style::new().cyan().bold());
    theme.insert(names::ERROR, Style::new().red().bold());
    theme.insert(names::WARNING, caution.clone().bold());
    theme.insert(names::SUCCESS, good.clone());
    theme.insert(names::INFO, muted.clone());
    theme.insert(names::STATUS_AVAILABLE, good.clone());
    theme.insert(names::STATUS_PENDING, caution);
    theme.insert(names::STATUS_ADOPTED, Style::new().blue());
    theme.insert(names::STATUS_APPROVED, good);
    theme.insert(names::STATUS_REJECTED, Style::new().red());
    theme.insert(names::HELP_HEADER, Style::new().bold());
    theme.insert(names::HELP_COMMAND, accent);
    theme.insert(names::HELP_DESC, muted);
    theme
}
