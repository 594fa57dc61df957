//! # Views
//!
//! Read-only projections of a [`SessionState`]. A view owns no state; it is rebuilt
//! from scratch after every event, and describes the actions a client may invoke
//! (which then go through the [`Session`](crate::session::Session)).
//!
//! - [`catalog::CatalogView`]: public browsing, shown while nobody is signed in.
//! - [`dashboard::DashboardView`]: the signed-in user's pets (owner) or applications
//!   (adopter).
//! - [`Screen`]: which of the two is visible, plus the dialogs layered on top.

use crate::session::{AuthMode, SessionState};
use serde::Serialize;

pub mod catalog;
pub mod dashboard;

pub use catalog::{AdoptAction, CatalogView, FilterOption, PetCard};
pub use dashboard::{ApplicationEntry, DashboardView, ListedPet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Page {
    Catalog(CatalogView),
    Dashboard(DashboardView),
}

/// Sign-in dialog, when open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthDialog {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub submit_label: &'static str,
    pub google_label: &'static str,
    pub switch_prompt: &'static str,
    /// Only sign-up asks which role the new account should have.
    pub asks_role: bool,
}

impl AuthDialog {
    pub fn for_mode(mode: AuthMode) -> Self {
        match mode {
            AuthMode::SignIn => Self {
                heading: "Welcome Back",
                subheading: "Sign in to continue to Paws & Hearts",
                submit_label: "Sign In",
                google_label: "Sign in with Google",
                switch_prompt: "Don't have an account? Sign up",
                asks_role: false,
            },
            AuthMode::SignUp => Self {
                heading: "Create Account",
                subheading: "Join our community today",
                submit_label: "Create Account",
                google_label: "Sign up with Google",
                switch_prompt: "Already have an account? Sign in",
                asks_role: true,
            },
        }
    }
}

/// Adoption dialog, open while a pet is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionDialog {
    pub pet_id: String,
    pub pet_name: String,
    /// Submitting needs a signed-in user.
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub page: Page,
    pub auth_dialog: Option<AuthDialog>,
    pub adoption_dialog: Option<AdoptionDialog>,
}

impl Screen {
    pub fn build(state: &SessionState) -> Self {
        let page = match state.current_user() {
            Some(user) => Page::Dashboard(DashboardView::build(state, user)),
            None => Page::Catalog(CatalogView::build(state)),
        };

        let modal = state.auth_modal();
        let auth_dialog = modal.open.then(|| AuthDialog::for_mode(modal.mode));

        let adoption_dialog = state.selected_pet().map(|pet| AdoptionDialog {
            pet_id: pet.id.clone(),
            pet_name: pet.name.clone(),
            can_submit: state.current_user().is_some(),
        });

        Self {
            page,
            auth_dialog,
            adoption_dialog,
        }
    }
}
