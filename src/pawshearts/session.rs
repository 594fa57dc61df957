//! # Session Coordinator
//!
//! A [`Session`] owns everything that changes while the marketplace is in use: the pet
//! and application collections, the signed-in user, and the transient selection state
//! (pet being applied for, search text, species filter, sign-in dialog). It is the
//! single entry point for every state change, regardless of the UI driving it.
//!
//! ## Role and Responsibilities
//!
//! Like the rest of the crate's facade layer, the session:
//! - **Dispatches** each operation to its command in `commands/*.rs`
//! - **Owns** the identity provider used for sign-in
//! - **Returns structured types** (`Result<CmdResult>`), never strings or output
//!
//! Reading happens through [`SessionState`]'s accessors; its fields are private to the
//! crate, so views and clients cannot mutate state behind the commands' back.
//!
//! ## Generic Over IdentityProvider
//!
//! `Session<P: IdentityProvider>`:
//! - Terminal client: `Session<MockIdentityProvider>`
//! - Reproducible runs and tests: `Session<SequentialIdentityProvider>`

use crate::catalog;
use crate::commands::search::{self, SpeciesFilter};
use crate::commands::{adopt, auth, CmdResult};
use crate::error::Result;
use crate::identity::IdentityProvider;
use crate::model::{AdoptionApplication, Pet, Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthModal {
    pub open: bool,
    pub mode: AuthMode,
}

/// Transient UI state. None of it survives the session.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub(crate) selected_pet: Option<String>,
    pub(crate) search_term: String,
    pub(crate) species_filter: SpeciesFilter,
    pub(crate) auth_modal: AuthModal,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) pets: Vec<Pet>,
    pub(crate) applications: Vec<AdoptionApplication>,
    pub(crate) current_user: Option<User>,
    pub(crate) selection: Selection,
}

impl SessionState {
    pub(crate) fn new(pets: Vec<Pet>) -> Self {
        Self {
            pets,
            ..Self::default()
        }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn applications(&self) -> &[AdoptionApplication] {
        &self.applications
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// The pet targeted by the adoption dialog, if it is still in the collection.
    pub fn selected_pet(&self) -> Option<&Pet> {
        self.selection
            .selected_pet
            .as_deref()
            .and_then(|id| self.pet(id))
    }

    pub fn search_term(&self) -> &str {
        &self.selection.search_term
    }

    pub fn species_filter(&self) -> SpeciesFilter {
        self.selection.species_filter
    }

    pub fn auth_modal(&self) -> AuthModal {
        self.selection.auth_modal
    }

    /// The catalog as currently searched and filtered.
    pub fn filtered_pets(&self) -> Vec<&Pet> {
        search::filter_pets(
            &self.pets,
            &self.selection.search_term,
            self.selection.species_filter,
        )
    }
}

pub struct Session<P: IdentityProvider> {
    state: SessionState,
    identity: P,
}

impl<P: IdentityProvider> Session<P> {
    /// Start a session over `pets`, which are validated first.
    pub fn new(pets: Vec<Pet>, identity: P) -> Result<Self> {
        let pets = catalog::validate(pets)?;
        tracing::debug!(pets = pets.len(), "session seeded");
        Ok(Self {
            state: SessionState::new(pets),
            identity,
        })
    }

    pub fn with_builtin_catalog(identity: P) -> Result<Self> {
        Self::new(catalog::builtin(), identity)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn authenticate(&mut self, email: &str, role: Role) -> Result<CmdResult> {
        auth::sign_in(&mut self.state, &mut self.identity, email, role)
    }

    pub fn authenticate_with_google(&mut self, role: Role) -> Result<CmdResult> {
        auth::sign_in_with_google(&mut self.state, &mut self.identity, role)
    }

    pub fn logout(&mut self) -> CmdResult {
        auth::sign_out(&mut self.state)
    }

    pub fn open_auth_modal(&mut self, mode: AuthMode) -> CmdResult {
        auth::open_modal(&mut self.state, mode)
    }

    pub fn close_auth_modal(&mut self) -> CmdResult {
        auth::close_modal(&mut self.state)
    }

    pub fn toggle_auth_mode(&mut self) -> CmdResult {
        auth::toggle_mode(&mut self.state)
    }

    pub fn select_pet(&mut self, pet_id: &str) -> Result<CmdResult> {
        adopt::select(&mut self.state, pet_id)
    }

    pub fn clear_selection(&mut self) -> CmdResult {
        adopt::clear_selection(&mut self.state)
    }

    pub fn submit_application(&mut self, message: &str) -> Result<CmdResult> {
        adopt::submit(&mut self.state, message)
    }

    pub fn set_search_term(&mut self, term: &str) -> CmdResult {
        search::set_term(&mut self.state, term)
    }

    pub fn set_species_filter(&mut self, filter: SpeciesFilter) -> CmdResult {
        search::set_filter(&mut self.state, filter)
    }

    /// Pure catalog query, independent of the stored search state.
    pub fn search(&self, term: &str, filter: SpeciesFilter) -> Vec<&Pet> {
        search::filter_pets(&self.state.pets, term, filter)
    }
}
