use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity::{IdentityProvider, GOOGLE_MOCK_EMAIL};
use crate::model::Role;
use crate::session::{AuthMode, SessionState};

/// Replace the current user with a freshly issued one and close the sign-in dialog.
pub fn sign_in<P: IdentityProvider>(
    state: &mut SessionState,
    identity: &mut P,
    email: &str,
    role: Role,
) -> Result<CmdResult> {
    let user = identity.authenticate(email, role)?;
    tracing::info!(user_id = %user.id, role = %user.role, "signed in");

    state.current_user = Some(user.clone());
    state.selection.auth_modal.open = false;

    let message = CmdMessage::success(format!("Signed in as {} ({})", user.name, user.role));
    Ok(CmdResult::default().with_user(user).with_message(message))
}

pub fn sign_in_with_google<P: IdentityProvider>(
    state: &mut SessionState,
    identity: &mut P,
    role: Role,
) -> Result<CmdResult> {
    sign_in(state, identity, GOOGLE_MOCK_EMAIL, role)
}

/// Discard the current user. The selection is left as is.
pub fn sign_out(state: &mut SessionState) -> CmdResult {
    match state.current_user.take() {
        Some(user) => {
            tracing::info!(user_id = %user.id, "signed out");
            CmdResult::default().with_message(CmdMessage::success(format!(
                "Signed out {}",
                user.name
            )))
        }
        None => CmdResult::default().with_message(CmdMessage::info("Not signed in")),
    }
}

pub fn open_modal(state: &mut SessionState, mode: AuthMode) -> CmdResult {
    state.selection.auth_modal.open = true;
    state.selection.auth_modal.mode = mode;
    CmdResult::default()
}

pub fn close_modal(state: &mut SessionState) -> CmdResult {
    state.selection.auth_modal.open = false;
    CmdResult::default()
}

pub fn toggle_mode(state: &mut SessionState) -> CmdResult {
    let modal = &mut state.selection.auth_modal;
    modal.mode = match modal.mode {
        AuthMode::SignIn => AuthMode::SignUp,
        AuthMode::SignUp => AuthMode::SignIn,
    };
    CmdResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::identity::SequentialIdentityProvider;

    fn state() -> SessionState {
        SessionState::new(catalog::builtin())
    }

    #[test]
    fn sign_in_sets_current_user_with_requested_role() {
        let mut state = state();
        let mut ids = SequentialIdentityProvider::new();
        let result = sign_in(&mut state, &mut ids, "b@x.com", Role::Owner).unwrap();

        let user = state.current_user().unwrap();
        assert_eq!(user.role, Role::Owner);
        assert_eq!(user.name, "b");
        assert_eq!(result.user.as_ref(), Some(user));
        assert_eq!(result.messages[0].content, "Signed in as b (owner)");
    }

    #[test]
    fn sign_in_closes_modal() {
        let mut state = state();
        let mut ids = SequentialIdentityProvider::new();
        open_modal(&mut state, AuthMode::SignUp);
        assert!(state.auth_modal().open);

        sign_in(&mut state, &mut ids, "a@x.com", Role::Adopter).unwrap();
        assert!(!state.auth_modal().open);
    }

    #[test]
    fn sign_in_replaces_previous_user() {
        let mut state = state();
        let mut ids = SequentialIdentityProvider::new();
        sign_in(&mut state, &mut ids, "a@x.com", Role::Adopter).unwrap();
        sign_in(&mut state, &mut ids, "b@x.com", Role::Owner).unwrap();
        assert_eq!(state.current_user().unwrap().email, "b@x.com");
    }

    #[test]
    fn logout_then_login_issues_new_id() {
        let mut state = state();
        let mut ids = SequentialIdentityProvider::new();
        sign_in(&mut state, &mut ids, "a@x.com", Role::Adopter).unwrap();
        let first = state.current_user().unwrap().id.clone();

        sign_out(&mut state);
        assert!(state.current_user().is_none());

        sign_in(&mut state, &mut ids, "a@x.com", Role::Adopter).unwrap();
        assert_ne!(state.current_user().unwrap().id, first);
    }

    #[test]
    fn sign_out_when_logged_out_is_harmless() {
        let mut state = state();
        let result = sign_out(&mut state);
        assert_eq!(result.messages[0].content, "Not signed in");
    }

    #[test]
    fn sign_out_keeps_selection() {
        let mut state = state();
        let mut ids = SequentialIdentityProvider::new();
        sign_in(&mut state, &mut ids, "a@x.com", Role::Adopter).unwrap();
        state.selection.selected_pet = Some("2".into());
        sign_out(&mut state);
        assert_eq!(state.selected_pet().unwrap().name, "Oliver");
    }

    #[test]
    fn google_sign_in_uses_mock_account() {
        let mut state = state();
        let mut ids = SequentialIdentityProvider::new();
        sign_in_with_google(&mut state, &mut ids, Role::Owner).unwrap();
        let user = state.current_user().unwrap();
        assert_eq!(user.email, GOOGLE_MOCK_EMAIL);
        assert_eq!(user.name, "user");
    }

    #[test]
    fn toggle_switches_between_modes() {
        let mut state = state();
        toggle_mode(&mut state);
        assert_eq!(state.auth_modal().mode, AuthMode::SignUp);
        toggle_mode(&mut state);
        assert_eq!(state.auth_modal().mode, AuthMode::SignIn);
    }

    #[test]
    fn close_modal_hides_it() {
        let mut state = state();
        open_modal(&mut state, AuthMode::SignIn);
        close_modal(&mut state);
        assert!(!state.auth_modal().open);
    }
}
