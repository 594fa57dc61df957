use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PawsError, Result};
use crate::model::{AdoptionApplication, PetStatus};
use crate::session::SessionState;

/// Target a pet for an application. Any status may be selected; gating the
/// "adopt" affordance on availability is the view's job.
pub fn select(state: &mut SessionState, pet_id: &str) -> Result<CmdResult> {
    let pet = state
        .pet(pet_id)
        .cloned()
        .ok_or_else(|| PawsError::PetNotFound(pet_id.to_string()))?;

    state.selection.selected_pet = Some(pet.id.clone());
    tracing::debug!(pet_id = %pet.id, "pet selected");

    let message = if pet.is_available() {
        CmdMessage::info(format!("Applying to adopt {}", pet.name))
    } else {
        CmdMessage::warning(format!("{} is already in process", pet.name))
    };
    Ok(CmdResult::default()
        .with_affected_pets(vec![pet])
        .with_message(message))
}

pub fn clear_selection(state: &mut SessionState) -> CmdResult {
    if state.selection.selected_pet.take().is_some() {
        tracing::debug!("selection cleared");
    }
    CmdResult::default()
}

/// Create an application for the selected pet on behalf of the current user and
/// mark the pet pending.
///
/// Every check runs before anything is written: on error the session is untouched,
/// on success the new application, the pet's status and the cleared selection are
/// all in place.
pub fn submit(state: &mut SessionState, message: &str) -> Result<CmdResult> {
    let adopter_id = state
        .current_user
        .as_ref()
        .map(|user| user.id.clone())
        .ok_or(PawsError::NotSignedIn)?;
    let pet_id = state
        .selection
        .selected_pet
        .clone()
        .ok_or(PawsError::NoPetSelected)?;
    let position = state
        .pets
        .iter()
        .position(|pet| pet.id == pet_id)
        .ok_or_else(|| PawsError::PetNotFound(pet_id.clone()))?;

    let application = AdoptionApplication::new(&pet_id, &adopter_id, message.to_string());

    state.applications.push(application.clone());
    let pet = &mut state.pets[position];
    pet.status = PetStatus::Pending;
    let pet = pet.clone();
    state.selection.selected_pet = None;

    tracing::info!(
        application_id = %application.id,
        pet_id = %pet.id,
        adopter_id = %adopter_id,
        "adoption application submitted"
    );

    let note = CmdMessage::success(format!("Application sent for {}", pet.name));
    Ok(CmdResult::default()
        .with_affected_pets(vec![pet])
        .with_application(application)
        .with_message(note))
}
