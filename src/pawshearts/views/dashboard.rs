use crate::model::{AdoptionApplication, Pet, Role, User};
use crate::session::SessionState;
use crate::views::catalog::capitalize;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const OWNER_TITLE: &str = "My Listed Pets";
pub const ADOPTER_TITLE: &str = "My Applications";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedPet {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

impl ListedPet {
    fn from_pet(pet: &Pet) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            status: pet.status.to_string(),
            image_url: pet.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationEntry {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub breed: String,
    pub image_url: String,
    /// Capitalized status, e.g. "Pending".
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ApplicationEntry {
    fn join(application: &AdoptionApplication, pet: &Pet) -> Self {
        Self {
            id: application.id.clone(),
            pet_id: pet.id.clone(),
            pet_name: pet.name.clone(),
            breed: pet.breed.clone(),
            image_url: pet.image_url.clone(),
            status: capitalize(application.status.as_str()),
            message: application.message.clone(),
            created_at: application.created_at,
        }
    }
}

/// Signed-in view, shaped by the user's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DashboardView {
    Owner {
        user_name: String,
        title: &'static str,
        pets: Vec<ListedPet>,
    },
    Adopter {
        user_name: String,
        title: &'static str,
        applications: Vec<ApplicationEntry>,
    },
}

impl DashboardView {
    pub fn build(state: &SessionState, user: &User) -> Self {
        match user.role {
            Role::Owner => DashboardView::Owner {
                user_name: user.name.clone(),
                title: OWNER_TITLE,
                pets: state
                    .pets()
                    .iter()
                    .filter(|pet| pet.owner_id == user.id)
                    .map(ListedPet::from_pet)
                    .collect(),
            },
            Role::Adopter => DashboardView::Adopter {
                user_name: user.name.clone(),
                title: ADOPTER_TITLE,
                // An application whose pet is gone is skipped, not reported.
                applications: state
                    .applications()
                    .iter()
                    .filter(|app| app.adopter_id == user.id)
                    .filter_map(|app| state.pet(&app.pet_id).map(|pet| (app, pet)))
                    .map(|(app, pet)| ApplicationEntry::join(app, pet))
                    .collect(),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Owner { title, .. } | DashboardView::Adopter { title, .. } => *title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, fixtures::pet};
    use crate::identity::SequentialIdentityProvider;
    use crate::model::Species;
    use crate::session::Session;

    fn session() -> Session<SequentialIdentityProvider> {
        Session::with_builtin_catalog(SequentialIdentityProvider::new()).unwrap()
    }

    fn dashboard<P: crate::identity::IdentityProvider>(session: &Session<P>) -> DashboardView {
        let state = session.state();
        DashboardView::build(state, state.current_user().unwrap())
    }

    #[test]
    fn new_owner_sees_empty_list() {
        let mut session = session();
        session.authenticate("b@x.com", Role::Owner).unwrap();

        match dashboard(&session) {
            DashboardView::Owner { title, pets, .. } => {
                assert_eq!(title, OWNER_TITLE);
                assert!(pets.is_empty());
            }
            other => panic!("expected owner dashboard, got {:?}", other),
        }
    }

    #[test]
    fn owner_sees_only_their_pets() {
        // The sequential provider's first user is "user-1"
        let pets = vec![
            pet("a", "Mine", Species::Dog, "user-1"),
            pet("b", "Theirs", Species::Cat, "owner2"),
            pet("c", "Also mine", Species::Fish, "user-1"),
        ];
        let mut session = Session::new(pets, SequentialIdentityProvider::new()).unwrap();
        session.authenticate("o@x.com", Role::Owner).unwrap();

        match dashboard(&session) {
            DashboardView::Owner { pets, .. } => {
                let ids: Vec<&str> = pets.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, vec!["a", "c"]);
                assert_eq!(pets[0].status, "available");
            }
            other => panic!("expected owner dashboard, got {:?}", other),
        }
    }

    #[test]
    fn adopter_sees_own_applications_joined_with_pets() {
        let mut session = session();
        session.authenticate("a@x.com", Role::Adopter).unwrap();
        session.select_pet("2").unwrap();
        session.submit_application("I love cats").unwrap();

        match dashboard(&session) {
            DashboardView::Adopter {
                title,
                applications,
                user_name,
            } => {
                assert_eq!(title, ADOPTER_TITLE);
                assert_eq!(user_name, "a");
                assert_eq!(applications.len(), 1);
                assert_eq!(applications[0].pet_name, "Oliver");
                assert_eq!(applications[0].breed, "British Shorthair");
                assert_eq!(applications[0].status, "Pending");
            }
            other => panic!("expected adopter dashboard, got {:?}", other),
        }
    }

    #[test]
    fn adopter_does_not_see_other_users_applications() {
        let mut session = session();
        session.authenticate("a@x.com", Role::Adopter).unwrap();
        session.select_pet("1").unwrap();
        session.submit_application("first").unwrap();
        session.logout();
        session.authenticate("c@x.com", Role::Adopter).unwrap();

        match dashboard(&session) {
            DashboardView::Adopter { applications, .. } => assert!(applications.is_empty()),
            other => panic!("expected adopter dashboard, got {:?}", other),
        }
    }

    #[test]
    fn application_for_missing_pet_is_skipped() {
        let mut state = SessionState::new(catalog::builtin());
        let user = User::new("u1".into(), "a@x.com", Role::Adopter);
        state
            .applications
            .push(AdoptionApplication::new("gone", "u1", String::new()));
        state
            .applications
            .push(AdoptionApplication::new("4", "u1", String::new()));

        match DashboardView::build(&state, &user) {
            DashboardView::Adopter { applications, .. } => {
                assert_eq!(applications.len(), 1);
                assert_eq!(applications[0].pet_name, "Rio");
            }
            other => panic!("expected adopter dashboard, got {:?}", other),
        }
    }
}
