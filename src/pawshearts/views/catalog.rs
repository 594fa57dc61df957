use crate::commands::search::SpeciesFilter;
use crate::model::Pet;
use crate::session::SessionState;
use serde::Serialize;

pub const ADOPT_LABEL: &str = "Adopt Me";
pub const IN_PROCESS_LABEL: &str = "Already in Process";

/// The card's primary action: select this pet for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptAction {
    pub pet_id: String,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetCard {
    pub id: String,
    pub name: String,
    pub age: String,
    pub breed: String,
    pub species: String,
    pub gender: String,
    pub size: Option<String>,
    pub vaccinated: bool,
    pub special_needs: Option<String>,
    pub description: String,
    pub image_url: String,
    pub action: AdoptAction,
}

impl PetCard {
    pub fn from_pet(pet: &Pet) -> Self {
        let enabled = pet.is_available();
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            age: format!("{} years old", pet.age),
            breed: pet.breed.clone(),
            species: pet.species.to_string(),
            gender: pet.gender.to_string(),
            size: pet.size.map(|size| size.to_string()),
            vaccinated: pet.vaccinated,
            special_needs: pet.special_needs.clone(),
            description: pet.description.clone(),
            image_url: pet.image_url.clone(),
            action: AdoptAction {
                pet_id: pet.id.clone(),
                label: if enabled { ADOPT_LABEL } else { IN_PROCESS_LABEL },
                enabled,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// Public browsing view: filter bar, search text, and the matching pets as cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub search_term: String,
    pub filters: Vec<FilterOption>,
    pub cards: Vec<PetCard>,
}

impl CatalogView {
    pub fn build(state: &SessionState) -> Self {
        let active = state.species_filter();
        let filters = SpeciesFilter::options()
            .into_iter()
            .map(|option| {
                let value = option.to_string();
                FilterOption {
                    label: capitalize(&value),
                    value,
                    active: option == active,
                }
            })
            .collect();

        Self {
            search_term: state.search_term().to_string(),
            filters,
            cards: state
                .filtered_pets()
                .into_iter()
                .map(PetCard::from_pet)
                .collect(),
        }
    }

    pub fn card(&self, pet_id: &str) -> Option<&PetCard> {
        self.cards.iter().find(|card| card.id == pet_id)
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SequentialIdentityProvider;
    use crate::model::{Role, Species};
    use crate::session::Session;

    fn session() -> Session<SequentialIdentityProvider> {
        Session::with_builtin_catalog(SequentialIdentityProvider::new()).unwrap()
    }

    #[test]
    fn shows_every_pet_by_default() {
        let view = CatalogView::build(session().state());
        assert_eq!(view.cards.len(), 8);
        assert_eq!(view.cards[0].name, "Luna");
        assert_eq!(view.cards[0].age, "2 years old");
        assert_eq!(view.cards[0].size.as_deref(), Some("large"));
    }

    #[test]
    fn available_pet_can_be_adopted() {
        let view = CatalogView::build(session().state());
        let luna = view.card("1").unwrap();
        assert!(luna.action.enabled);
        assert_eq!(luna.action.label, ADOPT_LABEL);
    }

    #[test]
    fn pending_pet_is_gated() {
        let view = CatalogView::build(session().state());
        let bella = view.card("3").unwrap();
        assert!(!bella.action.enabled);
        assert_eq!(bella.action.label, IN_PROCESS_LABEL);
    }

    #[test]
    fn marks_active_filter() {
        let mut session = session();
        session.set_species_filter(SpeciesFilter::Only(Species::Fish));
        let view = CatalogView::build(session.state());

        let active: Vec<&str> = view
            .filters
            .iter()
            .filter(|f| f.active)
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(active, vec!["Fish"]);
        assert_eq!(view.filters[0].label, "All");
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name, "Bubbles");
    }

    #[test]
    fn button_flips_after_application() {
        let mut session = session();
        session.authenticate("a@x.com", Role::Adopter).unwrap();
        session.select_pet("1").unwrap();
        session.submit_application("please").unwrap();

        let view = CatalogView::build(session.state());
        let luna = view.card("1").unwrap();
        assert!(!luna.action.enabled);
        assert_eq!(luna.action.label, "Already in Process");
    }

    #[test]
    fn capitalizes_labels() {
        assert_eq!(capitalize("hamster"), "Hamster");
        assert_eq!(capitalize(""), "");
    }
}
