use crate::commands::{CmdMessage, CmdResult};
use crate::error::PawsError;
use crate::model::{Pet, Species};
use crate::session::SessionState;
use std::fmt;
use std::str::FromStr;

/// Species restriction for the catalog. `All` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeciesFilter {
    #[default]
    All,
    Only(Species),
}

impl SpeciesFilter {
    pub fn matches(&self, species: Species) -> bool {
        match self {
            SpeciesFilter::All => true,
            SpeciesFilter::Only(only) => *only == species,
        }
    }

    /// Every filter choice in display order: `all`, then each species.
    pub fn options() -> Vec<SpeciesFilter> {
        std::iter::once(SpeciesFilter::All)
            .chain(Species::ALL.iter().copied().map(SpeciesFilter::Only))
            .collect()
    }
}

impl fmt::Display for SpeciesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesFilter::All => f.write_str("all"),
            SpeciesFilter::Only(species) => write!(f, "{}", species),
        }
    }
}

impl FromStr for SpeciesFilter {
    type Err = PawsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SpeciesFilter::All);
        }
        s.parse().map(SpeciesFilter::Only)
    }
}

/// Pets whose name or breed contains `term` (case-insensitively) and whose species
/// passes `filter`, in collection order. An empty term matches every pet.
pub fn filter_pets<'a>(pets: &'a [Pet], term: &str, filter: SpeciesFilter) -> Vec<&'a Pet> {
    let needle = term.to_lowercase();
    pets.iter()
        .filter(|pet| pet.matches_term(&needle) && filter.matches(pet.species))
        .collect()
}

pub fn set_term(state: &mut SessionState, term: &str) -> CmdResult {
    state.selection.search_term = term.to_string();
    tracing::debug!(term, "search term changed");

    let shown = filter_pets(&state.pets, term, state.selection.species_filter).len();
    let message = if term.is_empty() {
        CmdMessage::info("Search cleared")
    } else {
        CmdMessage::info(format!("{} pet(s) match '{}'", shown, term))
    };
    CmdResult::default().with_message(message)
}

pub fn set_filter(state: &mut SessionState, filter: SpeciesFilter) -> CmdResult {
    state.selection.species_filter = filter;
    tracing::debug!(%filter, "species filter changed");
    CmdResult::default().with_message(CmdMessage::info(format!("Showing: {}", filter)))
}
