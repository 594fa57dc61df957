//! # Catalog Seeding
//!
//! The pet collection is seeded once, when a session starts, either from the built-in
//! catalog or from a JSON file holding an array of pet records.
//!
//! Both sources go through [`validate`]: enumerated fields outside their value sets and
//! missing fields are already refused by deserialization, and validation adds the
//! record-level checks (non-empty ids and names, unique ids). Any failure is fatal for
//! the session being built.

use crate::error::{PawsError, Result};
use crate::model::{Gender, Pet, PetStatus, Size, Species};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load and validate a catalog file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Pet>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let pets: Vec<Pet> = serde_json::from_str(&content).map_err(|e| {
        PawsError::InvalidCatalog(format!("{}: {}", path.display(), e))
    })?;
    validate(pets)
}

/// Check record-level invariants, returning the pets unchanged when they hold.
pub fn validate(pets: Vec<Pet>) -> Result<Vec<Pet>> {
    check_records(&pets)?;
    Ok(pets)
}

fn check_records(pets: &[Pet]) -> Result<()> {
    let mut seen = HashSet::new();
    for (position, pet) in pets.iter().enumerate() {
        if pet.id.trim().is_empty() {
            return Err(PawsError::InvalidCatalog(format!(
                "pet #{} has an empty id",
                position + 1
            )));
        }
        if pet.name.trim().is_empty() {
            return Err(PawsError::InvalidCatalog(format!(
                "pet '{}' has an empty name",
                pet.id
            )));
        }
        if !seen.insert(pet.id.as_str()) {
            return Err(PawsError::InvalidCatalog(format!(
                "duplicate pet id '{}'",
                pet.id
            )));
        }
    }
    Ok(())
}

/// The built-in catalog.
pub fn builtin() -> Vec<Pet> {
    vec![
        seed(
            "1",
            "Luna",
            Species::Dog,
            "Golden Retriever",
            2,
            "Luna is a friendly and energetic Golden Retriever who loves to play fetch and go for long walks.",
            "https://images.unsplash.com/photo-1552053831-71594a27632d?auto=format&fit=crop&q=80&w=612",
            "owner1",
            PetStatus::Available,
            Gender::Female,
            true,
            Size::Large,
        ),
        seed(
            "2",
            "Oliver",
            Species::Cat,
            "British Shorthair",
            3,
            "Oliver is a calm and affectionate cat who enjoys lounging in sunny spots and gentle pets.",
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?auto=format&fit=crop&q=80&w=580",
            "owner2",
            PetStatus::Available,
            Gender::Male,
            true,
            Size::Medium,
        ),
        seed(
            "3",
            "Bella",
            Species::Dog,
            "Beagle",
            1,
            "Bella is a curious and loving puppy looking for an active family to call her own.",
            "https://images.unsplash.com/photo-1537151625747-768eb6cf92b2?auto=format&fit=crop&q=80&w=612",
            "owner1",
            PetStatus::Pending,
            Gender::Female,
            true,
            Size::Medium,
        ),
        seed(
            "4",
            "Rio",
            Species::Bird,
            "Blue and Gold Macaw",
            5,
            "Rio is a vibrant and talkative macaw who loves to sing and interact with people.",
            "https://images.unsplash.com/photo-1552728089-57bdde30beb3?auto=format&fit=crop&q=80&w=600",
            "owner3",
            PetStatus::Available,
            Gender::Male,
            true,
            Size::Medium,
        ),
        seed(
            "5",
            "Bubbles",
            Species::Fish,
            "Betta Fish",
            1,
            "Bubbles is a stunning betta fish with flowing fins and a peaceful temperament.",
            "https://images.unsplash.com/photo-1522069169874-c58ec4b76be5?auto=format&fit=crop&q=80&w=600",
            "owner4",
            PetStatus::Available,
            Gender::Male,
            false,
            Size::Small,
        ),
        seed(
            "6",
            "Thumper",
            Species::Rabbit,
            "Holland Lop",
            2,
            "Thumper is a gentle rabbit who loves fresh vegetables and being petted.",
            "https://images.unsplash.com/photo-1585110396000-c9ffd4e4b308?auto=format&fit=crop&q=80&w=600",
            "owner2",
            PetStatus::Available,
            Gender::Male,
            true,
            Size::Small,
        ),
        seed(
            "7",
            "Pip",
            Species::Hamster,
            "Syrian Hamster",
            1,
            "Pip is an active hamster who loves running on his wheel and collecting treats.",
            "https://images.unsplash.com/photo-1425082661705-1834bfd09dca?auto=format&fit=crop&q=80&w=600",
            "owner5",
            PetStatus::Available,
            Gender::Female,
            false,
            Size::Small,
        ),
        seed(
            "8",
            "Charlie",
            Species::Bird,
            "Cockatiel",
            3,
            "Charlie is a friendly cockatiel who loves to whistle tunes and sit on shoulders.",
            "https://images.unsplash.com/photo-1591198936750-16d8e15edb9e?auto=format&fit=crop&q=80&w=600",
            "owner3",
            PetStatus::Available,
            Gender::Male,
            true,
            Size::Small,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    species: Species,
    breed: &str,
    age: u32,
    description: &str,
    image_url: &str,
    owner_id: &str,
    status: PetStatus,
    gender: Gender,
    vaccinated: bool,
    size: Size,
) -> Pet {
    Pet {
        id: id.to_string(),
        name: name.to_string(),
        species,
        breed: breed.to_string(),
        age,
        description: description.to_string(),
        image_url: image_url.to_string(),
        owner_id: owner_id.to_string(),
        status,
        size: Some(size),
        gender,
        vaccinated,
        special_needs: None,
    }
}

// --- Test Fixtures ---
