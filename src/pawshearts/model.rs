//! # Domain Model
//!
//! Plain data for the three entities of the marketplace ([`Pet`], [`User`],
//! [`AdoptionApplication`]) and the closed value sets of their enumerated fields.
//!
//! Field names serialize in the camelCase form used by catalog files (`imageUrl`,
//! `ownerId`, ...), and the pet's species is stored under `type`. Every enumeration
//! serializes and parses as its lowercase name; anything outside the set is rejected,
//! which is what catalog ingestion relies on to refuse malformed records.

use crate::error::PawsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Generates `as_str`, `ALL`, `Display` and `FromStr` for a fieldless enum whose
/// textual form is its lowercase variant name.
macro_rules! lowercase_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = PawsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(PawsError::InvalidValue {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Hamster,
    Fish,
}

lowercase_enum!(Species, "species", {
    Dog => "dog",
    Cat => "cat",
    Bird => "bird",
    Rabbit => "rabbit",
    Hamster => "hamster",
    Fish => "fish",
});

/// Lifecycle of a listed pet. Only `Available -> Pending` is ever taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    #[default]
    Available,
    Pending,
    Adopted,
}

lowercase_enum!(PetStatus, "pet status", {
    Available => "available",
    Pending => "pending",
    Adopted => "adopted",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

lowercase_enum!(Size, "size", {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

lowercase_enum!(Gender, "gender", {
    Male => "male",
    Female => "female",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Adopter,
    Owner,
}

lowercase_enum!(Role, "role", {
    Adopter => "adopter",
    Owner => "owner",
});

/// `Approved` and `Rejected` are part of the vocabulary but no operation produces them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

lowercase_enum!(ApplicationStatus, "application status", {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub description: String,
    pub image_url: String,
    pub owner_id: String,
    pub status: PetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    pub gender: Gender,
    pub vaccinated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
}

impl Pet {
    pub fn is_available(&self) -> bool {
        self.status == PetStatus::Available
    }

    /// Case-insensitive substring match against name or breed.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_term(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.breed.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl User {
    pub fn new(id: String, email: &str, role: Role) -> Self {
        Self {
            id,
            name: display_name_for(email),
            email: email.to_string(),
            role,
            phone: None,
            address: None,
            profile_image: None,
        }
    }

    pub fn with_profile_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image = Some(url.into());
        self
    }
}

/// The local part of an email address, used as a display name.
pub fn display_name_for(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionApplication {
    pub id: String,
    pub pet_id: String,
    pub adopter_id: String,
    pub status: ApplicationStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl AdoptionApplication {
    pub fn new(pet_id: &str, adopter_id: &str, message: String) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            pet_id: pet_id.to_string(),
            adopter_id: adopter_id.to_string(),
            status: ApplicationStatus::Pending,
            message,
            created_at: Utc::now(),
        }
    }
}
